//! Render subsystem
//!
//! `start` binds a wgpu canvas to the already-started window; `update` draws
//! the world (clear, position points, base footprints, present); `stop`
//! releases the canvas. A lost surface is reconfigured and the frame skipped
//! rather than treated as fatal.

use skirmish_render::{render_world, RenderError, RenderStyle, WgpuCanvas};

use crate::config::RenderingConfig;
use crate::engine::EngineContext;
use crate::systems::{
    ensure_started, ensure_uninitialized, LifecycleState, Subsystem, SubsystemError, UpdatePhase,
};

/// Draws the world once per frame.
pub struct RenderSystem {
    style: RenderStyle,
    circle_segments: u32,
    vsync: bool,
    canvas: Option<WgpuCanvas>,
    state: LifecycleState,
}

impl RenderSystem {
    /// Create the subsystem from rendering config; the canvas is bound in
    /// `start`.
    pub fn new(config: &RenderingConfig, vsync: bool) -> Self {
        Self {
            style: config.to_style(),
            circle_segments: config.circle_segments,
            vsync,
            canvas: None,
            state: LifecycleState::Uninitialized,
        }
    }
}

impl Subsystem for RenderSystem {
    fn name(&self) -> &'static str {
        "render"
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn phase(&self) -> Option<UpdatePhase> {
        Some(UpdatePhase::Render)
    }

    fn start(&mut self, ctx: &mut EngineContext) -> Result<(), SubsystemError> {
        ensure_uninitialized(self.state, self.name())?;

        let window = ctx.platform.window().ok_or(SubsystemError::WindowNotStarted)?;
        let canvas =
            WgpuCanvas::new(window, self.vsync)?.with_circle_segments(self.circle_segments);
        self.canvas = Some(canvas);
        self.state = LifecycleState::Started;
        log::info!("render subsystem started");
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext) -> Result<(), SubsystemError> {
        ensure_started(self.state, self.name())?;
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(SubsystemError::NotStarted(self.name()));
        };

        match render_world(canvas, &ctx.world, &self.style) {
            Ok(()) => Ok(()),
            Err(RenderError::SurfaceLost) => {
                log::warn!("surface lost, reconfiguring");
                canvas.reconfigure();
                Ok(())
            }
            Err(e) => Err(SubsystemError::Render(e)),
        }
    }

    fn stop(&mut self, _ctx: &mut EngineContext) {
        if self.state != LifecycleState::Started {
            log::warn!("render subsystem stopped without being started");
            return;
        }
        self.canvas = None;
        self.state = LifecycleState::Stopped;
        log::info!("render subsystem stopped");
    }
}
