//! Window subsystem
//!
//! Acquires the display capability and the on-screen window on `start`,
//! releases both on `stop`. Has no per-frame update.

use crate::config::WindowConfig;
use crate::engine::EngineContext;
use crate::systems::{ensure_uninitialized, LifecycleState, Subsystem, SubsystemError};

/// Owns the application window through the platform backend.
pub struct WindowSystem {
    config: WindowConfig,
    state: LifecycleState,
}

impl WindowSystem {
    /// Create the subsystem from window config; nothing is acquired until
    /// `start`.
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            state: LifecycleState::Uninitialized,
        }
    }
}

impl Subsystem for WindowSystem {
    fn name(&self) -> &'static str {
        "window"
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn start(&mut self, ctx: &mut EngineContext) -> Result<(), SubsystemError> {
        ensure_uninitialized(self.state, self.name())?;

        ctx.platform.create_window(&self.config)?;
        self.state = LifecycleState::Started;
        log::info!("window subsystem started");
        Ok(())
    }

    fn stop(&mut self, ctx: &mut EngineContext) {
        if self.state != LifecycleState::Started {
            log::warn!("window subsystem stopped without being started");
            return;
        }
        ctx.platform.destroy_window();
        self.state = LifecycleState::Stopped;
        log::info!("window subsystem stopped");
    }
}
