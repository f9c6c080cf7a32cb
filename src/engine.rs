//! Frame loop
//!
//! The [`Engine`] owns the world, the platform backend and an ordered list
//! of subsystems. Startup walks the list in order and is transactional: if
//! any subsystem fails to start, the already-started prefix is stopped in
//! reverse and startup aborts. Each frame runs
//!
//! 1. platform pump (collect OS events)
//! 2. input-phase updates (non-destructive peek)
//! 3. destructive event drain; a quit event arms the quit flag
//! 4. simulation-phase updates
//! 5. render-phase updates (the terminating frame still renders)
//!
//! and shutdown stops subsystems in reverse start order.

use std::fmt;

use skirmish_core::World;
use skirmish_input::{InputEvent, EVENT_BUFFER_LEN};

use crate::platform::{PlatformBackend, PlatformError};
use crate::systems::{Subsystem, SubsystemError, UpdatePhase};

/// State shared with every subsystem.
pub struct EngineContext {
    pub world: World,
    pub platform: Box<dyn PlatformBackend>,
}

impl EngineContext {
    pub fn new(world: World, platform: Box<dyn PlatformBackend>) -> Self {
        Self { world, platform }
    }
}

/// Drives the subsystems until a quit signal is observed.
pub struct Engine {
    ctx: EngineContext,
    subsystems: Vec<Box<dyn Subsystem>>,
    quit: bool,
    frames: u64,
}

impl Engine {
    pub fn new(world: World, platform: Box<dyn PlatformBackend>) -> Self {
        Self {
            ctx: EngineContext::new(world, platform),
            subsystems: Vec::new(),
            quit: false,
            frames: 0,
        }
    }

    /// Append a subsystem. Registration order is start order; stop order is
    /// its reverse.
    pub fn with_subsystem(mut self, subsystem: Box<dyn Subsystem>) -> Self {
        self.subsystems.push(subsystem);
        self
    }

    pub fn world(&self) -> &World {
        &self.ctx.world
    }

    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start every subsystem in registration order.
    ///
    /// On failure the already-started prefix is stopped in reverse order and
    /// the error is returned; no subsystem is left half-running.
    pub fn start(&mut self) -> Result<(), EngineError> {
        for i in 0..self.subsystems.len() {
            if let Err(e) = self.subsystems[i].start(&mut self.ctx) {
                let name = self.subsystems[i].name();
                log::error!("failed to start {} subsystem: {}", name, e);
                for j in (0..i).rev() {
                    self.subsystems[j].stop(&mut self.ctx);
                }
                return Err(EngineError::StartFailed { name, source: e });
            }
        }
        log::info!("all subsystems started");
        Ok(())
    }

    /// Start the subsystems, run frames until quit, then stop them.
    pub fn run(&mut self) -> Result<(), EngineError> {
        self.start()?;

        while !self.quit {
            if let Err(e) = self.run_frame() {
                self.stop();
                return Err(e);
            }
        }

        self.stop();
        log::info!("clean shutdown after {} frames", self.frames);
        Ok(())
    }

    /// Stop every subsystem in reverse registration order.
    pub fn stop(&mut self) {
        for subsystem in self.subsystems.iter_mut().rev() {
            subsystem.stop(&mut self.ctx);
        }
    }

    fn run_frame(&mut self) -> Result<(), EngineError> {
        self.ctx.platform.pump().map_err(EngineError::Platform)?;

        self.update_phase(UpdatePhase::Input)?;
        self.drain_events();
        self.update_phase(UpdatePhase::Simulation)?;
        // Render runs whether or not the drain armed the quit flag.
        self.update_phase(UpdatePhase::Render)?;

        self.frames += 1;
        Ok(())
    }

    fn update_phase(&mut self, phase: UpdatePhase) -> Result<(), EngineError> {
        for subsystem in &mut self.subsystems {
            if subsystem.phase() != Some(phase) {
                continue;
            }
            if let Err(e) = subsystem.update(&mut self.ctx) {
                return Err(EngineError::UpdateFailed {
                    name: subsystem.name(),
                    source: e,
                });
            }
        }
        Ok(())
    }

    /// Destructively drain the event queue, arming the quit flag if a quit
    /// signal is among the pending events.
    fn drain_events(&mut self) {
        let mut buf = [InputEvent::default(); EVENT_BUFFER_LEN];
        loop {
            let drained = self.ctx.platform.drain_events(&mut buf);
            if drained == 0 {
                break;
            }
            for event in &buf[..drained] {
                if event.is_quit() {
                    log::info!("quit requested");
                    self.quit = true;
                }
            }
            if drained < buf.len() {
                break;
            }
        }
    }
}

/// Engine error types.
#[derive(Debug)]
pub enum EngineError {
    /// A subsystem failed to start; startup was rolled back.
    StartFailed {
        name: &'static str,
        source: SubsystemError,
    },
    /// A subsystem failed mid-frame.
    UpdateFailed {
        name: &'static str,
        source: SubsystemError,
    },
    /// The platform pump failed.
    Platform(PlatformError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::StartFailed { name, source } => {
                write!(f, "startup aborted: {} subsystem failed: {}", name, source)
            }
            EngineError::UpdateFailed { name, source } => {
                write!(f, "{} subsystem failed mid-frame: {}", name, source)
            }
            EngineError::Platform(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EngineError {}
