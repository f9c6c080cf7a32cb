//! Input subsystem
//!
//! `start` opens the event queue; `update` peeks pending events without
//! consuming them and logs a classification of each (the frame loop owns the
//! destructive drain); `stop` closes the queue.

use skirmish_input::{InputEvent, EVENT_BUFFER_LEN};

use crate::engine::EngineContext;
use crate::systems::{
    ensure_started, ensure_uninitialized, LifecycleState, Subsystem, SubsystemError, UpdatePhase,
};

/// Peeks and classifies pending input events each frame.
pub struct InputSystem {
    state: LifecycleState,
}

impl InputSystem {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Uninitialized,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Subsystem for InputSystem {
    fn name(&self) -> &'static str {
        "input"
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn phase(&self) -> Option<UpdatePhase> {
        Some(UpdatePhase::Input)
    }

    fn start(&mut self, ctx: &mut EngineContext) -> Result<(), SubsystemError> {
        ensure_uninitialized(self.state, self.name())?;

        ctx.platform.init_events()?;
        self.state = LifecycleState::Started;
        log::info!("input subsystem started");
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext) -> Result<(), SubsystemError> {
        ensure_started(self.state, self.name())?;

        let mut buf = [InputEvent::default(); EVENT_BUFFER_LEN];
        let pending = ctx.platform.peek_events(&mut buf);
        for event in &buf[..pending] {
            log::debug!("pending event: {}", event);
        }
        Ok(())
    }

    fn stop(&mut self, ctx: &mut EngineContext) {
        if self.state != LifecycleState::Started {
            log::warn!("input subsystem stopped without being started");
            return;
        }
        ctx.platform.shutdown_events();
        self.state = LifecycleState::Stopped;
        log::info!("input subsystem stopped");
    }
}
