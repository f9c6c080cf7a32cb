//! Subsystems and their shared lifecycle
//!
//! Every subsystem moves through the same state machine:
//! Uninitialized -> Started -> Stopped, with `start` and `stop` as the only
//! legal transitions (no restart after stop). The frame loop starts the
//! subsystems in registration order, updates them by phase and stops them in
//! reverse order.

mod input;
mod render;
mod window;

pub use input::InputSystem;
pub use render::RenderSystem;
pub use window::WindowSystem;

use std::fmt;

use crate::engine::EngineContext;
use crate::platform::PlatformError;
use skirmish_render::RenderError;

/// Lifecycle state of a subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Started,
    Stopped,
}

/// Frame phase in which a subsystem's `update` runs.
///
/// Phases run in declaration order each frame; the destructive event drain
/// sits between `Input` and `Simulation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdatePhase {
    Input,
    Simulation,
    Render,
}

/// The uniform start/stop/update contract.
pub trait Subsystem {
    fn name(&self) -> &'static str;

    fn state(&self) -> LifecycleState;

    /// Phase in which `update` runs; `None` for subsystems without an update.
    fn phase(&self) -> Option<UpdatePhase> {
        None
    }

    /// Acquire the subsystem's resources. Either fully succeeds or leaves
    /// nothing acquired.
    fn start(&mut self, ctx: &mut EngineContext) -> Result<(), SubsystemError>;

    /// Run one frame's worth of work.
    fn update(&mut self, _ctx: &mut EngineContext) -> Result<(), SubsystemError> {
        Ok(())
    }

    /// Release the subsystem's resources. A no-op unless started.
    fn stop(&mut self, ctx: &mut EngineContext);
}

/// Guard for `start`: only legal from `Uninitialized`.
pub(crate) fn ensure_uninitialized(
    state: LifecycleState,
    name: &'static str,
) -> Result<(), SubsystemError> {
    if state != LifecycleState::Uninitialized {
        return Err(SubsystemError::AlreadyStarted(name));
    }
    Ok(())
}

/// Guard for `update`: only legal while `Started`.
pub(crate) fn ensure_started(
    state: LifecycleState,
    name: &'static str,
) -> Result<(), SubsystemError> {
    if state != LifecycleState::Started {
        return Err(SubsystemError::NotStarted(name));
    }
    Ok(())
}

/// Subsystem error types.
#[derive(Debug)]
pub enum SubsystemError {
    /// `start` was called on a subsystem that already left `Uninitialized`.
    AlreadyStarted(&'static str),
    /// `update` was called on a subsystem that is not `Started`.
    NotStarted(&'static str),
    /// The render subsystem started before the window subsystem.
    WindowNotStarted,
    /// A platform capability failed.
    Platform(PlatformError),
    /// A render capability failed.
    Render(RenderError),
}

impl fmt::Display for SubsystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubsystemError::AlreadyStarted(name) => {
                write!(f, "{} subsystem was already started", name)
            }
            SubsystemError::NotStarted(name) => {
                write!(f, "{} subsystem is not started", name)
            }
            SubsystemError::WindowNotStarted => {
                write!(f, "render subsystem requires a started window subsystem")
            }
            SubsystemError::Platform(e) => write!(f, "{}", e),
            SubsystemError::Render(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SubsystemError {}

impl From<PlatformError> for SubsystemError {
    fn from(e: PlatformError) -> Self {
        SubsystemError::Platform(e)
    }
}

impl From<RenderError> for SubsystemError {
    fn from(e: RenderError) -> Self {
        SubsystemError::Render(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_guards() {
        assert!(ensure_uninitialized(LifecycleState::Uninitialized, "test").is_ok());
        assert!(matches!(
            ensure_uninitialized(LifecycleState::Started, "test"),
            Err(SubsystemError::AlreadyStarted("test"))
        ));
        assert!(matches!(
            ensure_uninitialized(LifecycleState::Stopped, "test"),
            Err(SubsystemError::AlreadyStarted("test"))
        ));

        assert!(ensure_started(LifecycleState::Started, "test").is_ok());
        assert!(matches!(
            ensure_started(LifecycleState::Uninitialized, "test"),
            Err(SubsystemError::NotStarted("test"))
        ));
    }

    #[test]
    fn test_subsystem_error_display() {
        assert_eq!(
            format!("{}", SubsystemError::AlreadyStarted("window")),
            "window subsystem was already started"
        );
        assert_eq!(
            format!("{}", SubsystemError::NotStarted("input")),
            "input subsystem is not started"
        );
    }
}
