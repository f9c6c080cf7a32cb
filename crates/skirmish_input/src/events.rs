//! Input event records
//!
//! Events carry a timestamp (milliseconds since the event queue was opened),
//! a type tag and the type-specific fields. The `Display` impl produces the
//! diagnostic classification the input subsystem logs each frame.

use std::fmt;
use std::time::Duration;

/// Size of the fixed buffer used when peeking or draining pending events.
pub const EVENT_BUFFER_LEN: usize = 32;

/// Tag for unclassified keyboard events.
pub const TAG_KEYBOARD: u32 = 1;
/// Tag for unclassified scroll-wheel events.
pub const TAG_SCROLL: u32 = 2;
/// Tag for unclassified touch events.
pub const TAG_TOUCH: u32 = 3;

/// The classified payload of an [`InputEvent`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventKind {
    /// The user asked the application to quit.
    Quit,
    /// A pointer button was pressed at the given window position.
    PointerButtonDown { button: u16, x: f64, y: f64 },
    /// A pointer button was released at the given window position.
    PointerButtonUp { button: u16, x: f64, y: f64 },
    /// The pointer moved to the given window position.
    PointerMotion { x: f64, y: f64 },
    /// Anything the translation layer does not classify.
    Unknown { tag: u32 },
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Quit => write!(f, "quit"),
            EventKind::PointerButtonDown { button, x, y } => {
                write!(f, "pointer button {} down at ({}, {})", button, x, y)
            }
            EventKind::PointerButtonUp { button, x, y } => {
                write!(f, "pointer button {} up at ({}, {})", button, x, y)
            }
            EventKind::PointerMotion { x, y } => {
                write!(f, "pointer motion to ({}, {})", x, y)
            }
            EventKind::Unknown { tag } => write!(f, "unknown event (tag {})", tag),
        }
    }
}

/// A timestamped input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    /// Time since the event queue was opened.
    pub timestamp: Duration,
    pub kind: EventKind,
}

impl InputEvent {
    pub fn new(timestamp: Duration, kind: EventKind) -> Self {
        Self { timestamp, kind }
    }

    /// True for the quit signal.
    #[inline]
    pub fn is_quit(&self) -> bool {
        self.kind == EventKind::Quit
    }
}

impl Default for InputEvent {
    fn default() -> Self {
        Self {
            timestamp: Duration::ZERO,
            kind: EventKind::Unknown { tag: 0 },
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{}ms)", self.kind, self.timestamp.as_millis())
    }
}
