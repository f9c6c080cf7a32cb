//! Input handling for the Skirmish prototype
//!
//! This crate owns the event model consumed by the frame loop:
//!
//! - [`InputEvent`] / [`EventKind`] - timestamped, classified events
//! - [`BufferedEventQueue`] - pending events with peek/drain access
//! - [`translate_window_event`] - winit window events -> [`EventKind`]

mod events;
mod queue;
mod translate;

pub use events::{
    EventKind, InputEvent, EVENT_BUFFER_LEN, TAG_KEYBOARD, TAG_SCROLL, TAG_TOUCH,
};
pub use queue::BufferedEventQueue;
pub use translate::{button_code, translate_window_event};
