//! Translation of winit window events into input events
//!
//! winit reports button presses without a position, so the caller tracks the
//! last cursor position and passes it in. Events with no classification that
//! still represent user input (keyboard, wheel, touch) map to `Unknown` with
//! a tag; pure window-management noise maps to nothing.

use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::events::{EventKind, TAG_KEYBOARD, TAG_SCROLL, TAG_TOUCH};

/// Numeric button code for a pointer button (left = 1, middle = 2,
/// right = 3, back = 4, forward = 5).
pub fn button_code(button: MouseButton) -> u16 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Middle => 2,
        MouseButton::Right => 3,
        MouseButton::Back => 4,
        MouseButton::Forward => 5,
        MouseButton::Other(code) => code,
    }
}

/// Classify a winit window event.
///
/// `cursor` is the last known pointer position, attached to button events.
/// Returns `None` for events the queue should not carry.
pub fn translate_window_event(event: &WindowEvent, cursor: (f64, f64)) -> Option<EventKind> {
    match event {
        WindowEvent::CloseRequested => Some(EventKind::Quit),
        WindowEvent::MouseInput { state, button, .. } => {
            let (x, y) = cursor;
            let button = button_code(*button);
            Some(match state {
                ElementState::Pressed => EventKind::PointerButtonDown { button, x, y },
                ElementState::Released => EventKind::PointerButtonUp { button, x, y },
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(EventKind::PointerMotion {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::KeyboardInput { .. } => Some(EventKind::Unknown { tag: TAG_KEYBOARD }),
        WindowEvent::MouseWheel { .. } => Some(EventKind::Unknown { tag: TAG_SCROLL }),
        WindowEvent::Touch(_) => Some(EventKind::Unknown { tag: TAG_TOUCH }),
        _ => None,
    }
}
