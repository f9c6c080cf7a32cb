//! Buffered event queue
//!
//! Pending events sit in arrival order until the frame loop drains them.
//! `peek` copies without consuming; `drain` consumes. Both fill a
//! caller-supplied buffer and return how many events were written, so a
//! single call is bounded by the buffer length.

use std::collections::VecDeque;
use std::time::Instant;

use crate::events::{EventKind, InputEvent};

/// FIFO queue of pending input events.
pub struct BufferedEventQueue {
    events: VecDeque<InputEvent>,
    epoch: Instant,
}

impl BufferedEventQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
            epoch: Instant::now(),
        }
    }

    /// Append an event, stamping it with the time since the queue opened.
    pub fn push(&mut self, kind: EventKind) {
        let event = InputEvent::new(self.epoch.elapsed(), kind);
        self.events.push_back(event);
    }

    /// Append an already-stamped event.
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Copy up to `out.len()` pending events into `out` without consuming
    /// them. Returns the number written.
    pub fn peek(&self, out: &mut [InputEvent]) -> usize {
        let mut written = 0;
        for (slot, event) in out.iter_mut().zip(self.events.iter()) {
            *slot = *event;
            written += 1;
        }
        written
    }

    /// Move up to `out.len()` pending events into `out`, consuming them.
    /// Returns the number written.
    pub fn drain(&mut self, out: &mut [InputEvent]) -> usize {
        let mut written = 0;
        while written < out.len() {
            match self.events.pop_front() {
                Some(event) => {
                    out[written] = event;
                    written += 1;
                }
                None => break,
            }
        }
        written
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for BufferedEventQueue {
    fn default() -> Self {
        Self::new()
    }
}
