//! Platform capability provider: window and event queue
//!
//! [`PlatformBackend`] is the seam between the subsystems and the OS: window
//! creation/destruction, event-queue lifecycle and the per-frame pump.
//! [`WinitPlatform`] is the production implementation, driving the winit
//! event loop in short pumps so the frame loop stays synchronous; tests
//! substitute a scripted backend.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowId};

use skirmish_input::{translate_window_event, BufferedEventQueue, EventKind, InputEvent};

use crate::config::WindowConfig;

/// The display and event capabilities the subsystems consume.
pub trait PlatformBackend {
    /// Create the on-screen window.
    fn create_window(&mut self, config: &WindowConfig) -> Result<(), PlatformError>;

    /// Handle of the created window, if any.
    fn window(&self) -> Option<Arc<Window>>;

    /// Release the window.
    fn destroy_window(&mut self);

    /// Open the event queue; input events are only collected afterwards.
    fn init_events(&mut self) -> Result<(), PlatformError>;

    /// Close the event queue and drop whatever is still pending.
    fn shutdown_events(&mut self);

    /// Collect pending OS events into the queue. Called once per frame.
    fn pump(&mut self) -> Result<(), PlatformError>;

    /// Copy pending events into `out` without consuming them.
    fn peek_events(&self, out: &mut [InputEvent]) -> usize;

    /// Move pending events into `out`, consuming them.
    fn drain_events(&mut self, out: &mut [InputEvent]) -> usize;
}

/// Platform error types.
#[derive(Debug)]
pub enum PlatformError {
    /// The video subsystem (event loop) could not be initialized.
    VideoInit(String),
    /// Window creation failed.
    WindowCreation(String),
    /// The platform produced neither a window nor an error.
    WindowUnavailable,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::VideoInit(msg) => {
                write!(f, "failed to initialize video subsystem: {}", msg)
            }
            PlatformError::WindowCreation(msg) => write!(f, "failed to create window: {}", msg),
            PlatformError::WindowUnavailable => write!(f, "window was not created"),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Number of pumps `create_window` waits for the window to materialize.
const WINDOW_CREATION_PUMPS: usize = 8;

/// winit-backed [`PlatformBackend`].
///
/// winit only hands out an `ActiveEventLoop` inside its callbacks, so window
/// creation is requested here and performed by the handler on the next pump.
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    handler: PumpHandler,
}

impl WinitPlatform {
    /// Initialize the video subsystem.
    pub fn new() -> Result<Self, PlatformError> {
        let event_loop = EventLoop::new().map_err(|e| PlatformError::VideoInit(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);
        log::info!("initialized video subsystem");

        Ok(Self {
            event_loop,
            handler: PumpHandler::new(),
        })
    }
}

impl PlatformBackend for WinitPlatform {
    fn create_window(&mut self, config: &WindowConfig) -> Result<(), PlatformError> {
        self.handler.pending_window = Some(config.clone());
        for _ in 0..WINDOW_CREATION_PUMPS {
            self.pump()?;
            if self.handler.window.is_some() || self.handler.creation_error.is_some() {
                break;
            }
        }

        if let Some(msg) = self.handler.creation_error.take() {
            return Err(PlatformError::WindowCreation(msg));
        }
        if self.handler.window.is_none() {
            return Err(PlatformError::WindowUnavailable);
        }
        log::info!(
            "created window \"{}\" ({}x{})",
            config.title,
            config.width,
            config.height
        );
        Ok(())
    }

    fn window(&self) -> Option<Arc<Window>> {
        self.handler.window.clone()
    }

    fn destroy_window(&mut self) {
        if self.handler.window.take().is_some() {
            log::info!("destroyed window");
        }
        self.handler.pending_window = None;
    }

    fn init_events(&mut self) -> Result<(), PlatformError> {
        self.handler.collecting = true;
        Ok(())
    }

    fn shutdown_events(&mut self) {
        self.handler.collecting = false;
        self.handler.queue.clear();
    }

    fn pump(&mut self) -> Result<(), PlatformError> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);
        if let PumpStatus::Exit(code) = status {
            // The OS tore the loop down underneath us; surface it as a quit
            // signal so the frame loop can wind down normally.
            log::debug!("event loop exited with status {}", code);
            self.handler.queue.push(EventKind::Quit);
        }
        Ok(())
    }

    fn peek_events(&self, out: &mut [InputEvent]) -> usize {
        self.handler.queue.peek(out)
    }

    fn drain_events(&mut self, out: &mut [InputEvent]) -> usize {
        self.handler.queue.drain(out)
    }
}

/// winit application handler feeding the event queue.
struct PumpHandler {
    pending_window: Option<WindowConfig>,
    window: Option<Arc<Window>>,
    creation_error: Option<String>,
    cursor: (f64, f64),
    collecting: bool,
    queue: BufferedEventQueue,
}

impl PumpHandler {
    fn new() -> Self {
        Self {
            pending_window: None,
            window: None,
            creation_error: None,
            cursor: (0.0, 0.0),
            collecting: false,
            queue: BufferedEventQueue::new(),
        }
    }

    fn try_create_window(&mut self, event_loop: &ActiveEventLoop) {
        let Some(config) = self.pending_window.take() else {
            return;
        };
        if self.window.is_some() {
            return;
        }

        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));
        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => self.creation_error = Some(e.to_string()),
        }
    }
}

impl ApplicationHandler for PumpHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.try_create_window(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // A window requested after `resumed` already fired is created here.
        self.try_create_window(event_loop);
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CursorMoved { position, .. } = &event {
            self.cursor = (position.x, position.y);
        }

        match translate_window_event(&event, self.cursor) {
            // Quit must never be dropped, even before the input subsystem
            // opened the queue.
            Some(EventKind::Quit) => self.queue.push(EventKind::Quit),
            Some(kind) if self.collecting => self.queue.push(kind),
            _ => {}
        }
    }
}
