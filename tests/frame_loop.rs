//! Integration tests for the frame loop and subsystem lifecycle
//!
//! A scripted platform backend stands in for winit, feeding one batch of
//! events per pump; probe subsystems record every lifecycle call so start,
//! update and stop ordering can be asserted.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use skirmish::config::WindowConfig;
use skirmish::engine::{Engine, EngineContext, EngineError};
use skirmish::platform::{PlatformBackend, PlatformError};
use skirmish::systems::{
    InputSystem, LifecycleState, Subsystem, SubsystemError, UpdatePhase,
};
use skirmish_core::World;
use skirmish_input::{BufferedEventQueue, EventKind, InputEvent, EVENT_BUFFER_LEN};

/// Platform double: each pump delivers the next scripted event batch.
struct ScriptedPlatform {
    script: VecDeque<Vec<EventKind>>,
    queue: BufferedEventQueue,
}

impl ScriptedPlatform {
    fn new(script: Vec<Vec<EventKind>>) -> Self {
        Self {
            script: script.into(),
            queue: BufferedEventQueue::new(),
        }
    }
}

impl PlatformBackend for ScriptedPlatform {
    fn create_window(&mut self, _config: &WindowConfig) -> Result<(), PlatformError> {
        Ok(())
    }

    fn window(&self) -> Option<Arc<winit::window::Window>> {
        None
    }

    fn destroy_window(&mut self) {}

    fn init_events(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }

    fn shutdown_events(&mut self) {
        self.queue.clear();
    }

    fn pump(&mut self) -> Result<(), PlatformError> {
        if let Some(batch) = self.script.pop_front() {
            for kind in batch {
                self.queue.push(kind);
            }
        }
        Ok(())
    }

    fn peek_events(&self, out: &mut [InputEvent]) -> usize {
        self.queue.peek(out)
    }

    fn drain_events(&mut self, out: &mut [InputEvent]) -> usize {
        self.queue.drain(out)
    }
}

/// Subsystem double recording every lifecycle call into a shared log.
struct ProbeSystem {
    name: &'static str,
    phase: Option<UpdatePhase>,
    state: LifecycleState,
    fail_start: bool,
    log: Rc<RefCell<Vec<String>>>,
}

impl ProbeSystem {
    fn new(
        name: &'static str,
        phase: Option<UpdatePhase>,
        log: Rc<RefCell<Vec<String>>>,
    ) -> Self {
        Self {
            name,
            phase,
            state: LifecycleState::Uninitialized,
            fail_start: false,
            log,
        }
    }

    fn failing(mut self) -> Self {
        self.fail_start = true;
        self
    }
}

impl Subsystem for ProbeSystem {
    fn name(&self) -> &'static str {
        self.name
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn phase(&self) -> Option<UpdatePhase> {
        self.phase
    }

    fn start(&mut self, _ctx: &mut EngineContext) -> Result<(), SubsystemError> {
        if self.fail_start {
            return Err(SubsystemError::NotStarted(self.name));
        }
        self.state = LifecycleState::Started;
        self.log.borrow_mut().push(format!("start:{}", self.name));
        Ok(())
    }

    fn update(&mut self, _ctx: &mut EngineContext) -> Result<(), SubsystemError> {
        self.log.borrow_mut().push(format!("update:{}", self.name));
        Ok(())
    }

    fn stop(&mut self, _ctx: &mut EngineContext) {
        if self.state != LifecycleState::Started {
            return;
        }
        self.state = LifecycleState::Stopped;
        self.log.borrow_mut().push(format!("stop:{}", self.name));
    }
}

fn probe_engine(
    script: Vec<Vec<EventKind>>,
    log: &Rc<RefCell<Vec<String>>>,
) -> Engine {
    Engine::new(World::new(), Box::new(ScriptedPlatform::new(script)))
        .with_subsystem(Box::new(ProbeSystem::new("window", None, log.clone())))
        .with_subsystem(Box::new(ProbeSystem::new(
            "render",
            Some(UpdatePhase::Render),
            log.clone(),
        )))
        .with_subsystem(Box::new(ProbeSystem::new(
            "input",
            Some(UpdatePhase::Input),
            log.clone(),
        )))
}

#[test]
fn test_quit_event_renders_one_more_frame_then_stops_in_reverse_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    // Frame 1: nothing pending. Frame 2: a quit event arrives.
    let mut engine = probe_engine(vec![vec![], vec![EventKind::Quit]], &log);

    engine.run().unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "start:window",
            "start:render",
            "start:input",
            // Frame 1
            "update:input",
            "update:render",
            // Frame 2: the drain sets quit, render still runs once more.
            "update:input",
            "update:render",
            // Shutdown: reverse of start order.
            "stop:input",
            "stop:render",
            "stop:window",
        ]
    );
    assert_eq!(engine.frames(), 2);
}

#[test]
fn test_phases_run_in_input_simulation_render_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = Engine::new(World::new(), Box::new(ScriptedPlatform::new(vec![vec![
        EventKind::Quit,
    ]])))
    .with_subsystem(Box::new(ProbeSystem::new(
        "render",
        Some(UpdatePhase::Render),
        log.clone(),
    )))
    .with_subsystem(Box::new(ProbeSystem::new(
        "sim",
        Some(UpdatePhase::Simulation),
        log.clone(),
    )))
    .with_subsystem(Box::new(ProbeSystem::new(
        "input",
        Some(UpdatePhase::Input),
        log.clone(),
    )));

    engine.run().unwrap();

    // Update order follows the phases, not the registration order.
    let updates: Vec<_> = log
        .borrow()
        .iter()
        .filter(|entry| entry.starts_with("update:"))
        .cloned()
        .collect();
    assert_eq!(updates, vec!["update:input", "update:sim", "update:render"]);
}

#[test]
fn test_window_has_no_update_phase() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = probe_engine(vec![vec![EventKind::Quit]], &log);

    engine.run().unwrap();

    assert!(!log.borrow().iter().any(|entry| entry == "update:window"));
}

#[test]
fn test_failed_start_rolls_back_started_prefix() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = Engine::new(World::new(), Box::new(ScriptedPlatform::new(vec![])))
        .with_subsystem(Box::new(ProbeSystem::new("window", None, log.clone())))
        .with_subsystem(Box::new(
            ProbeSystem::new("render", Some(UpdatePhase::Render), log.clone()).failing(),
        ))
        .with_subsystem(Box::new(ProbeSystem::new(
            "input",
            Some(UpdatePhase::Input),
            log.clone(),
        )));

    let result = engine.run();

    assert!(matches!(
        result,
        Err(EngineError::StartFailed { name: "render", .. })
    ));
    // The window started before the failure and was stopped again; input
    // was never touched.
    assert_eq!(*log.borrow(), vec!["start:window", "stop:window"]);
}

#[test]
fn test_input_system_lifecycle_guards() {
    let platform = ScriptedPlatform::new(vec![]);
    let mut ctx = EngineContext::new(World::new(), Box::new(platform));
    let mut input = InputSystem::new();

    // Update before start is rejected.
    assert!(matches!(
        input.update(&mut ctx),
        Err(SubsystemError::NotStarted("input"))
    ));

    input.start(&mut ctx).unwrap();
    assert_eq!(input.state(), LifecycleState::Started);

    // Starting twice is rejected.
    assert!(matches!(
        input.start(&mut ctx),
        Err(SubsystemError::AlreadyStarted("input"))
    ));

    input.stop(&mut ctx);
    assert_eq!(input.state(), LifecycleState::Stopped);

    // No restart after stop.
    assert!(matches!(
        input.start(&mut ctx),
        Err(SubsystemError::AlreadyStarted("input"))
    ));
}

#[test]
fn test_input_update_peeks_without_consuming() {
    let mut platform = ScriptedPlatform::new(vec![vec![
        EventKind::PointerMotion { x: 5.0, y: 6.0 },
        EventKind::Quit,
    ]]);
    platform.pump().unwrap();

    let mut ctx = EngineContext::new(World::new(), Box::new(platform));
    let mut input = InputSystem::new();
    input.start(&mut ctx).unwrap();

    // The diagnostic peek must leave the queue intact for the drain.
    input.update(&mut ctx).unwrap();

    let mut buf = [InputEvent::default(); EVENT_BUFFER_LEN];
    let drained = ctx.platform.drain_events(&mut buf);
    assert_eq!(drained, 2);
    assert_eq!(buf[0].kind, EventKind::PointerMotion { x: 5.0, y: 6.0 });
    assert_eq!(buf[1].kind, EventKind::Quit);
}

#[test]
fn test_non_quit_events_do_not_terminate_the_loop() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = probe_engine(
        vec![
            vec![EventKind::PointerMotion { x: 1.0, y: 1.0 }],
            vec![EventKind::PointerButtonDown {
                button: 1,
                x: 1.0,
                y: 1.0,
            }],
            vec![EventKind::Quit],
        ],
        &log,
    );

    engine.run().unwrap();
    assert_eq!(engine.frames(), 3);
}
