use std::cell::Cell;
use std::rc::Rc;

use crate::time::FrameClock;
use crate::window::{Backend, Window, WindowConfig, WindowError, WinitBackend};

/// Owns the application window and drives the blocking main loop.
///
/// The running flag is shared with the window's close callback: a native
/// close request clears it from inside `Window::update`, on the same thread
/// and in the same loop iteration that observed the event. The flag is the
/// sole authority on loop continuation.
pub struct Engine<B: Backend = WinitBackend> {
    running: Rc<Cell<bool>>,
    window: Option<Window<B>>,
    config: WindowConfig,
    clock: FrameClock,
}

impl<B: Backend> Engine<B> {
    pub fn new() -> Self {
        Self::with_config(WindowConfig::default())
    }

    pub fn with_config(config: WindowConfig) -> Self {
        Self {
            running: Rc::new(Cell::new(false)),
            window: None,
            config,
            clock: FrameClock::new(),
        }
    }

    /// Creates and initializes the window and wires its callbacks.
    ///
    /// On success the engine is marked running; any failure leaves it
    /// stopped, with no partial window kept around.
    pub fn initialize(&mut self) -> Result<(), WindowError> {
        let mut window = Window::new(self.config.clone());
        window.initialize()?;

        window.set_resize_callback(|width, height| {
            log::debug!("window resized to {width}x{height}");
        });

        let running = Rc::clone(&self.running);
        window.set_close_callback(move || {
            log::info!("window close requested");
            running.set(false);
        });

        self.window = Some(window);
        self.running.set(true);
        log::info!("engine initialized");
        Ok(())
    }

    /// Tears down the window and stops the loop. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(mut window) = self.window.take() {
            window.shutdown();
        }
        self.running.set(false);
        log::debug!("engine shut down");
    }

    /// Runs the blocking main loop until a close condition is observed.
    ///
    /// Initializes lazily if needed; an initialization failure is terminal
    /// for this call — it is logged and the loop is never entered.
    pub fn run(&mut self) {
        if !self.running.get() {
            if let Err(err) = self.initialize() {
                log::error!("engine initialization failed: {err}");
                return;
            }
        }

        log::info!("entering main loop");
        while self.running.get() {
            let Some(window) = self.window.as_mut() else {
                break;
            };

            window.update();
            if window.should_close() {
                self.running.set(false);
            }

            let _frame = self.clock.tick();
            // TODO: feed frame time into an update step once one exists
        }

        self.shutdown();
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl<B: Backend> Default for Engine<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::window::backend::testing::{script, script_open_failure, FakeBackend};
    use crate::window::BackendEvent;

    use super::*;

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn initialize_marks_engine_running() {
        let _probe = script(vec![]);
        let mut engine = Engine::<FakeBackend>::new();

        engine.initialize().unwrap();
        assert!(engine.is_running());

        engine.shutdown();
        assert!(!engine.is_running());
    }

    #[test]
    fn initialization_failure_leaves_engine_stopped() {
        script_open_failure("no display");
        let mut engine = Engine::<FakeBackend>::new();

        assert!(engine.initialize().is_err());
        assert!(!engine.is_running());
    }

    #[test]
    fn run_aborts_when_initialization_fails() {
        script_open_failure("no display");
        let mut engine = Engine::<FakeBackend>::new();

        engine.run();

        assert!(!engine.is_running());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let _probe = script(vec![]);
        let mut engine = Engine::<FakeBackend>::new();
        engine.initialize().unwrap();

        engine.shutdown();
        engine.shutdown();

        assert!(!engine.is_running());
    }

    // ── main loop ─────────────────────────────────────────────────────────

    #[test]
    fn run_stops_after_immediate_close_request() {
        let probe = script(vec![vec![BackendEvent::CloseRequested]]);
        let mut engine = Engine::<FakeBackend>::new();

        engine.run();

        assert!(!engine.is_running());
        // One iteration: one poll, one present, then teardown.
        assert_eq!(probe.polls.get(), 1);
        assert_eq!(probe.presents.get(), 1);
        assert!(probe.closed.get());
    }

    #[test]
    fn close_callback_stops_loop_on_observing_iteration() {
        // Two quiet frames, then the close request arrives.
        let probe = script(vec![vec![], vec![], vec![BackendEvent::CloseRequested]]);
        let mut engine = Engine::<FakeBackend>::new();

        engine.run();

        assert!(!engine.is_running());
        assert_eq!(probe.polls.get(), 3);
    }

    #[test]
    fn resize_events_flow_through_the_loop() {
        let probe = script(vec![
            vec![BackendEvent::Resized(640, 480)],
            vec![BackendEvent::CloseRequested],
        ]);
        let mut engine = Engine::<FakeBackend>::new();

        engine.run();

        assert!(!engine.is_running());
        assert_eq!(probe.polls.get(), 2);
        assert_eq!(probe.presents.get(), 2);
    }

    #[test]
    fn external_close_flag_is_set_on_the_same_iteration() {
        let _probe = script(vec![vec![BackendEvent::CloseRequested]]);
        let mut engine = Engine::<FakeBackend>::new();
        engine.initialize().unwrap();

        // Replace the close callback with one that also records externally,
        // mirroring what an application layered on the engine would do.
        let observed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&observed);
        let running = Rc::clone(&engine.running);
        engine
            .window
            .as_mut()
            .unwrap()
            .set_close_callback(move || {
                flag.set(true);
                running.set(false);
            });

        engine.run();

        assert!(observed.get());
        assert!(!engine.is_running());
    }
}
