use super::backend::{Backend, BackendEvent};
use super::state::WindowState;
use super::{WindowConfig, WindowError, WinitBackend};

/// A single native OS window plus its graphics context.
///
/// `Window` never leaks native handles to callers: the engine talks to it
/// through the lifecycle operations and the callback slots, and the native
/// layer is reached only through the [`Backend`] seam.
pub struct Window<B: Backend = WinitBackend> {
    state: WindowState,
    backend: Option<B>,
    events: Vec<BackendEvent>,
}

impl<B: Backend> Window<B> {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            state: WindowState::from_config(config),
            backend: None,
            events: Vec::new(),
        }
    }

    /// Opens the native window and its graphics context.
    ///
    /// Idempotent while open: a second call on a live window is a no-op.
    /// Reopening after `shutdown` is supported and uses the current mirrored
    /// state, including any setter calls made in between.
    pub fn initialize(&mut self) -> Result<(), WindowError> {
        if self.backend.is_some() {
            log::debug!("window already initialized");
            return Ok(());
        }

        self.backend = Some(B::open(&self.state.config())?);
        Ok(())
    }

    /// Destroys the native window. Safe to call when already shut down.
    pub fn shutdown(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            backend.close();
            log::debug!("window shut down");
        }
    }

    /// Polls pending native events, then presents the back buffer.
    ///
    /// Resize/close callbacks are dispatched synchronously on the calling
    /// thread before this returns. A no-op if the window is not initialized.
    pub fn update(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        self.events.clear();
        backend.poll_events(&mut self.events);

        for event in self.events.drain(..) {
            match event {
                BackendEvent::Resized(width, height) => {
                    self.state.width = width;
                    self.state.height = height;
                    if let Some(on_resize) = self.state.on_resize.as_mut() {
                        on_resize(width, height);
                    }
                }
                BackendEvent::CloseRequested => {
                    if let Some(on_close) = self.state.on_close.as_mut() {
                        on_close();
                    }
                }
            }
        }

        backend.present();
    }

    /// Whether the native layer has recorded a close request.
    pub fn should_close(&self) -> bool {
        self.backend.as_ref().is_some_and(|b| b.should_close())
    }

    /// Sets the title on both the mirrored state and the live handle.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.title = title.into();
        if let Some(backend) = self.backend.as_mut() {
            backend.set_title(&self.state.title);
        }
    }

    /// Toggles vsync on both the mirrored state and the live swap chain.
    pub fn set_vsync(&mut self, enabled: bool) {
        self.state.vsync = enabled;
        if let Some(backend) = self.backend.as_mut() {
            backend.set_vsync(enabled);
        }
    }

    /// Replaces the resize callback; the next dispatch uses it.
    pub fn set_resize_callback(&mut self, callback: impl FnMut(u32, u32) + 'static) {
        self.state.on_resize = Some(Box::new(callback));
    }

    /// Replaces the close callback; the next dispatch uses it.
    pub fn set_close_callback(&mut self, callback: impl FnMut() + 'static) {
        self.state.on_close = Some(Box::new(callback));
    }

    /// Last known inner width in pixels (mirrored state, refreshed by
    /// `update`; may lag the native handle right after an external resize).
    pub fn width(&self) -> u32 {
        self.state.width
    }

    /// Last known inner height in pixels (see [`Window::width`]).
    pub fn height(&self) -> u32 {
        self.state.height
    }

    pub fn title(&self) -> &str {
        &self.state.title
    }

    pub fn is_vsync(&self) -> bool {
        self.state.vsync
    }
}

impl<B: Backend> Drop for Window<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::super::backend::testing::{script, script_open_failure, FakeBackend};
    use super::*;

    fn config(width: u32, height: u32) -> WindowConfig {
        WindowConfig {
            title: "test window".to_string(),
            width,
            height,
            ..WindowConfig::default()
        }
    }

    // ── initialization ────────────────────────────────────────────────────

    #[test]
    fn initialize_reflects_configured_size() {
        let probe = script(vec![]);
        let mut window = Window::<FakeBackend>::new(config(1024, 768));

        window.initialize().unwrap();

        assert_eq!(window.width(), 1024);
        assert_eq!(window.height(), 768);
        assert_eq!(*probe.title.borrow(), "test window");
    }

    #[test]
    fn initialize_failure_surfaces_window_creation_error() {
        script_open_failure("no display");
        let mut window = Window::<FakeBackend>::new(config(640, 480));

        let err = window.initialize().unwrap_err();
        assert!(matches!(err, WindowError::WindowCreation(_)));
        assert!(!window.should_close());
    }

    #[test]
    fn setters_before_initialize_are_applied_at_open() {
        let mut window = Window::<FakeBackend>::new(config(640, 480));
        window.set_title("renamed before open");
        window.set_vsync(false);

        let probe = script(vec![]);
        window.initialize().unwrap();

        assert_eq!(*probe.title.borrow(), "renamed before open");
        assert!(!probe.vsync.get());
    }

    // ── live setters ──────────────────────────────────────────────────────

    #[test]
    fn set_title_updates_state_and_live_handle() {
        let probe = script(vec![]);
        let mut window = Window::<FakeBackend>::new(config(640, 480));
        window.initialize().unwrap();

        window.set_title("renamed");

        assert_eq!(window.title(), "renamed");
        assert_eq!(*probe.title.borrow(), "renamed");
    }

    #[test]
    fn set_vsync_round_trips() {
        let probe = script(vec![]);
        let mut window = Window::<FakeBackend>::new(config(640, 480));
        window.initialize().unwrap();

        window.set_vsync(false);
        assert!(!window.is_vsync());
        assert!(!probe.vsync.get());

        window.set_vsync(true);
        assert!(window.is_vsync());
        assert!(probe.vsync.get());
    }

    // ── event dispatch ────────────────────────────────────────────────────

    #[test]
    fn resize_event_updates_state_and_fires_callback() {
        let _probe = script(vec![vec![BackendEvent::Resized(800, 600)]]);
        let mut window = Window::<FakeBackend>::new(config(1280, 720));
        window.initialize().unwrap();

        let recorded: Rc<RefCell<Vec<(u32, u32)>>> = Rc::default();
        let sink = Rc::clone(&recorded);
        window.set_resize_callback(move |w, h| sink.borrow_mut().push((w, h)));

        window.update();

        assert_eq!(*recorded.borrow(), vec![(800, 600)]);
        assert_eq!(window.width(), 800);
        assert_eq!(window.height(), 600);
    }

    #[test]
    fn replaced_callback_receives_next_dispatch() {
        let _probe = script(vec![
            vec![BackendEvent::Resized(10, 10)],
            vec![BackendEvent::Resized(20, 20)],
        ]);
        let mut window = Window::<FakeBackend>::new(config(1280, 720));
        window.initialize().unwrap();

        let first: Rc<RefCell<Vec<(u32, u32)>>> = Rc::default();
        let sink = Rc::clone(&first);
        window.set_resize_callback(move |w, h| sink.borrow_mut().push((w, h)));
        window.update();

        let second: Rc<RefCell<Vec<(u32, u32)>>> = Rc::default();
        let sink = Rc::clone(&second);
        window.set_resize_callback(move |w, h| sink.borrow_mut().push((w, h)));
        window.update();

        assert_eq!(*first.borrow(), vec![(10, 10)]);
        assert_eq!(*second.borrow(), vec![(20, 20)]);
    }

    #[test]
    fn close_event_fires_callback_and_sets_should_close() {
        let _probe = script(vec![vec![BackendEvent::CloseRequested]]);
        let mut window = Window::<FakeBackend>::new(config(1280, 720));
        window.initialize().unwrap();

        let closed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&closed);
        window.set_close_callback(move || flag.set(true));

        window.update();

        assert!(closed.get());
        assert!(window.should_close());
    }

    // ── teardown ──────────────────────────────────────────────────────────

    #[test]
    fn shutdown_is_idempotent() {
        let probe = script(vec![]);
        let mut window = Window::<FakeBackend>::new(config(640, 480));
        window.initialize().unwrap();

        window.shutdown();
        window.shutdown();

        assert!(probe.closed.get());
    }

    #[test]
    fn update_after_shutdown_is_a_no_op() {
        let probe = script(vec![]);
        let mut window = Window::<FakeBackend>::new(config(640, 480));
        window.initialize().unwrap();
        window.shutdown();

        window.update();

        assert_eq!(probe.polls.get(), 0);
        assert_eq!(probe.presents.get(), 0);
        assert!(!window.should_close());
    }
}
