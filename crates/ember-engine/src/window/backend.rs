use super::{WindowConfig, WindowError};

/// Event reported by the native layer during a poll pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BackendEvent {
    /// The native window was resized (new inner size in pixels).
    Resized(u32, u32),
    /// The user asked the window to close (close box, WM command, ...).
    CloseRequested,
}

/// Seam between [`Window`](super::Window) and the native windowing/context
/// layer.
///
/// The production implementation is [`WinitBackend`](super::WinitBackend);
/// tests substitute a scripted fake. The operation set is deliberately the
/// smallest one the window contract needs: open, poll, present, property
/// setters, close query, teardown.
pub trait Backend {
    /// Opens the native window and its graphics context.
    fn open(config: &WindowConfig) -> Result<Self, WindowError>
    where
        Self: Sized;

    /// Drains pending native events into `out` without blocking.
    fn poll_events(&mut self, out: &mut Vec<BackendEvent>);

    /// Presents the back buffer for the current frame.
    fn present(&mut self);

    /// Whether the native layer has recorded a close request.
    fn should_close(&self) -> bool;

    fn set_title(&mut self, title: &str);

    fn set_vsync(&mut self, enabled: bool);

    /// Tears down the native window. Dropping the backend must also release
    /// everything; `close` exists so teardown order is explicit.
    fn close(&mut self);
}
