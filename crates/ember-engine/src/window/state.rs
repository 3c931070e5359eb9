use super::WindowConfig;

pub(crate) type ResizeCallback = Box<dyn FnMut(u32, u32)>;
pub(crate) type CloseCallback = Box<dyn FnMut()>;

/// Mutable mirror of the window's native properties, plus the callback slots
/// native events are dispatched to.
///
/// The mirror holds the last value set through the owning `Window`. After an
/// external resize it is refreshed by the next `update()` pass, so reads in
/// between may lag the native handle.
pub(crate) struct WindowState {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub fullscreen: bool,
    pub resizable: bool,
    pub on_resize: Option<ResizeCallback>,
    pub on_close: Option<CloseCallback>,
}

impl WindowState {
    pub fn from_config(config: WindowConfig) -> Self {
        Self {
            title: config.title,
            width: config.width,
            height: config.height,
            vsync: config.vsync,
            fullscreen: config.fullscreen,
            resizable: config.resizable,
            on_resize: None,
            on_close: None,
        }
    }

    /// Snapshot of the current mirrored properties, used when opening the
    /// native window so setter calls made beforehand are honored.
    pub fn config(&self) -> WindowConfig {
        WindowConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            vsync: self.vsync,
            fullscreen: self.fullscreen,
            resizable: self.resizable,
        }
    }
}
