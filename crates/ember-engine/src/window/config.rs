/// Window configuration.
///
/// Values are applied once when the window is initialized; later changes go
/// through the live setters (`set_title`, `set_vsync`).
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in pixels. Must be positive.
    pub width: u32,
    /// Initial inner height in pixels. Must be positive.
    pub height: u32,
    /// Synchronize presentation with the display refresh rate.
    pub vsync: bool,
    pub fullscreen: bool,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Ember".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            fullscreen: false,
            resizable: true,
        }
    }
}
