use std::error::Error as StdError;
use std::fmt;

/// Initialization failure raised by the windowing layer.
///
/// The variants separate the failure causes a caller may want to diagnose
/// individually: the windowing platform itself, native window creation, and
/// graphics device / surface setup.
#[derive(Debug)]
pub enum WindowError {
    /// The windowing platform could not be initialized.
    Platform(anyhow::Error),
    /// The platform is up, but the native window could not be created.
    WindowCreation(anyhow::Error),
    /// The window exists, but the graphics device or surface setup failed.
    Graphics(anyhow::Error),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::Platform(e) => {
                write!(f, "windowing platform initialization failed: {e:#}")
            }
            WindowError::WindowCreation(e) => write!(f, "window creation failed: {e:#}"),
            WindowError::Graphics(e) => write!(f, "graphics setup failed: {e:#}"),
        }
    }
}

impl StdError for WindowError {}
