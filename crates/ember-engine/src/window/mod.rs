//! Window lifecycle + native platform seam.
//!
//! [`Window`] owns the mirrored per-window state and the resize/close
//! callback slots; the native layer (winit + wgpu in production) sits behind
//! the [`Backend`] trait so event dispatch always reaches the owning window's
//! current callbacks and the contract can be exercised headless in tests.

pub(crate) mod backend;
mod config;
mod error;
mod native;
mod platform;
mod state;
mod window;

pub use backend::{Backend, BackendEvent};
pub use config::WindowConfig;
pub use error::WindowError;
pub use native::WinitBackend;
pub use window::Window;
