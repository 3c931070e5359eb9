//! GPU device + surface management.
//!
//! Responsible for creating the wgpu instance/adapter/device/queue, keeping
//! the surface configured across resizes and vsync changes, and presenting
//! the cleared back buffer once per frame.

mod gpu;

pub use gpu::{Gpu, PresentOutcome};
