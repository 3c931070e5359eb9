//! Ember engine crate.
//!
//! This crate owns the platform + window runtime pieces used by the
//! application binary: the native window, the GPU surface behind it, and the
//! blocking engine loop that drives both.

pub mod core;
pub mod device;
pub mod logging;
pub mod time;
pub mod window;
