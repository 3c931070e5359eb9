//! Time subsystem.
//!
//! One [`FrameClock`] per loop; tick it once per iteration to obtain a
//! [`FrameTime`] snapshot.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
