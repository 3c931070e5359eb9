//! Core engine contract: the engine owns the window and the blocking loop.

mod engine;

pub use engine::Engine;
