// Per-frame input coalescing and timed combo recognition
//
// - `engine::input`: input bits, per-frame coalescing, combo recorder,
//   bindings and winit/gilrs routing
// - `engine::frame_clock`: wall-clock frame timing in milliseconds

pub mod engine;

pub use engine::frame_clock::FrameClock;
pub use engine::input::{Input, InputBit, InputSet, InputSource, Recorder};
