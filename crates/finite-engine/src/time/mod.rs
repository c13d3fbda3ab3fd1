//! Frame timing.
//!
//! One `FrameClock` per render loop; `tick()` once per delivered frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
