//! Window and event loop.
//!
//! One window per run. Its GPU surface, input state and resize latch live
//! together in a self-referencing entry that is dropped with the window.

mod events;
mod resize;
mod runtime;

pub use resize::ResizeLatch;
pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
