//! Contract between the window runtime and the application.
//!
//! The runtime drives the loop; the application sees one `FrameCtx` per
//! delivered frame and a resize notification after each settled resize.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
