//! 2D camera over the isometric world.

mod camera2d;
mod config;

pub use camera2d::{Camera2D, PanInput};
pub use config::CameraConfig;
