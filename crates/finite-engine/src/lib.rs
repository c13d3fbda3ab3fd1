//! Finite engine.
//!
//! A small isometric tile renderer: coordinate spaces and camera, a flat
//! tilemap, a bitmap font atlas, CPU draw recording and a wgpu backend, plus
//! the winit runtime that drives it.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod camera;
pub mod tilemap;
pub mod text;
pub mod scene;
pub mod render;
