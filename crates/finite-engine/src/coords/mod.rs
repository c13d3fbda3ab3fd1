//! Coordinate spaces and the conversions between them.
//!
//! Four spaces are in play each frame:
//! - `ScreenPx`: window client pixels, origin top-left, +X right, +Y down
//! - `Ndc`: normalized device coordinates, `[-1, 1]` on both axes, +Y up
//! - `WorldPos`: world units seen by the camera, +Y up
//! - `TileCoord`: fractional tilemap coordinates (isometric grid axes)
//!
//! Values never carry their space at runtime; the newtypes keep them apart at
//! compile time and every crossing goes through a named function.

mod color;
pub mod iso;
mod rect;
mod space;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use rect::{PxRect, QuadCorners};
pub use space::{Ndc, ScreenPx, TileCoord, WorldPos};
pub use vec2::{Vec2, Vec2i};
pub use viewport::Viewport;
