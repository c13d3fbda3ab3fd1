//! Flat tile grid.

mod grid;

pub use grid::{Tile, Tilemap};
