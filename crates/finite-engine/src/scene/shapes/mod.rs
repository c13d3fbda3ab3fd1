//! Draw operations, one file per primitive, each an `impl DrawList` block.

mod dot;
mod line;
mod rect;
mod sprite;
mod text;
mod tile;

pub use tile::{tile_model, TILE_QUAD};
