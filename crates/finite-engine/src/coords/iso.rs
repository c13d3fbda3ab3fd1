//! Isometric grid mapping.
//!
//! The tile grid is square in tile space and drawn as a diamond in world
//! space through a fixed 2x2 linear map:
//!
//! ```text
//! | wx |   | -1.0  1.0 | | tx |
//! | wy | = |  0.5  0.5 | | ty |
//! ```
//!
//! Its determinant is -1, giving the exact inverse
//!
//! ```text
//! | tx |   | -0.5  1.0 | | wx |
//! | ty | = |  0.5  1.0 | | wy |
//! ```
//!
//! Under this map the unit square of cell (0,0) becomes a diamond of width 2
//! and height 1 whose bottom corner sits on the world origin.

use super::{TileCoord, Vec2, Vec2i, WorldPos};

/// Half the height of a tile diamond in world units.
pub const TILE_HALF_HEIGHT: f32 = 0.5;

/// Full diamond extent in world units.
pub const TILE_WORLD_SIZE: Vec2 = Vec2::new(2.0, 2.0 * TILE_HALF_HEIGHT);

#[inline]
pub fn tile_to_world(tile: TileCoord) -> WorldPos {
    let t = tile.0;
    WorldPos(Vec2::new(-t.x + t.y, 0.5 * t.x + 0.5 * t.y))
}

#[inline]
pub fn world_to_tile(world: WorldPos) -> TileCoord {
    let w = world.0;
    TileCoord(Vec2::new(-0.5 * w.x + w.y, 0.5 * w.x + w.y))
}

/// Center of the diamond covering `cell`.
///
/// Equal to `tile_to_world(cell + (0.5, 0.5))`: the linear image of the cell's
/// integer corner raised by `TILE_HALF_HEIGHT`.
#[inline]
pub fn tile_center(cell: Vec2i) -> WorldPos {
    let corner = tile_to_world(TileCoord::from(cell));
    WorldPos(corner.0 + Vec2::new(0.0, TILE_HALF_HEIGHT))
}

/// The 4x4 homogeneous form of the forward map, for GPU-side use.
pub fn tile_to_world_matrix() -> glam::Mat4 {
    glam::Mat4::from_cols(
        glam::Vec4::new(-1.0, 0.5, 0.0, 0.0),
        glam::Vec4::new(1.0, 0.5, 0.0, 0.0),
        glam::Vec4::Z,
        glam::Vec4::W,
    )
}
