use super::{Vec2, Vec2i};

/// Window client pixels. Origin top-left, +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScreenPx(pub Vec2);

/// Normalized device coordinates. `[-1, 1]` on both axes, +Y up.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ndc(pub Vec2);

/// World units, the space the camera looks at. +Y up.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WorldPos(pub Vec2);

/// Fractional tilemap coordinates along the isometric grid axes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TileCoord(pub Vec2);

impl ScreenPx {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl Ndc {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl WorldPos {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl TileCoord {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// The integer cell containing this coordinate.
    #[inline]
    pub fn to_cell(self) -> Vec2i {
        self.0.floor()
    }
}

impl From<Vec2i> for TileCoord {
    #[inline]
    fn from(cell: Vec2i) -> Self {
        TileCoord(cell.as_vec2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_cell_floors_negative_fractions() {
        assert_eq!(TileCoord::new(-0.25, 2.99).to_cell(), Vec2i::new(-1, 2));
    }

    #[test]
    fn cell_round_trips_through_tile_coord() {
        let cell = Vec2i::new(3, -4);
        assert_eq!(TileCoord::from(cell).to_cell(), cell);
    }
}
