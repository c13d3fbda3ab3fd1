use crate::coords::Vec2i;

/// One grid cell. `kind` selects how the tile is shaded.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Tile {
    pub kind: i32,
}

/// Fixed-size row-major grid: `index = x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tilemap {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Tilemap {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Tile::default())
    }

    pub fn filled(width: u32, height: u32, tile: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Vec2i) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    #[inline]
    fn index(&self, cell: Vec2i) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.x as usize + cell.y as usize * self.width as usize)
    }

    pub fn get(&self, cell: Vec2i) -> Option<&Tile> {
        self.index(cell).map(|i| &self.tiles[i])
    }

    pub fn get_mut(&mut self, cell: Vec2i) -> Option<&mut Tile> {
        self.index(cell).map(move |i| &mut self.tiles[i])
    }

    /// Writes `tile` into `cell`. Returns false when the cell is off the map.
    pub fn set(&mut self, cell: Vec2i, tile: Tile) -> bool {
        match self.get_mut(cell) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    /// The tile under the cursor cell, if the cursor is over the map.
    #[inline]
    pub fn cursor_tile(&self, cursor: Vec2i) -> Option<&Tile> {
        self.get(cursor)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2i, &Tile)> + '_ {
        let w = self.width.max(1) as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (Vec2i::new((i % w) as i32, (i / w) as i32), t))
    }
}
