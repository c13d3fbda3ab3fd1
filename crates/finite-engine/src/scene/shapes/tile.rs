use glam::{Mat4, Vec3};

use crate::coords::{iso, ColorRgba, Vec2i};
use crate::render::TextureId;
use crate::scene::vertex::quad;
use crate::scene::{DrawError, DrawList, PipelineKind, TileVertex};

/// Base tile quad in model space: `(x, y, u, v)` for tl, tr, bl, br.
///
/// Two units wide and one tall, matching one isometric diamond.
pub const TILE_QUAD: [[f32; 4]; 4] = [
    [-1.0, 0.5, 0.0, 0.0],
    [1.0, 0.5, 1.0, 0.0],
    [-1.0, -0.5, 0.0, 1.0],
    [1.0, -0.5, 1.0, 1.0],
];

/// Model matrix placing the base quad on `cell`.
#[inline]
pub fn tile_model(cell: Vec2i) -> Mat4 {
    let c = iso::tile_center(cell).0;
    Mat4::from_translation(Vec3::new(c.x, c.y, 0.0))
}

impl DrawList {
    /// Draws one textured tile at `cell`. World-space vertices; the tile
    /// pipeline applies the frame's view-projection.
    pub fn draw_tile(&mut self, cell: Vec2i, texture: TextureId, tint: ColorRgba) -> Result<(), DrawError> {
        let model = tile_model(cell);
        let color = tint.to_array();
        let v = TILE_QUAD.map(|[x, y, u, v]| TileVertex {
            position: model.transform_point3(Vec3::new(x, y, 0.0)).to_array(),
            color,
            uv: [u, v],
        });

        let range = self.tiles.push(&quad(v[0], v[1], v[2], v[3]))?;
        self.record(PipelineKind::Tile, Some(texture), range);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RendererLimits;
    use crate::coords::Viewport;

    #[test]
    fn origin_tile_spans_its_diamond() {
        let mut list = DrawList::default();
        list.begin_frame(Viewport::new(800.0, 600.0), Mat4::IDENTITY);
        list.draw_tile(Vec2i::new(0, 0), TextureId::from_raw(0), ColorRgba::white()).unwrap();

        let verts = list.tile_vertices();
        assert_eq!(verts.len(), 6);
        // Bottom edge on world y = 0, top edge on y = 1.
        assert_eq!(verts[0].position, [-1.0, 1.0, 0.0]);
        assert_eq!(verts[5].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[5].uv, [1.0, 1.0]);
    }

    #[test]
    fn each_tile_is_one_command() {
        let mut list = DrawList::default();
        list.begin_frame(Viewport::new(800.0, 600.0), Mat4::IDENTITY);
        for x in 0..3 {
            list.draw_tile(Vec2i::new(x, 1), TextureId::from_raw(0), ColorRgba::white()).unwrap();
        }
        assert_eq!(list.draw_calls(), 3);
        assert_eq!(list.cmds()[2].vertices, 12..18);
    }

    #[test]
    fn tile_overflow_is_reported() {
        let limits = RendererLimits { max_tile_vertices: 6, ..Default::default() };
        let mut list = DrawList::new(limits);
        list.begin_frame(Viewport::new(800.0, 600.0), Mat4::IDENTITY);
        list.draw_tile(Vec2i::new(0, 0), TextureId::from_raw(0), ColorRgba::white()).unwrap();
        let err = list
            .draw_tile(Vec2i::new(1, 0), TextureId::from_raw(0), ColorRgba::white())
            .unwrap_err();
        assert!(matches!(err, DrawError::CapacityExceeded { stream: "tile", .. }));
        assert_eq!(list.draw_calls(), 1);
    }
}
