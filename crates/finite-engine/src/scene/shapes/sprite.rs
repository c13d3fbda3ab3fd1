use crate::coords::{ColorRgba, Ndc, PxRect, QuadCorners};
use crate::render::TextureId;
use crate::scene::vertex::{ndc4, quad};
use crate::scene::{DrawError, DrawList, PipelineKind, SpriteVertex};

impl DrawList {
    /// Appends one textured quad to the open sprite batch. Nothing is drawn
    /// until [`DrawList::flush_batch`].
    pub fn buffer_rectangle(
        &mut self,
        corners: QuadCorners<Ndc>,
        uv: [f32; 4],
        tint: ColorRgba,
    ) -> Result<(), DrawError> {
        let color = tint.to_array();
        let [u0, v0, u1, v1] = uv;
        let v = |p, uv| SpriteVertex { position: ndc4(p), color, uv };
        let verts = quad(
            v(corners.top_left, [u0, v0]),
            v(corners.top_right, [u1, v0]),
            v(corners.bot_left, [u0, v1]),
            v(corners.bot_right, [u1, v1]),
        );
        self.sprites.push(&verts)?;
        Ok(())
    }

    #[inline]
    pub fn buffer_rect_px(&mut self, rect: PxRect, uv: [f32; 4], tint: ColorRgba) -> Result<(), DrawError> {
        let corners = rect.ndc_corners(self.viewport());
        self.buffer_rectangle(corners, uv, tint)
    }

    /// Closes the open batch as one draw call with `texture` and returns the
    /// number of vertices it covers. An empty batch records nothing.
    pub fn flush_batch(&mut self, texture: TextureId) -> u32 {
        let start = self.batch_start;
        let end = self.sprites.len();
        self.batch_start = end;
        self.record(PipelineKind::Sprite, Some(texture), start..end);
        end - start
    }

    /// Vertices buffered since the last flush.
    #[inline]
    pub fn pending_batch(&self) -> u32 {
        self.sprites.len() - self.batch_start
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;
    use crate::coords::Viewport;
    use crate::render::RendererLimits;

    const FULL_UV: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    fn list_with(limits: RendererLimits) -> DrawList {
        let mut list = DrawList::new(limits);
        list.begin_frame(Viewport::new(800.0, 600.0), Mat4::IDENTITY);
        list
    }

    #[test]
    fn batch_flushes_as_single_call() {
        let mut list = list_with(RendererLimits::default());
        for i in 0..4 {
            let r = PxRect::new(i as f32 * 10.0, 0.0, 8.0, 8.0);
            list.buffer_rect_px(r, FULL_UV, ColorRgba::white()).unwrap();
        }
        assert_eq!(list.draw_calls(), 0);
        assert_eq!(list.pending_batch(), 24);

        assert_eq!(list.flush_batch(TextureId::from_raw(2)), 24);
        assert_eq!(list.draw_calls(), 1);
        assert_eq!(list.pending_batch(), 0);
        assert_eq!(list.cmds()[0].vertices, 0..24);
    }

    #[test]
    fn second_batch_starts_after_first() {
        let mut list = list_with(RendererLimits::default());
        let r = PxRect::new(0.0, 0.0, 8.0, 8.0);
        list.buffer_rect_px(r, FULL_UV, ColorRgba::white()).unwrap();
        list.flush_batch(TextureId::from_raw(2));
        list.buffer_rect_px(r, FULL_UV, ColorRgba::white()).unwrap();
        list.buffer_rect_px(r, FULL_UV, ColorRgba::white()).unwrap();
        list.flush_batch(TextureId::from_raw(3));

        assert_eq!(list.cmds()[1].vertices, 6..18);
        assert_eq!(list.cmds()[1].texture, Some(TextureId::from_raw(3)));
    }

    #[test]
    fn empty_flush_records_nothing() {
        let mut list = list_with(RendererLimits::default());
        assert_eq!(list.flush_batch(TextureId::from_raw(0)), 0);
        assert_eq!(list.draw_calls(), 0);
    }

    #[test]
    fn batch_beyond_capacity_is_rejected() {
        let mut list = list_with(RendererLimits { max_sprite_vertices: 12, ..Default::default() });
        let r = PxRect::new(0.0, 0.0, 8.0, 8.0);
        list.buffer_rect_px(r, FULL_UV, ColorRgba::white()).unwrap();
        list.buffer_rect_px(r, FULL_UV, ColorRgba::white()).unwrap();
        let err = list.buffer_rect_px(r, FULL_UV, ColorRgba::white()).unwrap_err();
        assert!(matches!(err, DrawError::CapacityExceeded { stream: "sprite", requested: 18, capacity: 12 }));
        assert_eq!(list.flush_batch(TextureId::from_raw(0)), 12);
    }
}
