use crate::coords::ScreenPx;
use crate::scene::vertex::{ndc4, quad};
use crate::scene::{DrawError, DrawList, PipelineKind, UiVertex};
use crate::text::{layout_text, FontAtlas};

impl DrawList {
    /// Draws `text` with the pen starting at `pen` on the baseline and
    /// returns the final pen.
    ///
    /// All glyphs of one call go out as a single command, consecutive in the
    /// stream, so they still draw in string order. Nothing is written when the
    /// call fails.
    pub fn draw_text(&mut self, atlas: &FontAtlas, text: &str, pen: ScreenPx) -> Result<ScreenPx, DrawError> {
        let texture = atlas.texture()?;
        let layout = layout_text(atlas, text, pen)?;

        if layout.pen.0.x < 0.0 || layout.pen.0.y < 0.0 {
            return Err(DrawError::PenOutOfBounds(layout.pen));
        }
        self.text.check_room(layout.quads.len() * 6)?;

        let vp = self.viewport();
        let start = self.text.len();
        for glyph in &layout.quads {
            let c = glyph.rect.ndc_corners(vp);
            let [u0, v0, u1, v1] = glyph.uv;
            let v = |p, uv| UiVertex { position: ndc4(p), uv };
            let verts = quad(
                v(c.top_left, [u0, v0]),
                v(c.top_right, [u1, v0]),
                v(c.bot_left, [u0, v1]),
                v(c.bot_right, [u1, v1]),
            );
            self.text.push(&verts)?;
        }
        let end = self.text.len();
        self.record(PipelineKind::Text, Some(texture), start..end);

        Ok(layout.pen)
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;
    use crate::coords::Viewport;
    use crate::render::{RendererLimits, TextureId};
    use crate::text::fake::{FakeGlyphs, ADVANCE};

    fn uploaded_atlas() -> FontAtlas {
        let mut atlas = FontAtlas::build(&FakeGlyphs, 16.0).unwrap();
        atlas.attach_texture(TextureId::from_raw(1));
        atlas
    }

    fn list_with(limits: RendererLimits) -> DrawList {
        let mut list = DrawList::new(limits);
        list.begin_frame(Viewport::new(800.0, 600.0), Mat4::IDENTITY);
        list
    }

    #[test]
    fn three_glyphs_make_three_quads() {
        let atlas = uploaded_atlas();
        let mut list = list_with(RendererLimits::default());
        let pen = list.draw_text(&atlas, "AB\nC", ScreenPx::new(10.0, 20.0)).unwrap();
        assert_eq!(pen, ScreenPx::new(10.0 + ADVANCE, 36.0));
        assert_eq!(list.text_vertices().len(), 18);
        assert_eq!(list.draw_calls(), 1);
        assert_eq!(list.cmds()[0].texture, Some(TextureId::from_raw(1)));
    }

    #[test]
    fn requires_uploaded_atlas() {
        let atlas = FontAtlas::build(&FakeGlyphs, 16.0).unwrap();
        let mut list = list_with(RendererLimits::default());
        let err = list.draw_text(&atlas, "A", ScreenPx::new(0.0, 20.0)).unwrap_err();
        assert_eq!(err, DrawError::AtlasNotUploaded);
    }

    #[test]
    fn negative_pen_is_rejected() {
        let atlas = uploaded_atlas();
        let mut list = list_with(RendererLimits::default());
        let err = list.draw_text(&atlas, "A", ScreenPx::new(-50.0, 20.0)).unwrap_err();
        assert!(matches!(err, DrawError::PenOutOfBounds(_)));
        assert!(list.text_vertices().is_empty());
    }

    #[test]
    fn overflow_writes_nothing() {
        let atlas = uploaded_atlas();
        let mut list = list_with(RendererLimits { max_text_vertices: 12, ..Default::default() });
        let err = list.draw_text(&atlas, "ABC", ScreenPx::new(0.0, 20.0)).unwrap_err();
        assert!(matches!(err, DrawError::CapacityExceeded { stream: "text", .. }));
        assert!(list.text_vertices().is_empty());
        assert_eq!(list.draw_calls(), 0);
    }
}
