use crate::coords::{PxRect, ScreenPx, Vec2};
use crate::scene::DrawError;

use super::FontAtlas;

/// One positioned glyph bitmap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphQuad {
    pub ch: char,
    /// Pen position (baseline) when the glyph was placed.
    pub pen: ScreenPx,
    pub rect: PxRect,
    pub uv: [f32; 4],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    pub quads: Vec<GlyphQuad>,
    /// Pen position after the last character.
    pub pen: ScreenPx,
}

/// Lays out `text` starting with the pen at `pen_start` on the baseline.
///
/// `'\n'` returns the pen to `pen_start.x` and moves it down by the font size.
/// Glyphs with an empty bitmap (space) only advance the pen. Quad origins are
/// floored to whole pixels so glyphs sample the atlas texel-exact.
pub fn layout_text(atlas: &FontAtlas, text: &str, pen_start: ScreenPx) -> Result<TextLayout, DrawError> {
    let mut pen = pen_start.0;
    let mut quads = Vec::with_capacity(text.len());

    for ch in text.chars() {
        if ch == '\n' {
            pen.x = pen_start.0.x;
            pen.y += atlas.font_size_px;
            continue;
        }

        let glyph = atlas.glyph(ch)?;
        if glyph.width > 0 && glyph.height > 0 {
            let x0 = (pen.x + glyph.x_offset).floor();
            let y0 = (pen.y - glyph.y_offset).floor();
            quads.push(GlyphQuad {
                ch,
                pen: ScreenPx(pen),
                rect: PxRect {
                    origin: Vec2::new(x0, y0),
                    size: Vec2::new(glyph.width as f32, glyph.height as f32),
                },
                uv: glyph.uv,
            });
        }
        pen.x += glyph.advance;
    }

    Ok(TextLayout { quads, pen: ScreenPx(pen) })
}

/// Width in pixels of the longest line.
pub fn measure_text_width(atlas: &FontAtlas, text: &str) -> Result<f32, DrawError> {
    let mut widest = 0.0f32;
    for line in text.split('\n') {
        let mut width = 0.0;
        for ch in line.chars() {
            width += atlas.glyph(ch)?.advance;
        }
        widest = widest.max(width);
    }
    Ok(widest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::fake::{FakeGlyphs, ADVANCE, GLYPH_H};

    const PX: f32 = 16.0;

    fn atlas() -> FontAtlas {
        FontAtlas::build(&FakeGlyphs, PX).unwrap()
    }

    #[test]
    fn newline_moves_pen_to_next_line_start() {
        let a = atlas();
        let start = ScreenPx::new(10.0, 20.0);
        let layout = layout_text(&a, "AB\nC", start).unwrap();
        assert_eq!(layout.quads.len(), 3);
        let c = layout.quads[2];
        assert_eq!(c.ch, 'C');
        assert_eq!(c.pen, ScreenPx::new(10.0, 20.0 + PX));
        assert_eq!(layout.pen, ScreenPx::new(10.0 + ADVANCE, 20.0 + PX));
    }

    #[test]
    fn quad_hangs_from_baseline() {
        let a = atlas();
        let layout = layout_text(&a, "A", ScreenPx::new(10.0, 20.0)).unwrap();
        let q = layout.quads[0];
        assert_eq!(q.rect.origin, Vec2::new(11.0, 20.0 - GLYPH_H as f32));
        assert_eq!(q.rect.size.y, GLYPH_H as f32);
        assert_eq!(q.uv, a.glyph('A').unwrap().uv);
    }

    #[test]
    fn space_advances_without_a_quad() {
        let a = atlas();
        let layout = layout_text(&a, "A B", ScreenPx::new(0.0, 0.0)).unwrap();
        assert_eq!(layout.quads.len(), 2);
        assert_eq!(layout.quads[1].pen.0.x, ADVANCE + a.glyph(' ').unwrap().advance);
    }

    #[test]
    fn unsupported_char_fails_layout() {
        let a = atlas();
        let err = layout_text(&a, "ok\tno", ScreenPx::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, DrawError::UnsupportedGlyph('\t')));
    }

    // ── measuring ──

    #[test]
    fn width_is_longest_line() {
        let a = atlas();
        assert_eq!(measure_text_width(&a, "AB\nCDE\nF").unwrap(), 3.0 * ADVANCE);
    }

    #[test]
    fn newlines_do_not_count_toward_width() {
        let a = atlas();
        assert_eq!(measure_text_width(&a, "\n\nA\n").unwrap(), ADVANCE);
        assert_eq!(measure_text_width(&a, "").unwrap(), 0.0);
    }

    #[test]
    fn measured_width_matches_layout_advance() {
        let a = atlas();
        let text = "Camera x: 12";
        let layout = layout_text(&a, text, ScreenPx::new(5.0, 30.0)).unwrap();
        let width = measure_text_width(&a, text).unwrap();
        assert!((layout.pen.0.x - 5.0 - width).abs() < 1e-4);
    }
}
