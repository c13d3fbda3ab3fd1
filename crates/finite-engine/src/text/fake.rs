//! In-memory glyph source with fixed, easy-to-check metrics.

use super::{GlyphSource, RasterGlyph, VerticalMetrics};

pub(crate) struct FakeGlyphs;

pub(crate) const M_WIDTH: usize = 8;
pub(crate) const GLYPH_W: usize = 6;
pub(crate) const GLYPH_H: usize = 8;
pub(crate) const ADVANCE: f32 = 7.0;

impl GlyphSource for FakeGlyphs {
    fn vertical_metrics(&self, px: f32) -> Option<VerticalMetrics> {
        Some(VerticalMetrics {
            ascent: px * 0.75,
            descent: -px * 0.25,
            line_gap: 0.0,
        })
    }

    fn rasterize(&self, ch: char, _px: f32) -> RasterGlyph {
        let (width, height, ymin) = match ch {
            ' ' => (0, 0, 0),
            'M' => (M_WIDTH, 10, 0),
            'g' => (GLYPH_W, GLYPH_H, -2),
            _ => (GLYPH_W, GLYPH_H, 0),
        };
        RasterGlyph {
            width,
            height,
            xmin: 1,
            ymin,
            advance: if ch == 'M' { 9.0 } else { ADVANCE },
            coverage: vec![ch as u8; width * height],
        }
    }
}
