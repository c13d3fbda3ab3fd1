/// Vertical font metrics at a pixel size. `descent` is negative below baseline.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VerticalMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

/// One rasterized glyph.
///
/// `xmin`/`ymin` place the bitmap's bottom-left corner relative to the pen
/// on the baseline, +Y up. `coverage` is `width * height` bytes, row-major,
/// top row first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RasterGlyph {
    pub width: usize,
    pub height: usize,
    pub xmin: i32,
    pub ymin: i32,
    pub advance: f32,
    pub coverage: Vec<u8>,
}

/// Anything that can rasterize characters at a pixel size.
pub trait GlyphSource {
    fn vertical_metrics(&self, px: f32) -> Option<VerticalMetrics>;
    fn rasterize(&self, ch: char, px: f32) -> RasterGlyph;
}

impl GlyphSource for fontdue::Font {
    fn vertical_metrics(&self, px: f32) -> Option<VerticalMetrics> {
        self.horizontal_line_metrics(px).map(|m| VerticalMetrics {
            ascent: m.ascent,
            descent: m.descent,
            line_gap: m.line_gap,
        })
    }

    fn rasterize(&self, ch: char, px: f32) -> RasterGlyph {
        let (m, coverage) = fontdue::Font::rasterize(self, ch, px);
        RasterGlyph {
            width: m.width,
            height: m.height,
            xmin: m.xmin,
            ymin: m.ymin,
            advance: m.advance_width,
            coverage,
        }
    }
}
