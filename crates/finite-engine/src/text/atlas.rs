use std::path::Path;

use crate::render::TextureId;
use crate::scene::DrawError;

use super::{FontError, GlyphSource, RasterGlyph};

pub const FIRST_GLYPH: char = ' ';
pub const LAST_GLYPH: char = '\u{7f}';
pub const GLYPH_COUNT: usize = 96;

/// The space glyph has no bitmap; its advance is this fraction of the width
/// of the rasterized 'M' bitmap.
pub const SPACE_ADVANCE_FROM_M: f32 = 0.5;

/// Per-glyph metrics and atlas placement, in pixels (+Y down for offsets).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlyphInfo {
    pub width: u32,
    pub height: u32,
    /// Bitmap left edge relative to the pen.
    pub x_offset: f32,
    /// Bitmap top edge above the baseline.
    pub y_offset: f32,
    pub advance: f32,
    /// `[u0, v0, u1, v1]` into the atlas.
    pub uv: [f32; 4],
}

/// CPU-side glyph atlas for one pixel size.
///
/// Build once per size; rebuild when the size changes. The GPU copy is
/// uploaded separately and attached with [`FontAtlas::attach_texture`].
#[derive(Debug, Clone)]
pub struct FontAtlas {
    pub font_size_px: f32,
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub width: u32,
    pub height: u32,
    /// R8 coverage, `width * height`, row-major.
    pub pixels: Vec<u8>,
    glyphs: Vec<GlyphInfo>,
    texture: Option<TextureId>,
}

impl FontAtlas {
    /// Reads and parses a TTF/OTF file, then builds the atlas.
    pub fn load(path: &Path, font_size_px: f32) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError::Parse(e.to_string()))?;
        let atlas = Self::build(&font, font_size_px)?;
        log::info!(
            "font atlas built from {}: {}x{} at {:.1}px",
            path.display(),
            atlas.width,
            atlas.height,
            font_size_px
        );
        Ok(atlas)
    }

    /// Two passes: rasterize and measure, then blit into one strip.
    pub fn build(source: &impl GlyphSource, font_size_px: f32) -> Result<Self, FontError> {
        let metrics = source.vertical_metrics(font_size_px).unwrap_or_default();

        let mut rasters: Vec<RasterGlyph> = Vec::with_capacity(GLYPH_COUNT);
        let mut atlas_width = 0usize;
        let mut atlas_height = 0usize;
        for ch in FIRST_GLYPH..=LAST_GLYPH {
            let raster = source.rasterize(ch, font_size_px);
            if raster.coverage.len() != raster.width * raster.height {
                return Err(FontError::Rasterize {
                    ch,
                    reason: format!(
                        "{} coverage bytes for a {}x{} bitmap",
                        raster.coverage.len(),
                        raster.width,
                        raster.height
                    ),
                });
            }
            if !raster.advance.is_finite() {
                return Err(FontError::Rasterize { ch, reason: "non-finite advance".into() });
            }
            atlas_width += raster.width;
            atlas_height = atlas_height.max(raster.height);
            rasters.push(raster);
        }

        if atlas_width == 0 || atlas_height == 0 {
            return Err(FontError::EmptyAtlas);
        }

        let m_width = rasters[glyph_index('M')].width as f32;

        let mut pixels = vec![0u8; atlas_width * atlas_height];
        let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
        let mut x = 0usize;
        for (i, raster) in rasters.iter().enumerate() {
            for row in 0..raster.height {
                let src = &raster.coverage[row * raster.width..(row + 1) * raster.width];
                let dst = row * atlas_width + x;
                pixels[dst..dst + raster.width].copy_from_slice(src);
            }

            let advance = if i == 0 {
                m_width * SPACE_ADVANCE_FROM_M
            } else {
                raster.advance.max(0.0)
            };

            glyphs.push(GlyphInfo {
                width: raster.width as u32,
                height: raster.height as u32,
                x_offset: raster.xmin as f32,
                y_offset: (raster.ymin + raster.height as i32) as f32,
                advance,
                uv: [
                    x as f32 / atlas_width as f32,
                    0.0,
                    (x + raster.width) as f32 / atlas_width as f32,
                    raster.height as f32 / atlas_height as f32,
                ],
            });
            x += raster.width;
        }

        log::debug!("packed {GLYPH_COUNT} glyphs into {atlas_width}x{atlas_height}");

        Ok(Self {
            font_size_px,
            ascent: metrics.ascent,
            descent: metrics.descent,
            line_gap: metrics.line_gap,
            width: atlas_width as u32,
            height: atlas_height as u32,
            pixels,
            glyphs,
            texture: None,
        })
    }

    pub fn glyph(&self, ch: char) -> Result<&GlyphInfo, DrawError> {
        if !(FIRST_GLYPH..=LAST_GLYPH).contains(&ch) {
            return Err(DrawError::UnsupportedGlyph(ch));
        }
        Ok(&self.glyphs[glyph_index(ch)])
    }

    #[inline]
    pub fn glyphs(&self) -> &[GlyphInfo] {
        &self.glyphs
    }

    pub fn attach_texture(&mut self, texture: TextureId) {
        self.texture = Some(texture);
    }

    pub fn texture(&self) -> Result<TextureId, DrawError> {
        self.texture.ok_or(DrawError::AtlasNotUploaded)
    }
}

#[inline]
fn glyph_index(ch: char) -> usize {
    debug_assert!((FIRST_GLYPH..=LAST_GLYPH).contains(&ch));
    ch as usize - FIRST_GLYPH as usize
}
