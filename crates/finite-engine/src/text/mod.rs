//! Bitmap font atlas and text layout.
//!
//! The atlas holds the 96 printable ASCII glyphs (32..=127) packed left to
//! right in one R8 bitmap. Layout is pure arithmetic over the glyph table and
//! is shared by drawing and measuring.

mod atlas;
mod error;
mod layout;
mod source;

#[cfg(test)]
pub(crate) mod fake;

pub use atlas::{FontAtlas, GlyphInfo, FIRST_GLYPH, GLYPH_COUNT, LAST_GLYPH, SPACE_ADVANCE_FROM_M};
pub use error::FontError;
pub use layout::{layout_text, measure_text_width, GlyphQuad, TextLayout};
pub use source::{GlyphSource, RasterGlyph, VerticalMetrics};
