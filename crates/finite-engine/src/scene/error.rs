use std::fmt;

use crate::coords::ScreenPx;

/// Programmer-error guards raised while recording draws.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    /// A write would run past the stream's fixed vertex capacity.
    CapacityExceeded {
        stream: &'static str,
        requested: usize,
        capacity: usize,
    },
    /// Character outside printable ASCII (32..=127).
    UnsupportedGlyph(char),
    /// Text drawn with an atlas that has no GPU texture yet.
    AtlasNotUploaded,
    /// Text layout ended with a negative pen coordinate.
    PenOutOfBounds(ScreenPx),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::CapacityExceeded { stream, requested, capacity } => write!(
                f,
                "{stream} vertex stream overflow: {requested} vertices requested, capacity {capacity}"
            ),
            DrawError::UnsupportedGlyph(ch) => {
                write!(f, "glyph {ch:?} (U+{:04X}) is not in the font atlas", *ch as u32)
            }
            DrawError::AtlasNotUploaded => f.write_str("font atlas has no GPU texture attached"),
            DrawError::PenOutOfBounds(pen) => {
                write!(f, "text pen left the screen at ({}, {})", pen.0.x, pen.0.y)
            }
        }
    }
}

impl std::error::Error for DrawError {}
