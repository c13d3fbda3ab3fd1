use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure while building a font atlas.
#[derive(Debug)]
pub enum FontError {
    Io { path: PathBuf, source: io::Error },
    Parse(String),
    Rasterize { ch: char, reason: String },
    /// Every glyph rasterized to an empty bitmap.
    EmptyAtlas,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io { path, source } => {
                write!(f, "failed to read font {}: {source}", path.display())
            }
            FontError::Parse(msg) => write!(f, "failed to parse font: {msg}"),
            FontError::Rasterize { ch, reason } => {
                write!(f, "failed to rasterize {ch:?}: {reason}")
            }
            FontError::EmptyAtlas => f.write_str("font produced an empty glyph atlas"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
