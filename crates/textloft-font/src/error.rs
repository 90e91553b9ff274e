//! Error types for font loading and glyph extraction.

use thiserror::Error;

/// Errors that can occur when loading a font or reading glyph data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// The byte stream is not a valid outline font.
    #[error("font parse error: {0}")]
    Parse(String),

    /// A table needed to read glyph outlines is absent or truncated.
    #[error("missing or truncated '{0}' table")]
    MissingTable(&'static str),

    /// The glyph index is outside the font's glyph range.
    #[error("glyph {glyph} is out of range (font has {count} glyphs)")]
    GlyphOutOfRange { glyph: u16, count: u16 },

    /// The glyph record could not be decoded.
    #[error("malformed glyph {glyph}: {reason}")]
    Malformed { glyph: u16, reason: &'static str },

    /// Composite glyph references nest deeper than the supported limit.
    #[error("composite glyph {glyph} exceeds the component nesting limit")]
    CompositeDepth { glyph: u16 },
}

impl FontError {
    /// Create a malformed-glyph error.
    pub(crate) fn malformed(glyph: u16, reason: &'static str) -> Self {
        Self::Malformed { glyph, reason }
    }
}

/// Result type for font operations.
pub type FontResult<T> = Result<T, FontError>;
