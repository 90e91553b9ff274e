//! Error types for text layout.

use textloft_font::FontError;
use thiserror::Error;

/// Errors that can occur when laying out text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The requested size is not a positive finite number.
    #[error("invalid text size {0}: must be positive and finite")]
    InvalidSize(f64),

    /// The spacing multiplier is negative or not finite.
    #[error("invalid spacing {0}: must be finite and not negative")]
    InvalidSpacing(f64),

    /// An alignment name did not match any anchor.
    #[error("unknown {axis} alignment '{value}'")]
    UnknownAlignment { axis: &'static str, value: String },

    /// The font could not be loaded.
    #[error("font error: {0}")]
    Font(#[from] FontError),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
