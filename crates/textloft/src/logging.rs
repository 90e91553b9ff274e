//! Tracing targets and spans used by textloft.
//!
//! textloft logs through the `tracing` crate and never prints. Install a
//! subscriber to see the events:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("textloft=debug,textloft_font=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Shaping and pen positioning.
    pub const LAYOUT: &str = "textloft::layout";
    /// Glyph decoding during layout.
    pub const GLYPHS: &str = "textloft::glyphs";
    /// Anchor alignment.
    pub const ALIGN: &str = "textloft::align";
}

/// A guard that keeps a timing span entered until dropped.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a new span for `operation`.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::debug_span!(target: "textloft::perf", "perf", operation);
        Self {
            span: span.entered(),
        }
    }
}
