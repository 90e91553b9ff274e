//! Text to closed 2D contours.
//!
//! textloft turns a string set in a TrueType font into closed polygon
//! contours, scaled and anchored the way a solid modeler's `text()`
//! primitive places them:
//!
//! - `size` is the height of the font's ascender in model units
//! - the pen starts at the origin and glyphs advance along +x
//! - `halign` is `left`, `center` or `right`; right alignment puts the pen
//!   end (not the ink) at x = 0
//! - `valign` is `baseline`, `top`, `center` or `bottom`, measured on the ink
//!
//! Quadratic curves are flattened into a fixed number of line segments per
//! curve. The output is an [`OutlineSet`] of explicitly closed contours that
//! may be nested; fill-rule resolution is left to the consumer, for example
//! through [`OutlineSet::to_path`].
//!
//! # Example
//!
//! ```no_run
//! use textloft::{layout_text, Font, HorizontalAlign, LayoutOptions, VerticalAlign};
//!
//! # fn example() -> textloft::LayoutResult<()> {
//! let bytes = std::fs::read("DejaVuSans.ttf").expect("font file");
//! let font = Font::parse(bytes)?;
//!
//! let options = LayoutOptions::default()
//!     .with_size(10.0)
//!     .with_halign(HorizontalAlign::Center)
//!     .with_valign(VerticalAlign::Center);
//! let layout = layout_text(&font, "textloft", &options)?;
//!
//! println!("{} contours, advance {}", layout.outlines().len(), layout.advance());
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `shaping` (default): fonts get a `rustybuzz` shaper; without it, glyphs
//!   map one per codepoint with `kern` table kerning
//! - `serde`: serialization of [`LayoutOptions`] and the geometry types

mod align;
mod error;
mod layout;
pub mod logging;
mod options;
mod text;

pub use align::alignment_offset;
pub use error::{LayoutError, LayoutResult};
pub use layout::{position_glyphs, shape_run, GlyphRun, PositionedGlyph};
pub use logging::targets;
pub use options::{
    Alignment, HorizontalAlign, LayoutOptions, ResolvedOptions, VerticalAlign,
    DEFAULT_CURVE_SEGMENTS,
};
pub use text::{layout_text, text_outlines, text_outlines_from_bytes, TextLayout};

pub use textloft_font::{AdvanceShaper, Font, FontError, ShapedGlyph, Shaper};
#[cfg(feature = "shaping")]
pub use textloft_font::RustybuzzShaper;
pub use textloft_geometry::{BoundingBox, Contour, OutlineSet, Point, Translation};
