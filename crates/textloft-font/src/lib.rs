//! TrueType font access for textloft.
//!
//! This crate reads everything the layout engine needs from a font:
//!
//! - [`Font`], the parsed handle with metric queries and a cached ascender
//! - [`typo_ascender`], a direct read of `OS/2.sTypoAscender`
//! - [`GlyphOutline`], the raw on/off-curve point stream of a glyph,
//!   including resolved composite glyphs
//! - [`decode_glyph`] and [`decode_contour`], reconstruction of closed,
//!   flattened contours from those points
//! - [`Shaper`], the text-to-glyph capability, with [`AdvanceShaper`] as the
//!   fallback and `RustybuzzShaper` behind the `shaping` feature
//!
//! Metrics, kerning and cmap lookups go through `ttf-parser`. Glyph points
//! come from `read-fonts`, since `ttf-parser` only exposes outlines as
//! already-built curve commands and the decoder needs the raw on/off-curve
//! flags.
//!
//! # Example
//!
//! ```no_run
//! use textloft_font::{decode_glyph, DecodeParams, Font};
//!
//! # fn example(bytes: Vec<u8>) -> textloft_font::FontResult<()> {
//! let font = Font::parse(bytes)?;
//! let scale = 10.0 / font.ascender();
//! let glyph = font.glyph_index('A');
//! let contours = decode_glyph(&font.glyph_outline(glyph)?, &DecodeParams::new(0.0, scale, 8));
//! println!("{} contours", contours.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod font;
mod glyf;
mod outline;
mod sfnt;
mod shaping;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use error::{FontError, FontResult};
pub use font::{AscenderSource, Font};
pub use glyf::{GlyphOutline, GlyphPoint};
pub use outline::{decode_contour, decode_glyph, DecodeParams};
pub use sfnt::typo_ascender;
#[cfg(feature = "shaping")]
pub use shaping::RustybuzzShaper;
pub use shaping::{AdvanceShaper, ShapedGlyph, Shaper};
