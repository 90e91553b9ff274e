//! Text-to-glyph shaping capabilities.
//!
//! A [`Shaper`] turns a text run into an ordered glyph sequence with
//! per-glyph offsets and advances in font units. [`AdvanceShaper`] is the
//! always-available fallback that maps codepoints one to one and applies
//! pairwise `kern` table adjustments. With the `shaping` feature,
//! [`RustybuzzShaper`] runs the full OpenType shaping pipeline.

use std::fmt;

use crate::font::Font;

/// One glyph produced by shaping, in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapedGlyph {
    /// Glyph index in the font.
    pub glyph_id: u16,
    /// Horizontal displacement from the pen position.
    pub x_offset: i32,
    /// Pen advance after this glyph.
    pub x_advance: i32,
}

impl ShapedGlyph {
    /// Create a shaped glyph.
    #[inline]
    pub const fn new(glyph_id: u16, x_offset: i32, x_advance: i32) -> Self {
        Self {
            glyph_id,
            x_offset,
            x_advance,
        }
    }
}

/// A capability that positions the glyphs of a text run.
///
/// Implementations must be deterministic: the same font, text and kerning
/// flag always yield the same sequence.
pub trait Shaper: Send + Sync + fmt::Debug {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Shape `text` left to right.
    ///
    /// When `kerning` is false, pairwise kerning must not contribute to the
    /// advances.
    fn shape(&self, font: &Font, text: &str, kerning: bool) -> Vec<ShapedGlyph>;
}

/// One glyph per codepoint, advanced by `hmtx` widths.
///
/// With kerning enabled, the `kern` adjustment between a pair is folded
/// into the advance of the left glyph, so the pen position of every glyph
/// is the running sum of the advances before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvanceShaper;

impl Shaper for AdvanceShaper {
    fn name(&self) -> &'static str {
        "advance"
    }

    fn shape(&self, font: &Font, text: &str, kerning: bool) -> Vec<ShapedGlyph> {
        let mut glyphs: Vec<ShapedGlyph> = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let glyph_id = font.glyph_index(ch);
            if kerning
                && let Some(prev) = glyphs.last_mut()
            {
                prev.x_advance += i32::from(font.kern(prev.glyph_id, glyph_id));
            }
            glyphs.push(ShapedGlyph::new(
                glyph_id,
                0,
                i32::from(font.advance_width(glyph_id)),
            ));
        }
        glyphs
    }
}

/// Full OpenType shaping through `rustybuzz`.
///
/// Disabling kerning turns off the `kern` feature for the whole run.
#[cfg(feature = "shaping")]
#[derive(Debug, Clone, Copy, Default)]
pub struct RustybuzzShaper;

#[cfg(feature = "shaping")]
impl Shaper for RustybuzzShaper {
    fn name(&self) -> &'static str {
        "rustybuzz"
    }

    fn shape(&self, font: &Font, text: &str, kerning: bool) -> Vec<ShapedGlyph> {
        let Some(face) = rustybuzz::Face::from_slice(font.data(), 0) else {
            tracing::warn!("rustybuzz rejected the font, using advance shaping");
            return AdvanceShaper.shape(font, text, kerning);
        };

        let features: Vec<rustybuzz::Feature> = if kerning {
            Vec::new()
        } else {
            vec![rustybuzz::Feature::new(
                rustybuzz::ttf_parser::Tag::from_bytes(b"kern"),
                0,
                ..,
            )]
        };

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.set_direction(rustybuzz::Direction::LeftToRight);

        let glyph_buffer = rustybuzz::shape(&face, &features, buffer);
        glyph_buffer
            .glyph_infos()
            .iter()
            .zip(glyph_buffer.glyph_positions())
            .map(|(info, pos)| ShapedGlyph::new(info.glyph_id as u16, pos.x_offset, pos.x_advance))
            .collect()
    }
}
