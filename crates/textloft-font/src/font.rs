//! The font handle.

use std::fmt;
use std::sync::{Arc, OnceLock};

use ttf_parser::GlyphId;

use crate::error::{FontError, FontResult};
use crate::glyf::{GlyphOutline, GlyphTable};
use crate::sfnt::typo_ascender;
use crate::shaping::{AdvanceShaper, Shaper};

/// Where the ascender used for scaling came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AscenderSource {
    /// `OS/2.sTypoAscender`.
    TypoAscender,
    /// `head.yMax`, the top of the font bounding box.
    HeadBoundingBox,
    /// Units per em, the last resort.
    UnitsPerEm,
}

/// A parsed TrueType font.
///
/// The handle owns its bytes and is cheap to clone. Metric queries re-read
/// the tables on demand; the ascender is resolved once and cached. The
/// cache is a [`OnceLock`], so concurrent first calls publish one value
/// atomically and every reader sees a fully written `f64`.
#[derive(Clone)]
pub struct Font {
    data: Arc<[u8]>,
    units_per_em: u16,
    num_glyphs: u16,
    head_y_max: i16,
    ascender: OnceLock<f64>,
    shaper: Option<Arc<dyn Shaper>>,
}

impl Font {
    /// Parse a font from its bytes.
    ///
    /// Only the first face of a collection is used. When the `shaping`
    /// feature is enabled and `rustybuzz` accepts the font, the handle
    /// carries a [`RustybuzzShaper`](crate::RustybuzzShaper).
    pub fn parse(bytes: impl Into<Arc<[u8]>>) -> FontResult<Self> {
        let data: Arc<[u8]> = bytes.into();
        let face =
            ttf_parser::Face::parse(&data, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        let units_per_em = face.units_per_em();
        let num_glyphs = face.number_of_glyphs();
        let head_y_max = face.global_bounding_box().y_max;

        let shaper = default_shaper(&data);
        tracing::debug!(
            units_per_em,
            num_glyphs,
            shaping = shaper.as_ref().map(|s| s.name()),
            "parsed font"
        );

        Ok(Self {
            data,
            units_per_em,
            num_glyphs,
            head_y_max,
            ascender: OnceLock::new(),
            shaper,
        })
    }

    /// Replace the shaping capability.
    pub fn with_shaper(mut self, shaper: Arc<dyn Shaper>) -> Self {
        self.shaper = Some(shaper);
        self
    }

    /// Remove the shaping capability so layout uses [`AdvanceShaper`].
    pub fn without_shaping(mut self) -> Self {
        self.shaper = None;
        self
    }

    /// The raw font bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Font design units per em.
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Number of glyphs declared by `maxp`.
    pub fn num_glyphs(&self) -> u16 {
        self.num_glyphs
    }

    /// Reference ascent height in font units. Always positive.
    ///
    /// Resolved from the OS/2 typographic ascender when positive, else the
    /// `head` bounding box top when positive, else units per em.
    pub fn ascender(&self) -> f64 {
        *self.ascender.get_or_init(|| {
            let (value, source) = self.resolve_ascender();
            tracing::debug!(ascender = value, ?source, "resolved ascender");
            value
        })
    }

    /// Resolve the ascender without consulting the cache.
    pub fn resolve_ascender(&self) -> (f64, AscenderSource) {
        if let Some(asc) = typo_ascender(&self.data) {
            (f64::from(asc), AscenderSource::TypoAscender)
        } else if self.head_y_max > 0 {
            (f64::from(self.head_y_max), AscenderSource::HeadBoundingBox)
        } else {
            // a zero units-per-em is rejected by the parser
            (f64::from(self.units_per_em.max(1)), AscenderSource::UnitsPerEm)
        }
    }

    /// Glyph index for a character, or 0 (`.notdef`) when unmapped.
    pub fn glyph_index(&self, ch: char) -> u16 {
        self.face()
            .and_then(|face| face.glyph_index(ch))
            .map_or(0, |id| id.0)
    }

    /// Raw point stream of a glyph with its origin at the left phantom point.
    ///
    /// Blank glyphs return an empty outline. Fonts without `glyf` outlines
    /// (CFF) return [`FontError::MissingTable`].
    pub fn glyph_outline(&self, glyph: u16) -> FontResult<GlyphOutline> {
        let mut outline = GlyphTable::new(&self.data, self.num_glyphs)?.outline(glyph)?;
        if !outline.is_empty() {
            let lsb = self
                .face()
                .and_then(|face| face.glyph_hor_side_bearing(GlyphId(glyph)));
            if let Some(lsb) = lsb {
                outline.shift_x(f64::from(lsb) - f64::from(outline.x_min()));
            }
        }
        Ok(outline)
    }

    /// Horizontal advance of a glyph in font units, 0 if unknown.
    pub fn advance_width(&self, glyph: u16) -> u16 {
        self.face()
            .and_then(|face| face.glyph_hor_advance(GlyphId(glyph)))
            .unwrap_or(0)
    }

    /// Pair kerning from the `kern` table in font units, 0 if absent.
    ///
    /// Only horizontal, non-variable subtables are consulted.
    pub fn kern(&self, left: u16, right: u16) -> i16 {
        self.face()
            .and_then(|face| {
                face.tables().kern.and_then(|kern| {
                    kern.subtables
                        .into_iter()
                        .filter(|st| st.horizontal && !st.variable)
                        .find_map(|st| st.glyphs_kerning(GlyphId(left), GlyphId(right)))
                })
            })
            .unwrap_or(0)
    }

    /// The installed shaping capability, if any.
    pub fn shaping_capability(&self) -> Option<&dyn Shaper> {
        self.shaper.as_deref()
    }

    /// The shaper layout should use: the installed one, else [`AdvanceShaper`].
    pub fn shaper(&self) -> &dyn Shaper {
        self.shaping_capability().unwrap_or(&AdvanceShaper)
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, 0).ok()
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("len", &self.data.len())
            .field("units_per_em", &self.units_per_em)
            .field("num_glyphs", &self.num_glyphs)
            .field("ascender", &self.ascender.get())
            .field("shaper", &self.shaper.as_ref().map(|s| s.name()))
            .finish()
    }
}

#[cfg(feature = "shaping")]
fn default_shaper(data: &[u8]) -> Option<Arc<dyn Shaper>> {
    rustybuzz::Face::from_slice(data, 0)
        .map(|_| Arc::new(crate::shaping::RustybuzzShaper) as Arc<dyn Shaper>)
}

#[cfg(not(feature = "shaping"))]
fn default_shaper(_data: &[u8]) -> Option<Arc<dyn Shaper>> {
    None
}
