//! Text to outline conversion.

use std::sync::Arc;

use textloft_font::{decode_glyph, DecodeParams, Font};
use textloft_geometry::{BoundingBox, OutlineSet, Point, Translation};

use crate::align::alignment_offset;
use crate::error::LayoutResult;
use crate::layout::{shape_run, GlyphRun};
use crate::logging::{targets, PerfSpan};
use crate::options::{Alignment, LayoutOptions};

/// The result of laying out a text run.
///
/// Everything is in model units and already translated onto the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    outlines: OutlineSet,
    bounds: BoundingBox,
    advance: f64,
    scale: f64,
    translation: Translation,
    alignment: Alignment,
}

impl TextLayout {
    /// The closed contours of the run.
    pub fn outlines(&self) -> &OutlineSet {
        &self.outlines
    }

    /// Take the contours.
    pub fn into_outlines(self) -> OutlineSet {
        self.outlines
    }

    /// Ink bounding box of all contours. Empty when there are none.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Total pen advance.
    pub fn advance(&self) -> f64 {
        self.advance
    }

    /// Font units to model units.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The alignment shift that was applied.
    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// The anchor the run was aligned to.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Where the pen started.
    pub fn pen_origin(&self) -> Point {
        self.translation.transform_point(Point::ZERO)
    }

    /// Where the pen stopped after the last glyph.
    pub fn pen_end(&self) -> Point {
        self.translation.transform_point(Point::new(self.advance, 0.0))
    }

    /// The shift aligning this (already aligned) run would apply again.
    pub fn realignment(&self) -> Translation {
        alignment_offset(self.alignment, &self.bounds, self.pen_end().x)
    }
}

/// Convert `text` into closed contours.
///
/// Contours come out in glyph order, then in each glyph's contour order.
/// Every contour is closed with an exact copy of its first point and has at
/// least four points. An empty or all-blank string yields an empty set.
///
/// # Example
///
/// ```no_run
/// use textloft::{text_outlines, Font, LayoutOptions};
///
/// # fn example(bytes: Vec<u8>) -> textloft::LayoutResult<()> {
/// let font = Font::parse(bytes)?;
/// let outlines = text_outlines(&font, "Hello", &LayoutOptions::default().with_size(12.0))?;
/// for contour in &outlines {
///     println!("{} points", contour.len());
/// }
/// # Ok(())
/// # }
/// ```
pub fn text_outlines(font: &Font, text: &str, options: &LayoutOptions) -> LayoutResult<OutlineSet> {
    Ok(layout_text(font, text, options)?.into_outlines())
}

/// Parse `bytes` as a font and convert `text` into closed contours.
pub fn text_outlines_from_bytes(
    bytes: impl Into<Arc<[u8]>>,
    text: &str,
    options: &LayoutOptions,
) -> LayoutResult<OutlineSet> {
    let font = Font::parse(bytes)?;
    text_outlines(&font, text, options)
}

/// Lay out `text` and keep the placement metadata alongside the contours.
pub fn layout_text(font: &Font, text: &str, options: &LayoutOptions) -> LayoutResult<TextLayout> {
    let options = options.resolve()?;
    let _span = PerfSpan::new("layout_text");

    let scale = options.size() / font.ascender();
    let run = shape_run(font, text, &options);
    let (mut outlines, ink) = decode_run(font, &run, scale, options.curve_segments());
    let advance = run.advance() * scale;

    let translation = alignment_offset(options.alignment(), &ink, advance);
    outlines.translate(&translation);
    tracing::debug!(
        target: targets::ALIGN,
        alignment = %options.alignment(),
        dx = translation.dx,
        dy = translation.dy,
        "aligned text run"
    );

    if outlines.is_empty() {
        tracing::debug!(target: targets::LAYOUT, chars = text.chars().count(), "text produced no contours");
    }

    Ok(TextLayout {
        outlines,
        bounds: translation.transform_bounds(ink),
        advance,
        scale,
        translation,
        alignment: options.alignment(),
    })
}

/// Decode every glyph of the run, accumulating contours and ink bounds.
///
/// A glyph whose outline cannot be read contributes no contours but keeps
/// its advance, which the run already accounts for.
fn decode_run(font: &Font, run: &GlyphRun, scale: f64, segments: usize) -> (OutlineSet, BoundingBox) {
    run.glyphs()
        .iter()
        .fold((OutlineSet::new(), BoundingBox::EMPTY), |(mut set, ink), glyph| {
            let outline = match font.glyph_outline(glyph.glyph_id) {
                Ok(outline) => outline,
                Err(err) => {
                    tracing::debug!(
                        target: targets::GLYPHS,
                        glyph = glyph.glyph_id,
                        error = %err,
                        "skipping glyph without a readable outline"
                    );
                    return (set, ink);
                }
            };
            let params = DecodeParams::new(glyph.pen_x, scale, segments);
            let contours = decode_glyph(&outline, &params);
            let ink = contours.iter().fold(ink, |ink, c| ink.union(c.bounds()));
            set.extend(contours);
            (set, ink)
        })
}
