//! Pen positioning of a shaped glyph run.
//!
//! Whatever shaper the font carries, its output is folded the same way:
//! each glyph sits at the running pen position plus its own offset, and the
//! pen then moves by the glyph's advance times the spacing multiplier. The
//! fallback shaper folds kerning into advances, so both paths produce the
//! same pen positions for the same advances.

use textloft_font::{Font, ShapedGlyph};

use crate::logging::targets;
use crate::options::ResolvedOptions;

/// A glyph placed on the baseline, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// Glyph index in the font.
    pub glyph_id: u16,
    /// Horizontal origin of the glyph.
    pub pen_x: f64,
}

/// Positioned glyphs of one text run and the final pen position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphRun {
    glyphs: Vec<PositionedGlyph>,
    advance: f64,
}

impl GlyphRun {
    /// Glyphs in visual order.
    pub fn glyphs(&self) -> &[PositionedGlyph] {
        &self.glyphs
    }

    /// Total pen advance in font units.
    pub fn advance(&self) -> f64 {
        self.advance
    }

    /// Check if the run holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Fold shaper output into pen positions.
///
/// Offsets are added as is; advances are multiplied by `spacing`.
pub fn position_glyphs(shaped: &[ShapedGlyph], spacing: f64) -> GlyphRun {
    let (glyphs, advance) = shaped.iter().fold(
        (Vec::with_capacity(shaped.len()), 0.0_f64),
        |(mut glyphs, pen), g| {
            glyphs.push(PositionedGlyph {
                glyph_id: g.glyph_id,
                pen_x: pen + f64::from(g.x_offset),
            });
            (glyphs, pen + f64::from(g.x_advance) * spacing)
        },
    );
    GlyphRun { glyphs, advance }
}

/// Shape `text` with the font's shaper and position the result.
pub fn shape_run(font: &Font, text: &str, options: &ResolvedOptions) -> GlyphRun {
    let shaper = font.shaper();
    let shaped = shaper.shape(font, text, options.kerning());
    tracing::debug!(
        target: targets::LAYOUT,
        shaper = shaper.name(),
        glyphs = shaped.len(),
        kerning = options.kerning(),
        "shaped text run"
    );
    position_glyphs(&shaped, options.spacing())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutOptions;
    use textloft_font::test_util::FontBuilder;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    const BOX: &[(i16, i16, bool)] = &[(0, 0, true), (300, 0, true), (300, 300, true)];

    fn font() -> Font {
        let bytes = FontBuilder::new(1000)
            .typo_ascender(Some(800))
            .glyph('A', 600, &[BOX])
            .glyph('V', 500, &[BOX])
            .blank(' ', 250)
            .kern('A', 'V', -80)
            .build();
        Font::parse(bytes).unwrap().without_shaping()
    }

    #[test]
    fn test_position_fold() {
        let shaped = [
            ShapedGlyph::new(1, 0, 600),
            ShapedGlyph::new(2, 15, 500),
            ShapedGlyph::new(1, 0, 600),
        ];
        let run = position_glyphs(&shaped, 2.0);
        let pens: Vec<f64> = run.glyphs().iter().map(|g| g.pen_x).collect();
        assert_eq!(pens, vec![0.0, 1215.0, 2200.0]);
        assert_eq!(run.advance(), 3400.0);
    }

    #[test]
    fn test_empty_run() {
        let run = position_glyphs(&[], 1.0);
        assert!(run.is_empty());
        assert_eq!(run.advance(), 0.0);
    }

    #[test]
    fn test_kerning_shifts_second_glyph() {
        let font = font();
        for spacing in [1.0, 1.5] {
            let base = LayoutOptions::default().with_spacing(spacing);
            let off = base.with_kerning(false).resolve().unwrap();
            let on = base.with_kerning(true).resolve().unwrap();

            let plain = shape_run(&font, "AV", &off);
            let kerned = shape_run(&font, "AV", &on);
            assert_eq!(plain.glyphs()[0].pen_x, kerned.glyphs()[0].pen_x);
            let delta = kerned.glyphs()[1].pen_x - plain.glyphs()[1].pen_x;
            assert!(approx_eq(delta, -80.0 * spacing), "delta {delta}");
        }
    }

    #[test]
    fn test_spacing_scales_advances() {
        let font = font();
        let options = LayoutOptions::default().with_spacing(2.0).resolve().unwrap();
        let run = shape_run(&font, "A A", &options);
        let pens: Vec<f64> = run.glyphs().iter().map(|g| g.pen_x).collect();
        assert_eq!(pens, vec![0.0, 1200.0, 1700.0]);
        assert_eq!(run.advance(), 2900.0);
    }
}
