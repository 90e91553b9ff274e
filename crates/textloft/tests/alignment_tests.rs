//! Tests for anchor alignment of laid-out text.

use textloft::{
    alignment_offset, layout_text, text_outlines, Alignment, Font, HorizontalAlign,
    LayoutOptions, VerticalAlign,
};
use textloft_font::test_util::FontBuilder;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn font() -> Font {
    let bytes = FontBuilder::new(1000)
        .typo_ascender(Some(800))
        .glyph('A', 600, &[&[(100, 0, true), (500, 0, true), (300, 700, true)]])
        .glyph('g', 500, &[&[(50, -200, true), (450, -200, true), (250, 500, false)]])
        .blank(' ', 250)
        .build();
    Font::parse(bytes).unwrap()
}

fn options(h: HorizontalAlign, v: VerticalAlign) -> LayoutOptions {
    LayoutOptions::default().with_alignment(Alignment::new(h, v))
}

#[test]
fn test_right_anchor_is_pen_end() {
    let font = font();
    for text in ["A", "Ag", "A ", "gA A"] {
        let layout = layout_text(&font, text, &options(HorizontalAlign::Right, VerticalAlign::Baseline)).unwrap();
        assert!(approx_eq(layout.translation().dx, -layout.advance()), "{text}");
        assert!(approx_eq(layout.pen_end().x, 0.0));
        // right side bearings and trailing blanks keep ink left of the anchor
        assert!(layout.bounds().max_x < 0.0, "{text}: {:?}", layout.bounds());
    }
}

#[test]
fn test_center_anchor_centers_ink() {
    let layout = layout_text(&font(), "Ag", &options(HorizontalAlign::Center, VerticalAlign::Center)).unwrap();
    let center = layout.bounds().center();
    assert!(approx_eq(center.x, 0.0));
    assert!(approx_eq(center.y, 0.0));
}

#[test]
fn test_vertical_anchors_use_ink() {
    let font = font();
    let top = layout_text(&font, "Ag", &options(HorizontalAlign::Left, VerticalAlign::Top)).unwrap();
    assert!(approx_eq(top.bounds().max_y, 0.0));

    let bottom = layout_text(&font, "Ag", &options(HorizontalAlign::Left, VerticalAlign::Bottom)).unwrap();
    assert!(approx_eq(bottom.bounds().min_y, 0.0));

    let baseline = layout_text(&font, "Ag", &options(HorizontalAlign::Left, VerticalAlign::Baseline)).unwrap();
    // the descender stays below the baseline
    assert!(approx_eq(baseline.bounds().min_y, -200.0 * 10.0 / 800.0));
    assert!(baseline.translation().is_identity());
}

#[test]
fn test_alignment_is_a_pure_translation() {
    let font = font();
    let reference = text_outlines(&font, "gA", &LayoutOptions::default()).unwrap();
    for alignment in Alignment::all() {
        let layout = layout_text(&font, "gA", &LayoutOptions::default().with_alignment(alignment)).unwrap();
        let t = layout.translation();
        for (r, a) in reference.iter().zip(layout.outlines()) {
            for (pr, pa) in r.iter().zip(a) {
                let moved = t.transform_point(*pr);
                assert!(approx_eq(moved.x, pa.x) && approx_eq(moved.y, pa.y), "{alignment}");
            }
        }
    }
}

#[test]
fn test_realigning_aligned_output_is_zero() {
    let font = font();
    for alignment in Alignment::all() {
        let layout = layout_text(&font, "Ag A", &LayoutOptions::default().with_alignment(alignment)).unwrap();
        let bounds = layout.outlines().bounds();
        let again = alignment_offset(alignment, &bounds, layout.pen_end().x);
        assert!(approx_eq(again.dx, 0.0), "{alignment}: {again:?}");
        assert!(approx_eq(again.dy, 0.0), "{alignment}: {again:?}");
    }
}
