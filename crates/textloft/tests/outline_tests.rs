//! End-to-end tests of text to outline conversion on synthetic fonts.

use textloft::{
    layout_text, text_outlines, text_outlines_from_bytes, Alignment, Font, FontError,
    LayoutError, LayoutOptions, OutlineSet, Point,
};
use textloft_font::test_util::FontBuilder;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_point(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

const TRIANGLE: &[(i16, i16, bool)] = &[(100, 0, true), (500, 0, true), (300, 700, true)];

const O_OUTER: &[(i16, i16, bool)] = &[
    (300, 0, true),
    (600, 0, false),
    (600, 350, true),
    (600, 700, false),
    (300, 700, true),
    (0, 700, false),
    (0, 350, true),
    (0, 0, false),
];

const O_INNER: &[(i16, i16, bool)] = &[
    (300, 100, true),
    (100, 100, false),
    (100, 350, true),
    (100, 600, false),
    (300, 600, true),
    (500, 600, false),
    (500, 350, true),
    (500, 100, false),
];

fn font_builder() -> FontBuilder {
    FontBuilder::new(1000)
        .typo_ascender(Some(800))
        .glyph('A', 600, &[TRIANGLE])
        .glyph('O', 700, &[O_OUTER, O_INNER])
        .blank(' ', 250)
}

fn font() -> Font {
    Font::parse(font_builder().build()).unwrap()
}

fn assert_well_formed(outlines: &OutlineSet) {
    for contour in outlines {
        assert!(contour.len() >= 4, "short contour: {contour:?}");
        let (first, last) = (contour.points()[0], contour.points()[contour.len() - 1]);
        assert_eq!(first.x.to_bits(), last.x.to_bits());
        assert_eq!(first.y.to_bits(), last.y.to_bits());
    }
}

#[test]
fn test_triangle_scenario() {
    let options = LayoutOptions::default().with_size(10.0).with_kerning(false);
    let outlines = text_outlines(&font(), "A", &options).unwrap();

    assert_eq!(outlines.len(), 1);
    let expected = [
        Point::new(1.25, 0.0),
        Point::new(6.25, 0.0),
        Point::new(3.75, 8.75),
        Point::new(1.25, 0.0),
    ];
    let contour = &outlines.contours()[0];
    assert_eq!(contour.len(), expected.len());
    for (got, want) in contour.points().iter().zip(expected) {
        assert!(approx_point(*got, want), "{got:?} != {want:?}");
    }
}

#[test]
fn test_empty_text_gives_empty_set() {
    for alignment in Alignment::all() {
        let options = LayoutOptions::default().with_alignment(alignment);
        let outlines = text_outlines(&font(), "", &options).unwrap();
        assert!(outlines.is_empty());
    }
}

#[test]
fn test_zero_segments_match_default() {
    let font = font();
    let zero = text_outlines(&font, "OAO", &LayoutOptions::default().with_curve_segments(0));
    let eight = text_outlines(&font, "OAO", &LayoutOptions::default().with_curve_segments(8));
    assert_eq!(zero.unwrap(), eight.unwrap());
}

#[test]
fn test_curve_segments_control_point_count() {
    let font = font();
    for segments in [1, 3, 8, 16] {
        let options = LayoutOptions::default().with_curve_segments(segments);
        let outlines = text_outlines(&font, "O", &options).unwrap();
        assert_eq!(outlines.len(), 2);
        // four quadratics per contour plus the starting point
        for contour in &outlines {
            assert_eq!(contour.len(), 1 + 4 * segments as usize);
        }
    }
}

#[test]
fn test_contours_closed_and_non_degenerate() {
    let font = font();
    for alignment in Alignment::all() {
        for segments in [1, 2, 8] {
            let options = LayoutOptions::default()
                .with_alignment(alignment)
                .with_curve_segments(segments);
            let outlines = text_outlines(&font, "AO A", &options).unwrap();
            assert_eq!(outlines.len(), 4);
            assert_well_formed(&outlines);
        }
    }
}

#[test]
fn test_contour_order_follows_glyphs() {
    let outlines = text_outlines(&font(), "OA", &LayoutOptions::default()).unwrap();
    let starts: Vec<Point> = outlines.iter().map(|c| c.points()[0]).collect();
    let scale = 10.0 / 800.0;
    assert!(approx_point(starts[0], Point::new(300.0 * scale, 0.0)));
    assert!(approx_point(starts[1], Point::new(300.0 * scale, 100.0 * scale)));
    assert!(approx_point(starts[2], Point::new(800.0 * scale, 0.0)));
}

#[test]
fn test_deterministic_output() {
    let bytes = font_builder().build();
    let options = LayoutOptions::default().with_alignment(Alignment::new(
        textloft::HorizontalAlign::Center,
        textloft::VerticalAlign::Center,
    ));
    let a = text_outlines(&Font::parse(bytes.clone()).unwrap(), "OAO", &options).unwrap();
    let b = text_outlines(&Font::parse(bytes).unwrap(), "OAO", &options).unwrap();
    let bits = |set: &OutlineSet| -> Vec<(u64, u64)> {
        set.iter()
            .flat_map(|c| c.iter().map(|p| (p.x.to_bits(), p.y.to_bits())))
            .collect()
    };
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn test_scale_linearity() {
    let font = font();
    for alignment in Alignment::all() {
        let base = LayoutOptions::default().with_alignment(alignment);
        let small = text_outlines(&font, "AO", &base.with_size(10.0)).unwrap();
        let large = text_outlines(&font, "AO", &base.with_size(20.0)).unwrap();
        assert_eq!(small.point_count(), large.point_count());
        for (s, l) in small.iter().zip(&large) {
            for (ps, pl) in s.iter().zip(l) {
                assert!(approx_point(ps.scaled(2.0), *pl), "{alignment}: {ps:?} vs {pl:?}");
            }
        }
    }
}

#[test]
fn test_unmapped_character_still_advances() {
    let font = font();
    let options = LayoutOptions::default();
    let outlines = text_outlines(&font, "A~A", &options).unwrap();
    assert_eq!(outlines.len(), 2);
    // .notdef advances by 500 units
    let scale = 10.0 / 800.0;
    let second = outlines.contours()[1].points()[0];
    assert!(approx_eq(second.x, (100.0 + 600.0 + 500.0) * scale));
}

#[test]
fn test_unreadable_outlines_still_advance() {
    let mut bytes = font_builder().build();
    // Hide the glyf table from the outline reader but keep the metrics
    let num_tables = u16::from_be_bytes([bytes[4], bytes[5]]) as usize;
    let record = (0..num_tables)
        .map(|i| 12 + i * 16)
        .find(|&at| &bytes[at..at + 4] == b"glyf")
        .unwrap();
    bytes[record..record + 4].copy_from_slice(b"glyx");

    let font = Font::parse(bytes).unwrap();
    let layout = layout_text(&font, "AOA", &LayoutOptions::default()).unwrap();
    assert!(layout.outlines().is_empty());
    assert!(approx_eq(layout.advance(), 1900.0 * 10.0 / 800.0));
}

#[test]
fn test_composite_glyph_outlines() {
    let bytes = font_builder()
        .composite('W', 1200, &[('A', 0, 0), ('A', 600, 0)])
        .build();
    let font = Font::parse(bytes).unwrap();
    let outlines = text_outlines(&font, "W", &LayoutOptions::default()).unwrap();
    assert_eq!(outlines.len(), 2);
    assert_well_formed(&outlines);
    let scale = 10.0 / 800.0;
    assert!(approx_eq(outlines.contours()[1].points()[0].x, 700.0 * scale));
}

#[test]
fn test_ascender_fallback_changes_scale() {
    // Without OS/2 the head bbox top (700) sets the scale
    let font = Font::parse(
        FontBuilder::new(1000)
            .glyph('A', 600, &[TRIANGLE])
            .build(),
    )
    .unwrap();
    let layout = layout_text(&font, "A", &LayoutOptions::default()).unwrap();
    assert!(approx_eq(layout.scale(), 10.0 / 700.0));
    assert!(approx_eq(layout.bounds().max_y, 10.0));
}

#[test]
fn test_invalid_configuration() {
    let font = font();
    assert!(matches!(
        text_outlines(&font, "A", &LayoutOptions::default().with_size(-2.0)),
        Err(LayoutError::InvalidSize(_))
    ));
    assert!(matches!(
        text_outlines(&font, "A", &LayoutOptions::default().with_spacing(-1.0)),
        Err(LayoutError::InvalidSpacing(_))
    ));
}

#[test]
fn test_invalid_font_bytes() {
    let err = text_outlines_from_bytes(vec![0u8; 32], "A", &LayoutOptions::default());
    assert!(matches!(err, Err(LayoutError::Font(FontError::Parse(_)))));
}

#[test]
fn test_outline_export() {
    let outlines = text_outlines(&font(), "A", &LayoutOptions::default()).unwrap();
    // three edges of the closed triangle
    assert_eq!(outlines.segments().count(), 3);
    let path = outlines.to_path();
    assert!(path.iter().count() > 0);
}
