//! Anchor alignment of a laid-out run.

use textloft_geometry::{BoundingBox, Translation};

use crate::options::{Alignment, HorizontalAlign, VerticalAlign};

/// Translation that moves a run onto its anchor.
///
/// `ink` is the bounding box of the run's contours and `pen_end_x` the pen
/// position after the last glyph, both in model units in the run's current
/// coordinates. Right alignment puts the pen end at x = 0, not the ink.
/// Anchors that depend on the ink box do nothing when it is empty.
///
/// Feeding an already aligned run back in yields a zero shift.
pub fn alignment_offset(alignment: Alignment, ink: &BoundingBox, pen_end_x: f64) -> Translation {
    let has_ink = ink.is_valid();

    let dx = match alignment.horizontal {
        HorizontalAlign::Left => 0.0,
        HorizontalAlign::Center if has_ink => -(ink.min_x + ink.width() / 2.0),
        HorizontalAlign::Center => 0.0,
        HorizontalAlign::Right => -pen_end_x,
    };
    let dy = match alignment.vertical {
        VerticalAlign::Baseline => 0.0,
        VerticalAlign::Top if has_ink => -ink.max_y,
        VerticalAlign::Center if has_ink => -(ink.min_y + ink.height() / 2.0),
        VerticalAlign::Bottom if has_ink => -ink.min_y,
        VerticalAlign::Top | VerticalAlign::Center | VerticalAlign::Bottom => 0.0,
    };

    Translation::new(dx, dy)
}
