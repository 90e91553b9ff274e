//! Reconstruction of closed contours from TrueType quadratic point streams.
//!
//! A TrueType contour is a cyclic list of points, each either on the curve
//! or a quadratic control point. Two consecutive control points imply an
//! on-curve point at their midpoint. Decoding walks the list once from an
//! on-curve anchor, emitting straight segments between on-curve points and
//! flattened quadratics through control points, then closes back onto the
//! anchor.

use textloft_geometry::{flatten_quadratic, Contour, Point};

use crate::glyf::{GlyphOutline, GlyphPoint};

/// Placement and flattening parameters for decoding one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeParams {
    /// Horizontal pen position in font units, added before scaling.
    pub pen_x: f64,
    /// Font units to model units.
    pub scale: f64,
    /// Line segments per quadratic curve.
    pub segments: usize,
}

impl DecodeParams {
    /// Create decode parameters.
    pub const fn new(pen_x: f64, scale: f64, segments: usize) -> Self {
        Self {
            pen_x,
            scale,
            segments,
        }
    }

    #[inline]
    fn to_model(&self, p: &GlyphPoint) -> Point {
        Point::new((p.x + self.pen_x) * self.scale, p.y * self.scale)
    }
}

/// Decode every contour of a glyph, dropping degenerate ones.
pub fn decode_glyph(outline: &GlyphOutline, params: &DecodeParams) -> Vec<Contour> {
    outline
        .contours()
        .filter(|points| !points.is_empty())
        .filter_map(|points| {
            let contour = decode_contour(points, params);
            if contour.is_none() {
                tracing::trace!(points = points.len(), "dropping degenerate contour");
            }
            contour
        })
        .collect()
}

/// Decode a single contour into a closed polyline in model units.
///
/// Returns `None` for an empty contour or one that does not span at least
/// three distinct vertices. The result always ends with a bit-exact copy of
/// its first point.
pub fn decode_contour(points: &[GlyphPoint], params: &DecodeParams) -> Option<Contour> {
    let (first, last) = (points.first()?, points.last()?);

    // Anchor on an on-curve point; the walk covers every other point once.
    let (start, walk) = if first.on_curve {
        (params.to_model(first), &points[1..])
    } else if last.on_curve {
        (params.to_model(last), &points[..points.len() - 1])
    } else {
        let implied = params.to_model(last).midpoint(params.to_model(first));
        (implied, points)
    };

    let segments = params.segments;
    let mut poly = Vec::with_capacity(points.len() * segments + 2);
    poly.push(start);

    let mut prev_on = start;
    let mut ctrl: Option<Point> = None;

    for p in walk {
        let q = params.to_model(p);
        match (p.on_curve, ctrl.take()) {
            (true, None) => {
                poly.push(q);
                prev_on = q;
            }
            (true, Some(c)) => {
                poly.extend(flatten_quadratic(prev_on, c, q, segments));
                prev_on = q;
            }
            (false, None) => ctrl = Some(q),
            (false, Some(c)) => {
                let implied = c.midpoint(q);
                poly.extend(flatten_quadratic(prev_on, c, implied, segments));
                prev_on = implied;
                ctrl = Some(q);
            }
        }
    }

    match ctrl {
        Some(c) => poly.extend(flatten_quadratic(prev_on, c, start, segments)),
        None if poly.last() != Some(&start) => poly.push(start),
        None => {}
    }

    let contour = Contour::from_points(poly);
    (contour.len() >= 4 && contour.is_closed() && contour.has_three_distinct_points())
        .then_some(contour)
}
