//! Quadratic Bezier flattening.
//!
//! TrueType outlines are built from quadratic segments. Flattening uses a
//! fixed number of uniformly spaced parameter steps rather than a tolerance,
//! so the vertex count of every curve is known up front and the output is
//! reproducible across runs.

use lyon::geom::QuadraticBezierSegment;

use crate::types::Point;

/// Three control points of a quadratic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadSegment {
    /// Create a new quadratic segment.
    #[inline]
    pub const fn new(from: Point, ctrl: Point, to: Point) -> Self {
        Self { from, ctrl, to }
    }

    fn to_lyon(self) -> QuadraticBezierSegment<f64> {
        QuadraticBezierSegment {
            from: self.from.to_lyon(),
            ctrl: self.ctrl.to_lyon(),
            to: self.to.to_lyon(),
        }
    }

    /// Evaluate the point at parameter `t` in [0, 1].
    pub fn sample(&self, t: f64) -> Point {
        Point::from_lyon(self.to_lyon().sample(t))
    }

    /// Flatten into `segments` line segments.
    ///
    /// Returns the points at `t = i / segments` for `i` in `1..=segments`.
    /// The start point is not included; the end point is always included
    /// and is bit-identical to `self.to`. A segment count of zero is treated
    /// as one.
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let curve = self.to_lyon();
        let mut out = Vec::with_capacity(segments);
        for i in 1..segments {
            let t = i as f64 / segments as f64;
            out.push(Point::from_lyon(curve.sample(t)));
        }
        out.push(self.to);
        out
    }
}

/// Flatten the quadratic `p0 -> control -> p2` into `segments` line segments.
///
/// See [`QuadSegment::flatten`].
pub fn flatten_quadratic(p0: Point, control: Point, p2: Point, segments: usize) -> Vec<Point> {
    QuadSegment::new(p0, control, p2).flatten(segments)
}
