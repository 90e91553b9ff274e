//! Closed polygon contours and ordered outline sets.

use lyon::math::point as lyon_point;
use lyon::path::Path as LyonPath;

use crate::transform::Translation;
use crate::types::{BoundingBox, Point};

/// An ordered polyline, closed when its first point equals its last.
///
/// Contours produced by the glyph decoder are always explicitly closed and
/// carry at least three distinct vertices.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Wrap a list of points as a contour.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The points in order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the contour and return its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points, including the closing repeat.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the contour has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if the first point equals the last (exact comparison).
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Check if the contour spans at least three distinct vertices.
    pub fn has_three_distinct_points(&self) -> bool {
        let Some(&first) = self.points.first() else {
            return false;
        };
        let Some(&second) = self.points.iter().find(|&&p| p != first) else {
            return false;
        };
        self.points.iter().any(|&p| p != first && p != second)
    }

    /// Bounding box of all points.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.points.iter().copied())
    }

    /// Move every point by `t`.
    pub fn translate(&mut self, t: &Translation) {
        for p in &mut self.points {
            *p = t.transform_point(*p);
        }
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Contour {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// An ordered sequence of contours for one text run.
///
/// Order follows glyph order, then sub-contour order within each glyph.
/// Contours may be nested or disjoint; fill-rule resolution is left to the
/// consumer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OutlineSet {
    contours: Vec<Contour>,
}

impl OutlineSet {
    /// Create an empty outline set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a contour.
    pub fn push(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    /// The contours in order.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Consume the set and return its contours.
    pub fn into_contours(self) -> Vec<Contour> {
        self.contours
    }

    /// Number of contours.
    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    /// Check if there are no contours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Iterate over the contours.
    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    /// Total number of points across all contours.
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    /// Bounding box of every point of every contour.
    pub fn bounds(&self) -> BoundingBox {
        self.contours
            .iter()
            .fold(BoundingBox::EMPTY, |acc, c| acc.union(c.bounds()))
    }

    /// Move every point of every contour by `t`.
    pub fn translate(&mut self, t: &Translation) {
        if t.is_identity() {
            return;
        }
        for contour in &mut self.contours {
            contour.translate(t);
        }
    }

    /// Every edge of every contour as a `(start, end)` pair.
    ///
    /// Contours with fewer than two points are skipped. A contour whose last
    /// point differs from its first gets an extra closing edge.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.contours
            .iter()
            .filter(|c| c.len() >= 2)
            .flat_map(|c| {
                let pts = c.points();
                let closing = (!c.is_closed()).then(|| (pts[pts.len() - 1], pts[0]));
                pts.windows(2).map(|w| (w[0], w[1])).chain(closing)
            })
    }

    /// Build a lyon path with one closed sub-path per contour.
    ///
    /// The explicit closing repeat is dropped since the sub-path is closed
    /// by the builder. Coordinates are narrowed to `f32`.
    pub fn to_path(&self) -> LyonPath {
        let mut builder = LyonPath::builder();
        for contour in &self.contours {
            let pts = contour.points();
            let pts = if contour.is_closed() {
                &pts[..pts.len() - 1]
            } else {
                pts
            };
            let Some((first, rest)) = pts.split_first() else {
                continue;
            };
            builder.begin(lyon_point(first.x as f32, first.y as f32));
            for p in rest {
                builder.line_to(lyon_point(p.x as f32, p.y as f32));
            }
            builder.end(true);
        }
        builder.build()
    }
}

impl<'a> IntoIterator for &'a OutlineSet {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}

impl IntoIterator for OutlineSet {
    type Item = Contour;
    type IntoIter = std::vec::IntoIter<Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.into_iter()
    }
}

impl FromIterator<Contour> for OutlineSet {
    fn from_iter<I: IntoIterator<Item = Contour>>(iter: I) -> Self {
        Self {
            contours: iter.into_iter().collect(),
        }
    }
}

impl Extend<Contour> for OutlineSet {
    fn extend<I: IntoIterator<Item = Contour>>(&mut self, iter: I) {
        self.contours.extend(iter);
    }
}
