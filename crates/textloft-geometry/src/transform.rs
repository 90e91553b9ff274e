//! Uniform 2D translations.
//!
//! Text alignment moves a whole outline set by a single offset, so only
//! translation is modelled here.

use crate::types::{BoundingBox, Point};

/// A 2D translation by `(dx, dy)`.
///
/// # Examples
///
/// ```
/// use textloft_geometry::{Point, Translation};
///
/// let t = Translation::new(10.0, -2.0);
/// assert_eq!(t.transform_point(Point::new(1.0, 1.0)), Point::new(11.0, -1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translation {
    pub dx: f64,
    pub dy: f64,
}

impl Translation {
    /// The identity translation.
    pub const IDENTITY: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a new translation.
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Check if this translation moves nothing.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Apply to a point.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        p.offset(self.dx, self.dy)
    }

    /// Apply to a bounding box.
    #[inline]
    pub fn transform_bounds(&self, b: BoundingBox) -> BoundingBox {
        b.offset(self.dx, self.dy)
    }
}
