//! Geometry primitives for textloft.
//!
//! This crate holds the plain 2D types shared by the font decoder and the
//! layout engine:
//!
//! - [`Point`] and [`BoundingBox`] in `f64` coordinates
//! - [`Translation`] for uniform alignment shifts
//! - [`Contour`] and [`OutlineSet`], the closed polylines produced for a text run
//! - [`flatten_quadratic`], fixed-step flattening of quadratic Bezier segments
//!
//! # Example
//!
//! ```
//! use textloft_geometry::{flatten_quadratic, Contour, OutlineSet, Point};
//!
//! let start = Point::new(0.0, 0.0);
//! let mut points = vec![start, Point::new(4.0, 0.0)];
//! points.extend(flatten_quadratic(Point::new(4.0, 0.0), Point::new(2.0, 4.0), start, 4));
//!
//! let contour = Contour::from_points(points);
//! assert!(contour.is_closed());
//!
//! let outlines: OutlineSet = [contour].into_iter().collect();
//! assert_eq!(outlines.segments().count(), 5);
//! ```

mod bezier;
mod contour;
mod transform;
mod types;

pub use bezier::{flatten_quadratic, QuadSegment};
pub use contour::{Contour, OutlineSet};
pub use transform::Translation;
pub use types::{BoundingBox, Point};

// Re-export lyon so consumers of `OutlineSet::to_path` can name its types.
pub use lyon;
