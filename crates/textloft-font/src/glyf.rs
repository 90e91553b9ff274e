//! TrueType glyph point extraction.
//!
//! Glyph records come from `loca`/`glyf` through `read-fonts`, which decodes
//! the flag and delta encodings. This module turns a record into the
//! on-curve/off-curve point stream of the glyph together with half-open
//! contour boundaries. Composite glyphs are resolved into a single stream by
//! transforming and concatenating their components. Curve reconstruction
//! from the points happens in [`crate::outline`].

use read_fonts::tables::glyf::{Anchor, CompositeGlyph, Glyf, Glyph, SimpleGlyph, Transform};
use read_fonts::tables::loca::Loca;
use read_fonts::types::GlyphId;
use read_fonts::{FontRef, TableProvider};

use crate::error::{FontError, FontResult};

/// Maximum nesting of composite glyph references.
const MAX_COMPONENT_DEPTH: u8 = 32;

/// Maximum number of points one glyph may expand to, components included.
const MAX_GLYPH_POINTS: usize = u16::MAX as usize;

/// Maximum number of component references visited while loading one glyph.
const MAX_COMPONENT_REFS: usize = 4096;

/// A glyph point in font units with its on-curve flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPoint {
    pub x: f64,
    pub y: f64,
    pub on_curve: bool,
}

impl GlyphPoint {
    /// Create a new glyph point.
    #[inline]
    pub const fn new(x: f64, y: f64, on_curve: bool) -> Self {
        Self { x, y, on_curve }
    }

    /// An on-curve point.
    #[inline]
    pub const fn on(x: f64, y: f64) -> Self {
        Self::new(x, y, true)
    }

    /// An off-curve (control) point.
    #[inline]
    pub const fn off(x: f64, y: f64) -> Self {
        Self::new(x, y, false)
    }
}

/// The point stream of one glyph and its contour boundaries.
///
/// Contour `i` covers `points[ends[i-1]..ends[i]]` (with `ends[-1] = 0`),
/// so boundaries are half-open and the last end equals the point count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphOutline {
    points: Vec<GlyphPoint>,
    contour_ends: Vec<usize>,
    x_min: i16,
}

impl GlyphOutline {
    /// Build an outline from points and exclusive contour end indices.
    ///
    /// Returns `None` unless the ends are non-decreasing and the last one
    /// equals `points.len()`.
    pub fn from_parts(points: Vec<GlyphPoint>, contour_ends: Vec<usize>) -> Option<Self> {
        let ordered = contour_ends.windows(2).all(|w| w[0] <= w[1]);
        let complete = contour_ends.last().copied().unwrap_or(0) == points.len();
        (ordered && complete).then_some(Self {
            points,
            contour_ends,
            x_min: 0,
        })
    }

    /// The flattened point stream.
    pub fn points(&self) -> &[GlyphPoint] {
        &self.points
    }

    /// Exclusive end index of each contour.
    pub fn contour_ends(&self) -> &[usize] {
        &self.contour_ends
    }

    /// Left edge of the glyph's declared bounding box, in font units.
    pub fn x_min(&self) -> i16 {
        self.x_min
    }

    /// Check if the glyph has no points (e.g. a space).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over each contour's points.
    pub fn contours(&self) -> impl Iterator<Item = &[GlyphPoint]> + '_ {
        let starts = std::iter::once(0).chain(self.contour_ends.iter().copied());
        starts
            .zip(self.contour_ends.iter().copied())
            .map(|(start, end)| &self.points[start..end])
    }

    /// Move every point horizontally.
    pub(crate) fn shift_x(&mut self, dx: f64) {
        if dx == 0.0 {
            return;
        }
        for p in &mut self.points {
            p.x += dx;
        }
    }
}

/// 2x2 component transform, in font units.
#[derive(Debug, Clone, Copy)]
struct ComponentTransform {
    xx: f64,
    yx: f64,
    xy: f64,
    yy: f64,
}

impl ComponentTransform {
    fn apply(&self, p: GlyphPoint) -> GlyphPoint {
        GlyphPoint {
            x: self.xx * p.x + self.xy * p.y,
            y: self.yx * p.x + self.yy * p.y,
            on_curve: p.on_curve,
        }
    }
}

impl From<&Transform> for ComponentTransform {
    fn from(t: &Transform) -> Self {
        Self {
            xx: f64::from(t.xx.to_f32()),
            yx: f64::from(t.yx.to_f32()),
            xy: f64::from(t.xy.to_f32()),
            yy: f64::from(t.yy.to_f32()),
        }
    }
}

/// Limits on how much a single glyph may expand while resolving components.
///
/// Components can reference the same child several times at every level, so
/// the depth limit alone still allows exponential growth.
#[derive(Debug)]
struct LoadBudget {
    glyph: u16,
    points: usize,
    component_refs: usize,
}

impl LoadBudget {
    fn new(glyph: u16) -> Self {
        Self {
            glyph,
            points: MAX_GLYPH_POINTS,
            component_refs: MAX_COMPONENT_REFS,
        }
    }

    fn take_points(&mut self, count: usize) -> FontResult<()> {
        self.points = self
            .points
            .checked_sub(count)
            .ok_or_else(|| FontError::malformed(self.glyph, "glyph expands to too many points"))?;
        Ok(())
    }

    fn take_component(&mut self) -> FontResult<()> {
        self.component_refs = self
            .component_refs
            .checked_sub(1)
            .ok_or_else(|| FontError::malformed(self.glyph, "too many component references"))?;
        Ok(())
    }
}

/// Glyph records located through `loca`.
pub(crate) struct GlyphTable<'a> {
    loca: Loca<'a>,
    glyf: Glyf<'a>,
    num_glyphs: u16,
}

impl<'a> GlyphTable<'a> {
    /// Locate the `loca` and `glyf` tables in raw font bytes.
    pub(crate) fn new(data: &'a [u8], num_glyphs: u16) -> FontResult<Self> {
        let font = FontRef::new(data).map_err(|e| FontError::Parse(e.to_string()))?;
        let glyf = font.glyf().map_err(|_| FontError::MissingTable("glyf"))?;
        let loca = font.loca(None).map_err(|_| FontError::MissingTable("loca"))?;
        Ok(Self {
            loca,
            glyf,
            num_glyphs,
        })
    }

    /// Extract the point stream of `glyph`.
    pub(crate) fn outline(&self, glyph: u16) -> FontResult<GlyphOutline> {
        self.load(glyph, 0, &mut LoadBudget::new(glyph))
    }

    fn load(&self, glyph: u16, depth: u8, budget: &mut LoadBudget) -> FontResult<GlyphOutline> {
        if depth > MAX_COMPONENT_DEPTH {
            return Err(FontError::CompositeDepth { glyph });
        }
        if glyph >= self.num_glyphs {
            return Err(FontError::GlyphOutOfRange {
                glyph,
                count: self.num_glyphs,
            });
        }
        let record = self
            .loca
            .get_glyf(GlyphId::new(u32::from(glyph)), &self.glyf)
            .map_err(|_| FontError::malformed(glyph, "loca offsets out of bounds"))?;
        let Some(record) = record else {
            return Ok(GlyphOutline::default());
        };

        let x_min = record.x_min();
        let mut outline = match record {
            Glyph::Simple(simple) => simple_outline(glyph, &simple, budget)?,
            Glyph::Composite(composite) => self.composite_outline(glyph, &composite, depth, budget)?,
        };
        outline.x_min = x_min;
        Ok(outline)
    }

    fn composite_outline(
        &self,
        glyph: u16,
        composite: &CompositeGlyph<'_>,
        depth: u8,
        budget: &mut LoadBudget,
    ) -> FontResult<GlyphOutline> {
        let mut outline = GlyphOutline::default();
        for component in composite.components() {
            budget.take_component()?;
            let child = self.load(component.glyph.to_u16(), depth + 1, budget)?;
            let transform = ComponentTransform::from(&component.transform);
            let moved: Vec<GlyphPoint> = child.points.iter().map(|&p| transform.apply(p)).collect();

            let (dx, dy) = match component.anchor {
                Anchor::Offset { x, y } => (f64::from(x), f64::from(y)),
                Anchor::Point {
                    base,
                    component: child_point,
                } => {
                    // align child point `child_point` with parent point `base`
                    let parent = outline.points.get(usize::from(base));
                    let anchor = moved.get(usize::from(child_point));
                    match (parent, anchor) {
                        (Some(p), Some(c)) => (p.x - c.x, p.y - c.y),
                        _ => return Err(FontError::malformed(glyph, "anchor point out of range")),
                    }
                }
            };

            let base = outline.points.len();
            outline.points.extend(moved.into_iter().map(|p| GlyphPoint {
                x: p.x + dx,
                y: p.y + dy,
                on_curve: p.on_curve,
            }));
            outline
                .contour_ends
                .extend(child.contour_ends.iter().map(|&end| end + base));
        }
        Ok(outline)
    }
}

fn simple_outline(
    glyph: u16,
    simple: &SimpleGlyph<'_>,
    budget: &mut LoadBudget,
) -> FontResult<GlyphOutline> {
    let mut contour_ends: Vec<usize> = Vec::with_capacity(simple.end_pts_of_contours().len());
    for end in simple.end_pts_of_contours() {
        let end = usize::from(end.get()) + 1;
        if contour_ends.last().is_some_and(|&prev| end < prev) {
            return Err(FontError::malformed(glyph, "contour end points out of order"));
        }
        contour_ends.push(end);
    }

    let num_points = contour_ends.last().copied().unwrap_or(0);
    budget.take_points(num_points)?;

    let points: Vec<GlyphPoint> = simple
        .points()
        .take(num_points)
        .map(|p| GlyphPoint::new(f64::from(p.x), f64::from(p.y), p.on_curve))
        .collect();
    if points.len() != num_points {
        return Err(FontError::malformed(glyph, "truncated simple glyph"));
    }

    Ok(GlyphOutline {
        points,
        contour_ends,
        x_min: 0,
    })
}
