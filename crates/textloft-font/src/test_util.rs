//! In-memory TrueType font construction for tests.
//!
//! [`FontBuilder`] assembles a minimal sfnt with `write-fonts`: `head`,
//! `hhea`, `maxp`, `hmtx`, `cmap`, `loca` and `glyf`, plus `OS/2` and `kern`
//! on request. Glyph 0 is always an empty `.notdef`. `OS/2` and `kern` are
//! added as raw table bytes so tests control the exact fields the ascender
//! scan and the kerning lookup read.

use write_fonts::FontBuilder as SfntBuilder;
use write_fonts::read::tables::glyf::CurvePoint;
use write_fonts::tables::cmap::Cmap;
use write_fonts::tables::glyf::{
    Anchor, Bbox, Component, ComponentFlags, CompositeGlyph, Contour, GlyfLocaBuilder, Glyph,
    SimpleGlyph, Transform,
};
use write_fonts::tables::head::Head;
use write_fonts::tables::hhea::Hhea;
use write_fonts::tables::hmtx::{Hmtx, LongMetric};
use write_fonts::tables::maxp::Maxp;
use write_fonts::types::{FWord, GlyphId, GlyphId16, Tag, UfWord};

/// A contour given as `(x, y, on_curve)` points in font units.
pub type ContourSpec<'a> = &'a [(i16, i16, bool)];

/// `kern` coverage: format 0, horizontal.
const KERN_HORIZONTAL: u16 = 0x0001;
/// `kern` coverage: format 0, vertical.
const KERN_VERTICAL: u16 = 0x0000;

#[derive(Debug, Clone)]
enum Shape {
    Empty,
    Simple(Vec<Vec<(i16, i16, bool)>>),
    Composite(Vec<(char, i16, i16)>),
}

#[derive(Debug, Clone)]
struct GlyphSpec {
    ch: Option<char>,
    advance: u16,
    lsb: Option<i16>,
    shape: Shape,
}

#[derive(Debug, Clone, Copy)]
struct KernPair {
    left: char,
    right: char,
    value: i16,
    horizontal: bool,
}

/// Builder for synthetic TrueType fonts.
#[derive(Debug, Clone)]
pub struct FontBuilder {
    units_per_em: u16,
    typo_ascender: Option<i16>,
    glyphs: Vec<GlyphSpec>,
    kerning: Vec<KernPair>,
}

impl FontBuilder {
    /// Start a font with the given units per em and an empty `.notdef`.
    pub fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            typo_ascender: None,
            glyphs: vec![GlyphSpec {
                ch: None,
                advance: units_per_em / 2,
                lsb: None,
                shape: Shape::Empty,
            }],
            kerning: Vec::new(),
        }
    }

    /// Set the OS/2 typographic ascender. `None` omits the OS/2 table.
    pub fn typo_ascender(mut self, ascender: Option<i16>) -> Self {
        self.typo_ascender = ascender;
        self
    }

    /// Add a simple glyph mapped from `ch`.
    pub fn glyph(mut self, ch: char, advance: u16, contours: &[ContourSpec<'_>]) -> Self {
        self.glyphs.push(GlyphSpec {
            ch: Some(ch),
            advance,
            lsb: None,
            shape: Shape::Simple(contours.iter().map(|c| c.to_vec()).collect()),
        });
        self
    }

    /// Add a glyph with no outline (like a space).
    pub fn blank(mut self, ch: char, advance: u16) -> Self {
        self.glyphs.push(GlyphSpec {
            ch: Some(ch),
            advance,
            lsb: None,
            shape: Shape::Empty,
        });
        self
    }

    /// Add a composite glyph built from previously added glyphs, each
    /// offset by `(dx, dy)`.
    pub fn composite(mut self, ch: char, advance: u16, components: &[(char, i16, i16)]) -> Self {
        self.glyphs.push(GlyphSpec {
            ch: Some(ch),
            advance,
            lsb: None,
            shape: Shape::Composite(components.to_vec()),
        });
        self
    }

    /// Override the `hmtx` left side bearing of the glyph mapped from `ch`.
    pub fn left_side_bearing(mut self, ch: char, lsb: i16) -> Self {
        if let Some(g) = self.glyphs.iter_mut().find(|g| g.ch == Some(ch)) {
            g.lsb = Some(lsb);
        }
        self
    }

    /// Add a pair to the horizontal `kern` subtable.
    pub fn kern(self, left: char, right: char, value: i16) -> Self {
        self.kern_pair(left, right, value, true)
    }

    /// Add a pair to a vertical `kern` subtable, written before the
    /// horizontal one.
    pub fn vertical_kern(self, left: char, right: char, value: i16) -> Self {
        self.kern_pair(left, right, value, false)
    }

    fn kern_pair(mut self, left: char, right: char, value: i16, horizontal: bool) -> Self {
        self.kerning.push(KernPair {
            left,
            right,
            value,
            horizontal,
        });
        self
    }

    /// Glyph index that `ch` will map to.
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.glyphs
            .iter()
            .position(|g| g.ch == Some(ch))
            .and_then(|i| u16::try_from(i).ok())
    }

    /// Serialize the font.
    pub fn build(&self) -> Vec<u8> {
        let boxes = self.glyph_boxes();
        let global = boxes
            .iter()
            .flatten()
            .copied()
            .reduce(union)
            .unwrap_or_default();

        let mut glyphs = GlyfLocaBuilder::new();
        for (spec, bbox) in self.glyphs.iter().zip(&boxes) {
            glyphs
                .add_glyph(&self.write_glyph(spec, *bbox))
                .expect("glyph serializes");
        }
        let (glyf, loca, loca_format) = glyphs.build();

        let head = Head {
            units_per_em: self.units_per_em,
            x_min: global.x_min,
            y_min: global.y_min,
            x_max: global.x_max,
            y_max: global.y_max,
            index_to_loc_format: loca_format as i16,
            ..Default::default()
        };
        let hhea = Hhea {
            ascender: FWord::new(self.typo_ascender.unwrap_or(global.y_max)),
            descender: FWord::new(global.y_min),
            advance_width_max: UfWord::new(
                self.glyphs.iter().map(|g| g.advance).max().unwrap_or(0),
            ),
            number_of_h_metrics: self.num_glyphs(),
            ..Default::default()
        };
        let maxp = Maxp {
            num_glyphs: self.num_glyphs(),
            ..Default::default()
        };
        let hmtx = Hmtx::new(
            self.glyphs
                .iter()
                .zip(&boxes)
                .map(|(g, bbox)| {
                    let lsb = g.lsb.unwrap_or_else(|| bbox.map_or(0, |b| b.x_min));
                    LongMetric::new(g.advance, lsb)
                })
                .collect(),
            Vec::new(),
        );
        let cmap = Cmap::from_mappings(self.glyphs.iter().enumerate().filter_map(|(gid, g)| {
            Some((g.ch?, GlyphId::new(u32::try_from(gid).ok()?)))
        }))
        .expect("unique cmap entries");

        let mut font = SfntBuilder::new();
        font.add_table(&head).expect("head");
        font.add_table(&hhea).expect("hhea");
        font.add_table(&maxp).expect("maxp");
        font.add_table(&hmtx).expect("hmtx");
        font.add_table(&cmap).expect("cmap");
        font.add_table(&loca).expect("loca");
        font.add_table(&glyf).expect("glyf");
        if let Some(asc) = self.typo_ascender {
            font.add_raw(Tag::new(b"OS/2"), os2(asc, global));
        }
        if !self.kerning.is_empty() {
            font.add_raw(Tag::new(b"kern"), self.kern_table());
        }
        font.build()
    }

    fn num_glyphs(&self) -> u16 {
        u16::try_from(self.glyphs.len()).expect("glyph count fits in u16")
    }

    fn glyph_boxes(&self) -> Vec<Option<Bbox>> {
        let mut boxes: Vec<Option<Bbox>> = Vec::with_capacity(self.glyphs.len());
        for g in &self.glyphs {
            let bbox = match &g.shape {
                Shape::Empty => None,
                Shape::Simple(contours) => contours
                    .iter()
                    .flatten()
                    .map(|&(x, y, _)| Bbox {
                        x_min: x,
                        y_min: y,
                        x_max: x,
                        y_max: y,
                    })
                    .reduce(union),
                Shape::Composite(parts) => parts
                    .iter()
                    .filter_map(|&(ch, dx, dy)| {
                        let id = usize::from(self.glyph_id(ch)?);
                        let b = (*boxes.get(id)?)?;
                        Some(Bbox {
                            x_min: b.x_min + dx,
                            y_min: b.y_min + dy,
                            x_max: b.x_max + dx,
                            y_max: b.y_max + dy,
                        })
                    })
                    .reduce(union),
            };
            boxes.push(bbox);
        }
        boxes
    }

    fn write_glyph(&self, spec: &GlyphSpec, bbox: Option<Bbox>) -> Glyph {
        match &spec.shape {
            Shape::Empty => Glyph::Empty,
            Shape::Simple(contours) => {
                let contours: Vec<Contour> = contours
                    .iter()
                    .filter(|c| !c.is_empty())
                    .map(|c| {
                        let points: Vec<CurvePoint> = c
                            .iter()
                            .map(|&(x, y, on)| CurvePoint::new(x, y, on))
                            .collect();
                        Contour::from(points)
                    })
                    .collect();
                if contours.is_empty() {
                    return Glyph::Empty;
                }
                Glyph::Simple(SimpleGlyph {
                    bbox: bbox.unwrap_or_default(),
                    contours,
                    instructions: Vec::new(),
                })
            }
            Shape::Composite(parts) => {
                let bbox = bbox.unwrap_or_default();
                let mut components = parts.iter().filter_map(|&(ch, dx, dy)| {
                    Some(Component::new(
                        GlyphId16::new(self.glyph_id(ch)?),
                        Anchor::Offset { x: dx, y: dy },
                        Transform::default(),
                        ComponentFlags::default(),
                    ))
                });
                let Some(first) = components.next() else {
                    return Glyph::Empty;
                };
                let mut composite = CompositeGlyph::new(first, bbox);
                for component in components {
                    composite.add_component(component, bbox);
                }
                Glyph::Composite(composite)
            }
        }
    }

    /// Format 0 `kern` table: a vertical subtable (if any) then a horizontal
    /// one.
    fn kern_table(&self) -> Vec<u8> {
        let subtables: Vec<Vec<u8>> = [(false, KERN_VERTICAL), (true, KERN_HORIZONTAL)]
            .into_iter()
            .filter_map(|(horizontal, coverage)| {
                let pairs: Vec<(u16, u16, i16)> = self
                    .kerning
                    .iter()
                    .filter(|p| p.horizontal == horizontal)
                    .filter_map(|p| {
                        Some((self.glyph_id(p.left)?, self.glyph_id(p.right)?, p.value))
                    })
                    .collect();
                (!pairs.is_empty()).then(|| kern_subtable(coverage, pairs))
            })
            .collect();

        let mut t = Vec::new();
        t.extend_from_slice(&0u16.to_be_bytes());
        t.extend_from_slice(&(subtables.len() as u16).to_be_bytes());
        for sub in subtables {
            t.extend_from_slice(&sub);
        }
        t
    }
}

fn union(a: Bbox, b: Bbox) -> Bbox {
    Bbox {
        x_min: a.x_min.min(b.x_min),
        y_min: a.y_min.min(b.y_min),
        x_max: a.x_max.max(b.x_max),
        y_max: a.y_max.max(b.y_max),
    }
}

/// A version 4 OS/2 table. Only the fields read by the parsers are set.
fn os2(ascender: i16, global: Bbox) -> Vec<u8> {
    let mut t = vec![0u8; 96];
    t[0..2].copy_from_slice(&4u16.to_be_bytes());
    t[4..6].copy_from_slice(&400u16.to_be_bytes());
    t[6..8].copy_from_slice(&5u16.to_be_bytes());
    t[68..70].copy_from_slice(&ascender.to_be_bytes());
    t[70..72].copy_from_slice(&global.y_min.to_be_bytes());
    t[74..76].copy_from_slice(&(global.y_max.max(0) as u16).to_be_bytes());
    t[76..78].copy_from_slice(&(global.y_min.min(0).unsigned_abs()).to_be_bytes());
    t
}

fn kern_subtable(coverage: u16, mut pairs: Vec<(u16, u16, i16)>) -> Vec<u8> {
    pairs.sort_by_key(|&(l, r, _)| (u32::from(l) << 16) | u32::from(r));

    let n = pairs.len() as u16;
    let pow = 1u16 << (15 - n.leading_zeros());
    let search_range = pow * 6;
    let entry_selector = pow.trailing_zeros() as u16;
    let range_shift = n * 6 - search_range;

    let mut t = Vec::new();
    t.extend_from_slice(&0u16.to_be_bytes());
    t.extend_from_slice(&(14 + n * 6).to_be_bytes());
    t.extend_from_slice(&coverage.to_be_bytes());
    t.extend_from_slice(&n.to_be_bytes());
    t.extend_from_slice(&search_range.to_be_bytes());
    t.extend_from_slice(&entry_selector.to_be_bytes());
    t.extend_from_slice(&range_shift.to_be_bytes());
    for (l, r, v) in pairs {
        t.extend_from_slice(&l.to_be_bytes());
        t.extend_from_slice(&r.to_be_bytes());
        t.extend_from_slice(&v.to_be_bytes());
    }
    t
}
