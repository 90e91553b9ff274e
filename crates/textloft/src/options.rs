//! Layout configuration.
//!
//! [`LayoutOptions`] is what callers fill in. Before any work is done it is
//! validated and normalized into [`ResolvedOptions`]:
//!
//! - `size` must be positive and finite
//! - `curve_segments` of zero or less becomes [`DEFAULT_CURVE_SEGMENTS`]
//! - `spacing` of zero becomes 1; negative spacing is rejected

use std::fmt;
use std::str::FromStr;

use crate::error::{LayoutError, LayoutResult};

/// Segments per quadratic curve when none (or a non-positive count) is given.
pub const DEFAULT_CURVE_SEGMENTS: usize = 8;

/// Horizontal anchor of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HorizontalAlign {
    /// Pen origin at x = 0.
    #[default]
    Left,
    /// Ink box centered on x = 0.
    Center,
    /// Pen end at x = 0.
    Right,
}

impl HorizontalAlign {
    /// Every horizontal anchor.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizontalAlign {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| LayoutError::UnknownAlignment {
                axis: "horizontal",
                value: s.to_owned(),
            })
    }
}

/// Vertical anchor of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum VerticalAlign {
    /// Baseline at y = 0.
    #[default]
    Baseline,
    /// Top of the ink box at y = 0.
    Top,
    /// Ink box centered on y = 0.
    Center,
    /// Bottom of the ink box at y = 0.
    Bottom,
}

impl VerticalAlign {
    /// Every vertical anchor.
    pub const ALL: [Self; 4] = [Self::Baseline, Self::Top, Self::Center, Self::Bottom];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerticalAlign {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| LayoutError::UnknownAlignment {
                axis: "vertical",
                value: s.to_owned(),
            })
    }
}

/// A horizontal and vertical anchor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Alignment {
    /// Create an alignment.
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// All twelve anchor combinations.
    pub fn all() -> impl Iterator<Item = Self> {
        HorizontalAlign::ALL.into_iter().flat_map(|h| {
            VerticalAlign::ALL
                .into_iter()
                .map(move |v| Self::new(h, v))
        })
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.horizontal, self.vertical)
    }
}

/// Options controlling how text is scaled, spaced and anchored.
///
/// # Example
///
/// ```
/// use textloft::{HorizontalAlign, LayoutOptions, VerticalAlign};
///
/// let options = LayoutOptions::default()
///     .with_size(20.0)
///     .with_halign(HorizontalAlign::Center)
///     .with_valign(VerticalAlign::Center)
///     .with_kerning(false);
/// let resolved = options.resolve().unwrap();
/// assert_eq!(resolved.curve_segments(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LayoutOptions {
    /// Height of the font ascender in model units.
    pub size: f64,
    /// Line segments per quadratic curve. Zero or less selects the default.
    pub curve_segments: i32,
    /// Horizontal anchor.
    pub halign: HorizontalAlign,
    /// Vertical anchor.
    pub valign: VerticalAlign,
    /// Apply pairwise kerning.
    pub kerning: bool,
    /// Multiplier on advances and kerning. Zero is treated as 1.
    pub spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            size: 10.0,
            curve_segments: DEFAULT_CURVE_SEGMENTS as i32,
            halign: HorizontalAlign::Left,
            valign: VerticalAlign::Baseline,
            kerning: true,
            spacing: 1.0,
        }
    }
}

impl LayoutOptions {
    /// Set the size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the curve segment count.
    pub fn with_curve_segments(mut self, segments: i32) -> Self {
        self.curve_segments = segments;
        self
    }

    /// Set the horizontal anchor.
    pub fn with_halign(mut self, halign: HorizontalAlign) -> Self {
        self.halign = halign;
        self
    }

    /// Set the vertical anchor.
    pub fn with_valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = valign;
        self
    }

    /// Set both anchors.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.halign = alignment.horizontal;
        self.valign = alignment.vertical;
        self
    }

    /// Enable or disable kerning.
    pub fn with_kerning(mut self, kerning: bool) -> Self {
        self.kerning = kerning;
        self
    }

    /// Set the spacing multiplier.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// The anchor pair.
    pub fn alignment(&self) -> Alignment {
        Alignment::new(self.halign, self.valign)
    }

    /// Validate and normalize.
    pub fn resolve(&self) -> LayoutResult<ResolvedOptions> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(LayoutError::InvalidSize(self.size));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(LayoutError::InvalidSpacing(self.spacing));
        }
        let curve_segments = usize::try_from(self.curve_segments)
            .ok()
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_CURVE_SEGMENTS);
        let spacing = if self.spacing == 0.0 { 1.0 } else { self.spacing };

        Ok(ResolvedOptions {
            size: self.size,
            curve_segments,
            alignment: self.alignment(),
            kerning: self.kerning,
            spacing,
        })
    }
}

/// Validated layout options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    size: f64,
    curve_segments: usize,
    alignment: Alignment,
    kerning: bool,
    spacing: f64,
}

impl ResolvedOptions {
    /// Ascender height in model units.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Line segments per quadratic curve, at least 1.
    pub fn curve_segments(&self) -> usize {
        self.curve_segments
    }

    /// The anchor pair.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Whether kerning applies.
    pub fn kerning(&self) -> bool {
        self.kerning
    }

    /// Spacing multiplier, strictly positive.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LayoutOptions::default();
        assert_eq!(options.size, 10.0);
        assert_eq!(options.alignment(), Alignment::default());
        assert!(options.kerning);

        let resolved = options.resolve().unwrap();
        assert_eq!(resolved.curve_segments(), 8);
        assert_eq!(resolved.spacing(), 1.0);
    }

    #[test]
    fn test_segment_normalization() {
        for n in [0, -1, i32::MIN] {
            let resolved = LayoutOptions::default().with_curve_segments(n).resolve();
            assert_eq!(resolved.unwrap().curve_segments(), DEFAULT_CURVE_SEGMENTS);
        }
        let resolved = LayoutOptions::default().with_curve_segments(3).resolve();
        assert_eq!(resolved.unwrap().curve_segments(), 3);
    }

    #[test]
    fn test_spacing_normalization() {
        let resolved = LayoutOptions::default().with_spacing(0.0).resolve().unwrap();
        assert_eq!(resolved.spacing(), 1.0);
        let resolved = LayoutOptions::default().with_spacing(1.5).resolve().unwrap();
        assert_eq!(resolved.spacing(), 1.5);
    }

    #[test]
    fn test_rejects_invalid_values() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                LayoutOptions::default().with_size(size).resolve(),
                Err(LayoutError::InvalidSize(_))
            ));
        }
        for spacing in [-0.5, f64::NAN] {
            assert!(matches!(
                LayoutOptions::default().with_spacing(spacing).resolve(),
                Err(LayoutError::InvalidSpacing(_))
            ));
        }
    }

    #[test]
    fn test_alignment_names() {
        for h in HorizontalAlign::ALL {
            assert_eq!(h.as_str().parse::<HorizontalAlign>().unwrap(), h);
            assert_eq!(h.to_string(), h.as_str());
        }
        for v in VerticalAlign::ALL {
            assert_eq!(v.as_str().parse::<VerticalAlign>().unwrap(), v);
        }
        assert_eq!(
            "middle".parse::<VerticalAlign>(),
            Err(LayoutError::UnknownAlignment {
                axis: "vertical",
                value: "middle".into()
            })
        );
        assert!("Left".parse::<HorizontalAlign>().is_err());
    }

    #[test]
    fn test_all_alignments() {
        let all: Vec<_> = Alignment::all().collect();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0], Alignment::default());
        assert_eq!(
            Alignment::new(HorizontalAlign::Right, VerticalAlign::Top).to_string(),
            "right/top"
        );
    }
}
