//! Marker color scales.
//!
//! Two colorings are used for map markers:
//! - [`LandCoverColorScale`]: the land-cover code's relative position in the
//!   dataset's code range, bucketed into 16 fixed colors from green to red.
//! - [`GradientConfig`]: a continuous color-stop gradient, used for NDVI.

use serde::{Deserialize, Serialize};

use crate::error::{PhenoError, PhenoResult};
use crate::land_cover::LandCoverCode;

/// Override color for explicitly selected rows.
pub const SELECTED_COLOR: &str = "#1500FA";

/// One land-cover color bucket: scale values `<= upper` land here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBucket {
    pub upper: f64,
    pub color: &'static str,
}

const fn bucket(upper: f64, color: &'static str) -> ColorBucket {
    ColorBucket { upper, color }
}

/// Buckets in ascending order. The last one also takes anything above 0.90.
pub const LAND_COVER_BUCKETS: [ColorBucket; 16] = [
    bucket(0.06, "#26EC04"),
    bucket(0.12, "#8FDB44"),
    bucket(0.18, "#A5D643"),
    bucket(0.24, "#B8D343"),
    bucket(0.30, "#B8D343"),
    bucket(0.36, "#DBCD44"),
    bucket(0.42, "#E1CD44"),
    bucket(0.48, "#F0CB45"),
    bucket(0.54, "#F3C644"),
    bucket(0.60, "#F2BE41"),
    bucket(0.66, "#F0AE3D"),
    bucket(0.72, "#EFA73B"),
    bucket(0.78, "#EE9F39"),
    bucket(0.84, "#ED8934"),
    bucket(0.90, "#E95729"),
    bucket(1.0, "#FD0101"),
];

/// Land-cover code to bucket color mapping.
///
/// The min and max codes are fixed when the dataset loads, so colors are
/// stable across filtered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandCoverColorScale {
    min: LandCoverCode,
    max: LandCoverCode,
}

impl LandCoverColorScale {
    pub fn new(min: LandCoverCode, max: LandCoverCode) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Scale spanning the given codes, or None when there are none.
    pub fn from_codes<I>(codes: I) -> Option<Self>
    where
        I: IntoIterator<Item = LandCoverCode>,
    {
        let mut iter = codes.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c)));
        Some(Self { min, max })
    }

    pub fn min(&self) -> LandCoverCode {
        self.min
    }

    pub fn max(&self) -> LandCoverCode {
        self.max
    }

    /// Relative position of `code` in [min, max]; 0 when the range is empty.
    pub fn scale(&self, code: LandCoverCode) -> f64 {
        let range = self.max.value() as i64 - self.min.value() as i64;
        if range == 0 {
            return 0.0;
        }
        (code.value() as i64 - self.min.value() as i64) as f64 / range as f64
    }

    pub fn bucket_index(&self, code: LandCoverCode) -> usize {
        let scale = self.scale(code);
        LAND_COVER_BUCKETS
            .iter()
            .position(|b| scale <= b.upper)
            .unwrap_or(LAND_COVER_BUCKETS.len() - 1)
    }

    pub fn color_for(&self, code: LandCoverCode) -> &'static str {
        LAND_COVER_BUCKETS[self.bucket_index(code)].color
    }

    /// One color per code, in input order, with selected rows overridden.
    pub fn colors(
        &self,
        codes: &[LandCoverCode],
        selected: &[usize],
    ) -> PhenoResult<Vec<&'static str>> {
        let mut colors: Vec<&'static str> = codes.iter().map(|c| self.color_for(*c)).collect();
        apply_selection(&mut colors, selected, SELECTED_COLOR)?;
        Ok(colors)
    }
}

/// Overwrite the colors at `selected` indices.
pub fn apply_selection<T: Clone>(colors: &mut [T], selected: &[usize], highlight: T) -> PhenoResult<()> {
    for &index in selected {
        match colors.get_mut(index) {
            Some(slot) => *slot = highlight.clone(),
            None => {
                return Err(PhenoError::invalid_selection(
                    "selected",
                    format!("row {} is out of range for {} rows", index, colors.len()),
                ))
            }
        }
    }
    Ok(())
}

/// Continuous gradient color mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientConfig {
    /// Color stops defining the gradient
    pub stops: Vec<ColorStop>,
}

impl GradientConfig {
    /// Brown to green ramp over the NDVI domain [-1, 1].
    pub fn ndvi() -> Self {
        Self {
            stops: vec![
                ColorStop::new(-1.0, "#8C510A"),
                ColorStop::new(0.0, "#F6E8C3"),
                ColorStop::new(0.3, "#B8E186"),
                ColorStop::new(0.6, "#4DAC26"),
                ColorStop::new(1.0, "#1B5E20"),
            ],
        }
    }

    /// Interpolate color for a given value, clamping outside the stops.
    ///
    /// NaN maps to the first stop.
    pub fn interpolate(&self, value: f64) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::transparent(),
        };

        if value.is_nan() || value <= first.value {
            return first.color.clone();
        }
        if value >= last.value {
            return last.color.clone();
        }

        for pair in self.stops.windows(2) {
            let (low, high) = (&pair[0], &pair[1]);
            if value <= high.value {
                let t = (value - low.value) / (high.value - low.value);
                return low.color.lerp(&high.color, t);
            }
        }

        last.color.clone()
    }
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorStop {
    /// The data value at this stop
    pub value: f64,

    /// The color at this stop
    pub color: Color,
}

impl ColorStop {
    pub fn new(value: f64, hex: &str) -> Self {
        Self {
            value,
            color: Color::Hex(hex.to_string()),
        }
    }
}

/// Color representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Hex string: "#RRGGBB" or "#RRGGBBAA"
    Hex(String),

    /// Explicit RGBA
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    pub fn transparent() -> Self {
        Color::Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(&self) -> (u8, u8, u8, u8) {
        match self {
            Color::Hex(s) => parse_hex_color(s),
            Color::Rgba { r, g, b, a } => (*r, *g, *b, *a),
        }
    }

    /// "#RRGGBB" form, dropping alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_rgba();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Linear interpolation between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (r1, g1, b1, a1) = self.to_rgba();
        let (r2, g2, b2, a2) = other.to_rgba();
        let lerp_u8 =
            |a: u8, b: u8| -> u8 { ((a as f64) * (1.0 - t) + (b as f64) * t).round() as u8 };
        Color::Rgba {
            r: lerp_u8(r1, r2),
            g: lerp_u8(g1, g2),
            b: lerp_u8(b1, b2),
            a: lerp_u8(a1, a2),
        }
    }
}

fn parse_hex_color(s: &str) -> (u8, u8, u8, u8) {
    let s = s.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>, default: u8| {
        s.get(range)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(default)
    };

    match s.len() {
        6 => (channel(0..2, 0), channel(2..4, 0), channel(4..6, 0), 255),
        8 => (
            channel(0..2, 0),
            channel(2..4, 0),
            channel(4..6, 0),
            channel(6..8, 255),
        ),
        _ => (0, 0, 0, 255),
    }
}
