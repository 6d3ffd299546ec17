use crate::data_types::{CellValue, DimensionDescriptor, Domain};
use d3rs::scale::{BandScale, LinearScale, PointScale, Scale as D3Scale};
use serde::Serialize;

/// Upper bound for any requested tick count.
pub const MAX_TICKS: usize = 50;

/// Evenly spaced positions for an ordered set of categories.
///
/// The underlying point scale only lays points out along an ascending range,
/// so a bottom-up axis is built on the ascending span and mirrored.
#[derive(Clone, Debug)]
pub struct CategoryScale {
    inner: PointScale<String>,
    range: (f32, f32),
}

impl CategoryScale {
    /// `padding` is expressed in units of the step between two points and is
    /// applied at both ends.
    pub fn new(domain: Vec<String>, range: (f32, f32), padding: f32) -> Self {
        let (lo, hi) = (range.0.min(range.1), range.0.max(range.1));
        let inner = PointScale::new()
            .domain(domain)
            .range(lo as f64, hi as f64)
            .padding(padding as f64);
        Self { inner, range }
    }

    pub fn domain(&self) -> &[String] {
        self.inner.get_domain()
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn step(&self) -> f32 {
        self.inner.step() as f32
    }

    pub fn map(&self, value: &str) -> Option<f32> {
        let pos = self.inner.scale(&value.to_string())? as f32;
        let (r0, r1) = self.range;
        Some(if r1 < r0 { r0 + r1 - pos } else { pos })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTick {
    pub label: String,
    /// Position along the axis, in the scale's range.
    pub position: f32,
}

#[derive(Clone, Debug)]
pub enum ChartScale {
    Linear(LinearScale),
    Point(CategoryScale),
    Band(BandScale<String>),
}

impl ChartScale {
    /// A flat domain is widened by 0.5 on each side so every value maps to the
    /// middle of the range instead of producing NaN.
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (mut d_min, mut d_max) = domain;
        if !d_min.is_finite() || !d_max.is_finite() {
            d_min = 0.0;
            d_max = 1.0;
        }
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        Self::Linear(
            LinearScale::new()
                .domain(d_min, d_max)
                .range(range.0 as f64, range.1 as f64),
        )
    }

    pub fn new_point(domain: Vec<String>, range: (f32, f32), padding: f32) -> Self {
        Self::Point(CategoryScale::new(domain, range, padding))
    }

    /// Bands of equal width. Inner and outer padding are the same fraction of
    /// the step.
    pub fn new_band(domain: Vec<String>, range: (f32, f32), padding: f32) -> Self {
        Self::Band(
            BandScale::new()
                .domain(domain)
                .range(range.0 as f64, range.1 as f64)
                .padding(padding as f64),
        )
    }

    /// Scale for one dimension: linear from `[min, max]` or point over the
    /// sorted categories. The range runs from `axis_height` (bottom) to 0 so
    /// larger values sit higher on screen.
    pub fn for_dimension(desc: &DimensionDescriptor, axis_height: f32, padding: f32) -> Self {
        let range = (axis_height, 0.0);
        match &desc.domain {
            Domain::Numerical { min, max } => Self::new_linear((*min, *max), range),
            Domain::Categorical(values) => Self::new_point(values.clone(), range, padding),
        }
    }

    /// Extends a linear domain outward to round tick values.
    pub fn nice(self, count: usize) -> Self {
        match self {
            Self::Linear(s) => Self::Linear(s.nice(Some(count.clamp(1, MAX_TICKS)))),
            other => other,
        }
    }

    /// Numeric domain of a linear scale.
    pub fn domain(&self) -> Option<(f64, f64)> {
        match self {
            Self::Linear(s) => Some(D3Scale::domain(s)),
            _ => None,
        }
    }

    pub fn range(&self) -> (f32, f32) {
        let (r0, r1) = match self {
            Self::Linear(s) => D3Scale::range(s),
            Self::Point(s) => return s.range(),
            Self::Band(s) => s.get_range(),
        };
        (r0 as f32, r1 as f32)
    }

    fn midpoint(&self) -> f32 {
        let (r0, r1) = self.range();
        (r0 + r1) * 0.5
    }

    /// Width of one band, zero for the other scales.
    pub fn bandwidth(&self) -> f32 {
        match self {
            Self::Band(s) => s.bandwidth() as f32,
            _ => 0.0,
        }
    }

    /// Leading edge of the band for `category`, or the point position.
    pub fn position(&self, category: &str) -> Option<f32> {
        match self {
            Self::Point(s) => s.map(category),
            Self::Band(s) => s.scale(&category.to_string()).map(|p| p as f32),
            Self::Linear(_) => None,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        self.map_value(&CellValue::Number(value))
    }

    pub fn invert(&self, pixel: f32) -> Option<f64> {
        match self {
            Self::Linear(s) => D3Scale::invert(s, pixel as f64).filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Maps a typed cell. Always lands inside the range: values the scale does
    /// not know about map to its midpoint.
    pub fn map_value(&self, value: &CellValue) -> f32 {
        let res = match (self, value) {
            (Self::Linear(s), CellValue::Number(v)) => Some(D3Scale::scale(s, *v) as f32),
            (Self::Point(s), CellValue::Text(t)) => s.map(t),
            (Self::Point(s), CellValue::Number(v)) => s.map(&v.to_string()),
            (Self::Band(s), CellValue::Text(t)) => s.scale(t).map(|p| p as f32),
            _ => None,
        };
        let (r0, r1) = self.range();
        match res {
            Some(y) if y.is_finite() => y.clamp(r0.min(r1), r0.max(r1)),
            _ => self.midpoint(),
        }
    }

    /// Round tick values across a linear domain. The count is clamped to
    /// `1..=MAX_TICKS`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => snap_ticks(D3Scale::ticks(s, count.clamp(1, MAX_TICKS))),
            _ => Vec::new(),
        }
    }

    pub fn axis_ticks(&self, count: usize) -> Vec<AxisTick> {
        match self {
            Self::Linear(_) => self
                .ticks(count)
                .into_iter()
                .map(|v| AxisTick {
                    label: format_tick(v),
                    position: self.map(v),
                })
                .collect(),
            Self::Point(s) => s
                .domain()
                .iter()
                .filter_map(|d| {
                    s.map(d).map(|position| AxisTick {
                        label: d.clone(),
                        position,
                    })
                })
                .collect(),
            Self::Band(s) => s
                .get_domain()
                .iter()
                .filter_map(|d| {
                    s.scale(d).map(|edge| AxisTick {
                        label: d.clone(),
                        position: (edge + s.bandwidth() * 0.5) as f32,
                    })
                })
                .collect(),
        }
    }
}

/// Ticks are generated by repeated addition, so `0.1 * 3` drifts. Round each
/// value to the precision of the step.
fn snap_ticks(ticks: Vec<f64>) -> Vec<f64> {
    let step = match ticks.as_slice() {
        [a, b, ..] => (b - a).abs(),
        _ => return ticks,
    };
    if !step.is_finite() || step <= 0.0 {
        return ticks;
    }
    let digits = (-step.log10().floor()).clamp(0.0, 15.0) as i32;
    let scale = 10f64.powi(digits);
    ticks
        .into_iter()
        .map(|v| (v * scale).round() / scale + 0.0)
        .collect()
}

pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else if value.abs() < 0.001 && value.abs() > 0.0 {
        format!("{:.4}", value)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Dimension name -> scale, built once from the full-dataset domains.
#[derive(Clone, Debug, Default)]
pub struct ScaleMap {
    scales: Vec<(String, ChartScale)>,
}

impl ScaleMap {
    pub fn build(descriptors: &[DimensionDescriptor], axis_height: f32, padding: f32) -> Self {
        Self {
            scales: descriptors
                .iter()
                .map(|d| {
                    (
                        d.name.clone(),
                        ChartScale::for_dimension(d, axis_height, padding),
                    )
                })
                .collect(),
        }
    }

    pub fn get(&self, dimension: &str) -> Option<&ChartScale> {
        self.scales
            .iter()
            .find(|(name, _)| name == dimension)
            .map(|(_, s)| s)
    }

    /// Scale at the descriptor's index.
    pub fn by_index(&self, index: usize) -> Option<&ChartScale> {
        self.scales.get(index).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}
