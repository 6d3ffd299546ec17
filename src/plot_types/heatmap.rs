// Correlation heatmap

use super::PlotBuilder;
use crate::data_types::{Color, Dataset};
use crate::scales::{AxisTick, ChartScale};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Red-to-blue diverging scheme, eleven stops.
const RD_BU: [u32; 11] = [
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de, 0x4393c3,
    0x2166ac, 0x053061,
];

/// Diverging color for a correlation: +1 is deep red, -1 deep blue, 0 neutral.
pub fn correlation_color(value: f64) -> Color {
    let t = ((1.0 - value.clamp(-1.0, 1.0)) / 2.0) as f32;
    let scaled = t * (RD_BU.len() - 1) as f32;
    let i = (scaled.floor() as usize).min(RD_BU.len() - 2);
    Color::rgb(RD_BU[i]).lerp(Color::rgb(RD_BU[i + 1]), scaled - i as f32)
}

/// Pearson product-moment correlation. A zero denominator yields 0.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;

    let (mut num, mut sx, mut sy) = (0.0, 0.0, 0.0);
    for (a, b) in x[..n].iter().zip(&y[..n]) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        num += dx * dy;
        sx += dx * dx;
        sy += dy * dy;
    }

    let denominator = (sx * sy).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        num / denominator
    }
}

#[derive(Clone, Debug)]
pub struct CorrelationHeatmap {
    pub features: Vec<String>,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl CorrelationHeatmap {
    pub fn new<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            features: features.into_iter().map(Into::into).collect(),
            width: 400.0,
            height: 400.0,
            padding: 0.05,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub feature_x: String,
    pub feature_y: String,
    /// Rounded to two decimals.
    pub value: f64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HeatmapFrame {
    pub cells: Vec<HeatmapCell>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    /// Legend gradient stops at -1, 0 and 1.
    pub legend: Vec<(f64, Color)>,
}

impl PlotBuilder for CorrelationHeatmap {
    type Output = HeatmapFrame;

    fn build(&self, dataset: &Dataset) -> HeatmapFrame {
        let features: Vec<(String, usize)> = self
            .features
            .iter()
            .filter_map(|f| match dataset.column_index(f) {
                Some(col) => Some((f.clone(), col)),
                None => {
                    debug!(feature = %f, "heatmap feature not in dataset");
                    None
                }
            })
            .collect();

        // Only rows where every feature is a number take part.
        let mut vectors: Vec<Vec<f64>> = vec![Vec::new(); features.len()];
        for row in dataset.rows() {
            let values: Option<Vec<f64>> = features
                .iter()
                .map(|(_, col)| row[*col].as_number())
                .collect();
            if let Some(values) = values {
                for (vec, v) in vectors.iter_mut().zip(values) {
                    vec.push(v);
                }
            }
        }

        let names: Vec<String> = features.iter().map(|(f, _)| f.clone()).collect();
        let x_scale = ChartScale::new_band(names.clone(), (0.0, self.width), self.padding);
        let y_scale = ChartScale::new_band(names.clone(), (0.0, self.height), self.padding);

        let n = names.len();
        let cells = (0..n * n)
            .into_par_iter()
            .filter_map(|idx| {
                let (i, j) = (idx / n, idx % n);
                let corr = pearson(&vectors[i], &vectors[j]);
                let value = (corr * 100.0).round() / 100.0;
                Some(HeatmapCell {
                    x: x_scale.position(&names[i])?,
                    y: y_scale.position(&names[j])?,
                    width: x_scale.bandwidth(),
                    height: y_scale.bandwidth(),
                    color: correlation_color(value),
                    feature_x: names[i].clone(),
                    feature_y: names[j].clone(),
                    value,
                })
            })
            .collect();

        HeatmapFrame {
            cells,
            x_ticks: x_scale.axis_ticks(n),
            y_ticks: y_scale.axis_ticks(n),
            legend: [-1.0, 0.0, 1.0]
                .into_iter()
                .map(|v| (v, correlation_color(v)))
                .collect(),
        }
    }
}
