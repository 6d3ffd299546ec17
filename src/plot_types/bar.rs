use super::PlotBuilder;
use crate::data_types::{CellValue, Color, Dataset};
use crate::scales::{AxisTick, ChartScale};
use serde::Serialize;

/// Mean of a numerical dimension per group of a categorical one.
#[derive(Clone, Debug)]
pub struct BarChart {
    pub group_dimension: String,
    pub value_dimension: String,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub color: Color,
    pub tick_count: usize,
}

impl BarChart {
    pub fn new(group_dimension: impl Into<String>, value_dimension: impl Into<String>) -> Self {
        Self {
            group_dimension: group_dimension.into(),
            value_dimension: value_dimension.into(),
            width: 640.0,
            height: 380.0,
            padding: 0.1,
            color: Color::STEELBLUE,
            tick_count: 10,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BarFrame {
    pub bars: Vec<Bar>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub color: Option<Color>,
}

/// Group means in order of first appearance. Text cells in the value column
/// are skipped; groups without any number are dropped.
pub fn group_means(dataset: &Dataset, group_col: usize, value_col: usize) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    for row in dataset.rows() {
        let key = row[group_col].to_string();
        let pos = match groups.iter().position(|(k, _, _)| *k == key) {
            Some(pos) => pos,
            None => {
                groups.push((key, 0.0, 0));
                groups.len() - 1
            }
        };
        if let CellValue::Number(v) = row[value_col] {
            groups[pos].1 += v;
            groups[pos].2 += 1;
        }
    }

    groups
        .into_iter()
        .filter(|(_, _, n)| *n > 0)
        .map(|(k, sum, n)| (k, sum / n as f64))
        .collect()
}

impl PlotBuilder for BarChart {
    type Output = BarFrame;

    fn build(&self, dataset: &Dataset) -> BarFrame {
        let (Some(group_col), Some(value_col)) = (
            dataset.column_index(&self.group_dimension),
            dataset.column_index(&self.value_dimension),
        ) else {
            return BarFrame::default();
        };

        let means = group_means(dataset, group_col, value_col);
        if means.is_empty() {
            return BarFrame::default();
        }

        let categories: Vec<String> = means.iter().map(|(k, _)| k.clone()).collect();
        let x_scale = ChartScale::new_band(categories, (0.0, self.width), self.padding);
        let (min, max) = means
            .iter()
            .fold((0.0f64, 0.0f64), |(lo, hi), (_, v)| (lo.min(*v), hi.max(*v)));
        let y_scale = ChartScale::new_linear((min, max), (self.height, 0.0));
        let baseline = y_scale.map(0.0);

        let bars = means
            .into_iter()
            .filter_map(|(category, value)| {
                let x = x_scale.position(&category)?;
                let top = y_scale.map(value);
                Some(Bar {
                    x,
                    y: top.min(baseline),
                    width: x_scale.bandwidth(),
                    height: (baseline - top).abs(),
                    category,
                    value,
                })
            })
            .collect();

        BarFrame {
            bars,
            x_ticks: x_scale.axis_ticks(self.tick_count),
            y_ticks: y_scale.axis_ticks(self.tick_count),
            color: Some(self.color),
        }
    }
}
