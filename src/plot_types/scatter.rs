use super::PlotBuilder;
use crate::data_types::{CellValue, Color, ColorMap, Dataset};
use crate::scales::{AxisTick, ChartScale};
use serde::Serialize;
use std::collections::HashSet;

/// Two numerical dimensions against each other, colored by a grouping.
#[derive(Clone, Debug)]
pub struct Scatterplot {
    pub x_dimension: String,
    pub y_dimension: String,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    pub colors: ColorMap,
    /// Groups switched off from the legend.
    pub hidden_groups: HashSet<String>,
    pub tick_count: usize,
}

impl Scatterplot {
    pub fn new(x_dimension: impl Into<String>, y_dimension: impl Into<String>) -> Self {
        Self {
            x_dimension: x_dimension.into(),
            y_dimension: y_dimension.into(),
            width: 580.0,
            height: 400.0,
            radius: 5.0,
            colors: ColorMap::default(),
            hidden_groups: HashSet::new(),
            tick_count: 10,
        }
    }

    pub fn with_colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Flips a legend entry. Returns whether the group is now visible.
    pub fn toggle_group(&mut self, group: &str) -> bool {
        if self.hidden_groups.remove(group) {
            true
        } else {
            self.hidden_groups.insert(group.to_string());
            false
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
    pub group: Option<String>,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub group: String,
    pub color: Color,
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScatterFrame {
    pub points: Vec<ScatterPoint>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub legend: Vec<LegendEntry>,
}

impl PlotBuilder for Scatterplot {
    type Output = ScatterFrame;

    fn build(&self, dataset: &Dataset) -> ScatterFrame {
        let (Some(x_col), Some(y_col)) = (
            dataset.column_index(&self.x_dimension),
            dataset.column_index(&self.y_dimension),
        ) else {
            return ScatterFrame::default();
        };
        let group_col = self
            .colors
            .dimension
            .as_deref()
            .and_then(|d| dataset.column_index(d));

        let rows: Vec<(usize, f64, f64)> = dataset
            .rows()
            .enumerate()
            .filter_map(|(i, row)| match (&row[x_col], &row[y_col]) {
                (CellValue::Number(x), CellValue::Number(y)) => Some((i, *x, *y)),
                _ => None,
            })
            .collect();
        if rows.is_empty() {
            return ScatterFrame::default();
        }

        let x_domain = extent(rows.iter().map(|r| r.1));
        let y_domain = extent(rows.iter().map(|r| r.2));
        let x_scale = ChartScale::new_linear(x_domain, (0.0, self.width)).nice(self.tick_count);
        let y_scale = ChartScale::new_linear(y_domain, (self.height, 0.0)).nice(self.tick_count);

        let mut legend: Vec<LegendEntry> = Vec::new();
        let points = rows
            .into_iter()
            .map(|(i, x, y)| {
                let group = group_col
                    .and_then(|col| dataset.cell(i, col))
                    .map(|v| v.to_string());
                let color = group
                    .as_deref()
                    .map_or(self.colors.default, |g| self.colors.resolve_value(g));
                let visible = group
                    .as_deref()
                    .map_or(true, |g| !self.hidden_groups.contains(g));

                if let Some(g) = &group {
                    if !legend.iter().any(|e| &e.group == g) {
                        legend.push(LegendEntry {
                            group: g.clone(),
                            color,
                            active: visible,
                        });
                    }
                }

                ScatterPoint {
                    row: i,
                    x: x_scale.map(x),
                    y: y_scale.map(y),
                    radius: self.radius,
                    color,
                    group,
                    visible,
                }
            })
            .collect();

        ScatterFrame {
            points,
            x_ticks: x_scale.axis_ticks(self.tick_count),
            y_ticks: y_scale.axis_ticks(self.tick_count),
            legend,
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
