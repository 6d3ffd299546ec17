use crate::scales::MAX_TICKS;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 20.0,
            bottom: 20.0,
            left: 100.0,
        }
    }
}

/// Outer chart geometry and interaction defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Outer width including margins.
    pub width: f32,
    /// Outer height including margins.
    pub height: f32,
    pub margin: Margin,
    /// Padding of categorical axes, in units of inter-point spacing.
    pub category_padding: f32,
    /// Initial sampling density, percent.
    pub density: u32,
    pub line_opacity: f32,
    pub line_width: f32,
    /// Approximate tick count on numerical axes. Read it through
    /// [`tick_count()`](Self::tick_count()), which bounds it.
    pub tick_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 5000.0,
            margin: Margin::default(),
            category_padding: 0.5,
            density: 100,
            line_opacity: 0.4,
            line_width: 1.0,
            tick_count: 10,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid chart configuration")
    }

    /// Horizontal extent available to axes.
    pub fn chart_width(&self) -> f32 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Vertical extent of every axis.
    pub fn axis_height(&self) -> f32 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Requested tick count, clamped to `1..=MAX_TICKS`.
    pub fn tick_count(&self) -> usize {
        self.tick_count.clamp(1, MAX_TICKS)
    }
}
