// Plot types module

pub mod bar;
pub mod heatmap;
pub mod scatter;

pub use bar::{Bar, BarChart, BarFrame};
pub use heatmap::{CorrelationHeatmap, HeatmapCell, HeatmapFrame};
pub use scatter::{LegendEntry, ScatterFrame, ScatterPoint, Scatterplot};

use crate::data_types::Dataset;

/// Single-pass chart over a typed dataset. Implementations hold no state
/// between builds.
pub trait PlotBuilder {
    type Output;

    fn build(&self, dataset: &Dataset) -> Self::Output;
}
