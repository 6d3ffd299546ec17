//! pcp_chart: parallel-coordinates engine with draggable axes and
//! progressive-density sampling, plus single-pass peer charts.

pub mod axis_layout;
pub mod chart;
#[cfg(feature = "gpui")]
pub mod chart_view;
pub mod data_types;
pub mod path;
pub mod plot_types;
#[cfg(feature = "polars")]
pub mod polars_source;
pub mod reconciler;
pub mod rendering;
pub mod sampler;
pub mod scales;
pub mod theme;
pub mod typing;
pub mod view_controller;

pub use axis_layout::{AxisLayout, AxisState, DragState};
pub use chart::PcpChart;
#[cfg(feature = "gpui")]
pub use chart_view::{PcpHandle, PcpView};
pub use data_types::{
    CellValue, ChartConfig, Color, ColorMap, Dataset, DimensionDescriptor, DimensionKind, Domain,
    RawTable,
};
pub use plot_types::{BarChart, CorrelationHeatmap, PlotBuilder, Scatterplot};
pub use reconciler::{Curve, ReconcileAction, RenderReconciler, RowKey};
pub use rendering::{AxisRender, CurveRender, RenderFrame};
pub use sampler::Sampler;
pub use scales::{ChartScale, ScaleMap};
