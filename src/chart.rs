//! Parallel-coordinates session: owns every piece of mutable state and exposes
//! the drag and density handlers the host wires to its events.

use crate::axis_layout::AxisLayout;
use crate::data_types::{
    ChartConfig, ColorMap, Dataset, DimensionDescriptor, DimensionKind, RawTable,
};
use crate::path::PathGenerator;
use crate::reconciler::{ReconcileAction, RenderReconciler};
use crate::rendering::{axis_renders, curve_renders, RenderFrame};
use crate::sampler::Sampler;
use crate::scales::{AxisTick, ScaleMap};
use crate::typing;
use crate::view_controller::ViewController;
use glam::Vec2;
use tracing::{debug, info};

pub struct PcpChart {
    config: ChartConfig,
    dataset: Dataset,
    descriptors: Vec<DimensionDescriptor>,
    scales: ScaleMap,
    ticks: Vec<Vec<AxisTick>>,
    kinds: Vec<DimensionKind>,
    layout: AxisLayout,
    sampler: Sampler,
    colors: ColorMap,
    reconciler: RenderReconciler,
    density: u32,
}

impl PcpChart {
    /// Types the table, builds scales and the natural-order layout, shuffles
    /// once and draws the configured density.
    pub fn new(raw: RawTable, config: ChartConfig) -> Self {
        let sampler = Sampler::new(raw.len());
        Self::build(raw, config, sampler, ColorMap::default())
    }

    /// Like [`new`](Self::new) with a reproducible shuffle.
    pub fn with_seed(raw: RawTable, config: ChartConfig, seed: u64) -> Self {
        let sampler = Sampler::with_seed(raw.len(), seed);
        Self::build(raw, config, sampler, ColorMap::default())
    }

    /// Rebuilds the curve set with the given stroke assignment. Colors are
    /// fixed per curve at creation, so every curve is recreated.
    pub fn with_colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self.reconciler.clear();
        self.redraw_sample();
        self
    }

    fn build(raw: RawTable, config: ChartConfig, sampler: Sampler, colors: ColorMap) -> Self {
        let (dataset, descriptors) = typing::infer(raw);
        let axis_height = config.axis_height();
        let scales = ScaleMap::build(&descriptors, axis_height, config.category_padding);
        let ticks = (0..descriptors.len())
            .map(|i| {
                scales
                    .by_index(i)
                    .map(|s| s.axis_ticks(config.tick_count()))
                    .unwrap_or_default()
            })
            .collect();
        let kinds = descriptors.iter().map(|d| d.kind()).collect();
        let layout = AxisLayout::new(&descriptors, config.chart_width());
        let density = ViewController::clamp_density(config.density as i64);

        info!(
            dimensions = descriptors.len(),
            rows = dataset.len(),
            density,
            "parallel coordinates session created"
        );

        let mut chart = Self {
            config,
            dataset,
            descriptors,
            scales,
            ticks,
            kinds,
            layout,
            sampler,
            colors,
            reconciler: RenderReconciler::new(),
            density,
        };
        chart.redraw_sample();
        chart
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn descriptors(&self) -> &[DimensionDescriptor] {
        &self.descriptors
    }

    pub fn scales(&self) -> &ScaleMap {
        &self.scales
    }

    pub fn layout(&self) -> &AxisLayout {
        &self.layout
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn reconciler(&self) -> &RenderReconciler {
        &self.reconciler
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    /// Row indices of the current sample, in shuffle order.
    pub fn sample(&self) -> &[usize] {
        self.sampler.sample(self.density as i64)
    }

    /// Polyline for one dataset row under the current axis order.
    pub fn path_for_row(&self, row: usize) -> Vec<Vec2> {
        let generator = PathGenerator::new(&self.layout, &self.scales);
        generator.generate(self.dataset.row(row).unwrap_or(&[]))
    }

    pub fn on_drag_start(&mut self, dimension: &str) -> bool {
        self.layout.drag_start(dimension)
    }

    /// Moves an axis and redraws every current curve; never re-samples.
    pub fn on_drag_move(&mut self, dimension: &str, pointer_x: f32) -> Vec<ReconcileAction> {
        if !self.layout.drag_move(dimension, pointer_x) {
            return Vec::new();
        }
        let generator = PathGenerator::new(&self.layout, &self.scales);
        let dataset = &self.dataset;
        self.reconciler
            .refresh(|row, out| generator.generate_into(dataset.row(row).unwrap_or(&[]), out))
    }

    pub fn on_drag_end(&mut self, dimension: &str) -> bool {
        self.layout.drag_end(dimension)
    }

    /// Applies a new density (clamped to `[1, 100]`) and reconciles the curve
    /// set against the resulting sample.
    pub fn on_density_change(&mut self, percentage: i64) -> Vec<ReconcileAction> {
        self.density = ViewController::clamp_density(percentage);
        let actions = self.redraw_sample();
        debug!(
            density = self.density,
            sample = self.reconciler.len(),
            "density changed"
        );
        actions
    }

    fn redraw_sample(&mut self) -> Vec<ReconcileAction> {
        let sample = self.sampler.sample(self.density as i64);
        let generator = PathGenerator::new(&self.layout, &self.scales);
        let dataset = &self.dataset;
        let colors = &self.colors;
        self.reconciler.reconcile(
            sample,
            |row, out| generator.generate_into(dataset.row(row).unwrap_or(&[]), out),
            |row| colors.resolve(dataset, dataset.row(row).unwrap_or(&[])),
        )
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            origin: Vec2::new(self.config.margin.left, self.config.margin.top),
            width: self.config.chart_width(),
            height: self.config.axis_height(),
            density: self.density,
            line_width: self.config.line_width,
            line_opacity: self.config.line_opacity,
            curves: curve_renders(&self.reconciler),
            axes: axis_renders(&self.layout, &self.kinds, &self.ticks),
        }
    }
}
