// Backend-agnostic render output handed to the host renderer.

use crate::axis_layout::AxisLayout;
use crate::data_types::{Color, DimensionKind};
use crate::reconciler::{RenderReconciler, RowKey};
use crate::scales::AxisTick;
use eyre::{Result, WrapErr};
use glam::Vec2;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurveRender {
    pub key: RowKey,
    pub row: usize,
    /// Plot-area coordinates, one per axis, left to right.
    pub points: Vec<Vec2>,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisRender {
    pub dimension: String,
    pub kind: DimensionKind,
    pub x_position: f32,
    /// Drawn above its siblings while being dragged.
    pub raised: bool,
    pub ticks: Vec<AxisTick>,
}

/// Everything the host needs to draw one frame. Coordinates are relative to
/// the plot area whose top-left corner sits at `origin`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderFrame {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    pub density: u32,
    pub line_width: f32,
    pub line_opacity: f32,
    pub curves: Vec<CurveRender>,
    pub axes: Vec<AxisRender>,
}

impl RenderFrame {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).wrap_err("failed to serialize render frame")
    }

    /// Axes in paint order: the raised axis last.
    pub fn axes_paint_order(&self) -> impl Iterator<Item = &AxisRender> {
        self.axes
            .iter()
            .filter(|a| !a.raised)
            .chain(self.axes.iter().filter(|a| a.raised))
    }
}

pub(crate) fn curve_renders(reconciler: &RenderReconciler) -> Vec<CurveRender> {
    reconciler
        .curves()
        .map(|c| CurveRender {
            key: c.key,
            row: c.row,
            points: c.points.clone(),
            color: c.color,
        })
        .collect()
}

/// Axes left to right. `ticks` and `kinds` are indexed by natural column order.
pub(crate) fn axis_renders(
    layout: &AxisLayout,
    kinds: &[DimensionKind],
    ticks: &[Vec<AxisTick>],
) -> Vec<AxisRender> {
    let dragging = layout.dragging();
    layout
        .ordered()
        .map(|(column, state)| AxisRender {
            dimension: state.dimension.clone(),
            kind: kinds
                .get(column)
                .copied()
                .unwrap_or(DimensionKind::Categorical),
            x_position: state.x_position,
            raised: dragging == Some(state.dimension.as_str()),
            ticks: ticks.get(column).cloned().unwrap_or_default(),
        })
        .collect()
}
