//! Live left-to-right ordering of the parallel axes.

use crate::data_types::DimensionDescriptor;
use crate::view_controller::ViewController;
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisState {
    pub dimension: String,
    pub x_position: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Index of the dragged axis in natural column order.
    Dragging(usize),
}

/// Dimension -> horizontal position, mutated only by drag.
///
/// `states` stays in natural column order; `order` holds indices into it
/// sorted by `x_position`. Ties keep their previous relative order.
#[derive(Clone, Debug, Default)]
pub struct AxisLayout {
    states: Vec<AxisState>,
    order: Vec<usize>,
    chart_width: f32,
    drag: DragState,
}

impl AxisLayout {
    /// Natural column order, axes spread evenly over `[0, chart_width]`.
    pub fn new(descriptors: &[DimensionDescriptor], chart_width: f32) -> Self {
        let positions = ViewController::initial_axis_positions(descriptors.len(), chart_width);
        let states = descriptors
            .iter()
            .zip(positions)
            .map(|(d, x)| AxisState {
                dimension: d.name.clone(),
                x_position: x,
            })
            .collect();
        Self {
            states,
            order: (0..descriptors.len()).collect(),
            chart_width: chart_width.max(0.0),
            drag: DragState::Idle,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn chart_width(&self) -> f32 {
        self.chart_width
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Dimension currently being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        match self.drag {
            DragState::Dragging(i) => self.states.get(i).map(|s| s.dimension.as_str()),
            DragState::Idle => None,
        }
    }

    fn index_of(&self, dimension: &str) -> Option<usize> {
        self.states.iter().position(|s| s.dimension == dimension)
    }

    pub fn position(&self, dimension: &str) -> Option<f32> {
        self.index_of(dimension).map(|i| self.states[i].x_position)
    }

    /// Axes left to right, paired with their natural column index.
    pub fn ordered(&self) -> impl Iterator<Item = (usize, &AxisState)> + '_ {
        self.order.iter().map(move |&i| (i, &self.states[i]))
    }

    /// Dimension names left to right.
    pub fn order(&self) -> Vec<&str> {
        self.ordered().map(|(_, s)| s.dimension.as_str()).collect()
    }

    pub fn drag_start(&mut self, dimension: &str) -> bool {
        match self.index_of(dimension) {
            Some(i) => {
                self.drag = DragState::Dragging(i);
                true
            }
            None => {
                debug!(dimension, "drag start on unknown dimension ignored");
                false
            }
        }
    }

    /// Moves `dimension` to the clamped `raw_x` and re-sorts. Returns whether
    /// the layout was touched; unknown dimensions are a no-op.
    ///
    /// A move without a preceding start is still applied: the host owns the
    /// pointer capture and the last applied position is authoritative.
    pub fn drag_move(&mut self, dimension: &str, raw_x: f32) -> bool {
        let Some(i) = self.index_of(dimension) else {
            debug!(dimension, "drag move on unknown dimension ignored");
            return false;
        };
        self.states[i].x_position = ViewController::clamp_drag_x(raw_x, self.chart_width);
        self.resort();
        true
    }

    pub fn drag_end(&mut self, dimension: &str) -> bool {
        if self.index_of(dimension).is_none() {
            debug!(dimension, "drag end on unknown dimension ignored");
            return false;
        }
        if self.dragging() != Some(dimension) {
            debug!(dimension, "drag end without matching start");
        }
        self.drag = DragState::Idle;
        true
    }

    fn resort(&mut self) {
        let states = &self.states;
        self.order
            .sort_by(|&a, &b| states[a].x_position.total_cmp(&states[b].x_position));
    }
}
