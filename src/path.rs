use crate::axis_layout::AxisLayout;
use crate::data_types::CellValue;
use crate::scales::ScaleMap;
use glam::Vec2;

/// Turns rows into polylines across the axes in their current order.
pub struct PathGenerator<'a> {
    layout: &'a AxisLayout,
    scales: &'a ScaleMap,
}

impl<'a> PathGenerator<'a> {
    pub fn new(layout: &'a AxisLayout, scales: &'a ScaleMap) -> Self {
        Self { layout, scales }
    }

    /// One point per axis, left to right: `x` is the axis position, `y` the
    /// row's scaled value on that axis. Straight segments, no smoothing.
    pub fn generate(&self, row: &[CellValue]) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.layout.len());
        self.generate_into(row, &mut points);
        points
    }

    /// Same as [`generate`](Self::generate), reusing `out`'s allocation.
    pub fn generate_into(&self, row: &[CellValue], out: &mut Vec<Vec2>) {
        out.clear();
        for (column, axis) in self.layout.ordered() {
            let y = match (self.scales.by_index(column), row.get(column)) {
                (Some(scale), Some(value)) => scale.map_value(value),
                (Some(scale), None) => {
                    let (r0, r1) = scale.range();
                    (r0 + r1) * 0.5
                }
                _ => 0.0,
            };
            out.push(Vec2::new(axis.x_position, y));
        }
    }
}
