use crate::chart::PcpChart;
use crate::rendering::RenderFrame;
use crate::view_controller::ViewController;

/// Horizontal distance within which a press grabs an axis.
pub const AXIS_HIT_RADIUS: f32 = 8.0;

/// Density slider strip, in view-local coordinates, above the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SliderGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SliderGeometry {
    pub fn for_frame(frame: &RenderFrame) -> Self {
        Self {
            left: frame.origin.x,
            top: 4.0,
            width: 300.0_f32.min(frame.width.max(1.0)),
            height: 6.0,
        }
    }

    /// Generous vertical band so the thin track stays easy to grab.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left - 4.0
            && x <= self.left + self.width + 4.0
            && y >= self.top - 4.0
            && y <= self.top + self.height + 4.0
    }

    pub fn density_at(&self, x: f32) -> u32 {
        ViewController::map_pixels_to_density(x - self.left, self.width)
    }
}

/// Axis under a view-local point, nearest first, with the horizontal offset of
/// the point from the axis line. The band extends above the plot area to cover
/// the dimension title.
pub(crate) fn hit_axis(frame: &RenderFrame, x: f32, y: f32) -> Option<(String, f32)> {
    let top = frame.origin.y - 24.0;
    let bottom = frame.origin.y + frame.height;
    if y < top || y > bottom {
        return None;
    }
    frame
        .axes
        .iter()
        .map(|a| (a, x - (frame.origin.x + a.x_position)))
        .filter(|(_, d)| d.abs() <= AXIS_HIT_RADIUS)
        .min_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
        .map(|(a, d)| (a.dimension.clone(), d))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum PointerCapture {
    #[default]
    None,
    /// `grab_offset` is the pointer's distance from the axis line at press.
    Axis { dimension: String, grab_offset: f32 },
    Slider,
}

/// Translates pointer events into the chart's drag and density handlers.
#[derive(Debug, Default)]
pub(crate) struct PcpInputHandler {
    capture: PointerCapture,
}

impl PcpInputHandler {
    /// Returns whether the chart changed.
    pub fn pointer_down(&mut self, chart: &mut PcpChart, x: f32, y: f32) -> bool {
        let frame = chart.frame();
        let slider = SliderGeometry::for_frame(&frame);
        if slider.contains(x, y) {
            self.capture = PointerCapture::Slider;
            chart.on_density_change(slider.density_at(x) as i64);
            return true;
        }
        if let Some((dimension, grab_offset)) = hit_axis(&frame, x, y) {
            chart.on_drag_start(&dimension);
            self.capture = PointerCapture::Axis {
                dimension,
                grab_offset,
            };
            return true;
        }
        false
    }

    pub fn pointer_move(&mut self, chart: &mut PcpChart, x: f32) -> bool {
        match &self.capture {
            PointerCapture::Axis {
                dimension,
                grab_offset,
            } => {
                let plot_x = x - grab_offset - chart.config().margin.left;
                chart.on_drag_move(dimension, plot_x);
                true
            }
            PointerCapture::Slider => {
                let slider = SliderGeometry::for_frame(&chart.frame());
                let density = slider.density_at(x);
                if density == chart.density() {
                    return false;
                }
                chart.on_density_change(density as i64);
                true
            }
            PointerCapture::None => false,
        }
    }

    pub fn pointer_up(&mut self, chart: &mut PcpChart) -> bool {
        match std::mem::take(&mut self.capture) {
            PointerCapture::Axis { dimension, .. } => chart.on_drag_end(&dimension),
            PointerCapture::Slider => true,
            PointerCapture::None => false,
        }
    }

    pub fn is_captured(&self) -> bool {
        self.capture != PointerCapture::None
    }
}
