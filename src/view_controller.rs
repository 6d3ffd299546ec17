/// ViewController holds the arithmetic behind interactions (axis drag, density
/// slider) independently of any rendering backend to facilitate testing.
pub struct ViewController;

impl ViewController {
    pub const MIN_DENSITY: u32 = 1;
    pub const MAX_DENSITY: u32 = 100;

    /// Clamps a pointer position to the horizontal extent of the chart.
    pub fn clamp_drag_x(raw_x: f32, chart_width: f32) -> f32 {
        if raw_x.is_nan() {
            return 0.0;
        }
        raw_x.clamp(0.0, chart_width.max(0.0))
    }

    /// Clamps a host-supplied density to `[1, 100]`.
    pub fn clamp_density(percentage: i64) -> u32 {
        percentage.clamp(Self::MIN_DENSITY as i64, Self::MAX_DENSITY as i64) as u32
    }

    /// `round(percentage / 100 * total)`, halves rounded up.
    pub fn sample_size(percentage: u32, total: usize) -> usize {
        let p = percentage.min(Self::MAX_DENSITY) as u128;
        ((p * total as u128 * 2 + 100) / 200) as usize
    }

    /// Evenly spreads `count` axes over `[0, chart_width]`, first axis at 0 and
    /// last at `chart_width`. A single axis sits at 0.
    pub fn initial_axis_positions(count: usize, chart_width: f32) -> Vec<f32> {
        if count <= 1 {
            return vec![0.0; count];
        }
        let spacing = chart_width.max(0.0) / (count - 1) as f32;
        (0..count).map(|i| spacing * i as f32).collect()
    }

    /// Maps a pixel offset along a slider track to a density percentage.
    pub fn map_pixels_to_density(pixels: f32, total_pixels: f32) -> u32 {
        if total_pixels <= 0.0 || pixels.is_nan() {
            return Self::MIN_DENSITY;
        }
        let pct = (pixels / total_pixels).clamp(0.0, 1.0) as f64;
        let span = (Self::MAX_DENSITY - Self::MIN_DENSITY) as f64;
        Self::MIN_DENSITY + (span * pct).round() as u32
    }
}
