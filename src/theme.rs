use crate::data_types::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
    pub background: Color,
    pub axis_line: Color,
    pub active_axis_line: Color,
    pub axis_label: Color,
    pub axis_label_size: f32,
    pub title_size: f32,
    pub slider_track: Color,
    pub slider_fill: Color,
    pub slider_label: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xffffff),
            axis_line: Color::BLACK,
            active_axis_line: Color::rgb(0xd62728),
            axis_label: Color::BLACK,
            axis_label_size: 12.0,
            title_size: 12.0,
            slider_track: Color::BLACK.with_alpha(0.15),
            slider_fill: Color::STEELBLUE,
            slider_label: Color::BLACK.with_alpha(0.8),
        }
    }
}
