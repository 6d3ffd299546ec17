mod common;

use common::cars;
use pcp_chart::data_types::{Margin, CATEGORY10};
use pcp_chart::typing::infer;
use pcp_chart::{CellValue, ChartConfig, Color, ColorMap, RawTable};

#[test]
fn test_config_defaults() {
    let config = ChartConfig::default();
    assert_eq!(config.width, 1000.0);
    assert_eq!(config.height, 5000.0);
    assert_eq!(config.margin, Margin::default());
    assert_eq!(config.category_padding, 0.5);
    assert_eq!(config.density, 100);
    assert_eq!(config.chart_width(), 880.0);
    assert_eq!(config.axis_height(), 4950.0);
}

#[test]
fn test_config_from_partial_json() {
    let config =
        ChartConfig::from_json_str(r#"{"width": 800, "margin": {"left": 50}, "density": 25}"#)
            .unwrap();
    assert_eq!(config.width, 800.0);
    assert_eq!(config.height, 5000.0);
    assert_eq!(config.margin.left, 50.0);
    assert_eq!(config.margin.top, 30.0);
    assert_eq!(config.density, 25);
    assert_eq!(config.chart_width(), 730.0);

    assert!(ChartConfig::from_json_str("{width: 1}").is_err());
}

#[test]
fn test_undersized_config_is_floored() {
    let mut config = ChartConfig::default();
    config.width = 50.0;
    config.height = 10.0;
    assert_eq!(config.chart_width(), 0.0);
    assert_eq!(config.axis_height(), 0.0);
}

#[test]
fn test_color_hex() {
    assert_eq!(Color::from_hex("#4682b4").unwrap(), Color::STEELBLUE);
    assert_eq!(Color::STEELBLUE.to_hex(), "#4682b4");
    assert!(Color::from_hex("#zzz").is_err());
    assert!(Color::from_hex("#12345").is_err());

    let translucent = Color::from_hex("#11223344").unwrap();
    assert!((translucent.a - 0x44 as f32 / 255.0).abs() < 1e-6);
    assert_eq!(translucent.to_hex(), "#11223344");

    assert_eq!(serde_json::to_string(&Color::BLACK).unwrap(), "\"#000000\"");
    let parsed: Color = serde_json::from_str("\"#ff7f0e\"").unwrap();
    assert_eq!(parsed, CATEGORY10[1]);
}

#[test]
fn test_raw_table_from_json() {
    let raw = RawTable::from_json_str(
        r#"[
            {"MPG": 18, "Origin": "American", "HP": null},
            {"MPG": 24.5, "Origin": "Japanese", "HP": 95}
        ]"#,
    )
    .unwrap();

    assert_eq!(raw.columns, vec!["MPG", "Origin", "HP"]);
    assert_eq!(raw.rows[0], vec!["18", "American", ""]);
    assert_eq!(raw.rows[1][0], "24.5");
    assert_eq!(raw.len(), 2);

    assert!(RawTable::from_json_str("{}").is_err());
    assert!(RawTable::from_json_str("[1, 2]").is_err());
    assert!(RawTable::from_json_str("not json").is_err());
    assert!(RawTable::from_json_str("[]").unwrap().is_empty());
}

#[test]
fn test_cell_value_display() {
    assert_eq!(CellValue::Number(3.0).to_string(), "3");
    assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
    assert_eq!(CellValue::Text("x".into()).to_string(), "x");
    assert_eq!(CellValue::Text("x".into()).as_number(), None);
}

#[test]
fn test_palette_follows_first_appearance() {
    let (dataset, _) = infer(cars());
    let colors = ColorMap::from_palette("Origin", &dataset, &CATEGORY10);

    assert_eq!(colors.resolve_value("American"), CATEGORY10[0]);
    assert_eq!(colors.resolve_value("Japanese"), CATEGORY10[1]);
    assert_eq!(colors.resolve_value("European"), CATEGORY10[2]);
    assert_eq!(colors.resolve_value("Martian"), Color::STEELBLUE);

    let row = dataset.row(3).unwrap();
    assert_eq!(colors.resolve(&dataset, row), CATEGORY10[2]);
}

#[test]
fn test_palette_cycles() {
    let (dataset, _) = infer(cars());
    let colors = ColorMap::from_palette("Car", &dataset, &CATEGORY10[..2]);
    assert_eq!(colors.resolve_value("toyota corona mark ii"), CATEGORY10[0]);
    assert_eq!(colors.colors.len(), 8);

    let empty = ColorMap::from_palette("Origin", &dataset, &[]);
    assert!(empty.colors.is_empty());
}
