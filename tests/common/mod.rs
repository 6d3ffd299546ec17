#![allow(dead_code)]

use pcp_chart::{ChartConfig, RawTable};

pub fn table(columns: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

pub fn cars() -> RawTable {
    table(
        &["Car", "MPG", "Cylinders", "Weight", "Origin"],
        &[
            &["chevrolet chevelle malibu", "18", "8", "3504", "American"],
            &["buick skylark 320", "15", "8", "3693", "American"],
            &["toyota corona mark ii", "24", "4", "2372", "Japanese"],
            &["volkswagen 1131 deluxe sedan", "26", "4", "1835", "European"],
            &["datsun pl510", "27", "4", "2130", "Japanese"],
            &["peugeot 504", "25", "4", "2672", "European"],
            &["ford torino", "17", "8", "3449", "American"],
            &["audi 100 ls", "24", "4", "2430", "European"],
        ],
    )
}

/// MPG / Origin / Weight, the three-axis layout used in interaction tests.
pub fn three_axes() -> RawTable {
    table(
        &["MPG", "Origin", "Weight"],
        &[
            &["18", "American", "3504"],
            &["24", "Japanese", "2372"],
            &["26", "European", "1835"],
            &["15", "American", "3693"],
            &["27", "Japanese", "2130"],
        ],
    )
}

/// 1000 x 200 plot area with no margins.
pub fn flat_config() -> ChartConfig {
    let mut config = ChartConfig::default();
    config.width = 1000.0;
    config.height = 200.0;
    config.margin.top = 0.0;
    config.margin.right = 0.0;
    config.margin.bottom = 0.0;
    config.margin.left = 0.0;
    config
}
