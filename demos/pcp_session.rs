//! Headless walk-through of a parallel-coordinates session: load, thin the
//! sample with the density slider, drag an axis, and dump the frame.
//!
//! Run with `RUST_LOG=pcp_chart=debug` to see the session log.

use pcp_chart::data_types::CATEGORY10;
use pcp_chart::plot_types::{BarChart, CorrelationHeatmap, PlotBuilder, Scatterplot};
use pcp_chart::{ChartConfig, ColorMap, PcpChart, RawTable, ReconcileAction};
use tracing::info;

const CARS: &str = r#"[
    {"Car": "chevrolet chevelle malibu", "MPG": 18, "Cylinders": 8, "Displacement": 307, "Horsepower": 130, "Weight": 3504, "Origin": "American"},
    {"Car": "buick skylark 320", "MPG": 15, "Cylinders": 8, "Displacement": 350, "Horsepower": 165, "Weight": 3693, "Origin": "American"},
    {"Car": "plymouth satellite", "MPG": 18, "Cylinders": 8, "Displacement": 318, "Horsepower": 150, "Weight": 3436, "Origin": "American"},
    {"Car": "toyota corona mark ii", "MPG": 24, "Cylinders": 4, "Displacement": 113, "Horsepower": 95, "Weight": 2372, "Origin": "Japanese"},
    {"Car": "datsun pl510", "MPG": 27, "Cylinders": 4, "Displacement": 97, "Horsepower": 88, "Weight": 2130, "Origin": "Japanese"},
    {"Car": "volkswagen 1131 deluxe sedan", "MPG": 26, "Cylinders": 4, "Displacement": 97, "Horsepower": 46, "Weight": 1835, "Origin": "European"},
    {"Car": "peugeot 504", "MPG": 25, "Cylinders": 4, "Displacement": 110, "Horsepower": 87, "Weight": 2672, "Origin": "European"},
    {"Car": "audi 100 ls", "MPG": 24, "Cylinders": 4, "Displacement": 107, "Horsepower": 90, "Weight": 2430, "Origin": "European"},
    {"Car": "saab 99e", "MPG": 25, "Cylinders": 4, "Displacement": 104, "Horsepower": 95, "Weight": 2375, "Origin": "European"},
    {"Car": "ford torino", "MPG": 17, "Cylinders": 8, "Displacement": 302, "Horsepower": 140, "Weight": 3449, "Origin": "American"},
    {"Car": "mazda rx2 coupe", "MPG": 19, "Cylinders": 3, "Displacement": 70, "Horsepower": 97, "Weight": 2330, "Origin": "Japanese"},
    {"Car": "amc hornet", "MPG": 18, "Cylinders": 6, "Displacement": 199, "Horsepower": 97, "Weight": 2774, "Origin": "American"}
]"#;

fn summarize(label: &str, actions: &[ReconcileAction]) {
    let (mut created, mut updated, mut removed) = (0, 0, 0);
    for action in actions {
        match action {
            ReconcileAction::Create(_) => created += 1,
            ReconcileAction::Update(_) => updated += 1,
            ReconcileAction::Remove(_) => removed += 1,
        }
    }
    println!("{label}: {created} created, {updated} updated, {removed} removed");
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let raw = RawTable::from_json_str(CARS)?;
    let mut config = ChartConfig::default();
    config.height = 600.0;

    let chart = PcpChart::new(raw, config);
    let colors = ColorMap::from_palette("Origin", chart.dataset(), &CATEGORY10);
    let mut chart = chart.with_colors(colors.clone());

    for desc in chart.descriptors() {
        println!("{:<14} {:?}", desc.name, desc.kind());
    }

    summarize("density 40%", &chart.on_density_change(40));
    summarize("density 75%", &chart.on_density_change(75));

    chart.on_drag_start("Origin");
    for x in [400.0, 200.0, 40.0] {
        summarize(&format!("drag Origin to {x}"), &chart.on_drag_move("Origin", x));
    }
    chart.on_drag_end("Origin");
    println!("axis order: {}", chart.layout().order().join(" | "));

    let frame = chart.frame();
    info!(curves = frame.curves.len(), axes = frame.axes.len(), "frame ready");
    println!("{}", frame.to_json()?);

    let bars = BarChart::new("Origin", "MPG").build(chart.dataset());
    for bar in &bars.bars {
        println!("mean MPG {:<10} {:.1}", bar.category, bar.value);
    }

    let heatmap = CorrelationHeatmap::new(["MPG", "Horsepower", "Weight"]).build(chart.dataset());
    for cell in heatmap.cells.iter().filter(|c| c.feature_x < c.feature_y) {
        println!("corr {} / {} = {:.2}", cell.feature_x, cell.feature_y, cell.value);
    }

    let mut scatter = Scatterplot::new("Weight", "MPG").with_colors(colors);
    scatter.toggle_group("American");
    let points = scatter.build(chart.dataset());
    let visible = points.points.iter().filter(|p| p.visible).count();
    println!("scatter: {visible} of {} points visible", points.points.len());

    Ok(())
}
