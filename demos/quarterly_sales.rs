//! Quarterly sales example: decompose two years of sales and forecast one.
//!
//! Run with: cargo run --example quarterly_sales

use classical_forecast::prelude::*;

fn fmt_cell(cell: Option<f64>) -> String {
    cell.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

fn main() {
    println!("=== classical-forecast: quarterly sales ===\n");

    // 1. Enter the observations as a data-entry form would
    let mut series = Series::with_capacity(8);
    for entry in ["100", "120", "140", "160", "110", "130", "150", "170"] {
        series.push_str(entry).unwrap();
    }
    println!("Entered {} quarters", series.len());

    // 2. Run every stage for both models
    for model in [DecompositionModel::Additive, DecompositionModel::Multiplicative] {
        let config = DecompositionConfig::new()
            .with_model(model)
            .with_horizon(4)
            .with_boundary_row(true);
        let report = run(&series, &config).unwrap();

        println!("\n--- {} model ---", model);
        let trend = report.trend();
        println!("Trend: {:.4} * period + {:.4}", trend.slope, trend.intercept);
        if let Some(indices) = report.indices() {
            println!("Seasonal indices: {:?}", indices.adjusted());
        }

        for sheet in report.sheets() {
            println!("\n[{}]", sheet.name);
            println!("{}", sheet.columns.join(" | "));
            for row in &sheet.rows {
                let cells: Vec<String> = row.iter().map(|c| fmt_cell(*c)).collect();
                println!("{}", cells.join(" | "));
            }
        }

        if let Ok(accuracy) = report.model().accuracy() {
            println!("\nIn-sample RMSE: {:.4}, R²: {:.4}", accuracy.rmse, accuracy.r_squared);
        }
    }

    // 3. Same forecast through the Forecaster interface
    println!("\n--- Forecaster interface ---");
    let mut model = ClassicalDecomposition::new().with_season_length(SeasonLength::QUARTERLY);
    model.fit(&series).unwrap();
    let forecast = model.predict(4).unwrap();
    for row in forecast.rows() {
        println!("  period {}: {:.2}", row.period, row.forecast);
    }

    println!("\n=== Done ===");
}
