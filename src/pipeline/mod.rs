//! End-to-end decomposition run.
//!
//! [`run`] re-runs every stage from the observations. Call it again after
//! any change to the series or the configuration; nothing is cached.

mod config;
mod report;

pub use config::DecompositionConfig;
pub use report::{ChartPoint, Report, Sheet};

use crate::core::{ForecastTable, Series};
use crate::error::Result;
use crate::models::{boundary_row, fit_and_model, forecast};
use crate::seasonality::{extract_seasonal, smooth};
use tracing::debug;

/// Smooth, extract the season, fit the trend and forecast.
///
/// A series too short for a stage yields empty tables from that stage on,
/// not an error.
///
/// # Errors
/// Returns [`ForecastError::DegenerateRegression`](crate::error::ForecastError::DegenerateRegression)
/// if the trend cannot be fitted, and
/// [`ForecastError::InvalidParameter`](crate::error::ForecastError::InvalidParameter)
/// if the horizon runs past the largest period number.
///
/// # Example
/// ```
/// use classical_forecast::core::Series;
/// use classical_forecast::pipeline::{run, DecompositionConfig};
///
/// let series = Series::new(&[100.0, 120.0, 140.0, 160.0, 110.0, 130.0, 150.0, 170.0]).unwrap();
/// let report = run(&series, &DecompositionConfig::new().with_horizon(4)).unwrap();
///
/// assert_eq!(report.forecast().periods(), vec![9, 10, 11, 12]);
/// assert!((report.trend().slope - 2.5).abs() < 1e-9);
/// ```
pub fn run(series: &Series, config: &DecompositionConfig) -> Result<Report> {
    debug!(
        n = series.len(),
        season_length = config.season_length.get(),
        model = config.model.as_str(),
        horizon = config.horizon,
        "running decomposition"
    );

    let smoothed = smooth(series, config.season_length);
    let seasonal = extract_seasonal(&smoothed, config.model);
    let model = fit_and_model(&seasonal)?;

    let forecast = match (model.indices(), model.last()) {
        (Some(indices), Some(last)) => {
            let table = forecast(&model.trend(), indices, last.period(), config.horizon)?;
            match boundary_row(&model) {
                Some(row) if config.boundary_row && !table.is_empty() => table.with_boundary(row),
                _ => table,
            }
        }
        _ => ForecastTable::new(),
    };

    Ok(Report {
        series: series.clone(),
        config: *config,
        smoothed,
        seasonal,
        model,
        forecast,
    })
}
