//! Accuracy metrics for in-sample model fit.

use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Accuracy of fitted values against the observed series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyMetrics {
    /// Number of compared points.
    pub n: usize,
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error (None if zeros in actual)
    pub mape: Option<f64>,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
    /// Mean Absolute Scaled Error against the seasonal naive forecast
    /// (None if the series is too short or the naive error is zero)
    pub mase: Option<f64>,
    /// R-squared (coefficient of determination)
    pub r_squared: f64,
}

/// Calculate accuracy metrics between actual and predicted values.
///
/// # Arguments
/// * `actual` - Observed values
/// * `predicted` - Fitted values, aligned with `actual`
/// * `seasonal_period` - Lag of the naive benchmark used for MASE (1 if `None`)
pub fn calculate_metrics(
    actual: &[f64],
    predicted: &[f64],
    seasonal_period: Option<usize>,
) -> Result<AccuracyMetrics> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let n = actual.len();
    let nf = n as f64;

    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut smape_sum = 0.0;
    for (a, p) in actual.iter().zip(predicted.iter()) {
        let e = a - p;
        abs_sum += e.abs();
        sq_sum += e * e;
        let denom = a.abs() + p.abs();
        if denom != 0.0 {
            smape_sum += 2.0 * e.abs() / denom;
        }
    }

    let mae = abs_sum / nf;
    let mse = sq_sum / nf;

    let mape = if actual.contains(&0.0) {
        None
    } else {
        let sum: f64 = actual
            .iter()
            .zip(predicted.iter())
            .map(|(a, p)| ((a - p) / a).abs())
            .sum();
        Some(100.0 * sum / nf)
    };

    let mean_actual = actual.iter().sum::<f64>() / nf;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - sq_sum / ss_tot
    };

    Ok(AccuracyMetrics {
        n,
        mae,
        mse,
        rmse: mse.sqrt(),
        mape,
        smape: 100.0 * smape_sum / nf,
        mase: seasonal_mase(actual, mae, seasonal_period.unwrap_or(1)),
        r_squared,
    })
}

/// MASE = MAE / MAE of the lag-`period` naive forecast.
fn seasonal_mase(actual: &[f64], mae: f64, period: usize) -> Option<f64> {
    let n = actual.len();
    if period == 0 || n <= period {
        return None;
    }

    let naive_mae = actual
        .iter()
        .skip(period)
        .zip(actual.iter())
        .map(|(curr, prev)| (curr - prev).abs())
        .sum::<f64>()
        / (n - period) as f64;

    if naive_mae == 0.0 {
        return None;
    }
    Some(mae / naive_mae)
}
