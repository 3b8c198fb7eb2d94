//! Forecast by extending the trend line and cycling the seasonal indices.

use crate::core::{ForecastRow, ForecastTable};
use crate::error::{ForecastError, Result};
use crate::models::trend::{ModelTable, TrendLine};
use crate::seasonality::SeasonalIndices;
use tracing::debug;

/// Forecast `horizon` periods after `last_period`.
///
/// Period `p` is forecast as the trend at `p` recombined with the index of
/// phase `(p - 1) % L`, using the model the indices were built with.
///
/// # Errors
/// Returns [`ForecastError::InvalidParameter`] when the last forecast
/// period `last_period + horizon` does not fit in a `usize`.
///
/// # Example
/// ```
/// use classical_forecast::models::{forecast, TrendLine};
/// use classical_forecast::seasonality::{DecompositionModel, SeasonalIndices};
///
/// let indices = SeasonalIndices::from_adjusted(
///     DecompositionModel::Additive,
///     vec![-26.25, -8.75, 8.75, 26.25],
/// ).unwrap();
/// let table = forecast(&TrendLine::new(2.5, 123.75), &indices, 8, 4).unwrap();
///
/// assert_eq!(table.periods(), vec![9, 10, 11, 12]);
/// ```
pub fn forecast(
    trend: &TrendLine,
    indices: &SeasonalIndices,
    last_period: usize,
    horizon: usize,
) -> Result<ForecastTable> {
    let last_forecast = last_period.checked_add(horizon).ok_or_else(|| {
        ForecastError::InvalidParameter(format!(
            "horizon {} past period {} overflows the period range",
            horizon, last_period
        ))
    })?;

    let model = indices.model();
    let rows: Vec<ForecastRow> = (last_period..last_forecast)
        .map(|previous| {
            let period = previous + 1;
            let trend_value = trend.value_at(period);
            let seasonal = indices.index_for(period);
            ForecastRow {
                period,
                actual: None,
                forecast: model.combine(trend_value, seasonal),
                trend: trend_value,
                seasonal,
            }
        })
        .collect();

    debug!(
        first = last_period.saturating_add(1),
        last = last_forecast,
        model = model.as_str(),
        "extrapolated forecast"
    );
    Ok(ForecastTable::from_rows(rows))
}

/// Row joining the last modelled period to the forecast.
///
/// Carries the observed value as `actual` and the fitted value as
/// `forecast`. `None` for an empty model table.
pub fn boundary_row(table: &ModelTable) -> Option<ForecastRow> {
    let last = table.last()?;
    let seasonal = last
        .seasonal
        .adjusted_seasonal_component
        .unwrap_or_else(|| table.model().neutral());
    Some(ForecastRow {
        period: last.period(),
        actual: Some(last.value()),
        forecast: last.t_plus_seasonal,
        trend: last.trend,
        seasonal,
    })
}
