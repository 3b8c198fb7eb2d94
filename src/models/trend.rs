//! Linear trend fit and model reconstruction, the third decomposition stage.

use crate::core::SeasonLength;
use crate::error::Result;
use crate::seasonality::{
    DecompositionModel, SeasonalIndices, SeasonalRow, SeasonalTable, SmoothedRow,
};
use crate::utils::{calculate_metrics, ols_line, AccuracyMetrics, OLSResult};
use serde::Serialize;
use tracing::debug;

/// A row that can take part in the trend regression.
///
/// Only rows with a centered moving average are regressed. The target is
/// the deseasonalized value when there is one, otherwise the centered
/// moving average.
pub trait TrendInput {
    /// 1-based period number, the regressor.
    fn period(&self) -> usize;

    /// Centered moving average, which decides eligibility.
    fn centered_moving_average(&self) -> Option<f64>;

    /// Deseasonalized value, if this row has one.
    fn deseasonalized(&self) -> Option<f64> {
        None
    }

    /// Value regressed on the period, or `None` if the row is not eligible.
    fn regression_target(&self) -> Option<f64> {
        self.centered_moving_average()?;
        Some(
            self.deseasonalized()
                .or_else(|| self.centered_moving_average())
                .unwrap_or(0.0),
        )
    }
}

impl TrendInput for SmoothedRow {
    fn period(&self) -> usize {
        self.period
    }

    fn centered_moving_average(&self) -> Option<f64> {
        self.centered_moving_average
    }
}

impl TrendInput for SeasonalRow {
    fn period(&self) -> usize {
        self.smoothed.period
    }

    fn centered_moving_average(&self) -> Option<f64> {
        self.smoothed.centered_moving_average
    }

    fn deseasonalized(&self) -> Option<f64> {
        self.deseasonalized
    }
}

/// Fitted trend line over period numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrendLine {
    /// Change per period.
    pub slope: f64,
    /// Value at period 0.
    pub intercept: f64,
    /// Number of rows the line was fitted on.
    pub observations: usize,
}

impl TrendLine {
    /// Create a trend line from slope and intercept.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self {
            slope,
            intercept,
            observations: 0,
        }
    }

    /// Evaluate the line at `period`.
    pub fn value_at(&self, period: usize) -> f64 {
        self.slope * period as f64 + self.intercept
    }
}

impl From<OLSResult> for TrendLine {
    fn from(fit: OLSResult) -> Self {
        Self {
            slope: fit.slope,
            intercept: fit.intercept,
            observations: fit.observations,
        }
    }
}

/// Fit a least-squares trend line to the eligible rows.
///
/// With no eligible rows the line is flat at zero.
///
/// # Errors
/// Returns [`ForecastError::DegenerateRegression`](crate::error::ForecastError::DegenerateRegression)
/// when every eligible row has the same period, e.g. a single eligible row.
pub fn fit_trend<R: TrendInput>(rows: &[R]) -> Result<TrendLine> {
    let (x, y): (Vec<f64>, Vec<f64>) = rows
        .iter()
        .filter_map(|row| {
            row.regression_target()
                .map(|target| (row.period() as f64, target))
        })
        .unzip();

    let line = TrendLine::from(ols_line(&x, &y)?);
    debug!(
        slope = line.slope,
        intercept = line.intercept,
        observations = line.observations,
        "fitted trend line"
    );
    Ok(line)
}

/// A seasonal row extended with the fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelRow {
    /// Fields carried over from the seasonal stage.
    #[serde(flatten)]
    pub seasonal: SeasonalRow,
    /// Trend line at this period.
    pub trend: f64,
    /// Trend recombined with the seasonal index: the fitted value.
    pub t_plus_seasonal: f64,
    /// `value - t_plus_seasonal`.
    pub error: f64,
    /// Square of `error`.
    pub error_squared: f64,
}

impl ModelRow {
    /// 1-based period number.
    pub fn period(&self) -> usize {
        self.seasonal.period()
    }

    /// Observed value.
    pub fn value(&self) -> f64 {
        self.seasonal.value()
    }
}

/// Output of [`fit_and_model`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelTable {
    model: DecompositionModel,
    season_length: SeasonLength,
    trend: TrendLine,
    indices: Option<SeasonalIndices>,
    rows: Vec<ModelRow>,
}

impl ModelTable {
    /// Model used for recombination.
    pub fn model(&self) -> DecompositionModel {
        self.model
    }

    /// Season length of the decomposition.
    pub fn season_length(&self) -> SeasonLength {
        self.season_length
    }

    /// Fitted trend line.
    pub fn trend(&self) -> TrendLine {
        self.trend
    }

    /// Seasonal indices the model was built with.
    pub fn indices(&self) -> Option<&SeasonalIndices> {
        self.indices.as_ref()
    }

    /// Rows in period order.
    pub fn rows(&self) -> &[ModelRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Last modelled row.
    pub fn last(&self) -> Option<&ModelRow> {
        self.rows.last()
    }

    /// Fitted values (`t_plus_seasonal`) in period order.
    pub fn fitted_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.t_plus_seasonal).collect()
    }

    /// Residuals in period order.
    pub fn residuals(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.error).collect()
    }

    /// Total of the `error_squared` column.
    pub fn sum_squared_error(&self) -> f64 {
        self.rows.iter().map(|r| r.error_squared).sum()
    }

    /// In-sample accuracy of the fitted values.
    ///
    /// MASE is scaled by the seasonal naive forecast.
    pub fn accuracy(&self) -> Result<AccuracyMetrics> {
        let actual: Vec<f64> = self.rows.iter().map(|r| r.value()).collect();
        calculate_metrics(
            &actual,
            &self.fitted_values(),
            Some(self.season_length.get()),
        )
    }
}

/// Fit the trend and rebuild every row as trend recombined with season.
///
/// The recombination follows the model of the seasonal table. Without
/// seasonal indices (too little data upstream) the result has no rows and
/// a zero trend line.
///
/// # Errors
/// Propagates [`fit_trend`]'s degenerate regression error.
pub fn fit_and_model(table: &SeasonalTable) -> Result<ModelTable> {
    let model = table.model();
    let season_length = table.season_length();

    let Some(indices) = table.indices() else {
        debug!(rows = table.len(), "no seasonal indices; model table left empty");
        return Ok(ModelTable {
            model,
            season_length,
            trend: TrendLine::default(),
            indices: None,
            rows: Vec::new(),
        });
    };

    let trend = fit_trend(table.rows())?;

    let rows: Vec<ModelRow> = table
        .rows()
        .iter()
        .map(|&seasonal| {
            let trend_value = trend.value_at(seasonal.period());
            let index = seasonal
                .adjusted_seasonal_component
                .unwrap_or_else(|| model.neutral());
            let t_plus_seasonal = model.combine(trend_value, index);
            let error = seasonal.value() - t_plus_seasonal;
            ModelRow {
                seasonal,
                trend: trend_value,
                t_plus_seasonal,
                error,
                error_squared: error * error,
            }
        })
        .collect();

    let table = ModelTable {
        model,
        season_length,
        trend,
        indices: Some(indices.clone()),
        rows,
    };
    debug!(
        rows = table.len(),
        sse = table.sum_squared_error(),
        "reconstructed model"
    );
    Ok(table)
}
