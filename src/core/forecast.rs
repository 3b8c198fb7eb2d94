//! Forecast table produced by extrapolating the fitted model.

use serde::Serialize;

/// One forecast period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastRow {
    /// Period number.
    pub period: usize,
    /// Observed value; only set on the boundary row at the last observed period.
    pub actual: Option<f64>,
    /// Trend recombined with the seasonal index.
    pub forecast: f64,
    /// Trend line evaluated at `period`.
    pub trend: f64,
    /// Seasonal index for the phase of `period`.
    pub seasonal: f64,
}

impl ForecastRow {
    /// Check if this is the boundary row joining history and forecast.
    pub fn is_boundary(&self) -> bool {
        self.actual.is_some()
    }
}

/// Rows of a forecast, in period order.
///
/// Optionally starts with one boundary row at the last observed period so
/// a plotted forecast line connects to the historical one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastTable {
    rows: Vec<ForecastRow>,
}

impl ForecastTable {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecast from rows already in period order.
    pub fn from_rows(rows: Vec<ForecastRow>) -> Self {
        Self { rows }
    }

    /// Prepend a boundary row, replacing any existing one.
    pub fn with_boundary(mut self, boundary: ForecastRow) -> Self {
        self.rows.retain(|r| !r.is_boundary());
        self.rows.insert(0, boundary);
        self
    }

    /// All rows, including the boundary row if present.
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Future periods only, without the boundary row.
    pub fn future(&self) -> impl Iterator<Item = &ForecastRow> {
        self.rows.iter().filter(|r| !r.is_boundary())
    }

    /// Boundary row, if present.
    pub fn boundary(&self) -> Option<&ForecastRow> {
        self.rows.first().filter(|r| r.is_boundary())
    }

    /// Number of future periods forecast.
    pub fn horizon(&self) -> usize {
        self.future().count()
    }

    /// Check if no future period was forecast.
    pub fn is_empty(&self) -> bool {
        self.horizon() == 0
    }

    /// Forecast values of the future periods.
    pub fn values(&self) -> Vec<f64> {
        self.future().map(|r| r.forecast).collect()
    }

    /// Future period numbers.
    pub fn periods(&self) -> Vec<usize> {
        self.future().map(|r| r.period).collect()
    }
}
