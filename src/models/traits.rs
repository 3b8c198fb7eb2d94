//! Forecaster trait defining the common interface for fitted models.

use crate::core::{ForecastTable, Series};
use crate::error::Result;

/// Common interface for forecasting models.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to the series.
    fn fit(&mut self, series: &Series) -> Result<()>;

    /// Forecast the `horizon` periods following the fitted series.
    fn predict(&self, horizon: usize) -> Result<ForecastTable>;

    /// Get the fitted values (in-sample predictions).
    fn fitted_values(&self) -> Option<&[f64]>;

    /// Get the residuals (actual - fitted).
    fn residuals(&self) -> Option<&[f64]>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.fitted_values().is_some()
    }
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use classical_forecast::models::{BoxedForecaster, ClassicalDecomposition, Forecaster};
///
/// let model: BoxedForecaster = Box::new(ClassicalDecomposition::new());
/// assert_eq!(model.name(), "ClassicalDecomposition");
/// assert!(!model.is_fitted());
/// ```
pub type BoxedForecaster = Box<dyn Forecaster>;
