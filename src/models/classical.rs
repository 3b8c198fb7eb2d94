//! Classical decomposition forecaster.
//!
//! Runs the smoothing, seasonal extraction and trend stages on `fit` and
//! extrapolates the fitted trend and seasonal indices on `predict`.

use crate::core::{ForecastTable, SeasonLength, Series};
use crate::error::{ForecastError, Result};
use crate::models::extrapolate::forecast;
use crate::models::trend::{fit_and_model, ModelTable};
use crate::models::Forecaster;
use crate::seasonality::{extract_seasonal, smooth, DecompositionModel};
use tracing::debug;

/// Forecaster over a classical trend and seasonal decomposition.
///
/// # Example
/// ```
/// use classical_forecast::core::Series;
/// use classical_forecast::models::{ClassicalDecomposition, Forecaster};
///
/// let series = Series::new(&[100.0, 120.0, 140.0, 160.0, 110.0, 130.0, 150.0, 170.0]).unwrap();
/// let mut model = ClassicalDecomposition::new();
/// model.fit(&series).unwrap();
///
/// let forecast = model.predict(4).unwrap();
/// assert_eq!(forecast.periods(), vec![9, 10, 11, 12]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassicalDecomposition {
    season_length: SeasonLength,
    model: DecompositionModel,
    table: Option<ModelTable>,
    fitted: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
}

impl ClassicalDecomposition {
    /// Create a quarterly additive forecaster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the season length.
    pub fn with_season_length(mut self, season_length: SeasonLength) -> Self {
        self.season_length = season_length;
        self
    }

    /// Set the decomposition model.
    pub fn with_model(mut self, model: DecompositionModel) -> Self {
        self.model = model;
        self
    }

    /// Season length in use.
    pub fn season_length(&self) -> SeasonLength {
        self.season_length
    }

    /// Decomposition model in use.
    pub fn model(&self) -> DecompositionModel {
        self.model
    }

    /// Model table of the last fit.
    pub fn model_table(&self) -> Option<&ModelTable> {
        self.table.as_ref()
    }
}

impl Forecaster for ClassicalDecomposition {
    fn fit(&mut self, series: &Series) -> Result<()> {
        let smoothed = smooth(series, self.season_length);
        let seasonal = extract_seasonal(&smoothed, self.model);
        let table = fit_and_model(&seasonal)?;

        if table.is_empty() {
            return Err(ForecastError::InsufficientData {
                needed: 2 * self.season_length.get(),
                got: series.len(),
            });
        }

        debug!(
            n = series.len(),
            season_length = self.season_length.get(),
            model = self.model.as_str(),
            "fitted classical decomposition"
        );
        self.fitted = Some(table.fitted_values());
        self.residuals = Some(table.residuals());
        self.table = Some(table);
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<ForecastTable> {
        let table = self.table.as_ref().ok_or(ForecastError::FitRequired)?;
        let (Some(indices), Some(last)) = (table.indices(), table.last()) else {
            return Err(ForecastError::FitRequired);
        };
        forecast(&table.trend(), indices, last.period(), horizon)
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "ClassicalDecomposition"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quarterly() -> Series {
        Series::new(&[100.0, 120.0, 140.0, 160.0, 110.0, 130.0, 150.0, 170.0]).unwrap()
    }

    #[test]
    fn classical_basic() {
        let mut model = ClassicalDecomposition::new();
        assert!(!model.is_fitted());
        assert_eq!(model.name(), "ClassicalDecomposition");

        model.fit(&quarterly()).unwrap();
        assert!(model.is_fitted());

        let forecast = model.predict(4).unwrap();
        let expected = [120.0, 140.0, 160.0, 180.0];
        for (value, expected) in forecast.values().iter().zip(expected.iter()) {
            assert_relative_eq!(*value, *expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn classical_fitted_and_residuals() {
        let mut model = ClassicalDecomposition::new();
        model.fit(&quarterly()).unwrap();

        let fitted = model.fitted_values().unwrap();
        let residuals = model.residuals().unwrap();
        assert_eq!(fitted.len(), 8);
        assert_eq!(residuals.len(), 8);
        for r in residuals {
            assert_relative_eq!(*r, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn classical_predict_requires_fit() {
        let model = ClassicalDecomposition::new();
        assert_eq!(model.predict(4), Err(ForecastError::FitRequired));
    }

    #[test]
    fn classical_predict_rejects_unrepresentable_horizon() {
        let mut model = ClassicalDecomposition::new();
        model.fit(&quarterly()).unwrap();

        assert!(matches!(
            model.predict(usize::MAX),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn classical_short_series_is_insufficient() {
        let series = Series::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mut model = ClassicalDecomposition::new();

        assert_eq!(
            model.fit(&series),
            Err(ForecastError::InsufficientData { needed: 8, got: 6 })
        );
        assert!(!model.is_fitted());
    }

    #[test]
    fn classical_builder_settings() {
        let model = ClassicalDecomposition::new()
            .with_season_length(SeasonLength::MONTHLY)
            .with_model(DecompositionModel::Multiplicative);

        assert_eq!(model.season_length(), SeasonLength::MONTHLY);
        assert_eq!(model.model(), DecompositionModel::Multiplicative);
        assert!(model.model_table().is_none());
    }

    #[test]
    fn classical_multiplicative_tracks_growth() {
        let values: Vec<f64> = (1..=16)
            .map(|p| (100.0 + 5.0 * p as f64) * [0.8, 1.1, 1.3, 0.8][(p - 1) % 4])
            .collect();
        let series = Series::new(&values).unwrap();
        let mut model = ClassicalDecomposition::new().with_model(DecompositionModel::Multiplicative);
        model.fit(&series).unwrap();

        let forecast = model.predict(4).unwrap();
        assert_eq!(forecast.periods(), vec![17, 18, 19, 20]);
        // Phase 2 is the seasonal peak
        let values = forecast.values();
        assert!(values[2] > values[0]);
        assert!(values[2] > values[3]);
    }
}
