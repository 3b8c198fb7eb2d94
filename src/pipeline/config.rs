//! Run configuration.

use crate::core::SeasonLength;
use crate::seasonality::DecompositionModel;
use serde::{Deserialize, Serialize};

/// Settings for one pipeline run.
///
/// Deserializes from partial input: missing fields take their defaults.
///
/// # Example
/// ```
/// use classical_forecast::pipeline::DecompositionConfig;
/// use classical_forecast::seasonality::DecompositionModel;
///
/// let config = DecompositionConfig::new()
///     .with_model(DecompositionModel::Multiplicative)
///     .with_horizon(8)
///     .with_boundary_row(true);
/// assert_eq!(config.horizon, 8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecompositionConfig {
    /// Observations per seasonal cycle.
    pub season_length: SeasonLength,
    /// How trend and season combine.
    pub model: DecompositionModel,
    /// Number of periods to forecast.
    pub horizon: usize,
    /// Prepend a row joining the last observation to the forecast.
    pub boundary_row: bool,
}

impl DecompositionConfig {
    /// Quarterly additive configuration with no forecast horizon.
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

    /// Set the forecast horizon.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Enable or disable the boundary row.
    pub fn with_boundary_row(mut self, enabled: bool) -> Self {
        self.boundary_row = enabled;
        self
    }
}
