//! Decomposition model and normalized seasonal indices.

use crate::core::SeasonLength;
use crate::error::{ForecastError, Result};
use crate::utils::{geometric_mean, mean, product};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// How the seasonal pattern combines with the trend.
///
/// Seasonal indices are offsets for [`Additive`](Self::Additive) and
/// ratios around 1 for [`Multiplicative`](Self::Multiplicative). Every
/// stage goes through the methods below so the two conventions never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecompositionModel {
    /// `value = trend + seasonal + error`
    #[default]
    Additive,
    /// `value = trend * seasonal + error`
    Multiplicative,
}

impl DecompositionModel {
    /// Index that leaves the trend untouched: 0 additive, 1 multiplicative.
    pub fn neutral(self) -> f64 {
        match self {
            Self::Additive => 0.0,
            Self::Multiplicative => 1.0,
        }
    }

    /// Raw seasonal component of `value` against its centered moving average.
    ///
    /// `None` for a multiplicative ratio over a zero average.
    pub fn component(self, value: f64, centered: f64) -> Option<f64> {
        match self {
            Self::Additive => Some(value - centered),
            Self::Multiplicative if centered == 0.0 => None,
            Self::Multiplicative => Some(value / centered),
        }
    }

    /// Remove a seasonal index from `value`.
    ///
    /// A multiplicative index of zero leaves `value` unchanged.
    pub fn remove(self, value: f64, index: f64) -> f64 {
        match self {
            Self::Additive => value - index,
            Self::Multiplicative if index == 0.0 => value,
            Self::Multiplicative => value / index,
        }
    }

    /// Recombine a trend value with a seasonal index.
    pub fn combine(self, trend: f64, index: f64) -> f64 {
        match self {
            Self::Additive => trend + index,
            Self::Multiplicative => trend * index,
        }
    }

    /// Model name as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Multiplicative => "multiplicative",
        }
    }
}

impl fmt::Display for DecompositionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecompositionModel {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" => Ok(Self::Additive),
            "multiplicative" => Ok(Self::Multiplicative),
            other => Err(ForecastError::InvalidParameter(format!(
                "unknown decomposition model '{}'",
                other
            ))),
        }
    }
}

/// Phase-indexed seasonal indices.
///
/// Holds one cross-cycle average and one normalized (adjusted) index per
/// phase. Additive adjusted indices sum to zero; multiplicative adjusted
/// indices multiply to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalIndices {
    model: DecompositionModel,
    averages: Vec<f64>,
    adjusted: Vec<f64>,
}

impl SeasonalIndices {
    /// Normalize per-phase averages into seasonal indices.
    ///
    /// Additive averages are shifted by their mean. Multiplicative averages
    /// are divided by their geometric mean; when that is undefined (a
    /// non-positive average) the averages are kept as they are.
    ///
    /// # Errors
    /// Returns [`ForecastError::EmptyData`] if `averages` is empty.
    pub fn from_averages(model: DecompositionModel, averages: Vec<f64>) -> Result<Self> {
        if averages.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        Ok(Self::normalize(model, averages))
    }

    /// Normalize a non-empty set of averages.
    pub(crate) fn normalize(model: DecompositionModel, averages: Vec<f64>) -> Self {
        let adjusted = match model {
            DecompositionModel::Additive => {
                let shift = mean(&averages);
                averages.iter().map(|a| a - shift).collect()
            }
            DecompositionModel::Multiplicative => match geometric_mean(&averages) {
                Some(scale) => averages.iter().map(|a| a / scale).collect(),
                None => {
                    warn!(
                        ?averages,
                        "seasonal ratios have no geometric mean; indices left unnormalized"
                    );
                    averages.clone()
                }
            },
        };

        Self {
            model,
            averages,
            adjusted,
        }
    }

    /// Use already-normalized indices as they are.
    ///
    /// # Errors
    /// Returns [`ForecastError::EmptyData`] if `adjusted` is empty.
    pub fn from_adjusted(model: DecompositionModel, adjusted: Vec<f64>) -> Result<Self> {
        if adjusted.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        Ok(Self {
            model,
            averages: adjusted.clone(),
            adjusted,
        })
    }

    /// Model the indices belong to.
    pub fn model(&self) -> DecompositionModel {
        self.model
    }

    /// Number of phases.
    pub fn season_length(&self) -> SeasonLength {
        // Both constructors reject an empty index array.
        SeasonLength::new(self.adjusted.len()).unwrap_or_default()
    }

    /// Cross-cycle averages before normalization, by phase.
    pub fn averages(&self) -> &[f64] {
        &self.averages
    }

    /// Normalized indices, by phase.
    pub fn adjusted(&self) -> &[f64] {
        &self.adjusted
    }

    /// Normalized index for the phase of `period`.
    pub fn index_for(&self, period: usize) -> f64 {
        self.adjusted[self.phase(period)]
    }

    /// Unnormalized average for the phase of `period`.
    pub fn average_for(&self, period: usize) -> f64 {
        self.averages[self.phase(period)]
    }

    /// Sum of the normalized indices.
    pub fn sum(&self) -> f64 {
        self.adjusted.iter().sum()
    }

    /// Product of the normalized indices.
    pub fn product(&self) -> f64 {
        product(&self.adjusted)
    }

    fn phase(&self, period: usize) -> usize {
        period.saturating_sub(1) % self.adjusted.len()
    }
}
