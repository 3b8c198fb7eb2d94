//! Observed series and the seasonal period it is analysed with.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single observation: 1-based period number and observed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Sequential period number, starting at 1.
    pub period: usize,
    /// Observed value.
    pub value: f64,
}

/// Number of observations in one full seasonal cycle.
///
/// Always positive. Deserializes from a plain integer and rejects zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SeasonLength(usize);

impl SeasonLength {
    /// Four observations per cycle (quarterly data).
    pub const QUARTERLY: SeasonLength = SeasonLength(4);

    /// Twelve observations per cycle (monthly data).
    pub const MONTHLY: SeasonLength = SeasonLength(12);

    /// Create a season length, rejecting zero.
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(ForecastError::InvalidParameter(
                "season length must be positive".into(),
            ));
        }
        Ok(Self(length))
    }

    /// Number of observations per cycle.
    pub fn get(self) -> usize {
        self.0
    }

    /// Position of `period` within its cycle: `(period - 1) % length`.
    ///
    /// Periods are 1-based; period 0 is treated as period 1.
    pub fn phase(self, period: usize) -> usize {
        period.saturating_sub(1) % self.0
    }
}

impl Default for SeasonLength {
    fn default() -> Self {
        Self::QUARTERLY
    }
}

impl TryFrom<usize> for SeasonLength {
    type Error = ForecastError;

    fn try_from(length: usize) -> Result<Self> {
        Self::new(length)
    }
}

impl From<SeasonLength> for usize {
    fn from(length: SeasonLength) -> usize {
        length.0
    }
}

impl fmt::Display for SeasonLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An append-only, equally spaced univariate series.
///
/// Periods are assigned on insertion, so they are always contiguous and
/// start at 1. Every stored value is finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    /// Create a series from raw values, numbering them 1, 2, 3, ...
    ///
    /// # Errors
    /// Returns [`ForecastError::NonFiniteValue`] for the first NaN or
    /// infinite value.
    pub fn new(values: &[f64]) -> Result<Self> {
        let mut series = Self::with_capacity(values.len());
        for &value in values {
            series.push(value)?;
        }
        Ok(series)
    }

    /// Create an empty series with room for `capacity` observations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            observations: Vec::with_capacity(capacity),
        }
    }

    /// Append one value as the next period and return that period.
    pub fn push(&mut self, value: f64) -> Result<usize> {
        let period = self.observations.len() + 1;
        if !value.is_finite() {
            return Err(ForecastError::NonFiniteValue { period });
        }
        self.observations.push(Observation { period, value });
        Ok(period)
    }

    /// Parse a textual entry and append it as the next period.
    pub fn push_str(&mut self, input: &str) -> Result<usize> {
        let value = Self::parse_value(input)?;
        self.push(value)
    }

    /// Parse one textual entry as a finite number.
    pub fn parse_value(input: &str) -> Result<f64> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ForecastError::ParseValue(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(ForecastError::ParseValue(trimmed.to_string()));
        }
        Ok(value)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All observations in period order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Observed values in period order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Last observed period, or `None` for an empty series.
    pub fn last_period(&self) -> Option<usize> {
        self.observations.last().map(|o| o.period)
    }

    /// Iterate over observations in period order.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_numbers_periods_from_one() {
        let series = Series::new(&[10.0, 20.0, 30.0]).unwrap();

        assert_eq!(series.len(), 3);
        let periods: Vec<usize> = series.iter().map(|o| o.period).collect();
        assert_eq!(periods, vec![1, 2, 3]);
        assert_eq!(series.values(), vec![10.0, 20.0, 30.0]);
        assert_eq!(series.last_period(), Some(3));
    }

    #[test]
    fn series_push_assigns_next_period() {
        let mut series = Series::default();
        assert!(series.is_empty());
        assert_eq!(series.last_period(), None);

        assert_eq!(series.push(1.5).unwrap(), 1);
        assert_eq!(series.push(2.5).unwrap(), 2);
        assert_eq!(series.observations()[1], Observation { period: 2, value: 2.5 });
    }

    #[test]
    fn series_rejects_non_finite_values() {
        assert_eq!(
            Series::new(&[1.0, f64::NAN]),
            Err(ForecastError::NonFiniteValue { period: 2 })
        );

        let mut series = Series::new(&[1.0]).unwrap();
        assert!(series.push(f64::INFINITY).is_err());
        // A rejected value does not consume a period
        assert_eq!(series.push(2.0).unwrap(), 2);
    }

    #[test]
    fn series_parses_textual_entries() {
        let mut series = Series::default();
        assert_eq!(series.push_str(" 120.5 ").unwrap(), 1);
        assert_eq!(series.values(), vec![120.5]);

        assert!(matches!(
            series.push_str("twelve"),
            Err(ForecastError::ParseValue(_))
        ));
        assert!(matches!(
            Series::parse_value("NaN"),
            Err(ForecastError::ParseValue(_))
        ));
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn season_length_rejects_zero() {
        assert!(SeasonLength::new(0).is_err());
        assert_eq!(SeasonLength::new(7).unwrap().get(), 7);
        assert_eq!(SeasonLength::default(), SeasonLength::QUARTERLY);
    }

    #[test]
    fn season_length_phase_is_periodic() {
        let season = SeasonLength::QUARTERLY;
        assert_eq!(season.phase(1), 0);
        assert_eq!(season.phase(4), 3);
        assert_eq!(season.phase(5), 0);
        for period in 1..=12 {
            assert_eq!(season.phase(period), season.phase(period + 4));
        }
    }
}
