//! Moving-average smoothing, the first decomposition stage.
//!
//! For season length `L` over `N` observations:
//! - the moving average at period `p >= L` is the trailing mean of the
//!   `L` values ending at `p`;
//! - the centered moving average at `p` averages the moving averages at
//!   `p` and `p + 1`, so it is defined for `L <= p <= N - 1`;
//! - the deviation is `value - centered moving average`.

use crate::core::{SeasonLength, Series};
use crate::transform::{forward_pair_mean, rolling_mean};
use serde::Serialize;
use tracing::debug;

/// One period of the smoothing table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmoothedRow {
    /// 1-based period number.
    pub period: usize,
    /// Observed value.
    pub value: f64,
    /// Trailing moving average over one season.
    pub moving_average: Option<f64>,
    /// Mean of this and the next moving average.
    pub centered_moving_average: Option<f64>,
    /// `value - centered_moving_average`.
    pub deviation_from_moving_average: Option<f64>,
}

/// Output of [`smooth`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmoothedTable {
    season_length: SeasonLength,
    rows: Vec<SmoothedRow>,
}

impl SmoothedTable {
    /// Season length the table was smoothed with.
    pub fn season_length(&self) -> SeasonLength {
        self.season_length
    }

    /// Rows in period order.
    pub fn rows(&self) -> &[SmoothedRow] {
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

    /// Number of rows with a centered moving average.
    pub fn centered_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.centered_moving_average.is_some())
            .count()
    }
}

/// Smooth a series with moving averages over one season.
///
/// Returns an empty table when the series holds fewer than one season of
/// observations.
///
/// # Example
/// ```
/// use classical_forecast::core::{SeasonLength, Series};
/// use classical_forecast::seasonality::smooth;
///
/// let series = Series::new(&[100.0, 120.0, 140.0, 160.0, 110.0]).unwrap();
/// let table = smooth(&series, SeasonLength::QUARTERLY);
///
/// assert_eq!(table.rows()[3].moving_average, Some(130.0));
/// assert_eq!(table.rows()[3].centered_moving_average, Some(131.25));
/// assert_eq!(table.rows()[4].centered_moving_average, None);
/// ```
pub fn smooth(series: &Series, season: SeasonLength) -> SmoothedTable {
    let window = season.get();
    if series.len() < window {
        debug!(
            observations = series.len(),
            season_length = window,
            "not enough observations to smooth"
        );
        return SmoothedTable {
            season_length: season,
            rows: Vec::new(),
        };
    }

    let values = series.values();
    let moving = rolling_mean(&values, window);
    let centered = forward_pair_mean(&moving);

    let rows: Vec<SmoothedRow> = series
        .iter()
        .zip(moving.iter().zip(centered.iter()))
        .map(|(obs, (&moving_average, &centered_moving_average))| SmoothedRow {
            period: obs.period,
            value: obs.value,
            moving_average,
            centered_moving_average,
            deviation_from_moving_average: centered_moving_average.map(|c| obs.value - c),
        })
        .collect();

    let table = SmoothedTable {
        season_length: season,
        rows,
    };
    debug!(
        rows = table.len(),
        centered = table.centered_count(),
        "smoothed series"
    );
    table
}
