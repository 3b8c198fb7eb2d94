//! Seasonal index extraction, the second decomposition stage.

use crate::core::SeasonLength;
use crate::seasonality::indices::{DecompositionModel, SeasonalIndices};
use crate::seasonality::smoother::{SmoothedRow, SmoothedTable};
use serde::Serialize;
use tracing::{debug, trace, warn};

/// A smoothing row extended with its seasonal fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonalRow {
    /// Fields carried over from the smoothing stage.
    #[serde(flatten)]
    pub smoothed: SmoothedRow,
    /// Raw detrended signal: difference or ratio to the centered average.
    pub seasonal_component: Option<f64>,
    /// Cross-cycle average of the raw component for this phase.
    pub average_seasonal_component: Option<f64>,
    /// Normalized seasonal index for this phase.
    pub adjusted_seasonal_component: Option<f64>,
    /// Value with the seasonal index removed.
    pub deseasonalized: Option<f64>,
}

impl SeasonalRow {
    fn unchanged(smoothed: SmoothedRow) -> Self {
        Self {
            smoothed,
            seasonal_component: None,
            average_seasonal_component: None,
            adjusted_seasonal_component: None,
            deseasonalized: None,
        }
    }

    /// 1-based period number.
    pub fn period(&self) -> usize {
        self.smoothed.period
    }

    /// Observed value.
    pub fn value(&self) -> f64 {
        self.smoothed.value
    }

    /// Centered moving average from the smoothing stage.
    pub fn centered_moving_average(&self) -> Option<f64> {
        self.smoothed.centered_moving_average
    }
}

/// Output of [`extract_seasonal`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalTable {
    model: DecompositionModel,
    season_length: SeasonLength,
    rows: Vec<SeasonalRow>,
    indices: Option<SeasonalIndices>,
}

impl SeasonalTable {
    /// Model the components were extracted with.
    pub fn model(&self) -> DecompositionModel {
        self.model
    }

    /// Season length of the underlying smoothing.
    pub fn season_length(&self) -> SeasonLength {
        self.season_length
    }

    /// Rows in period order.
    pub fn rows(&self) -> &[SeasonalRow] {
        &self.rows
    }

    /// Seasonal indices, or `None` when there was too little data.
    pub fn indices(&self) -> Option<&SeasonalIndices> {
        self.indices.as_ref()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Extract seasonal indices and the deseasonalized series.
///
/// Needs at least one season's worth of rows with a centered moving
/// average; with fewer, the rows come back with every seasonal field unset
/// and [`SeasonalTable::indices`] is `None`.
///
/// Phases without any raw component fall back to the model's neutral index
/// before normalization.
pub fn extract_seasonal(table: &SmoothedTable, model: DecompositionModel) -> SeasonalTable {
    let season = table.season_length();
    let length = season.get();

    let centered = table.centered_count();
    if centered < length {
        debug!(
            centered,
            season_length = length,
            "not enough centered averages to extract seasonality"
        );
        return SeasonalTable {
            model,
            season_length: season,
            rows: table.rows().iter().copied().map(SeasonalRow::unchanged).collect(),
            indices: None,
        };
    }

    let components: Vec<Option<f64>> = table
        .rows()
        .iter()
        .map(|row| {
            row.centered_moving_average
                .and_then(|c| model.component(row.value, c))
        })
        .collect();

    let mut sums = vec![0.0; length];
    let mut counts = vec![0usize; length];
    for (row, component) in table.rows().iter().zip(components.iter()) {
        if let Some(c) = component {
            let phase = season.phase(row.period);
            sums[phase] += c;
            counts[phase] += 1;
        }
    }

    let averages: Vec<f64> = sums
        .iter()
        .zip(counts.iter())
        .enumerate()
        .map(|(phase, (&sum, &count))| {
            trace!(phase, count, "seasonal components per phase");
            if count == 0 {
                model.neutral()
            } else {
                sum / count as f64
            }
        })
        .collect();

    let indices = SeasonalIndices::normalize(model, averages);

    let rows = table
        .rows()
        .iter()
        .zip(components)
        .map(|(&smoothed, seasonal_component)| {
            let index = indices.index_for(smoothed.period);
            if model == DecompositionModel::Multiplicative && index == 0.0 {
                warn!(
                    period = smoothed.period,
                    "zero seasonal index; value kept as deseasonalized"
                );
            }
            SeasonalRow {
                smoothed,
                seasonal_component,
                average_seasonal_component: Some(indices.average_for(smoothed.period)),
                adjusted_seasonal_component: Some(index),
                deseasonalized: Some(model.remove(smoothed.value, index)),
            }
        })
        .collect();

    debug!(
        %model,
        indices = ?indices.adjusted(),
        "extracted seasonal indices"
    );

    SeasonalTable {
        model,
        season_length: season,
        rows,
        indices: Some(indices),
    }
}
