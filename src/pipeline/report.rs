//! Result of a pipeline run, with tabular and chart views for presentation.

use crate::core::{ForecastTable, Series};
use crate::models::{ModelTable, TrendLine};
use crate::pipeline::config::DecompositionConfig;
use crate::seasonality::{SeasonalIndices, SeasonalTable, SmoothedTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// A named table of optional numeric cells, one row per period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    /// Sheet name.
    pub name: &'static str,
    /// Column headers.
    pub columns: Vec<&'static str>,
    /// Rows aligned with `columns`; `None` marks an undefined field.
    pub rows: Vec<Vec<Option<f64>>>,
}

/// One period of the combined actual, model and forecast series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Period number.
    pub period: usize,
    /// Observed value.
    pub actual: Option<f64>,
    /// Fitted value.
    pub model: Option<f64>,
    /// Forecast value.
    pub forecast: Option<f64>,
}

/// Every stage table of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub(crate) series: Series,
    pub(crate) config: DecompositionConfig,
    pub(crate) smoothed: SmoothedTable,
    pub(crate) seasonal: SeasonalTable,
    pub(crate) model: ModelTable,
    pub(crate) forecast: ForecastTable,
}

impl Report {
    /// Input series.
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Configuration of the run.
    pub fn config(&self) -> &DecompositionConfig {
        &self.config
    }

    /// Smoothing stage output.
    pub fn smoothed(&self) -> &SmoothedTable {
        &self.smoothed
    }

    /// Seasonal extraction output.
    pub fn seasonal(&self) -> &SeasonalTable {
        &self.seasonal
    }

    /// Trend model output.
    pub fn model(&self) -> &ModelTable {
        &self.model
    }

    /// Forecast output.
    pub fn forecast(&self) -> &ForecastTable {
        &self.forecast
    }

    /// Fitted trend line.
    pub fn trend(&self) -> TrendLine {
        self.model.trend()
    }

    /// Seasonal indices, if the series was long enough to extract them.
    pub fn indices(&self) -> Option<&SeasonalIndices> {
        self.seasonal.indices()
    }

    /// The four stage tables as sheets, in pipeline order.
    pub fn sheets(&self) -> Vec<Sheet> {
        vec![
            self.moving_average_sheet(),
            self.seasonal_sheet(),
            self.model_sheet(),
            self.forecast_sheet(),
        ]
    }

    /// Actual, model and forecast values by period, history then forecast.
    pub fn chart(&self) -> Vec<ChartPoint> {
        let mut points: BTreeMap<usize, ChartPoint> = BTreeMap::new();

        for obs in self.series.iter() {
            chart_point(&mut points, obs.period).actual = Some(obs.value);
        }
        for row in self.model.rows() {
            chart_point(&mut points, row.period()).model = Some(row.t_plus_seasonal);
        }
        for row in self.forecast.rows() {
            chart_point(&mut points, row.period).forecast = Some(row.forecast);
        }

        points.into_values().collect()
    }

    fn moving_average_sheet(&self) -> Sheet {
        Sheet {
            name: "Moving Average",
            columns: vec![
                "Period",
                "Value",
                "Moving Average",
                "Centered Moving Average",
                "Deviation From Moving Average",
            ],
            rows: self
                .smoothed
                .rows()
                .iter()
                .map(|r| {
                    vec![
                        Some(r.period as f64),
                        Some(r.value),
                        r.moving_average,
                        r.centered_moving_average,
                        r.deviation_from_moving_average,
                    ]
                })
                .collect(),
        }
    }

    fn seasonal_sheet(&self) -> Sheet {
        Sheet {
            name: "Seasonal Components",
            columns: vec![
                "Period",
                "Value",
                "Seasonal Component",
                "Average Seasonal Component",
                "Adjusted Seasonal Component",
                "Deseasonalized",
            ],
            rows: self
                .seasonal
                .rows()
                .iter()
                .map(|r| {
                    vec![
                        Some(r.period() as f64),
                        Some(r.value()),
                        r.seasonal_component,
                        r.average_seasonal_component,
                        r.adjusted_seasonal_component,
                        r.deseasonalized,
                    ]
                })
                .collect(),
        }
    }

    fn model_sheet(&self) -> Sheet {
        Sheet {
            name: "Model",
            columns: vec![
                "Period",
                "Value",
                "Trend",
                "Seasonal",
                "T+S",
                "Error",
                "Error Squared",
                "Deseasonalized",
            ],
            rows: self
                .model
                .rows()
                .iter()
                .map(|r| {
                    vec![
                        Some(r.period() as f64),
                        Some(r.value()),
                        Some(r.trend),
                        r.seasonal.adjusted_seasonal_component,
                        Some(r.t_plus_seasonal),
                        Some(r.error),
                        Some(r.error_squared),
                        r.seasonal.deseasonalized,
                    ]
                })
                .collect(),
        }
    }

    fn forecast_sheet(&self) -> Sheet {
        Sheet {
            name: "Forecast",
            columns: vec!["Period", "Actual", "Forecast", "Trend", "Seasonal"],
            rows: self
                .forecast
                .rows()
                .iter()
                .map(|r| {
                    vec![
                        Some(r.period as f64),
                        r.actual,
                        Some(r.forecast),
                        Some(r.trend),
                        Some(r.seasonal),
                    ]
                })
                .collect(),
        }
    }
}

fn chart_point(points: &mut BTreeMap<usize, ChartPoint>, period: usize) -> &mut ChartPoint {
    points.entry(period).or_insert(ChartPoint {
        period,
        actual: None,
        model: None,
        forecast: None,
    })
}
