//! # classical-forecast
//!
//! Classical seasonal decomposition and forecasting for equally spaced
//! univariate series.
//!
//! A run goes through four stages, each a pure function of the previous
//! stage's table:
//!
//! 1. [`seasonality::smooth`]: trailing and centered moving averages
//! 2. [`seasonality::extract_seasonal`]: seasonal indices and the
//!    deseasonalized series, additive or multiplicative
//! 3. [`models::fit_and_model`]: least-squares trend and fitted values
//! 4. [`models::forecast`]: trend extrapolated and recombined with the
//!    seasonal index of each future period
//!
//! [`pipeline::run`] chains them and returns a [`pipeline::Report`].
//!
//! ```
//! use classical_forecast::prelude::*;
//!
//! let series = Series::new(&[100.0, 120.0, 140.0, 160.0, 110.0, 130.0, 150.0, 170.0])?;
//! let report = run(&series, &DecompositionConfig::new().with_horizon(4))?;
//!
//! let expected = [120.0, 140.0, 160.0, 180.0];
//! for (value, expected) in report.forecast().values().iter().zip(expected) {
//!     assert!((value - expected).abs() < 1e-9);
//! }
//! # Ok::<(), ForecastError>(())
//! ```

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod seasonality;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{ForecastTable, SeasonLength, Series};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{ClassicalDecomposition, Forecaster};
    pub use crate::pipeline::{run, DecompositionConfig, Report};
    pub use crate::seasonality::DecompositionModel;
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
}
