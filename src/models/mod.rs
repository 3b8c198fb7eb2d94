//! Trend model, extrapolation and the forecaster built on them.

mod traits;

pub mod classical;
pub mod extrapolate;
pub mod trend;

pub use classical::ClassicalDecomposition;
pub use extrapolate::{boundary_row, forecast};
pub use traits::{BoxedForecaster, Forecaster};
pub use trend::{fit_and_model, fit_trend, ModelRow, ModelTable, TrendInput, TrendLine};
