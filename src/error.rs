//! Error types for the classical-forecast library.

use thiserror::Error;

/// Result type alias for decomposition and forecasting operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while building a series or fitting the model.
///
/// Running out of data is not one of them: the pipeline stages answer
/// insufficient input with empty or unchanged tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// An observation is NaN or infinite.
    #[error("non-finite value at period {period}")]
    NonFiniteValue { period: usize },

    /// A textual entry could not be read as a number.
    #[error("could not parse value: {0:?}")]
    ParseValue(String),

    /// Every eligible period is the same, so the trend slope is undefined.
    #[error("degenerate trend regression over {observations} observation(s)")]
    DegenerateRegression { observations: usize },
}
