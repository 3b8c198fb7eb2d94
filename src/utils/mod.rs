//! Numeric helpers shared by the decomposition stages.

pub mod metrics;
pub mod ols;
pub mod stats;

pub use metrics::{calculate_metrics, AccuracyMetrics};
pub use ols::{ols_line, OLSResult};
pub use stats::{geometric_mean, mean, product};
