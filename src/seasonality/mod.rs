//! Smoothing and seasonal extraction.
//!
//! The first two stages of the classical decomposition:
//! - [`smooth`]: trailing and centered moving averages
//! - [`extract_seasonal`]: per-phase seasonal indices and the
//!   deseasonalized series

mod extractor;
mod indices;
mod smoother;

pub use extractor::{extract_seasonal, SeasonalRow, SeasonalTable};
pub use indices::{DecompositionModel, SeasonalIndices};
pub use smoother::{smooth, SmoothedRow, SmoothedTable};
