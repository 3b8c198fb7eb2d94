//! Core data structures: the observed series and the forecast table.

mod forecast;
mod series;

pub use forecast::{ForecastRow, ForecastTable};
pub use series::{Observation, SeasonLength, Series};
