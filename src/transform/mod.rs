//! Data transformations for time series.
//!
//! # Example
//!
//! ```
//! use classical_forecast::transform::{forward_pair_mean, rolling_mean};
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! // Trailing mean with window 2, then re-centred by pairing neighbours
//! let ma = rolling_mean(&series, 2);
//! let cma = forward_pair_mean(&ma);
//! assert_eq!(cma[1], Some(2.0));
//! ```

pub mod window;

pub use window::{forward_pair_mean, rolling_mean};
