//! Rolling window functions.
//!
//! Windows that cannot be filled yield `None` instead of a padded value.

/// Compute the trailing rolling mean.
///
/// Element `i` is the mean of `series[i + 1 - window ..= i]`, and `None`
/// while fewer than `window` values are available.
///
/// # Arguments
/// * `series` - Input values
/// * `window` - Window size; a zero window yields all `None`
pub fn rolling_mean(series: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = series.len();
    if window == 0 || n < window {
        return vec![None; n];
    }

    let mut result = vec![None; n];
    for i in (window - 1)..n {
        let sum: f64 = series[i + 1 - window..=i].iter().sum();
        result[i] = Some(sum / window as f64);
    }

    result
}

/// Average each element with its successor.
///
/// Element `i` is `(values[i] + values[i + 1]) / 2` when both are defined.
/// The last element has no successor and is always `None`.
pub fn forward_pair_mean(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    for (i, pair) in values.windows(2).enumerate() {
        if let (Some(a), Some(b)) = (pair[0], pair[1]) {
            result[i] = Some((a + b) / 2.0);
        }
    }
    result
}
