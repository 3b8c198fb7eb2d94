//! Statistical utility functions.

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the geometric mean of a slice.
///
/// Computed in log space. Returns `None` for an empty slice or when any
/// value is not strictly positive, since the result is then undefined.
///
/// # Example
/// ```
/// use classical_forecast::utils::geometric_mean;
///
/// let g = geometric_mean(&[2.0, 8.0]).unwrap();
/// assert!((g - 4.0).abs() < 1e-12);
/// assert!(geometric_mean(&[1.0, -1.0]).is_none());
/// ```
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() || values.iter().any(|&v| v <= 0.0 || !v.is_finite()) {
        return None;
    }
    let log_mean = values.iter().map(|v| v.ln()).sum::<f64>() / values.len() as f64;
    Some(log_mean.exp())
}

/// Calculate the product of a slice.
pub fn product(values: &[f64]) -> f64 {
    values.iter().product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn geometric_mean_calculates_correctly() {
        assert_relative_eq!(
            geometric_mean(&[1.0, 2.0, 4.0]).unwrap(),
            2.0,
            epsilon = 1e-10
        );
        assert_relative_eq!(geometric_mean(&[5.0]).unwrap(), 5.0, epsilon = 1e-10);
    }

    #[test]
    fn geometric_mean_undefined_inputs() {
        assert!(geometric_mean(&[]).is_none());
        assert!(geometric_mean(&[1.0, 0.0]).is_none());
        assert!(geometric_mean(&[1.0, -2.0]).is_none());
        assert!(geometric_mean(&[1.0, f64::NAN]).is_none());
    }

    #[test]
    fn product_calculates_correctly() {
        assert_relative_eq!(product(&[0.5, 2.0, 3.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(product(&[]), 1.0, epsilon = 1e-10);
    }
}
