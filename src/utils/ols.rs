//! Ordinary Least Squares (OLS) fit of a straight line.
//!
//! Used by the trend model to regress the deseasonalized series on the
//! period number.

use crate::error::{ForecastError, Result};

/// Slope and intercept of a fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OLSResult {
    /// Change in `y` per unit of `x`.
    pub slope: f64,
    /// Value of the line at `x = 0`.
    pub intercept: f64,
    /// Number of points the line was fitted on.
    pub observations: usize,
}

/// Fit `y = slope * x + intercept` by ordinary least squares.
///
/// Uses the closed-form normal equations:
/// `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)` and
/// `intercept = (Σy − slope·Σx) / n`.
///
/// # Returns
/// A zero line (slope 0, intercept 0) when there are no points.
///
/// # Errors
/// * [`ForecastError::DimensionMismatch`] if `x` and `y` differ in length.
/// * [`ForecastError::DegenerateRegression`] if every `x` is the same, which
///   leaves the slope undefined.
pub fn ols_line(x: &[f64], y: &[f64]) -> Result<OLSResult> {
    if x.len() != y.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }

    let n = x.len();
    if n == 0 {
        return Ok(OLSResult {
            slope: 0.0,
            intercept: 0.0,
            observations: 0,
        });
    }

    let nf = n as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();

    let denominator = nf * sum_x2 - sum_x * sum_x;
    if denominator.abs() < 1e-10 {
        return Err(ForecastError::DegenerateRegression { observations: n });
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / nf;

    Ok(OLSResult {
        slope,
        intercept,
        observations: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ols_line_simple_linear() {
        // y = 2 + 3*x
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![5.0, 8.0, 11.0, 14.0, 17.0];

        let result = ols_line(&x, &y).unwrap();

        assert_relative_eq!(result.intercept, 2.0, epsilon = 1e-10);
        assert_relative_eq!(result.slope, 3.0, epsilon = 1e-10);
        assert_eq!(result.observations, 5);
    }

    #[test]
    fn ols_line_empty_is_zero_line() {
        let result = ols_line(&[], &[]).unwrap();
        assert_eq!(result.slope, 0.0);
        assert_eq!(result.intercept, 0.0);
        assert_eq!(result.observations, 0);
    }

    #[test]
    fn ols_line_single_point_is_degenerate() {
        assert_eq!(
            ols_line(&[4.0], &[10.0]),
            Err(ForecastError::DegenerateRegression { observations: 1 })
        );
    }

    #[test]
    fn ols_line_repeated_x_is_degenerate() {
        let result = ols_line(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(ForecastError::DegenerateRegression { observations: 3 })
        ));
    }

    #[test]
    fn ols_line_dimension_mismatch() {
        assert!(matches!(
            ols_line(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(ForecastError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn ols_with_noise() {
        let n = 100;
        let x: Vec<f64> = (1..=n).map(|i| i as f64).collect();
        let y: Vec<f64> = x
            .iter()
            .map(|&xi| 2.5 + 1.7 * xi + (xi * 0.13).sin() * 0.1)
            .collect();

        let result = ols_line(&x, &y).unwrap();

        assert_relative_eq!(result.intercept, 2.5, epsilon = 0.1);
        assert_relative_eq!(result.slope, 1.7, epsilon = 0.01);
    }
}
