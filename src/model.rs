//! Linear time model `T(n) = a·n + b`
//!
//! The report compares measured timings against hand-chosen coefficients.
//! An ordinary least-squares fit is also available so the chosen constants
//! can be checked against what the data actually supports.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Linear model with slope in ms/element and intercept in ms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Predicted time in ms for `n` elements
    pub fn evaluate(&self, n: f64) -> f64 {
        self.slope * n + self.intercept
    }

    /// Model of `other(n) - self(n)`, itself linear
    pub fn difference(&self, other: &LinearModel) -> LinearModel {
        LinearModel {
            slope: other.slope - self.slope,
            intercept: other.intercept - self.intercept,
        }
    }

    /// Slope converted to ns/element
    pub fn slope_ns_per_element(&self) -> f64 {
        self.slope * 1e6
    }

    /// Human-readable equation, e.g. `0.0001523 * n + 0.1`
    pub fn equation(&self) -> String {
        format!("{:.7} * n + {}", self.slope, self.intercept)
    }

    /// Ordinary least-squares fit of `ys` against `xs`
    ///
    /// # Example
    /// ```
    /// use filterbench::model::LinearModel;
    ///
    /// let fit = LinearModel::fit(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
    /// assert!((fit.slope - 2.0).abs() < 1e-12);
    /// assert!((fit.intercept - 1.0).abs() < 1e-12);
    /// ```
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<LinearModel> {
        if xs.len() != ys.len() {
            return Err(ReportError::DegenerateFit(format!(
                "{} x values but {} y values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(ReportError::DegenerateFit(format!(
                "need at least 2 points, got {}",
                xs.len()
            )));
        }

        let count = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / count;
        let mean_y = ys.iter().sum::<f64>() / count;

        let sxx: f64 = xs.iter().map(|x| (x - mean_x) * (x - mean_x)).sum();
        if sxx == 0.0 {
            return Err(ReportError::DegenerateFit(
                "all x values are identical".to_string(),
            ));
        }
        let sxy: f64 = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        let slope = sxy / sxx;
        Ok(LinearModel {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }
}

/// Coefficient of determination of `model` over the points `(xs, ys)`
///
/// Returns 1.0 when every point lies on the model. When `ys` has no
/// variance the result is 1.0 for a perfect fit and 0.0 otherwise.
pub fn r_squared(model: &LinearModel, xs: &[f64], ys: &[f64]) -> f64 {
    if ys.is_empty() {
        return 0.0;
    }
    let mean_y = ys.iter().sum::<f64>() / ys.len() as f64;
    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| {
            let residual = y - model.evaluate(*x);
            residual * residual
        })
        .sum();
    let ss_tot: f64 = ys.iter().map(|y| (y - mean_y) * (y - mean_y)).sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

/// `count` evenly spaced values from `start` to `end`, both inclusive
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMPERATIVE: LinearModel = LinearModel::new(0.0001523, 0.1);
    const HIGHER_ORDER: LinearModel = LinearModel::new(0.0002154, 0.15);

    #[test]
    fn test_evaluate_known_point() {
        assert!((IMPERATIVE.evaluate(100_000.0) - 15.33).abs() < 1e-9);
    }

    #[test]
    fn test_difference_is_linear() {
        let diff = IMPERATIVE.difference(&HIGHER_ORDER);
        for n in [0.0, 1.0, 1e5, 1e6, 5e7] {
            let direct = HIGHER_ORDER.evaluate(n) - IMPERATIVE.evaluate(n);
            assert!((diff.evaluate(n) - direct).abs() < 1e-6);
        }
    }

    #[test]
    fn test_monotonic_with_positive_slope() {
        let mut previous = f64::NEG_INFINITY;
        for n in [1.0, 10.0, 100.0, 1e4, 1e8] {
            let value = IMPERATIVE.evaluate(n);
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn test_slope_in_ns() {
        assert!((IMPERATIVE.slope_ns_per_element() - 152.3).abs() < 1e-9);
        assert!((HIGHER_ORDER.slope_ns_per_element() - 215.4).abs() < 1e-9);
    }

    #[test]
    fn test_equation_format() {
        assert_eq!(IMPERATIVE.equation(), "0.0001523 * n + 0.1");
        assert_eq!(HIGHER_ORDER.equation(), "0.0002154 * n + 0.15");
    }

    #[test]
    fn test_fit_recovers_exact_line() {
        let xs = [1e5, 1e6, 5e6, 1e7];
        let ys: Vec<f64> = xs.iter().map(|&x| IMPERATIVE.evaluate(x)).collect();
        let fit = LinearModel::fit(&xs, &ys).unwrap();
        assert!((fit.slope - IMPERATIVE.slope).abs() < 1e-12);
        assert!((fit.intercept - IMPERATIVE.intercept).abs() < 1e-6);
        assert!((r_squared(&fit, &xs, &ys) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_rejects_single_point() {
        assert!(matches!(
            LinearModel::fit(&[1.0], &[2.0]),
            Err(ReportError::DegenerateFit(_))
        ));
    }

    #[test]
    fn test_fit_rejects_constant_x() {
        assert!(matches!(
            LinearModel::fit(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]),
            Err(ReportError::DegenerateFit(_))
        ));
    }

    #[test]
    fn test_fit_rejects_length_mismatch() {
        assert!(LinearModel::fit(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_r_squared_constant_y() {
        let flat = LinearModel::new(0.0, 5.0);
        assert_eq!(r_squared(&flat, &[1.0, 2.0], &[5.0, 5.0]), 1.0);
        assert_eq!(r_squared(&IMPERATIVE, &[1.0, 2.0], &[5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_r_squared_shipped_data_is_high() {
        let xs = [1e5, 1e6, 5e6, 1e7, 5e7];
        let ys = [15.2, 152.7, 761.9, 1523.4, 7617.9];
        assert!(r_squared(&IMPERATIVE, &xs, &ys) > 0.99);
    }

    #[test]
    fn test_linspace_endpoints() {
        let points = linspace(100_000.0, 50_000_000.0, 100);
        assert_eq!(points.len(), 100);
        assert_eq!(points[0], 100_000.0);
        assert_eq!(points[99], 50_000_000.0);
        assert!(points.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }
}
