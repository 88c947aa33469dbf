//! Chart-ready series for external renderers
//!
//! Nothing here draws. The series cover the comparison, relative error,
//! difference and residual charts plus the coefficient bars; a renderer
//! consumes them as plain (x, y) pairs and scalar annotations.

use serde::{Deserialize, Serialize};

use crate::filter::Strategy;
use crate::model::{linspace, LinearModel};
use crate::report::{ComparisonRow, Report};

/// A named list of (x, y) points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// Slope of one strategy's model expressed in ns/element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientBar {
    pub label: String,
    pub ns_per_element: f64,
}

/// Everything a renderer needs for the report dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Continuous theoretical curves, one per strategy
    pub theoretical: Vec<Series>,
    /// Measured points, one series per strategy
    pub measured: Vec<Series>,
    /// Relative error (%) per sample size, one series per strategy
    pub relative_error: Vec<Series>,
    /// Measured higher-order minus imperative
    pub measured_difference: Series,
    /// Continuous theoretical higher-order minus imperative
    pub theoretical_difference: Series,
    /// Measured minus predicted, one series per strategy
    pub residuals: Vec<Series>,
    pub coefficients: Vec<CoefficientBar>,
    /// Model equations for on-chart annotation
    pub equations: Vec<String>,
}

impl ChartData {
    /// Build chart series from a report, sampling curves at `curve_points`
    pub fn from_report(report: &Report, curve_points: usize) -> Self {
        let sizes: Vec<f64> = report.rows.iter().map(|r| r.n as f64).collect();
        let first = sizes.first().copied().unwrap_or(0.0);
        let last = sizes.last().copied().unwrap_or(0.0);
        let curve_xs = linspace(first, last, curve_points);

        let curve = |model: &LinearModel| -> Vec<(f64, f64)> {
            curve_xs.iter().map(|&x| (x, model.evaluate(x))).collect()
        };

        let theoretical = Strategy::ALL
            .iter()
            .map(|&s| {
                Series::new(
                    format!("{} (Teorico)", s.label()),
                    curve(report.model(s)),
                )
            })
            .collect();
        let measured = Strategy::ALL
            .iter()
            .map(|&s| {
                Series::new(
                    format!("{} (Experimental)", s.label()),
                    row_series(report, |r| r.point(s).measured_ms),
                )
            })
            .collect();
        let relative_error = Strategy::ALL
            .iter()
            .map(|&s| {
                Series::new(
                    s.label(),
                    row_series(report, |r| r.point(s).relative_error_pct),
                )
            })
            .collect();
        let residuals = Strategy::ALL
            .iter()
            .map(|&s| {
                Series::new(
                    format!("{}: Exp - Teo", s.label()),
                    row_series(report, |r| r.point(s).residual_ms),
                )
            })
            .collect();

        let difference_model = report.imperative_model.difference(&report.higher_order_model);

        Self {
            theoretical,
            measured,
            relative_error,
            measured_difference: Series::new(
                "Diferenca Experimental",
                row_series(report, |r| r.diff_measured_ms),
            ),
            theoretical_difference: Series::new("Diferenca Teorica", curve(&difference_model)),
            residuals,
            coefficients: Strategy::ALL
                .iter()
                .map(|&s| CoefficientBar {
                    label: s.label().to_string(),
                    ns_per_element: report.model(s).slope_ns_per_element(),
                })
                .collect(),
            equations: Strategy::ALL
                .iter()
                .map(|&s| format!("T_{}(n) = {}", s.run_label(), report.model(s).equation()))
                .collect(),
        }
    }
}

fn row_series(report: &Report, value: impl Fn(&ComparisonRow) -> f64) -> Vec<(f64, f64)> {
    report.rows.iter().map(|r| (r.n as f64, value(r))).collect()
}
