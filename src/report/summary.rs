// Aggregate statistics over comparison rows
//
// Means are plain (unweighted) averages across rows, kept in f64 so a
// summary never loses precision or range relative to its rows.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filter::Strategy;
use crate::model::{r_squared, LinearModel};
use crate::report::rows::ComparisonRow;

/// Summary block printed after the row table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Mean relative error of the imperative model (%)
    pub mean_error_imperative: f64,
    /// Mean relative error of the higher-order model (%)
    pub mean_error_higher_order: f64,
    /// Mean over all relative errors of both strategies (%)
    pub mean_error_overall: f64,
    /// Mean of measured higher-order / imperative
    pub mean_ratio: f64,
    /// Mean of per-row percent slower
    pub mean_percent_slower: f64,
    /// (a_higher_order / a_imperative - 1) * 100
    pub coefficient_difference_pct: f64,
    /// R² of the imperative model against its measurements
    pub r_squared_imperative: f64,
    /// R² of the higher-order model against its measurements
    pub r_squared_higher_order: f64,
    /// Least-squares line through the imperative measurements
    pub fitted_imperative: Option<LinearModel>,
    /// Least-squares line through the higher-order measurements
    pub fitted_higher_order: Option<LinearModel>,
}

impl ReportSummary {
    pub fn from_rows(
        rows: &[ComparisonRow],
        imperative_model: &LinearModel,
        higher_order_model: &LinearModel,
    ) -> Self {
        let errors = |strategy: Strategy| -> Vec<f64> {
            rows.iter()
                .map(|r| r.point(strategy).relative_error_pct)
                .collect()
        };
        let imperative_errors = errors(Strategy::Imperative);
        let higher_order_errors = errors(Strategy::HigherOrder);
        let all_errors: Vec<f64> = imperative_errors
            .iter()
            .chain(&higher_order_errors)
            .copied()
            .collect();

        let ratios: Vec<f64> = rows.iter().map(|r| r.ratio).collect();
        let slower: Vec<f64> = rows.iter().map(|r| r.percent_slower).collect();

        let xs: Vec<f64> = rows.iter().map(|r| r.n as f64).collect();
        let measured = |strategy: Strategy| -> Vec<f64> {
            rows.iter().map(|r| r.point(strategy).measured_ms).collect()
        };
        let imperative_ms = measured(Strategy::Imperative);
        let higher_order_ms = measured(Strategy::HigherOrder);

        let fitted_imperative = LinearModel::fit(&xs, &imperative_ms).ok();
        let fitted_higher_order = LinearModel::fit(&xs, &higher_order_ms).ok();
        if fitted_imperative.is_none() {
            debug!(rows = rows.len(), "not enough rows for a least-squares fit");
        }

        Self {
            mean_error_imperative: mean(&imperative_errors),
            mean_error_higher_order: mean(&higher_order_errors),
            mean_error_overall: mean(&all_errors),
            mean_ratio: mean(&ratios),
            mean_percent_slower: mean(&slower),
            coefficient_difference_pct: coefficient_difference_pct(
                imperative_model,
                higher_order_model,
            ),
            r_squared_imperative: r_squared(imperative_model, &xs, &imperative_ms),
            r_squared_higher_order: r_squared(higher_order_model, &xs, &higher_order_ms),
            fitted_imperative,
            fitted_higher_order,
        }
    }
}

/// Percent by which the higher-order slope exceeds the imperative slope
///
/// Zero when the imperative slope is zero.
pub fn coefficient_difference_pct(imperative: &LinearModel, higher_order: &LinearModel) -> f64 {
    if imperative.slope == 0.0 {
        return 0.0;
    }
    (higher_order.slope / imperative.slope - 1.0) * 100.0
}

/// Arithmetic mean; 0.0 for an empty slice
///
/// Each term is scaled before summing so finite inputs near `f64::MAX`
/// keep a finite mean.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let count = values.len() as f64;
    values.iter().map(|v| v / count).sum()
}
