// Model-fit report: measured timings vs linear theoretical models
//
// Given parallel arrays of sample sizes and measured times for both
// strategies, plus one hand-chosen linear model per strategy, builds one
// comparison row per sample size and a summary of aggregate statistics.
//
// The computation is pure. Presentation lives in text_output, json_output,
// csv_output and chart.

mod rows;
mod scenario;
mod summary;

pub use rows::{relative_error, ComparisonRow, StrategyPoint};
pub use scenario::{validate_sizes, Scenario, DEFAULT_CURVE_POINTS, DEFAULT_DELAY_MS};
pub use summary::{coefficient_difference_pct, mean, ReportSummary};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::filter::Strategy;
use crate::model::LinearModel;

/// Complete report: one row per sample size plus the summary block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub imperative_model: LinearModel,
    pub higher_order_model: LinearModel,
    pub rows: Vec<ComparisonRow>,
    pub summary: ReportSummary,
}

impl Report {
    /// Build a report from parallel arrays
    ///
    /// `sizes` must be non-empty and strictly increasing, and both timing
    /// slices must have the same length as `sizes`.
    ///
    /// # Example
    /// ```
    /// use filterbench::model::LinearModel;
    /// use filterbench::report::Report;
    ///
    /// let report = Report::compare(
    ///     &[100_000, 1_000_000],
    ///     &[15.2, 152.7],
    ///     &[21.4, 215.3],
    ///     &LinearModel::new(0.0001523, 0.1),
    ///     &LinearModel::new(0.0002154, 0.15),
    /// )
    /// .unwrap();
    /// assert_eq!(report.rows.len(), 2);
    /// ```
    pub fn compare(
        sizes: &[u64],
        imperative_ms: &[f64],
        higher_order_ms: &[f64],
        imperative_model: &LinearModel,
        higher_order_model: &LinearModel,
    ) -> Result<Self> {
        scenario::validate_inputs(sizes, imperative_ms, higher_order_ms)?;

        let rows = sizes
            .iter()
            .zip(imperative_ms.iter().zip(higher_order_ms))
            .map(|(&n, (&imperative, &higher_order))| {
                ComparisonRow::new(
                    n,
                    imperative,
                    higher_order,
                    imperative_model,
                    higher_order_model,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let summary = ReportSummary::from_rows(&rows, imperative_model, higher_order_model);
        debug!(
            rows = rows.len(),
            mean_error = summary.mean_error_overall,
            "built model-fit report"
        );

        Ok(Self {
            imperative_model: *imperative_model,
            higher_order_model: *higher_order_model,
            rows,
            summary,
        })
    }

    /// Build a report from a validated scenario
    pub fn from_scenario(scenario: &Scenario) -> Result<Self> {
        scenario.validate()?;
        Self::compare(
            &scenario.sizes,
            &scenario.imperative_ms,
            &scenario.higher_order_ms,
            &scenario.imperative_model,
            &scenario.higher_order_model,
        )
    }

    pub fn model(&self, strategy: Strategy) -> &LinearModel {
        match strategy {
            Strategy::Imperative => &self.imperative_model,
            Strategy::HigherOrder => &self.higher_order_model,
        }
    }

    /// Sample sizes covered by the report
    pub fn sizes(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.n).collect()
    }
}
