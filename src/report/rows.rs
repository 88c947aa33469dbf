// Per-sample-size comparison rows

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::filter::Strategy;
use crate::model::LinearModel;

/// Measured vs predicted time for one strategy at one sample size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyPoint {
    pub measured_ms: f64,
    pub predicted_ms: f64,
    /// |measured - predicted| / predicted, in percent
    pub relative_error_pct: f64,
    /// measured - predicted
    pub residual_ms: f64,
}

impl StrategyPoint {
    pub fn new(strategy: Strategy, n: u64, model: &LinearModel, measured_ms: f64) -> Result<Self> {
        let predicted_ms = model.evaluate(n as f64);
        Ok(Self {
            measured_ms,
            predicted_ms,
            relative_error_pct: relative_error(strategy, n, model, measured_ms)?,
            residual_ms: measured_ms - predicted_ms,
        })
    }
}

/// One report line joining both strategies at the same `n`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub n: u64,
    pub imperative: StrategyPoint,
    pub higher_order: StrategyPoint,
    /// measured higher-order - measured imperative
    pub diff_measured_ms: f64,
    /// predicted higher-order - predicted imperative
    pub diff_predicted_ms: f64,
    /// measured higher-order / measured imperative
    pub ratio: f64,
    /// How much slower higher-order is, in percent
    pub percent_slower: f64,
}

impl ComparisonRow {
    pub fn new(
        n: u64,
        imperative_ms: f64,
        higher_order_ms: f64,
        imperative_model: &LinearModel,
        higher_order_model: &LinearModel,
    ) -> Result<Self> {
        let imperative = StrategyPoint::new(Strategy::Imperative, n, imperative_model, imperative_ms)?;
        let higher_order =
            StrategyPoint::new(Strategy::HigherOrder, n, higher_order_model, higher_order_ms)?;

        if imperative_ms == 0.0 {
            return Err(ReportError::ZeroMeasurement {
                strategy: Strategy::Imperative,
                n,
            });
        }
        let ratio = higher_order_ms / imperative_ms;

        Ok(Self {
            n,
            imperative,
            higher_order,
            diff_measured_ms: higher_order_ms - imperative_ms,
            diff_predicted_ms: higher_order.predicted_ms - imperative.predicted_ms,
            ratio,
            percent_slower: (ratio - 1.0) * 100.0,
        })
    }

    pub fn point(&self, strategy: Strategy) -> &StrategyPoint {
        match strategy {
            Strategy::Imperative => &self.imperative,
            Strategy::HigherOrder => &self.higher_order,
        }
    }
}

/// Relative error of `measured_ms` against `model` at `n`, in percent
///
/// Fails with [`ReportError::ZeroPrediction`] when the model predicts zero.
///
/// # Example
/// ```
/// use filterbench::filter::Strategy;
/// use filterbench::model::LinearModel;
/// use filterbench::report::relative_error;
///
/// let model = LinearModel::new(0.0001523, 0.1);
/// let err = relative_error(Strategy::Imperative, 100_000, &model, 15.2).unwrap();
/// assert!((err - 0.848).abs() < 0.001);
/// ```
pub fn relative_error(
    strategy: Strategy,
    n: u64,
    model: &LinearModel,
    measured_ms: f64,
) -> Result<f64> {
    let predicted = model.evaluate(n as f64);
    if predicted == 0.0 {
        return Err(ReportError::ZeroPrediction { strategy, n });
    }
    Ok(((measured_ms - predicted) / predicted).abs() * 100.0)
}
