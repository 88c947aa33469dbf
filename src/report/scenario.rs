// Scenario configuration for the model-fit report
//
// A scenario is the immutable input record for one report: the sample
// sizes, the measured time per strategy at each size, and the hand-chosen
// linear model per strategy. The default scenario carries the shipped
// measurements; a TOML file can replace any of it.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::filter::Strategy;
use crate::model::LinearModel;

/// Default artificial delay before each timed run (ms)
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Default number of points on continuous theoretical curves
pub const DEFAULT_CURVE_POINTS: usize = 100;

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_curve_points() -> usize {
    DEFAULT_CURVE_POINTS
}

/// Input record for a report
///
/// # Example
/// ```
/// use filterbench::report::Scenario;
///
/// let scenario = Scenario::default();
/// assert_eq!(scenario.sizes.len(), 5);
/// assert!(scenario.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Sample sizes, strictly increasing
    pub sizes: Vec<u64>,

    /// Measured imperative times (ms), parallel to `sizes`
    pub imperative_ms: Vec<f64>,

    /// Measured higher-order times (ms), parallel to `sizes`
    pub higher_order_ms: Vec<f64>,

    /// Hand-chosen model for the imperative strategy
    pub imperative_model: LinearModel,

    /// Hand-chosen model for the higher-order strategy
    pub higher_order_model: LinearModel,

    /// Artificial delay slept before each timed run (ms)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Resolution of the continuous theoretical curves handed to renderers
    #[serde(default = "default_curve_points")]
    pub curve_points: usize,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            sizes: vec![100_000, 1_000_000, 5_000_000, 10_000_000, 50_000_000],
            imperative_ms: vec![15.2, 152.7, 761.9, 1523.4, 7617.9],
            higher_order_ms: vec![21.4, 215.3, 1076.5, 2154.3, 10769.2],
            imperative_model: LinearModel::new(0.0001523, 0.1), // ~152 ns/element
            higher_order_model: LinearModel::new(0.0002154, 0.15), // ~215 ns/element
            delay_ms: DEFAULT_DELAY_MS,
            curve_points: DEFAULT_CURVE_POINTS,
        }
    }
}

impl Scenario {
    /// Parse a scenario from TOML and validate it
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let scenario: Scenario =
            toml::from_str(input).map_err(|e| ReportError::InvalidScenario(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load scenario from {}", path.display()))
    }

    /// Measured times for `strategy`
    pub fn measured(&self, strategy: Strategy) -> &[f64] {
        match strategy {
            Strategy::Imperative => &self.imperative_ms,
            Strategy::HigherOrder => &self.higher_order_ms,
        }
    }

    /// Model for `strategy`
    pub fn model(&self, strategy: Strategy) -> &LinearModel {
        match strategy {
            Strategy::Imperative => &self.imperative_model,
            Strategy::HigherOrder => &self.higher_order_model,
        }
    }

    /// Validate shapes and values
    pub fn validate(&self) -> Result<()> {
        validate_inputs(&self.sizes, &self.imperative_ms, &self.higher_order_ms)?;

        if self.sizes.first() == Some(&0) {
            return Err(ReportError::InvalidScenario(
                "sample sizes must be positive".to_string(),
            ));
        }

        for strategy in Strategy::ALL {
            if let Some(bad) = self
                .measured(strategy)
                .iter()
                .find(|t| !t.is_finite() || **t < 0.0)
            {
                return Err(ReportError::InvalidScenario(format!(
                    "{} timings must be finite and non-negative, got {}",
                    strategy, bad
                )));
            }
            let model = self.model(strategy);
            if !model.slope.is_finite() || !model.intercept.is_finite() {
                return Err(ReportError::InvalidScenario(format!(
                    "{} model coefficients must be finite",
                    strategy
                )));
            }
        }

        if self.curve_points < 2 {
            return Err(ReportError::InvalidScenario(format!(
                "curve_points must be >= 2, got {}",
                self.curve_points
            )));
        }

        Ok(())
    }
}

/// Shape checks shared by scenarios and direct report construction
pub(crate) fn validate_inputs(
    sizes: &[u64],
    imperative_ms: &[f64],
    higher_order_ms: &[f64],
) -> Result<()> {
    if sizes.len() != imperative_ms.len() || sizes.len() != higher_order_ms.len() {
        return Err(ReportError::LengthMismatch {
            sizes: sizes.len(),
            imperative: imperative_ms.len(),
            higher_order: higher_order_ms.len(),
        });
    }
    if sizes.is_empty() {
        return Err(ReportError::EmptyInput);
    }
    check_ascending(sizes)
}

/// Sample sizes a report can be built on: non-empty, positive, strictly
/// increasing. Lets callers reject sizes before spending time measuring them.
pub fn validate_sizes(sizes: &[u64]) -> Result<()> {
    if sizes.is_empty() {
        return Err(ReportError::EmptyInput);
    }
    check_ascending(sizes)?;
    if sizes[0] == 0 {
        return Err(ReportError::InvalidScenario(
            "sample sizes must be positive".to_string(),
        ));
    }
    Ok(())
}

fn check_ascending(sizes: &[u64]) -> Result<()> {
    match sizes.windows(2).find(|w| w[1] <= w[0]) {
        Some(pair) => Err(ReportError::NotAscending {
            previous: pair[0],
            next: pair[1],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let scenario = Scenario::default();
        assert_eq!(scenario.sizes[0], 100_000);
        assert_eq!(scenario.imperative_ms[4], 7617.9);
        assert_eq!(scenario.higher_order_ms[4], 10769.2);
        assert_eq!(scenario.delay_ms, 500);
        assert_eq!(scenario.curve_points, 100);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_parse_toml_with_defaults() {
        let toml = r#"
            sizes = [10, 20, 30]
            imperative_ms = [1.0, 2.0, 3.0]
            higher_order_ms = [1.5, 3.0, 4.5]

            [imperative_model]
            slope = 0.1
            intercept = 0.0

            [higher_order_model]
            slope = 0.15
            intercept = 0.0
        "#;
        let scenario = Scenario::from_toml_str(toml).unwrap();
        assert_eq!(scenario.sizes, vec![10, 20, 30]);
        assert_eq!(scenario.higher_order_model.slope, 0.15);
        assert_eq!(scenario.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(scenario.curve_points, DEFAULT_CURVE_POINTS);
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        assert!(matches!(
            Scenario::from_toml_str("sizes = [1, 2"),
            Err(ReportError::InvalidScenario(_))
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let scenario = Scenario {
            imperative_ms: vec![1.0],
            ..Scenario::default()
        };
        assert!(matches!(
            scenario.validate(),
            Err(ReportError::LengthMismatch {
                sizes: 5,
                imperative: 1,
                higher_order: 5
            })
        ));
    }

    #[test]
    fn test_not_ascending() {
        let scenario = Scenario {
            sizes: vec![100, 300, 200, 400, 500],
            ..Scenario::default()
        };
        assert_eq!(
            scenario.validate(),
            Err(ReportError::NotAscending {
                previous: 300,
                next: 200
            })
        );
    }

    #[test]
    fn test_duplicate_size_is_not_ascending() {
        assert!(validate_inputs(&[5, 5], &[1.0, 1.0], &[1.0, 1.0]).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate_inputs(&[], &[], &[]), Err(ReportError::EmptyInput));
    }

    #[test]
    fn test_zero_size_rejected() {
        let scenario = Scenario {
            sizes: vec![0, 1, 2, 3, 4],
            ..Scenario::default()
        };
        assert!(matches!(
            scenario.validate(),
            Err(ReportError::InvalidScenario(_))
        ));
    }

    #[test]
    fn test_negative_timing_rejected() {
        let mut scenario = Scenario::default();
        scenario.higher_order_ms[2] = -1.0;
        assert!(matches!(
            scenario.validate(),
            Err(ReportError::InvalidScenario(_))
        ));
    }

    fn toml_with(imperative_ms: &str, imperative_slope: &str) -> String {
        format!(
            r#"
            sizes = [10, 20, 30]
            imperative_ms = {}
            higher_order_ms = [1.5, 3.0, 4.5]

            [imperative_model]
            slope = {}
            intercept = 0.0

            [higher_order_model]
            slope = 0.15
            intercept = 0.0
        "#,
            imperative_ms, imperative_slope
        )
    }

    #[test]
    fn test_parse_rejects_non_finite_timings() {
        for timings in ["[nan, 2.0, 3.0]", "[1.0, inf, 3.0]", "[1.0, 2.0, -inf]"] {
            let result = Scenario::from_toml_str(&toml_with(timings, "0.1"));
            match result {
                Err(ReportError::InvalidScenario(message)) => {
                    assert!(message.contains("finite"), "{}", message)
                }
                other => panic!("expected invalid scenario for {}, got {:?}", timings, other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_non_finite_coefficients() {
        assert!(matches!(
            Scenario::from_toml_str(&toml_with("[1.0, 2.0, 3.0]", "nan")),
            Err(ReportError::InvalidScenario(_))
        ));
        assert!(Scenario::from_toml_str(&toml_with("[1.0, 2.0, 3.0]", "0.1")).is_ok());
    }

    #[test]
    fn test_validate_sizes() {
        assert!(validate_sizes(&[1, 2, 3]).is_ok());
        assert_eq!(validate_sizes(&[]), Err(ReportError::EmptyInput));
        assert!(matches!(
            validate_sizes(&[0, 1]),
            Err(ReportError::InvalidScenario(_))
        ));
        assert_eq!(
            validate_sizes(&[50_000_000, 100]),
            Err(ReportError::NotAscending {
                previous: 50_000_000,
                next: 100
            })
        );
    }

    #[test]
    fn test_curve_points_minimum() {
        let scenario = Scenario {
            curve_points: 1,
            ..Scenario::default()
        };
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Scenario::from_file(Path::new("/nonexistent/scenario.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read scenario file"));
    }
}
