//! Error types for report construction and model fitting

use thiserror::Error;

use crate::filter::Strategy;

/// Errors raised while building a model-fit report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// A linear model predicted exactly zero, so relative error is undefined
    #[error("{strategy} model predicts 0 ms at n={n}; relative error is undefined")]
    ZeroPrediction { strategy: Strategy, n: u64 },

    /// A measured imperative time of zero makes the time ratio undefined
    #[error("measured {strategy} time is 0 ms at n={n}; time ratio is undefined")]
    ZeroMeasurement { strategy: Strategy, n: u64 },

    /// Parallel input arrays differ in length
    #[error(
        "input length mismatch: {sizes} sample sizes, {imperative} imperative timings, {higher_order} higher-order timings"
    )]
    LengthMismatch {
        sizes: usize,
        imperative: usize,
        higher_order: usize,
    },

    /// No sample sizes were supplied
    #[error("no sample sizes supplied")]
    EmptyInput,

    /// Sample sizes must be strictly increasing
    #[error("sample sizes must be strictly increasing: {previous} is followed by {next}")]
    NotAscending { previous: u64, next: u64 },

    /// Least-squares fit needs at least two distinct x values
    #[error("cannot fit a line: {0}")]
    DegenerateFit(String),

    /// Scenario configuration failed validation
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
