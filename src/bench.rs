//! Benchmark driver: both strategies over `0..n` for each sample size
//!
//! Prints a per-size section with the timing line of each run and an
//! agreement check, then a final table of elapsed seconds per strategy.
//! Disagreement between strategies is reported in the output, not raised.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::filter::Strategy;
use crate::model::LinearModel;
use crate::report::{validate_sizes, Scenario, DEFAULT_CURVE_POINTS};
use crate::runner::TimedRunner;
use crate::text_output::group_thousands;

/// Sample sizes used when none are given
pub const DEFAULT_SIZES: [u64; 4] = [100_000, 1_000_000, 5_000_000, 10_000_000];

/// Extra size appended by the stress run
pub const STRESS_SIZE: u64 = 50_000_000;

/// Benchmark parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub sizes: Vec<u64>,
    /// Artificial delay slept before each timed run
    pub delay: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            delay: Duration::from_millis(crate::report::DEFAULT_DELAY_MS),
        }
    }
}

impl BenchConfig {
    /// Default sizes plus the 50M stress size
    pub fn stress() -> Self {
        let mut config = Self::default();
        config.sizes.push(STRESS_SIZE);
        config
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.sizes.is_empty() {
            return Err("at least one sample size is required".to_string());
        }
        if let Some(n) = self.sizes.iter().find(|&&n| n > i64::MAX as u64) {
            return Err(format!("sample size {} does not fit in i64", n));
        }
        Ok(())
    }

    /// `validate` plus the size constraints of a report built from the run
    pub fn validate_for_report(&self) -> Result<(), String> {
        self.validate()?;
        validate_sizes(&self.sizes).map_err(|e| e.to_string())
    }
}

/// Timings and result counts for one sample size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub n: u64,
    pub imperative_ms: f64,
    pub higher_order_ms: f64,
    pub imperative_evens: usize,
    pub higher_order_evens: usize,
    /// Both strategies returned the same values in the same order
    pub identical: bool,
}

impl BenchmarkRecord {
    /// Whether the strategies agreed on this input
    pub fn agree(&self) -> bool {
        self.identical && self.imperative_evens == self.higher_order_evens
    }

    /// Agreement line printed after both runs
    pub fn verdict_line(&self) -> String {
        if self.agree() {
            format!(
                "[OK] Ambas encontraram {} numeros pares",
                group_thousands(self.imperative_evens as u64)
            )
        } else {
            "[ERRO] Resultados diferentes!".to_string()
        }
    }
}

/// All records of one benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkOutcome {
    pub records: Vec<BenchmarkRecord>,
}

impl BenchmarkOutcome {
    pub fn all_agree(&self) -> bool {
        self.records.iter().all(BenchmarkRecord::agree)
    }

    /// Measured timings as a report scenario using the given models
    pub fn to_scenario(
        &self,
        imperative_model: LinearModel,
        higher_order_model: LinearModel,
        delay: Duration,
    ) -> Scenario {
        Scenario {
            sizes: self.records.iter().map(|r| r.n).collect(),
            imperative_ms: self.records.iter().map(|r| r.imperative_ms).collect(),
            higher_order_ms: self.records.iter().map(|r| r.higher_order_ms).collect(),
            imperative_model,
            higher_order_model,
            delay_ms: delay.as_millis() as u64,
            curve_points: DEFAULT_CURVE_POINTS,
        }
    }

    /// Final table of elapsed seconds per strategy
    pub fn summary_table(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);

        out.push_str(&format!("\n{}\n", rule));
        out.push_str(&format!(
            "{:<15} {:<15} {:<15} {:<15}\n",
            "Tamanho (N)", "For Loop (s)", "Lambda (s)", "Diferenca"
        ));
        out.push_str(&format!("{}\n", rule));

        for record in &self.records {
            let for_s = record.imperative_ms / 1000.0;
            let lambda_s = record.higher_order_ms / 1000.0;
            let diff = lambda_s - for_s;
            let sign = if diff > 0.0 { "+" } else { "" };
            out.push_str(&format!(
                "{:<15} {:<15.4} {:<15.4} {}{:<14.4}s\n",
                group_thousands(record.n),
                for_s,
                lambda_s,
                sign,
                diff
            ));
        }

        out
    }
}

/// Runs the benchmark over every configured size
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchConfig,
    runner: TimedRunner,
}

impl Benchmark {
    pub fn new(config: BenchConfig) -> Self {
        let runner = TimedRunner::new(config.delay);
        Self { config, runner }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Benchmark a single size, printing the per-size section
    pub fn run_size(&self, n: u64) -> BenchmarkRecord {
        println!("\nTestando com {} elementos:", group_thousands(n));
        println!("{}", "=".repeat(40));

        let upper = n as i64;

        println!("1. Funcao com for:");
        let imperative = self.runner.run(Strategy::Imperative, 0..upper);

        println!("2. Funcao com lambda:");
        let higher_order = self.runner.run(Strategy::HigherOrder, 0..upper);

        let record = BenchmarkRecord {
            n,
            imperative_ms: imperative.elapsed_ms(),
            higher_order_ms: higher_order.elapsed_ms(),
            imperative_evens: imperative.evens.len(),
            higher_order_evens: higher_order.evens.len(),
            identical: imperative.evens == higher_order.evens,
        };

        if !record.agree() {
            warn!(
                n,
                imperative = record.imperative_evens,
                higher_order = record.higher_order_evens,
                "filter strategies disagree"
            );
        }
        println!("{}", record.verdict_line());

        record
    }

    /// Benchmark every configured size and print the summary table
    pub fn run(&self) -> BenchmarkOutcome {
        info!(
            sizes = self.config.sizes.len(),
            delay_ms = self.config.delay.as_millis() as u64,
            "starting benchmark"
        );

        println!("Testando as duas funcoes:");
        println!("{}", "-".repeat(50));

        let records = self
            .config
            .sizes
            .iter()
            .map(|&n| self.run_size(n))
            .collect();
        let outcome = BenchmarkOutcome { records };

        print!("{}", outcome.summary_table());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config(sizes: Vec<u64>) -> BenchConfig {
        BenchConfig {
            sizes,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(config.delay, Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_stress_config_appends_50m() {
        let config = BenchConfig::stress();
        assert_eq!(config.sizes.len(), 5);
        assert_eq!(*config.sizes.last().unwrap(), 50_000_000);
    }

    #[test]
    fn test_empty_sizes_invalid() {
        assert!(quick_config(vec![]).validate().is_err());
    }

    #[test]
    fn test_report_validation_rejects_unsorted_sizes() {
        let config = quick_config(vec![50_000_000, 100]);
        assert!(config.validate().is_ok());
        let err = config.validate_for_report().unwrap_err();
        assert!(err.contains("strictly increasing"), "{}", err);
    }

    #[test]
    fn test_report_validation_rejects_zero_size() {
        let err = quick_config(vec![0, 10]).validate_for_report().unwrap_err();
        assert!(err.contains("positive"), "{}", err);
        assert!(BenchConfig::stress().validate_for_report().is_ok());
    }

    #[test]
    fn test_run_counts_evens() {
        let outcome = Benchmark::new(quick_config(vec![10, 1_001])).run();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].imperative_evens, 5);
        assert_eq!(outcome.records[1].higher_order_evens, 501);
        assert!(outcome.all_agree());
    }

    #[test]
    fn test_zero_size_run() {
        let record = Benchmark::new(quick_config(vec![0])).run_size(0);
        assert_eq!(record.imperative_evens, 0);
        assert!(record.agree());
    }

    #[test]
    fn test_verdict_lines() {
        let mut record = BenchmarkRecord {
            n: 100_000,
            imperative_ms: 1.0,
            higher_order_ms: 1.0,
            imperative_evens: 50_000,
            higher_order_evens: 50_000,
            identical: true,
        };
        assert_eq!(
            record.verdict_line(),
            "[OK] Ambas encontraram 50,000 numeros pares"
        );

        record.higher_order_evens = 49_999;
        record.identical = false;
        assert_eq!(record.verdict_line(), "[ERRO] Resultados diferentes!");
    }

    #[test]
    fn test_summary_table_sign() {
        let outcome = BenchmarkOutcome {
            records: vec![
                BenchmarkRecord {
                    n: 1_000,
                    imperative_ms: 500.0,
                    higher_order_ms: 750.0,
                    imperative_evens: 500,
                    higher_order_evens: 500,
                    identical: true,
                },
                BenchmarkRecord {
                    n: 2_000,
                    imperative_ms: 800.0,
                    higher_order_ms: 600.0,
                    imperative_evens: 1_000,
                    higher_order_evens: 1_000,
                    identical: true,
                },
            ],
        };
        let table = outcome.summary_table();
        assert!(table.contains("1,000           0.5000          0.7500          +0.2500"));
        assert!(table.contains("2,000           0.8000          0.6000          -0.2000"));
    }

    #[test]
    fn test_outcome_to_scenario() {
        let outcome = Benchmark::new(quick_config(vec![100, 200, 300])).run();
        let scenario = outcome.to_scenario(
            LinearModel::new(0.001, 0.1),
            LinearModel::new(0.002, 0.2),
            Duration::ZERO,
        );
        assert_eq!(scenario.sizes, vec![100, 200, 300]);
        assert_eq!(scenario.imperative_ms.len(), 3);
        assert_eq!(scenario.delay_ms, 0);
    }
}
