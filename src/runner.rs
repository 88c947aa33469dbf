//! Timed execution of the filtering strategies
//!
//! Each run optionally sleeps for a fixed artificial delay before doing the
//! real work, so the measured time includes a constant overhead term. The
//! delay is part of the timed region.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::filter::Strategy;

/// Result of one timed filtering run
#[derive(Debug, Clone, PartialEq)]
pub struct TimedRun {
    pub strategy: Strategy,
    /// Even values found, in input order
    pub evens: Vec<i64>,
    /// Wall-clock time including the artificial delay
    pub elapsed: Duration,
}

impl TimedRun {
    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Line printed after each run, e.g. `Tempo for: 512 ms`
    pub fn timing_line(&self) -> String {
        format!(
            "Tempo {}: {:.0} ms",
            self.strategy.run_label(),
            self.elapsed_ms()
        )
    }
}

/// Runs a strategy under a stopwatch
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedRunner {
    delay: Duration,
}

impl TimedRunner {
    /// Create a runner with a fixed pre-run delay
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Runner with no artificial delay
    pub fn without_delay() -> Self {
        Self::default()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Time `strategy` over `values` without printing
    ///
    /// # Example
    /// ```
    /// use filterbench::filter::Strategy;
    /// use filterbench::runner::TimedRunner;
    ///
    /// let run = TimedRunner::without_delay().measure(Strategy::Imperative, 0..6);
    /// assert_eq!(run.evens, vec![0, 2, 4]);
    /// ```
    pub fn measure<I>(&self, strategy: Strategy, values: I) -> TimedRun
    where
        I: IntoIterator<Item = i64>,
    {
        let start = Instant::now();
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let evens = strategy.apply(values);
        let elapsed = start.elapsed();

        debug!(
            %strategy,
            evens = evens.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "timed filter run"
        );

        TimedRun {
            strategy,
            evens,
            elapsed,
        }
    }

    /// Time `strategy` over `values` and print the timing line to stdout
    pub fn run<I>(&self, strategy: Strategy, values: I) -> TimedRun
    where
        I: IntoIterator<Item = i64>,
    {
        let run = self.measure(strategy, values);
        println!("{}", run.timing_line());
        run
    }
}
