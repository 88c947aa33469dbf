//! Even-number filtering strategies
//!
//! Two ways of selecting the even values of an integer sequence:
//! - `Imperative`: an explicit loop that pushes matches onto a `Vec`
//! - `HigherOrder`: a predicate passed through `Iterator::filter`, then collected
//!
//! Both preserve input order and must return identical results for the same input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Filtering strategy under benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Loop-and-append
    Imperative,
    /// Predicate combinator over a lazy iterator
    HigherOrder,
}

impl Strategy {
    /// Both strategies, in reporting order
    pub const ALL: [Strategy; 2] = [Strategy::Imperative, Strategy::HigherOrder];

    /// Short label used in report columns ("For" / "Lambda")
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Imperative => "For",
            Strategy::HigherOrder => "Lambda",
        }
    }

    /// Lowercase label used in per-run timing lines
    pub fn run_label(self) -> &'static str {
        match self {
            Strategy::Imperative => "for",
            Strategy::HigherOrder => "lambda",
        }
    }

    /// Apply this strategy to a sequence
    pub fn apply<I>(self, values: I) -> Vec<i64>
    where
        I: IntoIterator<Item = i64>,
    {
        match self {
            Strategy::Imperative => evens_imperative(values),
            Strategy::HigherOrder => evens_higher_order(values),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Imperative => write!(f, "imperative"),
            Strategy::HigherOrder => write!(f, "higher-order"),
        }
    }
}

/// Evenness test shared by both strategies
#[inline]
pub fn is_even(value: i64) -> bool {
    value % 2 == 0
}

/// Select even values with an explicit loop
pub fn evens_imperative<I>(values: I) -> Vec<i64>
where
    I: IntoIterator<Item = i64>,
{
    let mut evens = Vec::new();
    for value in values {
        if is_even(value) {
            evens.push(value);
        }
    }
    evens
}

/// Select even values through `filter` and `collect`
pub fn evens_higher_order<I>(values: I) -> Vec<i64>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().filter(|&value| is_even(value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sequence_both_strategies() {
        let input = vec![0, 1, 2, 3, 4, 5];
        assert_eq!(evens_imperative(input.clone()), vec![0, 2, 4]);
        assert_eq!(evens_higher_order(input), vec![0, 2, 4]);
    }

    #[test]
    fn test_empty_input() {
        assert!(evens_imperative(Vec::new()).is_empty());
        assert!(evens_higher_order(Vec::new()).is_empty());
    }

    #[test]
    fn test_negative_values() {
        let input = vec![-4, -3, -2, -1, 0];
        assert_eq!(evens_imperative(input.clone()), vec![-4, -2, 0]);
        assert_eq!(evens_higher_order(input), vec![-4, -2, 0]);
    }

    #[test]
    fn test_preserves_order() {
        let input = vec![10, 3, 8, 2, 7, 6];
        assert_eq!(Strategy::Imperative.apply(input.clone()), vec![10, 8, 2, 6]);
        assert_eq!(Strategy::HigherOrder.apply(input), vec![10, 8, 2, 6]);
    }

    #[test]
    fn test_range_input() {
        let evens = Strategy::HigherOrder.apply(0..100_000);
        assert_eq!(evens.len(), 50_000);
        assert_eq!(evens, Strategy::Imperative.apply(0..100_000));
    }

    #[test]
    fn test_all_odd_yields_empty() {
        assert!(Strategy::Imperative.apply([1, 3, 5, 7]).is_empty());
    }

    #[test]
    fn test_extreme_values() {
        let input = vec![i64::MIN, i64::MAX];
        assert_eq!(evens_imperative(input.clone()), vec![i64::MIN]);
        assert_eq!(evens_higher_order(input), vec![i64::MIN]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Strategy::Imperative.label(), "For");
        assert_eq!(Strategy::HigherOrder.label(), "Lambda");
        assert_eq!(Strategy::HigherOrder.to_string(), "higher-order");
    }
}
