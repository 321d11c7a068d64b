//! Per-class likelihood divisors
//!
//! A token's per-class likelihood is approximated as `count / divisor(table)`.
//! [`VocabularySize`] is the baseline behavior. [`TokenTotal`] divides by the
//! total count instead, which turns the per-class counts into a proper
//! frequency distribution. Switching between them changes observed accuracy,
//! so the default is never swapped implicitly.

use crate::frequency::FrequencyTable;
use std::fmt;

/// Strategy computing the divisor applied to a class table's counts
pub trait Denominator: Send + Sync + fmt::Debug {
    /// Short identifier used in logs and reports
    fn name(&self) -> &str;

    /// Divisor for the given class table. Only called on non-empty tables.
    fn divisor(&self, table: &FrequencyTable) -> f64;
}

/// Number of distinct tokens in the table
#[derive(Debug, Clone, Copy, Default)]
pub struct VocabularySize;

impl Denominator for VocabularySize {
    fn name(&self) -> &str {
        "vocabulary_size"
    }

    fn divisor(&self, table: &FrequencyTable) -> f64 {
        table.vocabulary_size() as f64
    }
}

/// Sum of all counts in the table
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenTotal;

impl Denominator for TokenTotal {
    fn name(&self) -> &str {
        "token_total"
    }

    fn divisor(&self, table: &FrequencyTable) -> f64 {
        table.total_count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors() {
        let mut table = FrequencyTable::new();
        table.increment("free");
        table.increment("free");
        table.increment("money");

        assert_eq!(VocabularySize.divisor(&table), 2.0);
        assert_eq!(TokenTotal.divisor(&table), 3.0);
        assert_eq!(VocabularySize.name(), "vocabulary_size");
        assert_eq!(TokenTotal.name(), "token_total");
    }
}
