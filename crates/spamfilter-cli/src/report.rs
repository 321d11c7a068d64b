//! Console and JSON reporting

use serde::Serialize;
use spamfilter_classifiers::{EvaluationReport, FilterConfig, TrainingSummary};
use std::fmt;

/// Outcome of one train/evaluate run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub alpha: f64,
    pub threshold: f64,
    pub denominator: String,
    pub training: TrainingSummary,
    pub evaluation: EvaluationReport,
    /// Aggregate accuracy in percent, `null` when nothing was classified
    pub accuracy: Option<f64>,
}

impl RunReport {
    pub fn new(
        config: &FilterConfig,
        denominator: &str,
        training: TrainingSummary,
        evaluation: EvaluationReport,
    ) -> Self {
        Self {
            alpha: config.alpha,
            threshold: config.threshold,
            denominator: denominator.to_string(),
            training,
            evaluation,
            accuracy: evaluation.accuracy(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One row of the sweep table
    pub fn table_row(&self) -> String {
        let accuracy = self
            .accuracy
            .map(|a| format!("{:.2}%", a))
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "{:>10} {:>9} {:>9} {:>9} {:>9}",
            self.alpha,
            self.threshold,
            self.evaluation.ham.to_string(),
            self.evaluation.spam.to_string(),
            accuracy
        )
    }

    pub fn table_header() -> String {
        format!(
            "{:>10} {:>9} {:>9} {:>9} {:>9}",
            "alpha", "threshold", "ham", "spam", "accuracy"
        )
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "alpha:     {}", self.alpha)?;
        writeln!(f, "threshold: {}", self.threshold)?;
        writeln!(f, "divisor:   {}", self.denominator)?;
        writeln!(
            f,
            "trained:   {} ham, {} spam ({} skipped)",
            self.training.ham_documents, self.training.spam_documents, self.training.skipped
        )?;
        write!(f, "{}", self.evaluation)
    }
}
