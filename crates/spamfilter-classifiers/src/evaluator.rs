//! Accuracy evaluation over held-out labeled documents

use crate::classifier::SpamScorer;
use crate::trainer::skip_document;
use rayon::prelude::*;
use serde::Serialize;
use spamfilter_core::{Label, LabeledDocument, Result};
use std::fmt;
use tracing::{debug, info};

/// Correct/total counts for one class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassTally {
    pub correct: u64,
    pub total: u64,
}

impl ClassTally {
    /// Share of correctly classified documents in percent
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64 * 100.0)
    }

    fn merge(&mut self, other: ClassTally) {
        self.correct += other.correct;
        self.total += other.total;
    }
}

impl fmt::Display for ClassTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Per-class breakdown and aggregate accuracy of an evaluation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub ham: ClassTally,
    pub spam: ClassTally,
    /// Unreadable documents; excluded from both tallies
    pub skipped: u64,
}

impl EvaluationReport {
    /// Record one classified document
    pub fn record(&mut self, actual: Label, predicted: Label) {
        let tally = match actual {
            Label::Ham => &mut self.ham,
            Label::Spam => &mut self.spam,
        };
        tally.total += 1;
        if actual == predicted {
            tally.correct += 1;
        }
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn merge(&mut self, other: EvaluationReport) {
        self.ham.merge(other.ham);
        self.spam.merge(other.spam);
        self.skipped += other.skipped;
    }

    /// Tally for the given class
    pub fn tally(&self, label: Label) -> ClassTally {
        match label {
            Label::Ham => self.ham,
            Label::Spam => self.spam,
        }
    }

    /// Documents that were classified
    pub fn total(&self) -> u64 {
        self.ham.total + self.spam.total
    }

    pub fn correct(&self) -> u64 {
        self.ham.correct + self.spam.correct
    }

    /// `(correct_ham + correct_spam) / (total_ham + total_spam) * 100`,
    /// `None` when nothing was classified
    pub fn accuracy(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.correct() as f64 / total as f64 * 100.0)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ham:  {} correct", self.ham)?;
        writeln!(f, "spam: {} correct", self.spam)?;
        if self.skipped > 0 {
            writeln!(f, "skipped: {}", self.skipped)?;
        }
        match self.accuracy() {
            Some(accuracy) => write!(f, "accuracy: {:.2}%", accuracy),
            None => write!(f, "accuracy: n/a"),
        }
    }
}

/// Classifies labeled documents and compares against their known class
pub struct Evaluator<'a, S: SpamScorer + ?Sized> {
    scorer: &'a S,
}

impl<'a, S: SpamScorer + ?Sized> Evaluator<'a, S> {
    pub fn new(scorer: &'a S) -> Self {
        Self { scorer }
    }

    /// Evaluate documents on the current thread.
    ///
    /// Documents that failed to load are skipped. Any other error in the
    /// stream, or a scoring failure such as an untrained model, aborts the
    /// run.
    pub fn evaluate<I>(&self, documents: I) -> Result<EvaluationReport>
    where
        I: IntoIterator<Item = Result<LabeledDocument>>,
    {
        let mut report = EvaluationReport::default();
        for document in documents {
            self.step(&mut report, document)?;
        }
        log_report(&report);
        Ok(report)
    }

    /// Evaluate documents across the rayon thread pool
    pub fn evaluate_parallel<I>(&self, documents: I) -> Result<EvaluationReport>
    where
        I: IntoParallelIterator<Item = Result<LabeledDocument>>,
    {
        let report = documents
            .into_par_iter()
            .try_fold(EvaluationReport::default, |mut report, document| {
                self.step(&mut report, document)?;
                Ok::<_, spamfilter_core::Error>(report)
            })
            .try_reduce(EvaluationReport::default, |mut left, right| {
                left.merge(right);
                Ok(left)
            })?;
        log_report(&report);
        Ok(report)
    }

    fn step(&self, report: &mut EvaluationReport, document: Result<LabeledDocument>) -> Result<()> {
        let document = match document {
            Ok(document) => document,
            Err(e) => {
                skip_document(e)?;
                report.record_skipped();
                return Ok(());
            }
        };

        let score = self.scorer.score(&document.text)?;
        let predicted = self.scorer.label_for(score);
        debug!(
            source = document.source_name(),
            actual = %document.label,
            %predicted,
            score,
            "evaluated document"
        );
        metrics::counter!(
            "spamfilter_documents_evaluated_total",
            "correct" => if predicted == document.label { "true" } else { "false" }
        )
        .increment(1);

        report.record(document.label, predicted);
        Ok(())
    }
}

fn log_report(report: &EvaluationReport) {
    info!(
        "Evaluated {} documents: ham {}, spam {}, skipped {}",
        report.total(),
        report.ham,
        report.spam,
        report.skipped
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut report = EvaluationReport::default();
        report.record(Label::Ham, Label::Ham);
        report.record(Label::Ham, Label::Spam);
        report.record(Label::Spam, Label::Spam);
        report.record_skipped();

        assert_eq!(report.ham, ClassTally { correct: 1, total: 2 });
        assert_eq!(report.spam, ClassTally { correct: 1, total: 1 });
        assert_eq!(report.skipped, 1);
        assert_eq!(report.total(), 3);
        assert_eq!(report.tally(Label::Ham).accuracy(), Some(50.0));
    }

    #[test]
    fn test_accuracy_of_empty_report() {
        let report = EvaluationReport::default();
        assert_eq!(report.accuracy(), None);
        assert_eq!(report.ham.accuracy(), None);
        assert!(report.to_string().ends_with("accuracy: n/a"));
    }

    #[test]
    fn test_display() {
        let report = EvaluationReport {
            ham: ClassTally { correct: 8, total: 10 },
            spam: ClassTally { correct: 15, total: 20 },
            skipped: 2,
        };
        assert_eq!(
            report.to_string(),
            "ham:  8/10 correct\nspam: 15/20 correct\nskipped: 2\naccuracy: 76.67%"
        );
    }
}
