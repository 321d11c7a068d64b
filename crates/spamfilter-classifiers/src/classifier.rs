//! Classifier traits and common types

use async_trait::async_trait;
use serde::Serialize;
use spamfilter_core::{Label, Result};

/// Synchronous spam-probability scorer.
///
/// The evaluator is written against this trait so it can drive any scorer
/// across rayon worker threads.
pub trait SpamScorer: Send + Sync {
    /// Probability in `[0, 1]` that the document is spam
    fn score(&self, text: &str) -> Result<f64>;

    /// Decision boundary applied to the probability
    fn threshold(&self) -> f64;

    /// Label a probability: spam iff `probability >= threshold`
    fn label_for(&self, probability: f64) -> Label {
        Label::from_is_spam(probability >= self.threshold())
    }

    /// Score and label a document
    fn label(&self, text: &str) -> Result<Label> {
        Ok(self.label_for(self.score(text)?))
    }
}

/// Trait for classifiers exposed to async callers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<ClassificationResult>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classification
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// Predicted class
    pub label: Label,

    /// Spam probability (0.0-1.0)
    pub score: f64,

    /// Additional metadata
    pub metadata: ClassificationMetadata,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(label: Label, score: f64) -> Self {
        Self {
            label,
            score,
            metadata: ClassificationMetadata::default(),
            latency_us: 0,
        }
    }

    /// Check if score exceeds threshold
    pub fn exceeds_threshold(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

/// Metadata about classification
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassificationMetadata {
    /// Model name
    pub model: Option<String>,

    /// Number of accepted tokens that contributed to the score
    pub tokens: usize,

    /// Accepted tokens found in neither class table
    pub unknown_tokens: usize,

    /// Accumulated log-likelihood for ham
    pub log_ham: f64,

    /// Accumulated log-likelihood for spam
    pub log_spam: f64,
}
