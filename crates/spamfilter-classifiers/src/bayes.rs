//! Naive-Bayes spam scorer
//!
//! Per-class log-likelihoods are accumulated over every accepted token of the
//! document and combined with a logistic transform:
//!
//! ```text
//! log_ham  += ln(ham_count  / divisor(ham_table))
//! log_spam += ln(spam_count / divisor(spam_table))
//! p(spam)   = 1 / (1 + exp(log_ham - log_spam))
//! ```
//!
//! A token absent from a class table contributes `alpha` in place of its zero
//! count. Summing logarithms keeps long documents from underflowing to zero.

use crate::classifier::{ClassificationMetadata, ClassificationResult, Classifier, SpamScorer};
use crate::config::FilterConfig;
use crate::denominator::Denominator;
use crate::frequency::{FrequencyModel, FrequencyTable};
use crate::tokenizer::TokenPolicy;
use spamfilter_core::{Error, Label, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Accumulated evidence for one document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLikelihoods {
    pub ham: f64,
    pub spam: f64,
    /// Accepted tokens, duplicates included
    pub tokens: usize,
    /// Accepted tokens present in neither table
    pub unknown_tokens: usize,
}

impl LogLikelihoods {
    /// Spam probability. Documents without tokens are neutral (0.5).
    pub fn probability(&self) -> f64 {
        1.0 / (1.0 + (self.ham - self.spam).exp())
    }
}

/// Frozen naive-Bayes classifier over a trained [`FrequencyModel`]
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    name: String,
    config: FilterConfig,
    policy: TokenPolicy,
    denominator: Arc<dyn Denominator>,
    model: Arc<FrequencyModel>,
}

impl NaiveBayesClassifier {
    /// Freeze a frequency model under the given configuration
    pub fn from_model(config: FilterConfig, model: FrequencyModel) -> Result<Self> {
        Self::from_shared(config, Arc::new(model))
    }

    fn from_shared(config: FilterConfig, model: Arc<FrequencyModel>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: "naive-bayes".to_string(),
            policy: TokenPolicy::from_config(&config),
            denominator: config.denominator.to_denominator(),
            config,
            model,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Same frequency tables under different hyperparameters.
    ///
    /// The tables are shared, not copied. Token-policy settings must match
    /// the ones used for training.
    pub fn retune(&self, alpha: f64, threshold: f64) -> Result<Self> {
        let config = self
            .config
            .clone()
            .with_alpha(alpha)
            .with_threshold(threshold);
        let tuned = Self::from_shared(config, Arc::clone(&self.model))?;
        Ok(tuned.with_name(self.name.clone()))
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn policy(&self) -> &TokenPolicy {
        &self.policy
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    pub fn ham_table(&self) -> &FrequencyTable {
        self.model.ham()
    }

    pub fn spam_table(&self) -> &FrequencyTable {
        self.model.spam()
    }

    pub fn denominator(&self) -> &dyn Denominator {
        self.denominator.as_ref()
    }

    /// Accumulate per-class log-likelihoods for a document
    pub fn log_likelihoods(&self, text: &str) -> Result<LogLikelihoods> {
        let ln_ham_divisor = self.divisor(Label::Ham)?.ln();
        let ln_spam_divisor = self.divisor(Label::Spam)?.ln();
        let alpha = self.config.alpha;

        let mut evidence = LogLikelihoods {
            ham: 0.0,
            spam: 0.0,
            tokens: 0,
            unknown_tokens: 0,
        };

        for token in self.policy.tokens(text) {
            let ham_count = self.model.ham().get(&token);
            let spam_count = self.model.spam().get(&token);

            if ham_count.is_none() && spam_count.is_none() {
                evidence.unknown_tokens += 1;
            }

            let ham_count = ham_count.map(|c| c as f64).unwrap_or(alpha);
            let spam_count = spam_count.map(|c| c as f64).unwrap_or(alpha);

            // ln(a) - ln(b) stays finite where a / b would round to zero.
            evidence.ham += ham_count.ln() - ln_ham_divisor;
            evidence.spam += spam_count.ln() - ln_spam_divisor;
            evidence.tokens += 1;
        }

        Ok(evidence)
    }

    /// Divisor for a class table, refusing empty tables
    fn divisor(&self, label: Label) -> Result<f64> {
        let table = self.model.table(label);
        if table.is_empty() {
            return Err(Error::NotTrained { class: label });
        }

        let divisor = self.denominator.divisor(table);
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(Error::internal(format!(
                "{} divisor for {} table is {}",
                self.denominator.name(),
                label,
                divisor
            )));
        }

        Ok(divisor)
    }
}

impl SpamScorer for NaiveBayesClassifier {
    fn score(&self, text: &str) -> Result<f64> {
        Ok(self.log_likelihoods(text)?.probability())
    }

    fn threshold(&self) -> f64 {
        self.config.threshold
    }
}

#[async_trait::async_trait]
impl Classifier for NaiveBayesClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let evidence = self.log_likelihoods(text)?;
        let score = evidence.probability();
        let label = self.label_for(score);

        debug!(
            classifier = %self.name,
            tokens = evidence.tokens,
            unknown = evidence.unknown_tokens,
            score,
            %label,
            "classified document"
        );

        Ok(ClassificationResult {
            label,
            score,
            metadata: ClassificationMetadata {
                model: Some(format!("{}/{}", self.name, self.denominator.name())),
                tokens: evidence.tokens,
                unknown_tokens: evidence.unknown_tokens,
                log_ham: evidence.ham,
                log_spam: evidence.spam,
            },
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
