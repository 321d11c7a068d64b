//! Training: building the per-class frequency tables
//!
//! Each document contributes every distinct accepted token once to the table
//! of its class. Documents that failed to load are skipped with a warning;
//! any other error in the document stream aborts the run.

use crate::bayes::NaiveBayesClassifier;
use crate::config::FilterConfig;
use crate::frequency::FrequencyModel;
use crate::tokenizer::TokenPolicy;
use rayon::prelude::*;
use serde::Serialize;
use spamfilter_core::{Error, Label, LabeledDocument, Result};
use tracing::{debug, info, warn};

/// Counts of what a training run consumed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrainingSummary {
    pub ham_documents: u64,
    pub spam_documents: u64,
    pub skipped: u64,
}

impl TrainingSummary {
    fn merge(mut self, other: Self) -> Self {
        self.ham_documents += other.ham_documents;
        self.spam_documents += other.spam_documents;
        self.skipped += other.skipped;
        self
    }
}

/// Mutable training phase of a classifier.
///
/// Lifecycle: [`Trainer::new`] → `train*` → [`Trainer::freeze`].
#[derive(Debug, Clone)]
pub struct Trainer {
    config: FilterConfig,
    policy: TokenPolicy,
    model: FrequencyModel,
}

impl Trainer {
    /// Create an empty trainer. Fails on invalid configuration.
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            policy: TokenPolicy::from_config(&config),
            config,
            model: FrequencyModel::new(),
        })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn policy(&self) -> &TokenPolicy {
        &self.policy
    }

    /// Tables learned so far
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Learn a single document
    pub fn learn(&mut self, text: &str, label: Label) {
        learn_into(&mut self.model, &self.policy, text, label);
    }

    /// Learn a sequence of documents on the current thread.
    ///
    /// Stops at the first unrecoverable error; documents learned before it
    /// stay in the tables.
    pub fn train<I>(&mut self, documents: I) -> Result<TrainingSummary>
    where
        I: IntoIterator<Item = Result<LabeledDocument>>,
    {
        let mut summary = TrainingSummary::default();
        for document in documents {
            let step = absorb(&mut self.model, &self.policy, document)?;
            summary = summary.merge(step);
        }
        log_summary(&summary, &self.model);
        Ok(summary)
    }

    /// Learn documents across the rayon thread pool.
    ///
    /// Every worker fills a private [`FrequencyModel`]; the partial models
    /// are merged once the workers finish, so no table is written
    /// concurrently. The result is identical to [`Trainer::train`].
    ///
    /// On an unrecoverable error nothing is merged and the tables are left
    /// as they were.
    pub fn train_parallel<I>(&mut self, documents: I) -> Result<TrainingSummary>
    where
        I: IntoParallelIterator<Item = Result<LabeledDocument>>,
    {
        let policy = &self.policy;
        let (partial, summary) = documents
            .into_par_iter()
            .try_fold(
                || (FrequencyModel::new(), TrainingSummary::default()),
                |(mut model, summary), document| {
                    let step = absorb(&mut model, policy, document)?;
                    Ok::<_, Error>((model, summary.merge(step)))
                },
            )
            .try_reduce(
                || (FrequencyModel::new(), TrainingSummary::default()),
                |(mut left, left_summary), (right, right_summary)| {
                    left.merge(right);
                    Ok((left, left_summary.merge(right_summary)))
                },
            )?;

        self.model.merge(partial);
        log_summary(&summary, &self.model);
        Ok(summary)
    }

    /// End training and produce an immutable classifier
    pub fn freeze(self) -> Result<NaiveBayesClassifier> {
        NaiveBayesClassifier::from_model(self.config, self.model)
    }
}

fn learn_into(model: &mut FrequencyModel, policy: &TokenPolicy, text: &str, label: Label) {
    let tokens = policy.unique_tokens(text);
    debug!(%label, tokens = tokens.len(), "learning document");
    model.record_document(label, tokens);
    metrics::counter!("spamfilter_documents_trained_total", "label" => label.as_str())
        .increment(1);
}

fn absorb(
    model: &mut FrequencyModel,
    policy: &TokenPolicy,
    document: Result<LabeledDocument>,
) -> Result<TrainingSummary> {
    let mut summary = TrainingSummary::default();
    match document {
        Ok(document) => {
            learn_into(model, policy, &document.text, document.label);
            match document.label {
                Label::Ham => summary.ham_documents += 1,
                Label::Spam => summary.spam_documents += 1,
            }
        }
        Err(e) => {
            skip_document(e)?;
            summary.skipped += 1;
        }
    }
    Ok(summary)
}

/// Log and count a document that failed to load.
///
/// Only per-document failures are skipped; anything else is handed back.
pub(crate) fn skip_document(error: Error) -> Result<()> {
    if !error.is_recoverable() {
        return Err(error);
    }
    warn!("skipping document: {}", error);
    metrics::counter!("spamfilter_documents_skipped_total").increment(1);
    Ok(())
}

fn log_summary(summary: &TrainingSummary, model: &FrequencyModel) {
    info!(
        "Trained on {} ham and {} spam documents ({} skipped); vocabulary: {} ham, {} spam",
        summary.ham_documents,
        summary.spam_documents,
        summary.skipped,
        model.ham().vocabulary_size(),
        model.spam().vocabulary_size()
    );
}
