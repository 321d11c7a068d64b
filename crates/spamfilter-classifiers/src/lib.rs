//! Spamfilter Classifiers
//!
//! Naive-Bayes spam/ham classification over bag-of-words presence counts.
//!
//! The pieces follow the lifecycle of a model:
//! - [`tokenizer`]: normalizes raw words into tokens, identically for training and scoring
//! - [`trainer`]: builds the ham and spam [`FrequencyModel`] tables, sequentially or on rayon
//! - [`bayes`]: the frozen [`NaiveBayesClassifier`], scoring in log space with additive smoothing
//! - [`evaluator`]: accuracy over labeled test documents with a per-class breakdown
//!
//! ```no_run
//! use spamfilter_classifiers::prelude::*;
//!
//! # fn main() -> spamfilter_core::Result<()> {
//! let mut trainer = Trainer::new(FilterConfig::default())?;
//! trainer.train(vec![
//!     Ok(LabeledDocument::ham("hello world meeting notes")),
//!     Ok(LabeledDocument::spam("free money viagra offer")),
//! ])?;
//! let classifier = trainer.freeze()?;
//! assert!(classifier.score("free money now")? > 0.5);
//! # Ok(())
//! # }
//! ```

pub mod bayes;
pub mod classifier;
pub mod config;
pub mod denominator;
pub mod evaluator;
pub mod frequency;
pub mod tokenizer;
pub mod trainer;

pub use bayes::{LogLikelihoods, NaiveBayesClassifier};
pub use classifier::{ClassificationMetadata, ClassificationResult, Classifier, SpamScorer};
pub use config::{DenominatorSpec, FilterConfig};
pub use denominator::{Denominator, TokenTotal, VocabularySize};
pub use evaluator::{ClassTally, EvaluationReport, Evaluator};
pub use frequency::{FrequencyModel, FrequencyTable};
pub use tokenizer::TokenPolicy;
pub use trainer::{Trainer, TrainingSummary};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bayes::NaiveBayesClassifier;
    pub use crate::classifier::{ClassificationResult, Classifier, SpamScorer};
    pub use crate::config::FilterConfig;
    pub use crate::evaluator::{EvaluationReport, Evaluator};
    pub use crate::trainer::Trainer;
    pub use spamfilter_core::{Label, LabeledDocument};
}
