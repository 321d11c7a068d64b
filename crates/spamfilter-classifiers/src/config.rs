//! Configuration for the naive-Bayes filter

use crate::denominator::{Denominator, TokenTotal, VocabularySize};
use serde::{Deserialize, Serialize};
use spamfilter_core::{Error, Result};
use std::path::Path;
use std::sync::Arc;

/// Hyperparameters and tokenization settings for training and scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Count used in place of zero for tokens absent from a class table
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Spam probability at or above which a document is labeled spam
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Shortest accepted token, inclusive
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    /// Longest accepted token, exclusive
    #[serde(default = "default_max_token_len")]
    pub max_token_len: usize,

    /// Words containing any of these characters are rejected
    #[serde(default = "default_disallowed_chars")]
    pub disallowed_chars: String,

    /// Remove every character outside `a-z` after lower-casing
    #[serde(default = "default_true")]
    pub strip_non_alphabetic: bool,

    /// Divisor applied to per-class counts
    #[serde(default)]
    pub denominator: DenominatorSpec,
}

/// Denominator strategy specification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenominatorSpec {
    /// Number of distinct tokens in the class table
    #[default]
    VocabularySize,
    /// Sum of all counts in the class table
    TokenTotal,
}

impl DenominatorSpec {
    /// Convert to the runtime strategy
    pub fn to_denominator(self) -> Arc<dyn Denominator> {
        match self {
            Self::VocabularySize => Arc::new(VocabularySize),
            Self::TokenTotal => Arc::new(TokenTotal),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            threshold: default_threshold(),
            min_token_len: default_min_token_len(),
            max_token_len: default_max_token_len(),
            disallowed_chars: default_disallowed_chars(),
            strip_non_alphabetic: true,
            denominator: DenominatorSpec::default(),
        }
    }
}

impl FilterConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_denominator(mut self, denominator: DenominatorSpec) -> Self {
        self.denominator = denominator;
        self
    }

    /// Reject invalid hyperparameters. Values are never clamped.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(Error::config(format!(
                "alpha must be a finite value > 0, got {}",
                self.alpha
            )));
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::config(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }

        if self.min_token_len >= self.max_token_len {
            return Err(Error::config(format!(
                "token length bounds [{}, {}) accept no tokens",
                self.min_token_len, self.max_token_len
            )));
        }

        if self.disallowed_chars.chars().any(char::is_whitespace) {
            return Err(Error::config(
                "disallowed_chars must not contain whitespace",
            ));
        }

        Ok(())
    }
}

fn default_alpha() -> f64 {
    0.001
}

fn default_threshold() -> f64 {
    0.5
}

fn default_min_token_len() -> usize {
    3
}

fn default_max_token_len() -> usize {
    15
}

fn default_disallowed_chars() -> String {
    "=+/@".to_string()
}

fn default_true() -> bool {
    true
}
