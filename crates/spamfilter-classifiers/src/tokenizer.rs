//! Word normalization and filtering
//!
//! The same [`TokenPolicy`] value is used by the trainer and by the scorer, so
//! a raw word is accepted or rejected identically in both phases.

use crate::config::FilterConfig;
use std::collections::HashSet;

/// Acceptance policy turning whitespace-delimited words into tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPolicy {
    min_len: usize,
    max_len: usize,
    disallowed: Vec<char>,
    strip_non_alphabetic: bool,
}

impl TokenPolicy {
    /// Create a policy accepting tokens whose length is in `[min_len, max_len)`
    pub fn new(
        min_len: usize,
        max_len: usize,
        disallowed: impl IntoIterator<Item = char>,
        strip_non_alphabetic: bool,
    ) -> Self {
        Self {
            min_len,
            max_len,
            disallowed: disallowed.into_iter().collect(),
            strip_non_alphabetic,
        }
    }

    /// Build the policy described by a filter configuration
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(
            config.min_token_len,
            config.max_token_len,
            config.disallowed_chars.chars(),
            config.strip_non_alphabetic,
        )
    }

    /// Normalize a single raw word, returning `None` if it is rejected.
    ///
    /// Disallowed characters are checked on the lower-cased raw word, before
    /// stripping, so encoded fragments such as `dGVzdA==` are rejected even
    /// when non-alphabetic characters would otherwise be removed.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let lowered = raw.to_lowercase();

        if lowered.chars().any(|c| self.disallowed.contains(&c)) {
            return None;
        }

        let token = if self.strip_non_alphabetic {
            lowered.chars().filter(char::is_ascii_alphabetic).collect()
        } else {
            lowered
        };

        if token.is_empty() {
            return None;
        }

        let len = token.chars().count();
        if len < self.min_len || len >= self.max_len {
            return None;
        }

        Some(token)
    }

    /// Accepted tokens of a document in order, duplicates included (scoring)
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split_whitespace().filter_map(move |word| self.normalize(word))
    }

    /// Distinct accepted tokens of a document (training)
    pub fn unique_tokens(&self, text: &str) -> HashSet<String> {
        self.tokens(text).collect()
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn disallowed(&self) -> &[char] {
        &self.disallowed
    }

    pub fn strips_non_alphabetic(&self) -> bool {
        self.strip_non_alphabetic
    }
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}
