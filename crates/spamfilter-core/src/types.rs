//! Core types for spamfilter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate mail, the negative class
    Ham,
    /// Unwanted mail, the positive class
    Spam,
}

impl Label {
    /// Map the boolean `is_spam` flag used by document sources
    pub fn from_is_spam(is_spam: bool) -> Self {
        if is_spam {
            Self::Spam
        } else {
            Self::Ham
        }
    }

    pub fn is_spam(&self) -> bool {
        matches!(self, Self::Spam)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ham => "ham",
            Self::Spam => "spam",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document with its known class, as produced by a document source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledDocument {
    /// Where the document came from (file path, archive entry, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Decoded document text
    pub text: String,

    /// Known class
    pub label: Label,
}

impl LabeledDocument {
    /// Create a new labeled document
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            source: None,
            text: text.into(),
            label,
        }
    }

    /// Create a ham document
    pub fn ham(text: impl Into<String>) -> Self {
        Self::new(text, Label::Ham)
    }

    /// Create a spam document
    pub fn spam(text: impl Into<String>) -> Self {
        Self::new(text, Label::Spam)
    }

    /// Attach the name of the document's origin, used in log messages
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Name used when logging about this document
    pub fn source_name(&self) -> &str {
        self.source.as_deref().unwrap_or("<inline>")
    }
}
