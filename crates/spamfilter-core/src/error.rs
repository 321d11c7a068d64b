//! Error types for spamfilter

use crate::types::Label;

/// Result type alias using spamfilter's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for spamfilter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid hyperparameters or configuration files
    #[error("configuration error: {0}")]
    Config(String),

    /// Scoring against a model whose frequency table for a class is empty
    #[error("model not trained: no {class} documents have been learned")]
    NotTrained { class: Label },

    /// A single document could not be read or decoded
    #[error("unreadable document {source_name}: {reason}")]
    Document { source_name: String, reason: String },

    /// Classifier execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration parsing errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new unreadable-document error
    pub fn document(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Document {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error only affects a single document and can be skipped
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Document { .. } | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::config("alpha must be > 0, got 0");
        assert_eq!(err.to_string(), "configuration error: alpha must be > 0, got 0");

        let err = Error::NotTrained { class: Label::Spam };
        assert_eq!(
            err.to_string(),
            "model not trained: no spam documents have been learned"
        );

        let err = Error::document("ham/0001.txt", "permission denied");
        assert_eq!(
            err.to_string(),
            "unreadable document ham/0001.txt: permission denied"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::document("x", "y").is_recoverable());
        assert!(Error::Io(std::io::Error::other("boom")).is_recoverable());
        assert!(!Error::config("bad").is_recoverable());
        assert!(!Error::NotTrained { class: Label::Ham }.is_recoverable());
    }
}
