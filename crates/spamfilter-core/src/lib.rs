//! Spamfilter Core
//!
//! Core types and utilities shared across the spamfilter crates.
//!
//! This crate provides:
//! - The error type and `Result` alias used by the classifier and the CLI
//! - Labels and labeled documents, the unit of exchange between document
//!   sources and the trainer/evaluator

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Label, LabeledDocument};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Label, LabeledDocument};
}
