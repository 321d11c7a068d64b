//! Per-class token frequency tables

use serde::Serialize;
use spamfilter_core::Label;
use std::collections::HashMap;

/// Mapping from token to the number of documents it appeared in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a token, `None` if it was never seen
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Count for a token, zero if it was never seen
    pub fn count(&self, token: &str) -> u64 {
        self.get(token).unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total_count(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Add one occurrence of a token
    pub fn increment(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Add every count of `other` into this table
    pub fn merge(&mut self, other: FrequencyTable) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Tokens ordered by descending count, ties broken alphabetically
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

/// The ham and spam frequency tables learned from a training corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyModel {
    ham: FrequencyTable,
    spam: FrequencyTable,
    ham_documents: u64,
    spam_documents: u64,
}

impl FrequencyModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ham(&self) -> &FrequencyTable {
        &self.ham
    }

    pub fn spam(&self) -> &FrequencyTable {
        &self.spam
    }

    /// Table for the given class
    pub fn table(&self, label: Label) -> &FrequencyTable {
        match label {
            Label::Ham => &self.ham,
            Label::Spam => &self.spam,
        }
    }

    fn table_mut(&mut self, label: Label) -> &mut FrequencyTable {
        match label {
            Label::Ham => &mut self.ham,
            Label::Spam => &mut self.spam,
        }
    }

    /// Number of documents learned for the given class
    pub fn documents(&self, label: Label) -> u64 {
        match label {
            Label::Ham => self.ham_documents,
            Label::Spam => self.spam_documents,
        }
    }

    /// Record one document's distinct tokens under its class.
    ///
    /// Callers pass each token at most once per document.
    pub fn record_document<I>(&mut self, label: Label, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        let table = self.table_mut(label);
        for token in tokens {
            table.increment(token);
        }
        match label {
            Label::Ham => self.ham_documents += 1,
            Label::Spam => self.spam_documents += 1,
        }
    }

    /// Combine two partial models, as produced by parallel training
    pub fn merge(&mut self, other: FrequencyModel) {
        self.ham.merge(other.ham);
        self.spam.merge(other.spam);
        self.ham_documents += other.ham_documents;
        self.spam_documents += other.spam_documents;
    }

    /// Whether both classes have learned at least one token
    pub fn is_trained(&self) -> bool {
        !self.ham.is_empty() && !self.spam.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_counts() {
        let mut table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("free"), None);
        assert_eq!(table.count("free"), 0);

        table.increment("free");
        table.increment("free");
        table.increment("money");

        assert_eq!(table.get("free"), Some(2));
        assert_eq!(table.vocabulary_size(), 2);
        assert_eq!(table.total_count(), 3);
        assert!(table.contains("money"));
    }

    #[test]
    fn test_most_common() {
        let mut table = FrequencyTable::new();
        for token in ["offer", "free", "free", "money", "money", "viagra"] {
            table.increment(token);
        }

        assert_eq!(table.most_common(2), vec![("free", 2), ("money", 2)]);
        assert_eq!(table.most_common(10).len(), 4);
    }

    #[test]
    fn test_record_document_targets_one_class() {
        let mut model = FrequencyModel::new();
        model.record_document(Label::Spam, ["free".to_string(), "money".to_string()]);

        assert_eq!(model.spam().count("free"), 1);
        assert_eq!(model.ham().count("free"), 0);
        assert_eq!(model.documents(Label::Spam), 1);
        assert_eq!(model.documents(Label::Ham), 0);
        assert!(!model.is_trained());

        model.record_document(Label::Ham, ["meeting".to_string()]);
        assert!(model.is_trained());
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut left = FrequencyModel::new();
        left.record_document(Label::Spam, ["free".to_string()]);
        left.record_document(Label::Ham, ["notes".to_string()]);

        let mut right = FrequencyModel::new();
        right.record_document(Label::Spam, ["free".to_string(), "offer".to_string()]);

        left.merge(right);

        assert_eq!(left.spam().count("free"), 2);
        assert_eq!(left.spam().count("offer"), 1);
        assert_eq!(left.ham().count("notes"), 1);
        assert_eq!(left.documents(Label::Spam), 2);
        assert_eq!(left.documents(Label::Ham), 1);
    }

    #[test]
    fn test_merge_into_empty_table() {
        let mut empty = FrequencyTable::new();
        let mut other = FrequencyTable::new();
        other.increment("hello");
        empty.merge(other.clone());
        assert_eq!(empty, other);
    }
}
