//! Train → freeze → score → evaluate on small in-memory corpora

use spamfilter_classifiers::prelude::*;
use spamfilter_classifiers::{ClassTally, DenominatorSpec};
use spamfilter_core::{Error, Result};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("spamfilter_classifiers=debug")
        .with_test_writer()
        .try_init();
}

fn trained(config: FilterConfig) -> NaiveBayesClassifier {
    init_tracing();
    let mut trainer = Trainer::new(config).unwrap();
    trainer.train(vec![
        Ok(LabeledDocument::ham("hello world meeting notes")),
        Ok(LabeledDocument::spam("free money viagra offer")),
    ])
    .unwrap();
    trainer.freeze().unwrap()
}

#[test]
fn test_reference_scenario() {
    let classifier = trained(FilterConfig::default().with_alpha(0.001).with_threshold(0.5));

    let spam = classifier.score("free money now").unwrap();
    assert!(spam > 0.5, "spam score {spam}");
    assert_eq!(classifier.label("free money now").unwrap(), Label::Spam);

    let ham = classifier.score("meeting notes attached").unwrap();
    assert!(ham < 0.5, "ham score {ham}");
    assert_eq!(classifier.label("meeting notes attached").unwrap(), Label::Ham);

    // Both tables hold four tokens, so unseen words cancel out exactly.
    let neutral = classifier.score("xyz abc qqq").unwrap();
    assert!((neutral - 0.5).abs() < 1e-9, "neutral score {neutral}");
}

#[test]
fn test_unknown_words_drift_with_table_sizes() {
    let mut trainer = Trainer::new(FilterConfig::default()).unwrap();
    trainer.train(vec![
        Ok(LabeledDocument::ham("hello world meeting notes")),
        Ok(LabeledDocument::spam("free money viagra offer cheap pills")),
    ])
    .unwrap();
    let classifier = trainer.freeze().unwrap();

    // ham: alpha/4 per token, spam: alpha/6 per token
    let score = classifier.score("xyz").unwrap();
    let expected = 1.0 / (1.0 + (6.0f64 / 4.0).ln().exp());
    assert!((score - expected).abs() < 1e-12, "score {score}");
    assert!(score < 0.5);
}

#[test]
fn test_inspection_accessors() {
    let classifier = trained(FilterConfig::default());

    assert_eq!(classifier.ham_table().vocabulary_size(), 4);
    assert_eq!(classifier.spam_table().vocabulary_size(), 4);
    assert_eq!(classifier.spam_table().get("viagra"), Some(1));
    assert_eq!(classifier.ham_table().get("viagra"), None);
    assert_eq!(classifier.model().documents(Label::Ham), 1);
}

#[test]
fn test_scoring_before_training_is_an_error() {
    let classifier = Trainer::new(FilterConfig::default())
        .unwrap()
        .freeze()
        .unwrap();

    let err = classifier.score("free money").unwrap_err();
    assert!(matches!(err, Error::NotTrained { .. }));

    let report = Evaluator::new(&classifier).evaluate(vec![Ok(LabeledDocument::ham("hello"))]);
    assert!(matches!(report, Err(Error::NotTrained { .. })));
}

#[test]
fn test_evaluate_trained_model() {
    let mut trainer = Trainer::new(FilterConfig::default()).unwrap();
    trainer.train_parallel(vec![
        Ok(LabeledDocument::ham("agenda for the quarterly meeting")),
        Ok(LabeledDocument::ham("meeting notes from yesterday")),
        Ok(LabeledDocument::ham("lunch tomorrow with the team")),
        Ok(LabeledDocument::spam("claim your free prize money")),
        Ok(LabeledDocument::spam("cheap viagra free shipping")),
        Ok(LabeledDocument::spam("limited offer act now free money")),
    ])
    .unwrap();
    let classifier = trainer.freeze().unwrap();

    let test_set: Vec<Result<LabeledDocument>> = vec![
        Ok(LabeledDocument::ham("notes for the team meeting")),
        Ok(LabeledDocument::ham("quarterly agenda attached")),
        Ok(LabeledDocument::spam("free money offer")),
        Ok(LabeledDocument::spam("cheap prize shipping")),
        Err(Error::document("spam/missing.eml", "not found")),
    ];

    let report = Evaluator::new(&classifier).evaluate(test_set).unwrap();

    assert_eq!(report.ham, ClassTally { correct: 2, total: 2 });
    assert_eq!(report.spam, ClassTally { correct: 2, total: 2 });
    assert_eq!(report.skipped, 1);
    assert_eq!(report.accuracy(), Some(100.0));
}

#[test]
fn test_sweep_over_shared_tables() {
    let classifier = trained(FilterConfig::default());

    for alpha in [0.0001, 0.001, 0.01, 0.1] {
        let tuned = classifier.retune(alpha, 0.5).unwrap();
        assert_eq!(tuned.label("free money now").unwrap(), Label::Spam);
        assert_eq!(tuned.label("meeting notes attached").unwrap(), Label::Ham);
    }
}

#[test]
fn test_token_total_denominator_end_to_end() {
    let classifier = trained(FilterConfig::default().with_denominator(DenominatorSpec::TokenTotal));

    assert!(classifier.score("free money now").unwrap() > 0.5);
    assert!(classifier.score("meeting notes attached").unwrap() < 0.5);
}

#[tokio::test]
async fn test_async_classifier_interface() {
    let classifier = trained(FilterConfig::default());
    let shared: std::sync::Arc<dyn Classifier> = std::sync::Arc::new(classifier);

    let result = shared.classify("free money now").await.unwrap();
    assert_eq!(result.label, Label::Spam);
    assert!(result.score > 0.5);
    assert_eq!(shared.name(), "naive-bayes");
}
