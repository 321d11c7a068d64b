//! Subcommand implementations

use crate::cli::{ModelArgs, TestArgs, TrainingArgs};
use crate::corpus::{self, DirectoryCorpus, Encoding};
use crate::report::RunReport;
use anyhow::{Context, Result};
use spamfilter_classifiers::prelude::*;
use spamfilter_classifiers::TrainingSummary;
use spamfilter_core::Error;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Load the filter configuration and apply command-line overrides.
///
/// Invalid values are rejected here, before any document is read.
pub fn load_config(
    path: Option<&Path>,
    alpha: Option<f64>,
    threshold: Option<f64>,
) -> spamfilter_core::Result<FilterConfig> {
    let mut config = match path {
        Some(path) => FilterConfig::from_file(path)?,
        None => FilterConfig::default(),
    };

    if let Some(alpha) = alpha {
        config.alpha = alpha;
    }
    if let Some(threshold) = threshold {
        config.threshold = threshold;
    }

    config.validate()?;
    Ok(config)
}

/// Train a classifier on the ham and spam training directories
pub fn train(
    config: FilterConfig,
    args: &TrainingArgs,
) -> Result<(NaiveBayesClassifier, TrainingSummary)> {
    let documents = corpus::load_all(&[
        DirectoryCorpus::new(&args.ham_train, Label::Ham).with_encoding(args.encoding),
        DirectoryCorpus::new(&args.spam_train, Label::Spam).with_encoding(args.encoding),
    ])?;

    let mut trainer = Trainer::new(config)?;
    let summary = trainer.train_parallel(documents)?;
    let classifier = trainer.freeze()?;
    debug!("most common ham tokens: {:?}", classifier.ham_table().most_common(10));
    debug!("most common spam tokens: {:?}", classifier.spam_table().most_common(10));
    Ok((classifier, summary))
}

fn load_test_documents(
    args: &TestArgs,
    encoding: Encoding,
) -> Result<Vec<spamfilter_core::Result<LabeledDocument>>> {
    let documents = corpus::load_all(&[
        DirectoryCorpus::new(&args.ham_test, Label::Ham).with_encoding(encoding),
        DirectoryCorpus::new(&args.spam_test, Label::Spam).with_encoding(encoding),
    ])?;
    Ok(documents)
}

/// `evaluate`: train, evaluate, print the report
pub fn evaluate(
    training: &TrainingArgs,
    test: &TestArgs,
    model: &ModelArgs,
    json: bool,
) -> Result<RunReport> {
    let config = load_config(model.config.as_deref(), model.alpha, model.threshold)
        .context("invalid filter configuration")?;
    info!("alpha: {}, threshold: {}", config.alpha, config.threshold);

    let (classifier, summary) = train(config, training)?;
    let documents = load_test_documents(test, training.encoding)?;
    let evaluation = Evaluator::new(&classifier).evaluate_parallel(documents)?;

    let report = RunReport::new(
        classifier.config(),
        classifier.denominator().name(),
        summary,
        evaluation,
    );
    print_report(&report, json)?;
    Ok(report)
}

/// `classify`: train, then classify each file on its own
pub async fn classify(
    training: &TrainingArgs,
    model: &ModelArgs,
    files: &[PathBuf],
) -> Result<()> {
    let config = load_config(model.config.as_deref(), model.alpha, model.threshold)
        .context("invalid filter configuration")?;
    let (classifier, _) = train(config, training)?;

    for path in files {
        let text = match corpus::read_text(path, training.encoding) {
            Ok(text) => text,
            Err(e) => {
                warn!("skipping document: {}", e);
                continue;
            }
        };

        let result = classifier.classify(&text).await?;
        println!("{}\t{:.6}\t{}", path.display(), result.score, result.label);
    }

    Ok(())
}

/// `sweep`: train once, evaluate every alpha/threshold pair on the same tables
pub fn sweep(
    training: &TrainingArgs,
    test: &TestArgs,
    config_path: Option<&Path>,
    alphas: &[f64],
    thresholds: &[f64],
    json: bool,
) -> Result<Vec<RunReport>> {
    let base = load_config(config_path, None, None).context("invalid filter configuration")?;
    for &alpha in alphas {
        for &threshold in thresholds {
            base.clone()
                .with_alpha(alpha)
                .with_threshold(threshold)
                .validate()
                .with_context(|| format!("invalid sweep point alpha={alpha} threshold={threshold}"))?;
        }
    }

    let (classifier, summary) = train(base, training)?;

    let (documents, failures): (Vec<_>, Vec<_>) = load_test_documents(test, training.encoding)?
        .into_iter()
        .partition(|document| document.is_ok());
    let mut skipped = 0;
    for failure in failures.into_iter().filter_map(|f| f.err()) {
        if !failure.is_recoverable() {
            return Err(failure.into());
        }
        warn!("skipping document: {}", failure);
        skipped += 1;
    }
    let documents: Vec<LabeledDocument> = documents.into_iter().filter_map(|d| d.ok()).collect();

    let mut reports = Vec::new();
    for &alpha in alphas {
        for &threshold in thresholds {
            let tuned = classifier.retune(alpha, threshold)?;
            let mut evaluation = Evaluator::new(&tuned)
                .evaluate_parallel(documents.iter().cloned().map(Ok::<_, Error>).collect::<Vec<_>>())?;
            evaluation.skipped += skipped;

            reports.push(RunReport::new(
                tuned.config(),
                tuned.denominator().name(),
                summary,
                evaluation,
            ));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("{}", RunReport::table_header());
        for report in &reports {
            println!("{}", report.table_row());
        }
    }

    Ok(reports)
}

fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
