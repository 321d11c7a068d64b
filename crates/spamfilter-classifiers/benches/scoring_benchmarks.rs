//! Throughput benchmarks for training and scoring
//!
//! Run with: cargo bench -p spamfilter-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spamfilter_classifiers::prelude::*;
use spamfilter_core::Result;

const HAM_WORDS: &[&str] = &[
    "meeting", "notes", "agenda", "project", "status", "review", "tomorrow", "lunch", "report",
    "budget", "schedule", "team", "attached", "draft", "quarterly",
];

const SPAM_WORDS: &[&str] = &[
    "free", "money", "viagra", "offer", "prize", "winner", "cheap", "pills", "limited", "click",
    "discount", "casino", "lottery", "urgent", "bonus",
];

/// Deterministic synthetic document built from a word list
fn document(words: &[&str], seed: usize, len: usize) -> String {
    (0..len)
        .map(|i| words[(seed * 7 + i * 13) % words.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn corpus(size: usize) -> Vec<Result<LabeledDocument>> {
    (0..size)
        .map(|i| {
            if i % 2 == 0 {
                Ok(LabeledDocument::ham(document(HAM_WORDS, i, 40)))
            } else {
                Ok(LabeledDocument::spam(document(SPAM_WORDS, i, 40)))
            }
        })
        .collect()
}

fn benchmark_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("Training");
    group.sample_size(20);

    for size in [100, 1_000] {
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, &size| {
            b.iter(|| {
                let mut trainer = Trainer::new(FilterConfig::default()).unwrap();
                trainer.train(black_box(corpus(size)))
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, &size| {
            b.iter(|| {
                let mut trainer = Trainer::new(FilterConfig::default()).unwrap();
                trainer.train_parallel(black_box(corpus(size)))
            });
        });
    }

    group.finish();
}

fn benchmark_scoring(c: &mut Criterion) {
    let mut trainer = Trainer::new(FilterConfig::default()).unwrap();
    trainer
        .train_parallel(corpus(1_000))
        .expect("Failed to train classifier");
    let classifier = trainer.freeze().expect("Failed to freeze classifier");

    let test_cases = vec![
        ("short_ham", document(HAM_WORDS, 3, 10)),
        ("short_spam", document(SPAM_WORDS, 5, 10)),
        ("long_mixed", format!("{} {}", document(HAM_WORDS, 1, 500), document(SPAM_WORDS, 2, 500))),
        ("unknown_words", "lorem ipsum dolor sit amet consectetur adipiscing".to_string()),
    ];

    let mut group = c.benchmark_group("Scoring");
    group.sample_size(100);

    for (name, text) in &test_cases {
        group.bench_with_input(BenchmarkId::new("score", name), text, |b, text| {
            b.iter(|| classifier.score(black_box(text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_training, benchmark_scoring);
criterion_main!(benches);
