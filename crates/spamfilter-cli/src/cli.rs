use crate::corpus::Encoding;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spamfilter")]
#[command(
    author,
    version,
    about = "Naive-Bayes spam filter trained on ham and spam directories"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train on the training corpora and report accuracy on the test corpora
    Evaluate {
        #[command(flatten)]
        training: TrainingArgs,

        #[command(flatten)]
        test: TestArgs,

        #[command(flatten)]
        model: ModelArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Train, then print the spam probability and label of each file
    Classify {
        #[command(flatten)]
        training: TrainingArgs,

        #[command(flatten)]
        model: ModelArgs,

        /// Documents to classify
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Train once and evaluate every alpha/threshold combination
    Sweep {
        #[command(flatten)]
        training: TrainingArgs,

        #[command(flatten)]
        test: TestArgs,

        /// Configuration file (YAML); alphas and thresholds below override it
        #[arg(short, long, env = "SPAMFILTER_CONFIG")]
        config: Option<PathBuf>,

        /// Smoothing constants to try (comma-separated)
        #[arg(long, value_delimiter = ',', default_value = "0.0001,0.001,0.01,0.1,1")]
        alphas: Vec<f64>,

        /// Decision thresholds to try (comma-separated)
        #[arg(long, value_delimiter = ',', default_value = "0.5")]
        thresholds: Vec<f64>,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Labeled training directories
#[derive(Args, Debug, Clone)]
pub struct TrainingArgs {
    /// Directory of ham training documents
    #[arg(long)]
    pub ham_train: PathBuf,

    /// Directory of spam training documents
    #[arg(long)]
    pub spam_train: PathBuf,

    /// Character encoding of the document files
    #[arg(long, value_enum, default_value_t = Encoding::Latin1)]
    pub encoding: Encoding,
}

/// Labeled test directories
#[derive(Args, Debug, Clone)]
pub struct TestArgs {
    /// Directory of ham test documents
    #[arg(long)]
    pub ham_test: PathBuf,

    /// Directory of spam test documents
    #[arg(long)]
    pub spam_test: PathBuf,
}

/// Hyperparameter sources
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Configuration file (YAML)
    #[arg(short, long, env = "SPAMFILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Smoothing constant for unseen tokens (overrides the config file)
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Spam decision threshold (overrides the config file)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}
