use clap::Parser;
use spamfilter_cli::cli::{Cli, Commands};
use spamfilter_cli::commands;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match cli.command {
        Commands::Evaluate {
            training,
            test,
            model,
            json,
        } => {
            commands::evaluate(&training, &test, &model, json)?;
        }

        Commands::Classify {
            training,
            model,
            files,
        } => {
            commands::classify(&training, &model, &files).await?;
        }

        Commands::Sweep {
            training,
            test,
            config,
            alphas,
            thresholds,
            json,
        } => {
            commands::sweep(
                &training,
                &test,
                config.as_deref(),
                &alphas,
                &thresholds,
                json,
            )?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "spamfilter=debug,spamfilter_cli=debug,spamfilter_classifiers=debug"
    } else {
        "spamfilter_cli=info,spamfilter_classifiers=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
