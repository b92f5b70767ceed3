//! passage-qa - ask questions against a local text corpus
//!
//! A single-binary CLI that indexes plain-text documents into TF-IDF
//! passages and answers questions with the best matching sentence.

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "passage_qa=debug,warn"
    } else if cli.quiet {
        "warn"
    } else {
        "passage_qa=info,warn"
    };

    // Logs go to stderr so answers and JSON on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    cli.run()
}
