//! CLI module - command definitions and handlers

mod ask;
mod config_cmd;
mod render;
mod search;
mod stats;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use passage_qa::{Config, CorpusIndex};

pub use ask::AskArgs;
pub use config_cmd::ConfigArgs;
pub use search::SearchArgs;
pub use stats::StatsArgs;

/// passage-qa - TF-IDF question answering over a local corpus
#[derive(Parser)]
#[command(name = "passage-qa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Corpus directory (overrides the config file)
    #[arg(long, global = true, env = "PASSAGE_QA_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Config file (default: ~/.config/passage-qa/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Include documents in subdirectories of the corpus
    #[arg(long, global = true)]
    pub recursive: bool,

    /// Passage window size in characters
    #[arg(long, global = true)]
    pub passage_size: Option<usize>,

    /// Step between passage windows in characters
    #[arg(long, global = true)]
    pub passage_stride: Option<usize>,

    /// Ignore terms present in more than this fraction of passages
    #[arg(long, global = true)]
    pub max_df: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a question (interactive when no question is given)
    Ask(AskArgs),

    /// List the passages closest to a query
    Search(SearchArgs),

    /// Show corpus and index statistics
    Stats(StatsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let quiet = self.quiet;
        let config_path = self.config.clone();
        // `config init` must work even when the file is missing or broken
        let config = self.resolve_config();

        match self.command {
            Commands::Ask(args) => ask::run(args, &config?, quiet),
            Commands::Search(args) => search::run(args, &config?, quiet),
            Commands::Stats(args) => stats::run(args, &config?, quiet),
            Commands::Config(args) => config_cmd::run(args, config, config_path.as_deref()),
        }
    }

    /// Config file values with command-line overrides applied
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        if let Some(dir) = &self.corpus {
            config.corpus.dir = dir.clone();
        }
        if self.recursive {
            config.corpus.recursive = true;
        }
        if let Some(size) = self.passage_size {
            config.passages.size = size;
        }
        if let Some(stride) = self.passage_stride {
            config.passages.stride = stride;
        }
        if let Some(max_df) = self.max_df {
            config.vectorizer.max_df = max_df;
        }

        Ok(config)
    }
}

/// Load the corpus and build the index, with a spinner on stderr
pub(crate) fn build_index(config: &Config, quiet: bool) -> anyhow::Result<CorpusIndex> {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    progress.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    progress.set_message(format!("Indexing {}...", config.corpus.dir.display()));

    let index = CorpusIndex::from_config(config).with_context(|| {
        format!(
            "Failed to build index from {}",
            config.corpus.dir.display()
        )
    });
    progress.finish_and_clear();

    index
}
