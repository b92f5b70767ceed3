//! Stats command - corpus and index size

use clap::Args;

use passage_qa::Config;

#[derive(Args)]
pub struct StatsArgs {
    /// Output format (text, json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,
}

pub fn run(args: StatsArgs, config: &Config, quiet: bool) -> anyhow::Result<()> {
    let index = super::build_index(config, quiet)?;
    let stats = index.stats();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Corpus: {}", config.corpus.dir.display());
    println!("  Documents: {}", stats.documents);
    println!("  Passages: {}", stats.passages);
    println!("  Vocabulary: {} terms", stats.vocabulary);
    println!("  TF-IDF matrix shape: ({}, {})", stats.passages, stats.vocabulary);
    let density = if stats.passages * stats.vocabulary == 0 {
        0.0
    } else {
        stats.non_zero as f64 / (stats.passages * stats.vocabulary) as f64
    };
    println!("  Non-zero weights: {} ({:.2}% dense)", stats.non_zero, density * 100.0);

    Ok(())
}
