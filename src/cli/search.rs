//! Search command - list the closest passages

use clap::Args;

use passage_qa::{search_passages, Config};

use super::render::shorten;

#[derive(Args)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Number of passages to return (default: answer.top_k from config)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Output format (text, json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,
}

pub fn run(args: SearchArgs, config: &Config, quiet: bool) -> anyhow::Result<()> {
    let index = super::build_index(config, quiet)?;
    let top_k = args.top_k.unwrap_or(config.answer.top_k);

    let hits = search_passages(&index, &args.query, top_k)?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!("\nSearch results for '{}' (top {}):\n", args.query, hits.len());
    for hit in &hits {
        println!("{}. Score: {:.4}", hit.rank, hit.score);
        println!("   Source: {} (passage {})", hit.doc_id, hit.passage_index);
        println!("   {}", shorten(&hit.text, config.answer.snippet_width));
        println!();
    }

    Ok(())
}
