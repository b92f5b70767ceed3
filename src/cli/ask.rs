//! Ask command - answer questions from the corpus

use clap::Args;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

use passage_qa::qa::{answer_question_with, AnswerOptions};
use passage_qa::{Config, CorpusIndex, QueryError};

use super::render::format_answer;

#[derive(Args)]
pub struct AskArgs {
    /// Question to ask (omit for interactive mode)
    pub question: Option<String>,

    /// Output format (text, json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,
}

pub fn run(args: AskArgs, config: &Config, quiet: bool) -> anyhow::Result<()> {
    let index = super::build_index(config, quiet)?;
    info!("Ready: {} passages indexed", index.len());

    let json = args.format == "json";
    match args.question {
        Some(question) => {
            if question.trim().is_empty() {
                anyhow::bail!("Question is empty");
            }
            print_answer(&index, &question, config, json)
        }
        None => run_interactive(&index, config, json),
    }
}

/// Answer and print; an empty question prints nothing
fn print_answer(
    index: &CorpusIndex,
    question: &str,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let options = AnswerOptions {
        fallback_chars: config.answer.fallback_chars,
    };

    match answer_question_with(index, question, &options) {
        Ok(answer) if json => println!("{}", serde_json::to_string_pretty(&answer)?),
        Ok(answer) => println!("\n{}", format_answer(&answer, &config.answer)),
        Err(QueryError::EmptyQuestion) => {}
    }
    Ok(())
}

/// Read questions until `quit`, Ctrl-C or end of input
fn run_interactive(index: &CorpusIndex, config: &Config, json: bool) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!("TF-IDF QA ready. Type questions (Ctrl+C to quit).");

    loop {
        println!();
        let line = match editor.readline("Question: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question == "quit" || question == "exit" {
            break;
        }

        editor.add_history_entry(question)?;
        if let Err(e) = print_answer(index, question, config, json) {
            eprintln!("Error: {:#}", e);
        }
    }

    println!("Exiting.");
    Ok(())
}
