//! Config command - manage passage-qa configuration

use std::path::Path;

use clap::{Args, Subcommand};

use passage_qa::Config;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration (file plus command-line overrides)
    Show,

    /// Initialize config file with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show config file path
    Path,
}

pub fn run(
    args: ConfigArgs,
    resolved: anyhow::Result<Config>,
    explicit_path: Option<&Path>,
) -> anyhow::Result<()> {
    let path = explicit_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);

    match args.command {
        ConfigCommands::Show => {
            let config = resolved?;
            if path.exists() {
                println!("# Config file: {}", path.display());
            } else {
                println!("# Config file: {} (not found, using defaults)", path.display());
            }
            println!();
            print!("{}", toml::to_string_pretty(&config)?);
            config.validate()?;
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }

            Config::write_example(&path)?;
            println!("Created config file at {}", path.display());
            println!();
            println!("Point [corpus] dir at the directory holding your *_full.txt documents,");
            println!("or pass --corpus on the command line.");
        }

        ConfigCommands::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
