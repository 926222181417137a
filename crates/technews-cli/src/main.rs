mod load;
mod trending;
mod vocabulary;

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use technews_core::AppConfig;
use technews_trending::Vocabulary;
use tracing_subscriber::EnvFilter;

use crate::trending::{OutputFormat, TrendingCommands};
use crate::vocabulary::VocabularyCommands;

#[derive(Debug, Parser)]
#[command(name = "technews")]
#[command(about = "Trending topics and breakdowns for aggregated tech news")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Trending reports over an article batch
    Trending {
        /// JSON file holding the article batch
        #[arg(long, env = "TECHNEWS_ARTICLES_PATH")]
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[command(subcommand)]
        command: TrendingCommands,
    },
    /// Inspect the extraction vocabulary
    Vocabulary {
        #[command(subcommand)]
        command: VocabularyCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let config = technews_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        env = %config.env,
        vocabulary = ?config.vocabulary_path,
        "loaded configuration"
    );

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Trending {
            input,
            format,
            command,
        }) => {
            let vocabulary = resolve_vocabulary(&config)?;
            let articles = load::load_articles(&input)?;
            let output = trending::run_trending(
                &config,
                &vocabulary,
                &articles,
                &command,
                format,
                chrono::Utc::now(),
            )?;
            println!("{output}");
        }
        Some(Commands::Vocabulary { command }) => vocabulary::run_vocabulary(&config, &command)?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}

/// The configured vocabulary override, or the built-in lists.
pub(crate) fn resolve_vocabulary(config: &AppConfig) -> anyhow::Result<Vocabulary> {
    match &config.vocabulary_path {
        Some(path) => Vocabulary::from_yaml_file(path)
            .with_context(|| format!("failed to load vocabulary {}", path.display())),
        None => Ok(Vocabulary::builtin().clone()),
    }
}
