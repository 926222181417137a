use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use technews_core::AppConfig;
use technews_trending::Vocabulary;

/// Sub-commands available under `vocabulary`.
#[derive(Debug, Subcommand)]
pub enum VocabularyCommands {
    /// Validate a vocabulary file and summarise its contents
    Check {
        /// Vocabulary YAML to check; defaults to the configured override or the built-in lists
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub(crate) fn run_vocabulary(config: &AppConfig, command: &VocabularyCommands) -> anyhow::Result<()> {
    match command {
        VocabularyCommands::Check { path } => {
            let (origin, vocabulary) = match path {
                Some(path) => (
                    path.display().to_string(),
                    Vocabulary::from_yaml_file(path)
                        .with_context(|| format!("invalid vocabulary {}", path.display()))?,
                ),
                None => (
                    config.vocabulary_path.as_ref().map_or_else(
                        || "built-in".to_string(),
                        |p| p.display().to_string(),
                    ),
                    crate::resolve_vocabulary(config)?,
                ),
            };
            println!("{}", render_summary(&origin, &vocabulary));
        }
    }
    Ok(())
}

pub(crate) fn render_summary(origin: &str, vocabulary: &Vocabulary) -> String {
    let mut lines = vec![
        format!("vocabulary: {origin}"),
        format!("stop words: {}", vocabulary.stop_word_count()),
        format!("{:<20}PATTERNS", "PHRASE GROUP"),
    ];
    lines.extend(
        vocabulary
            .group_summary()
            .map(|(label, patterns)| format!("{label:<20}{patterns}")),
    );
    lines.join("\n")
}
