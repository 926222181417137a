use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendingError {
    #[error("failed to read vocabulary file {path}: {source}")]
    VocabularyIo {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary YAML: {0}")]
    VocabularyParse(#[from] serde_yaml::Error),

    #[error("invalid phrase pattern in group '{label}': {source}")]
    InvalidPattern {
        label: String,
        source: Box<regex::Error>,
    },

    #[error("vocabulary validation error: {0}")]
    Validation(String),
}
