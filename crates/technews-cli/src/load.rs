//! Article batch loading.
//!
//! Records are decoded one by one so a single malformed entry is logged and
//! skipped instead of failing the whole batch.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use technews_core::Article;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchDocument {
    List(Vec<serde_json::Value>),
    Wrapped { articles: Vec<serde_json::Value> },
}

/// Read an article batch from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array or
/// `{"articles": [...]}` object. Individual bad records are skipped.
pub(crate) fn load_articles(path: &Path) -> anyhow::Result<Vec<Article>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read article batch {}", path.display()))?;
    parse_articles(&content)
        .with_context(|| format!("failed to parse article batch {}", path.display()))
}

pub(crate) fn parse_articles(json: &str) -> anyhow::Result<Vec<Article>> {
    let document: BatchDocument = serde_json::from_str(json)
        .context("expected a JSON array of articles or an object with an `articles` array")?;
    let records = match document {
        BatchDocument::List(records) | BatchDocument::Wrapped { articles: records } => records,
    };

    let total = records.len();
    let articles: Vec<Article> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Article>(record) {
            Ok(article) => Some(article),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed article record");
                None
            }
        })
        .collect();

    let skipped = total - articles.len();
    if skipped > 0 {
        tracing::warn!(total, skipped, "some article records could not be decoded");
    }
    tracing::debug!(articles = articles.len(), "loaded article batch");

    Ok(articles)
}
