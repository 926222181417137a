use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned article identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An aggregated news article as handed over by the storage layer.
///
/// Only `id` is required when decoding. Every other field degrades to empty
/// or `None` so a sparse record still takes part in a trending pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content")]
    pub body: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Label assigned upstream by the sentiment scorer (`positive`, `neutral`, ...).
    #[serde(default)]
    pub sentiment: Option<String>,
}

impl Article {
    /// Article body, or the empty string if none was captured.
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_record() {
        let article: Article = serde_json::from_str(r#"{"id": 7}"#).expect("decode");
        assert_eq!(article.id, ArticleId(7));
        assert_eq!(article.title, "");
        assert!(article.body.is_none());
        assert!(article.published_at.is_none());
        assert_eq!(article.body_text(), "");
    }

    #[test]
    fn content_is_accepted_as_body_alias() {
        let article: Article =
            serde_json::from_str(r#"{"id": 1, "title": "t", "content": "hello"}"#).expect("decode");
        assert_eq!(article.body_text(), "hello");
    }

    #[test]
    fn decodes_rfc3339_published_at() {
        let article: Article = serde_json::from_str(
            r#"{"id": 2, "published_at": "2026-03-01T12:30:00Z", "category": "Startup"}"#,
        )
        .expect("decode");
        let published = article.published_at.expect("timestamp");
        assert_eq!(published.to_rfc3339(), "2026-03-01T12:30:00+00:00");
        assert_eq!(article.category.as_deref(), Some("Startup"));
    }

    #[test]
    fn id_serializes_as_plain_number() {
        let json = serde_json::to_value(ArticleId(42)).expect("serialize");
        assert_eq!(json, serde_json::json!(42));
    }
}
