use chrono::{DateTime, Utc};
use serde::Serialize;
use technews_core::Article;

/// One ranked trending topic.
#[derive(Debug, Clone, Serialize)]
pub struct TopicResult<'a> {
    /// Display-cased term.
    pub topic: String,
    /// Weighted occurrence count across the batch.
    pub count: u64,
    /// `count` plus the recency factor of the associated articles.
    pub score: f64,
    /// Up to five associated articles, newest first.
    pub articles: Vec<&'a Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub source: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentShare {
    pub sentiment: String,
    pub count: u64,
    /// Share of labelled articles, rounded to one decimal place.
    pub percentage: f64,
}

/// Article volume for one time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineBucket {
    pub timestamp: DateTime<Utc>,
    pub count: u64,
    /// At most three categories, busiest first.
    pub top_categories: Vec<CategoryCount>,
}
