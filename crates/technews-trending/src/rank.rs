//! Weighted topic counting and recency-adjusted ranking.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use technews_core::Article;

use crate::counter::FirstSeenCounter;
use crate::types::TopicResult;
use crate::vocabulary::Vocabulary;

pub const TITLE_PHRASE_WEIGHT: u64 = 5;
pub const BODY_PHRASE_WEIGHT: u64 = 3;
pub const TITLE_KEYWORD_WEIGHT: u64 = 2;
pub const BODY_KEYWORD_WEIGHT: u64 = 1;

/// Topics counted fewer times than this across the batch are dropped.
pub const MIN_TOPIC_COUNT: u64 = 2;

/// Topics mentioned by fewer articles than this are dropped.
pub const MIN_TOPIC_ARTICLES: usize = 2;

/// Associated articles kept per topic.
pub const MAX_ARTICLES_PER_TOPIC: usize = 5;

/// Rank trending topics as of now with the built-in vocabulary.
///
/// `articles` should already be restricted to the last `window_hours`
/// (see [`crate::within_window`]); recency is derived from each article's
/// own timestamp, not from the window.
#[must_use]
pub fn rank_topics<'a, I>(articles: I, window_hours: u32, limit: usize) -> Vec<TopicResult<'a>>
where
    I: IntoIterator<Item = &'a Article>,
{
    rank_topics_at(articles, window_hours, limit, Utc::now())
}

/// [`rank_topics`] with an explicit reference time.
#[must_use]
pub fn rank_topics_at<'a, I>(
    articles: I,
    window_hours: u32,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<TopicResult<'a>>
where
    I: IntoIterator<Item = &'a Article>,
{
    rank_topics_with(Vocabulary::builtin(), articles, window_hours, limit, now)
}

/// Rank trending topics using `vocabulary`.
///
/// 1. Extract title/body keywords and phrases for every article.
/// 2. Count them with weights 5 (title phrase), 3 (body phrase),
///    2 (title keyword) and 1 (body keyword).
/// 3. Keep the `limit` most counted terms, then drop those below
///    [`MIN_TOPIC_COUNT`].
/// 4. Attach every article mentioning the term, newest first, undated last,
///    and drop terms mentioned by fewer than [`MIN_TOPIC_ARTICLES`] articles.
/// 5. Score as `count + Σ 1 / max(1, age_hours)`; undated articles add 1.
/// 6. Sort by score descending and keep five articles per topic.
#[must_use]
pub fn rank_topics_with<'a, I>(
    vocabulary: &Vocabulary,
    articles: I,
    window_hours: u32,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<TopicResult<'a>>
where
    I: IntoIterator<Item = &'a Article>,
{
    let articles: Vec<&'a Article> = articles.into_iter().collect();
    let extracted: Vec<ArticleTerms> = articles
        .iter()
        .map(|article| ArticleTerms::extract(vocabulary, article))
        .collect();

    let mut counts = FirstSeenCounter::default();
    for terms in &extracted {
        terms.add_weighted(&mut counts);
    }

    if counts.is_empty() {
        tracing::debug!(
            article_count = articles.len(),
            window_hours,
            "no candidate terms in batch"
        );
        return Vec::new();
    }

    let memberships: Vec<HashSet<&str>> = extracted.iter().map(ArticleTerms::membership).collect();

    let mut topics: Vec<TopicResult<'a>> = counts
        .most_common()
        .into_iter()
        .take(limit)
        .filter(|(_, count)| *count >= MIN_TOPIC_COUNT)
        .filter_map(|(term, count)| {
            let mut related: Vec<&'a Article> = articles
                .iter()
                .zip(&memberships)
                .filter(|(_, members)| members.contains(term.as_str()))
                .map(|(article, _)| *article)
                .collect();
            if related.len() < MIN_TOPIC_ARTICLES {
                return None;
            }
            related.sort_by(|a, b| b.published_at.cmp(&a.published_at));

            let recency: f64 = related
                .iter()
                .map(|article| recency_weight(article.published_at, now))
                .sum();
            #[allow(clippy::cast_precision_loss)]
            let score = count as f64 + recency;

            related.truncate(MAX_ARTICLES_PER_TOPIC);
            Some(TopicResult {
                topic: term,
                count,
                score,
                articles: related,
            })
        })
        .collect();

    topics.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(
        article_count = articles.len(),
        window_hours,
        limit,
        topics = topics.len(),
        "ranked trending topics"
    );

    topics
}

/// `1 / max(1, age_hours)`; an undated article counts as published now.
fn recency_weight(published_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(published_at) = published_at else {
        return 1.0;
    };
    #[allow(clippy::cast_precision_loss)]
    let age_hours = (now - published_at).num_milliseconds() as f64 / 3_600_000.0;
    1.0 / age_hours.max(1.0)
}

struct ArticleTerms {
    title_keywords: Vec<String>,
    body_keywords: Vec<String>,
    title_phrases: Vec<String>,
    body_phrases: Vec<String>,
}

impl ArticleTerms {
    fn extract(vocabulary: &Vocabulary, article: &Article) -> Self {
        let body = article.body_text();
        Self {
            title_keywords: vocabulary.extract_keywords(&article.title),
            body_keywords: vocabulary.extract_keywords(body),
            title_phrases: vocabulary.extract_phrases(&article.title),
            body_phrases: vocabulary.extract_phrases(body),
        }
    }

    fn weighted(&self) -> [(&[String], u64); 4] {
        [
            (self.title_phrases.as_slice(), TITLE_PHRASE_WEIGHT),
            (self.body_phrases.as_slice(), BODY_PHRASE_WEIGHT),
            (self.title_keywords.as_slice(), TITLE_KEYWORD_WEIGHT),
            (self.body_keywords.as_slice(), BODY_KEYWORD_WEIGHT),
        ]
    }

    fn add_weighted(&self, counts: &mut FirstSeenCounter) {
        for (terms, weight) in self.weighted() {
            for term in terms {
                counts.add(term, weight);
            }
        }
    }

    fn membership(&self) -> HashSet<&str> {
        self.weighted()
            .into_iter()
            .flat_map(|(terms, _)| terms.iter().map(String::as_str))
            .collect()
    }
}
