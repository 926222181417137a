//! Window filter and per-field breakdowns of an article batch.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Timelike, Utc};
use technews_core::Article;

use crate::counter::FirstSeenCounter;
use crate::types::{CategoryCount, SentimentShare, SourceCount, TimelineBucket};

/// Categories reported per timeline bucket.
const TOP_CATEGORIES_PER_BUCKET: usize = 3;

/// Articles published within the last `hours` before `now`.
///
/// Undated articles never fall inside a window. A window reaching past the
/// earliest representable time keeps every dated article.
#[must_use]
pub fn within_window(articles: &[Article], hours: u32, now: DateTime<Utc>) -> Vec<&Article> {
    let since = Duration::try_hours(i64::from(hours)).and_then(|d| now.checked_sub_signed(d));
    articles
        .iter()
        .filter(|a| {
            a.published_at
                .is_some_and(|p| since.is_none_or(|since| p >= since))
        })
        .collect()
}

/// Article count per category, busiest first. Uncategorised articles are skipped.
#[must_use]
pub fn category_counts<'a, I>(articles: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Article>,
{
    count_by(articles, |a| a.category.as_deref())
        .most_common()
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

/// Article count per source, busiest first. Articles without a source are skipped.
#[must_use]
pub fn source_counts<'a, I>(articles: I) -> Vec<SourceCount>
where
    I: IntoIterator<Item = &'a Article>,
{
    count_by(articles, |a| a.source.as_deref())
        .most_common()
        .into_iter()
        .map(|(source, count)| SourceCount { source, count })
        .collect()
}

/// Distribution of sentiment labels in first-seen order.
///
/// Percentages are relative to labelled articles only and rounded to one
/// decimal place, halves to even.
#[must_use]
pub fn sentiment_distribution<'a, I>(articles: I) -> Vec<SentimentShare>
where
    I: IntoIterator<Item = &'a Article>,
{
    let entries = count_by(articles, |a| a.sentiment.as_deref()).into_entries();
    let total: u64 = entries.iter().map(|(_, count)| count).sum();

    entries
        .into_iter()
        .map(|(sentiment, count)| {
            #[allow(clippy::cast_precision_loss)]
            let percentage = if total > 0 {
                (count as f64 / total as f64 * 1000.0).round_ties_even() / 10.0
            } else {
                0.0
            };
            SentimentShare {
                sentiment,
                count,
                percentage,
            }
        })
        .collect()
}

/// Bucket articles by publication time.
///
/// Each timestamp is truncated to the hour and its hour-of-day rounded down
/// to a multiple of `interval_hours`, so buckets never cross midnight.
/// Undated articles are skipped. Buckets come back oldest first.
#[must_use]
pub fn timeline<'a, I>(articles: I, interval_hours: u32) -> Vec<TimelineBucket>
where
    I: IntoIterator<Item = &'a Article>,
{
    let interval = interval_hours.max(1);
    let mut buckets: BTreeMap<DateTime<Utc>, (u64, FirstSeenCounter)> = BTreeMap::new();

    for article in articles {
        let Some(published_at) = article.published_at else {
            continue;
        };
        let Some(start) = bucket_start(published_at, interval) else {
            tracing::warn!(id = %article.id, %published_at, "could not bucket article timestamp");
            continue;
        };
        let (count, categories) = buckets.entry(start).or_default();
        *count += 1;
        if let Some(category) = article.category.as_deref() {
            categories.add(category, 1);
        }
    }

    buckets
        .into_iter()
        .map(|(timestamp, (count, categories))| TimelineBucket {
            timestamp,
            count,
            top_categories: categories
                .most_common()
                .into_iter()
                .take(TOP_CATEGORIES_PER_BUCKET)
                .map(|(category, count)| CategoryCount { category, count })
                .collect(),
        })
        .collect()
}

fn bucket_start(published_at: DateTime<Utc>, interval_hours: u32) -> Option<DateTime<Utc>> {
    let hour = (published_at.hour() / interval_hours) * interval_hours;
    published_at
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .map(|naive| naive.and_utc())
}

fn count_by<'a, I, F>(articles: I, key: F) -> FirstSeenCounter
where
    I: IntoIterator<Item = &'a Article>,
    F: Fn(&'a Article) -> Option<&'a str>,
{
    let mut counter = FirstSeenCounter::default();
    for article in articles {
        if let Some(value) = key(article) {
            counter.add(value, 1);
        }
    }
    counter
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
