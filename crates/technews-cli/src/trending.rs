//! Trending report handlers for the CLI.

use chrono::{DateTime, Utc};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use technews_core::{AppConfig, Article};
use technews_trending::{
    category_counts, rank_topics_with, sentiment_distribution, source_counts, timeline,
    within_window, CategoryCount, SentimentShare, SourceCount, TimelineBucket, TopicResult,
    Vocabulary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Sub-commands available under `trending`.
#[derive(Debug, Subcommand)]
pub enum TrendingCommands {
    /// Rank trending topics by weighted mentions and recency
    Topics {
        /// Only consider articles published within this many hours
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hours: Option<u32>,

        /// Maximum number of topics to consider
        #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,
    },
    /// Count recent articles per category
    Categories {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hours: Option<u32>,
    },
    /// Count recent articles per source
    Sources {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hours: Option<u32>,
    },
    /// Show the sentiment label distribution of recent articles
    Sentiment {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hours: Option<u32>,
    },
    /// Show article volume over time
    Timeline {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hours: Option<u32>,

        /// Bucket width in hours; buckets never cross midnight
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=24))]
        interval_hours: Option<u32>,
    },
}

/// Run one trending report over `articles` and return the rendered output.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_trending(
    config: &AppConfig,
    vocabulary: &Vocabulary,
    articles: &[Article],
    command: &TrendingCommands,
    format: OutputFormat,
    now: DateTime<Utc>,
) -> anyhow::Result<String> {
    let window = |hours: Option<u32>| hours.unwrap_or(config.trending_window_hours);

    match *command {
        TrendingCommands::Topics { hours, limit } => {
            let hours = window(hours);
            let limit = limit.unwrap_or(config.trending_limit);
            let recent = within_window(articles, hours, now);
            let topics = rank_topics_with(vocabulary, recent.iter().copied(), hours, limit, now);
            tracing::info!(
                articles = recent.len(),
                hours,
                limit,
                topics = topics.len(),
                "built topics report"
            );
            render(format, &topics, || render_topics_table(&topics, hours))
        }
        TrendingCommands::Categories { hours } => {
            let counts = category_counts(within_window(articles, window(hours), now));
            render(format, &counts, || render_categories_table(&counts))
        }
        TrendingCommands::Sources { hours } => {
            let counts = source_counts(within_window(articles, window(hours), now));
            render(format, &counts, || render_sources_table(&counts))
        }
        TrendingCommands::Sentiment { hours } => {
            let shares = sentiment_distribution(within_window(articles, window(hours), now));
            render(format, &shares, || render_sentiment_table(&shares))
        }
        TrendingCommands::Timeline {
            hours,
            interval_hours,
        } => {
            let hours = hours.unwrap_or(config.timeline_hours);
            let interval = interval_hours.unwrap_or(config.timeline_interval_hours);
            let buckets = timeline(within_window(articles, hours, now), interval);
            render(format, &buckets, || render_timeline_table(&buckets))
        }
    }
}

fn render<T, F>(format: OutputFormat, value: &T, table: F) -> anyhow::Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table()),
    }
}

pub(crate) fn render_topics_table(topics: &[TopicResult<'_>], hours: u32) -> String {
    if topics.is_empty() {
        return format!("no trending topics in the last {hours} hours");
    }

    let mut lines = vec![format!(
        "{:<32}{:<8}{:<10}ARTICLES",
        "TOPIC", "COUNT", "SCORE"
    )];
    for topic in topics {
        lines.push(format!(
            "{:<32}{:<8}{:<10.3}{}",
            topic.topic,
            topic.count,
            topic.score,
            topic.articles.len()
        ));
        lines.extend(topic.articles.iter().map(|article| {
            let published = article.published_at.map_or_else(
                || "undated".to_string(),
                |p| p.format("%Y-%m-%d %H:%M").to_string(),
            );
            format!("    [{}] {} ({published})", article.id, article.title)
        }));
    }
    lines.join("\n")
}

fn render_categories_table(counts: &[CategoryCount]) -> String {
    if counts.is_empty() {
        return "no categorised articles in window".to_string();
    }
    std::iter::once(format!("{:<32}COUNT", "CATEGORY"))
        .chain(
            counts
                .iter()
                .map(|row| format!("{:<32}{}", row.category, row.count)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_sources_table(counts: &[SourceCount]) -> String {
    if counts.is_empty() {
        return "no sourced articles in window".to_string();
    }
    std::iter::once(format!("{:<32}COUNT", "SOURCE"))
        .chain(
            counts
                .iter()
                .map(|row| format!("{:<32}{}", row.source, row.count)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_sentiment_table(shares: &[SentimentShare]) -> String {
    if shares.is_empty() {
        return "no sentiment-labelled articles in window".to_string();
    }
    std::iter::once(format!("{:<16}{:<8}PERCENT", "SENTIMENT", "COUNT"))
        .chain(shares.iter().map(|row| {
            format!("{:<16}{:<8}{:.1}", row.sentiment, row.count, row.percentage)
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_timeline_table(buckets: &[TimelineBucket]) -> String {
    if buckets.is_empty() {
        return "no dated articles in window".to_string();
    }
    std::iter::once(format!(
        "{:<20}{:<8}TOP CATEGORIES",
        "INTERVAL START", "COUNT"
    ))
    .chain(buckets.iter().map(|bucket| {
        let categories = bucket
            .top_categories
            .iter()
            .map(|c| format!("{} ({})", c.category, c.count))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{:<20}{:<8}{}",
            bucket.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            bucket.count,
            categories
        )
    }))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
#[path = "trending_test.rs"]
mod tests;
