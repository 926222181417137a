//! Integration tests for the trending-topics ranking pass.
//!
//! Every test pins `now` so scores are reproducible.

use chrono::{DateTime, Duration, TimeZone, Utc};

use technews_core::{Article, ArticleId};
use technews_trending::{
    extract_keywords, rank_topics, rank_topics_at, within_window, TopicResult,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 9, 0, 0).unwrap()
}

fn article(id: i64, title: &str, body: &str, hours_ago: Option<i64>) -> Article {
    Article {
        id: ArticleId(id),
        title: title.to_string(),
        body: if body.is_empty() {
            None
        } else {
            Some(body.to_string())
        },
        published_at: hours_ago.map(|h| now() - Duration::hours(h)),
        category: Some("Tech News".to_string()),
        source: None,
        url: None,
        sentiment: None,
    }
}

#[test]
fn empty_batch_returns_no_topics() {
    let articles: Vec<Article> = Vec::new();
    assert!(rank_topics(&articles, 24, 10).is_empty());
}

#[test]
fn batch_without_text_returns_no_topics() {
    let articles = vec![
        article(1, "", "", Some(1)),
        article(2, "", "", None),
    ];
    assert!(rank_topics_at(&articles, 24, 10, now()).is_empty());
}

fn summarize(topics: &[TopicResult<'_>]) -> Vec<(String, u64, f64, Vec<i64>)> {
    topics
        .iter()
        .map(|t| {
            (
                t.topic.clone(),
                t.count,
                t.score,
                t.articles.iter().map(|a| a.id.0).collect(),
            )
        })
        .collect()
}

#[test]
fn ranking_is_deterministic_for_fixed_now() {
    let articles = vec![
        article(1, "Kubernetes outage postmortem", "Kubernetes clusters failed", Some(3)),
        article(2, "Postgres tuning", "Kubernetes operators for Postgres", Some(7)),
        article(3, "Machine learning on Kubernetes", "", Some(1)),
    ];
    let first = rank_topics_at(&articles, 24, 10, now());
    let second = rank_topics_at(&articles, 24, 10, now());

    assert!(!first.is_empty());
    assert_eq!(summarize(&first), summarize(&second));
}

#[test]
fn title_phrase_outweighs_its_keywords() {
    let articles = vec![
        article(1, "New Machine Learning Breakthrough", "", Some(1)),
        article(2, "Machine learning in production", "", Some(2)),
    ];
    let topics = rank_topics_at(&articles, 24, 10, now());

    let phrase = topics
        .iter()
        .find(|t| t.topic == "Machine Learning")
        .expect("phrase topic present");
    assert_eq!(phrase.count, 2 * 5);

    for word in ["Machine", "Learning"] {
        let keyword = topics
            .iter()
            .find(|t| t.topic == word)
            .expect("keyword topic present");
        assert_eq!(keyword.count, 2 * 2);
        assert!(phrase.count > keyword.count);
    }
}

#[test]
fn single_body_mention_is_not_trending() {
    let articles = vec![
        article(1, "Unrelated headline", "A note on Terraform", Some(1)),
        article(2, "Another headline", "", Some(1)),
    ];
    let topics = rank_topics_at(&articles, 24, 10, now());
    assert!(topics.iter().all(|t| t.topic != "Terraform"));
    assert!(topics.iter().any(|t| t.topic == "Headline"));
}

#[test]
fn single_article_term_is_excluded_even_with_high_count() {
    let articles = vec![
        // Title phrase (5), body phrase (3) and body keyword (1), one article.
        article(1, "Zero-day in the wild", "Vendors patch the zero-day", Some(1)),
        article(2, "Kubernetes pricing", "", Some(2)),
        article(3, "Kubernetes security", "", Some(3)),
    ];
    let topics = rank_topics_at(&articles, 24, 10, now());
    assert!(topics.iter().any(|t| t.topic == "Kubernetes"));
    assert!(topics.iter().all(|t| t.topic != "Zero-Day"));
}

#[test]
fn fresher_topic_scores_higher_at_equal_count() {
    let articles = vec![
        article(1, "Terraform", "", Some(12)),
        article(2, "Terraform", "", Some(12)),
        article(3, "Pulumi", "", Some(1)),
        article(4, "Pulumi", "", Some(1)),
    ];
    let topics = rank_topics_at(&articles, 24, 10, now());
    let terraform = topics.iter().find(|t| t.topic == "Terraform").expect("terraform");
    let pulumi = topics.iter().find(|t| t.topic == "Pulumi").expect("pulumi");
    assert_eq!(terraform.count, pulumi.count);
    assert!(pulumi.score > terraform.score);

    let position = |name: &str| topics.iter().position(|t| t.topic == name).expect("present");
    assert!(position("Pulumi") < position("Terraform"));
}

#[test]
fn blockchain_titles_trend_with_recent_articles() {
    let articles = vec![
        article(1, "Banks test blockchain settlement", "", Some(2)),
        article(2, "Why blockchain still matters", "", Some(1)),
        article(3, "A blockchain for supply chains", "", Some(0)),
    ];
    let topics = rank_topics_at(&articles, 24, 10, now());

    let blockchain = topics
        .iter()
        .find(|t| t.topic == "Blockchain")
        .expect("blockchain topic");
    assert!(blockchain.count >= 6, "count was {}", blockchain.count);
    assert!(blockchain.score > blockchain.count as f64);

    let ids: Vec<i64> = blockchain.articles.iter().map(|a| a.id.0).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn topic_keeps_five_newest_of_eight_articles() {
    let articles: Vec<Article> = (1..=8)
        .map(|i| article(i, "Kubernetes weekly digest", "", Some(i * 2)))
        .collect();
    let topics = rank_topics_at(&articles, 48, 10, now());

    let k8s = topics
        .iter()
        .find(|t| t.topic == "Kubernetes")
        .expect("kubernetes topic");
    let ids: Vec<i64> = k8s.articles.iter().map(|a| a.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn recency_counts_all_associated_articles_not_just_the_first_five() {
    let articles: Vec<Article> = (1..=8)
        .map(|i| article(i, "Kubernetes", "", None))
        .collect();
    let topics = rank_topics_at(&articles, 24, 10, now());
    let k8s = topics.iter().find(|t| t.topic == "Kubernetes").expect("topic");
    // Eight undated articles each contribute a recency of exactly 1.
    assert!((k8s.score - (k8s.count as f64 + 8.0)).abs() < 1e-9);
    assert_eq!(k8s.articles.len(), 5);
}

#[test]
fn window_filter_feeds_ranking() {
    let articles = vec![
        article(1, "Rust async", "", Some(2)),
        article(2, "Rust editions", "", Some(3)),
        article(3, "Rust history", "", Some(100)),
        article(4, "Rust undated", "", None),
    ];
    let recent = within_window(&articles, 24, now());
    let topics = rank_topics_at(recent, 24, 10, now());
    let rust = topics.iter().find(|t| t.topic == "Rust").expect("rust topic");
    let ids: Vec<i64> = rust.articles.iter().map(|a| a.id.0).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn keyword_casing_examples() {
    let keywords = extract_keywords("OpenAI released GPT-4 today");
    assert!(keywords.contains(&"OpenAI".to_string()));
    assert!(keywords.contains(&"GPT-4".to_string()));
    assert!(!keywords.iter().any(|k| k.eq_ignore_ascii_case("released")));
    assert!(!keywords.iter().any(|k| k.eq_ignore_ascii_case("today")));
}
