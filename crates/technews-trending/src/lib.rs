//! Trending-topics engine for aggregated tech news.
//!
//! Extracts keywords and known tech phrases from article titles and bodies,
//! counts them with title/body and phrase/keyword weights, and ranks the
//! result with a recency bonus. Also provides the window filter and the
//! category, source, sentiment and timeline breakdowns shown next to the
//! topic list. Everything here is pure and synchronous over an
//! already-loaded article batch.

mod counter;
pub mod error;
pub mod extract;
pub mod rank;
pub mod stats;
pub mod types;
pub mod vocabulary;

pub use error::TrendingError;
pub use extract::{extract_keywords, extract_phrases, title_case};
pub use rank::{rank_topics, rank_topics_at, rank_topics_with};
pub use stats::{category_counts, sentiment_distribution, source_counts, timeline, within_window};
pub use types::{CategoryCount, SentimentShare, SourceCount, TimelineBucket, TopicResult};
pub use vocabulary::{PhraseGroup, Vocabulary, VocabularyFile};
