//! Static word lists and phrase patterns driving topic extraction.
//!
//! The built-in vocabulary is plain data compiled once on first use. A YAML
//! file with the same shape can replace it at runtime (see [`VocabularyFile`]).

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TrendingError;

/// Common English words, auxiliaries and news filler that never make a topic.
///
/// Entries are lowercase. Words shorter than four letters are listed for
/// completeness even though the tokenizer never yields them.
pub const STOP_WORDS: &[&str] = &[
    // articles, conjunctions, prepositions
    "the", "and", "but", "for", "nor", "yet", "with", "from", "into", "onto", "upon", "about",
    "above", "below", "after", "before", "during", "through", "throughout", "between", "among",
    "amongst", "against", "across", "along", "around", "behind", "beneath", "beside", "besides",
    "beyond", "despite", "except", "inside", "outside", "toward", "towards", "under",
    "underneath", "unlike", "until", "unto", "versus", "within", "without", "via", "per",
    "than", "then", "though", "although", "unless", "whereas", "whether", "while", "whilst",
    "because", "since", "also", "either", "neither", "both",
    // pronouns and determiners
    "this", "that", "these", "those", "they", "them", "their", "theirs", "themselves", "there",
    "here", "what", "which", "whom", "whose", "whoever", "whatever", "whichever", "when",
    "where", "wherever", "whenever", "your", "yours", "yourself", "yourselves", "ours",
    "ourselves", "mine", "myself", "himself", "herself", "itself", "each", "every", "everyone",
    "everybody", "everything", "everywhere", "some", "someone", "somebody", "something",
    "somewhere", "somehow", "sometimes", "anyone", "anybody", "anything", "anywhere", "anyway",
    "none", "nobody", "nothing", "nowhere", "other", "others", "another", "such", "same",
    "many", "much", "more", "most", "less", "least", "few", "fewer", "several", "enough",
    "own", "only", "very", "quite", "rather", "really", "just", "even", "still", "already",
    "almost", "always", "never", "often", "ever", "again", "once", "twice", "soon", "later",
    "ago", "perhaps", "maybe", "indeed", "instead", "otherwise", "thus", "hence", "therefore",
    "however", "moreover", "furthermore", "meanwhile", "nevertheless", "nonetheless",
    "anymore", "altogether", "whole", "half", "else",
    // auxiliary and modal verbs
    "will", "would", "shall", "should", "could", "might", "must", "need", "needs", "needed",
    "have", "has", "had", "having", "been", "being", "were", "does", "did", "doing", "done",
    "make", "makes", "made", "making", "gets", "getting", "got", "gotten", "give", "gives",
    "gave", "given", "giving", "take", "takes", "took", "taken", "taking", "comes", "came",
    "coming", "goes", "went", "gone", "going", "says", "said", "saying", "tell", "tells",
    "told", "telling", "know", "knows", "knew", "known", "think", "thinks", "thought",
    "seem", "seems", "seemed", "become", "becomes", "became", "becoming", "keep", "keeps",
    "kept", "want", "wants", "wanted", "like", "likes", "liked", "look", "looks", "looked",
    "looking", "find", "finds", "found", "show", "shows", "showed", "shown", "call", "calls",
    "called", "work", "works", "worked", "working", "help", "helps", "helped", "helping",
    "start", "starts", "started", "starting", "turn", "turns", "turned", "move", "moves",
    "moved", "bring", "brings", "brought", "allow", "allows", "allowed", "let", "lets",
    "put", "puts", "run", "runs", "ran", "running", "set", "sets", "try", "tries", "tried",
    "trying", "use", "uses", "used", "using", "mean", "means", "meant", "feel", "feels",
    "felt", "leave", "leaves", "left", "begin", "begins", "began", "begun", "include",
    "includes", "included", "including", "continue", "continues", "continued", "change",
    "changes", "changed", "offer", "offers", "offered", "provide", "provides", "provided",
    "create", "creates", "created", "build", "builds", "built", "plan", "plans", "planned",
    "expect", "expects", "expected",
    // news filler
    "today", "yesterday", "tomorrow", "tonight", "week", "weeks", "weekly", "month", "months",
    "monthly", "year", "years", "yearly", "annual", "daily", "hour", "hours", "minute",
    "minutes", "recent", "recently", "latest", "new", "newer", "newest", "news", "update",
    "updates", "updated", "report", "reports", "reported", "reporting", "according", "announce",
    "announces", "announced", "announcement", "release", "releases", "released", "releasing",
    "launch", "launches", "launched", "launching", "unveil", "unveils", "unveiled", "reveal",
    "reveals", "revealed", "introduce", "introduces", "introduced", "introducing", "claims",
    "claimed", "article", "articles", "story", "stories", "read", "reads", "reading",
    "post", "posts", "posted", "blog", "editor", "editors", "subscribe", "subscription",
    "newsletter", "click", "share", "shared", "comment", "comments", "source",
    "sources", "photo", "image", "images", "video", "videos", "podcast", "episode", "watch",
    "first", "second", "third", "last", "next", "previous", "early", "earlier", "late",
    "big", "bigger", "biggest", "great", "greater", "good", "better", "best", "small",
    "smaller", "large", "larger", "high", "higher", "highest", "low", "lower", "long",
    "longer", "short", "major", "minor", "important", "possible", "likely", "real", "able",
    "sure", "true", "false", "full", "free", "open", "close", "closed", "right", "wrong",
    "different", "similar", "various", "certain", "actually", "basically", "simply",
    "probably", "especially", "particularly", "currently", "finally", "originally",
    "potentially", "significantly", "approximately", "nearly", "roughly",
    "people", "person", "thing", "things", "stuff", "way", "ways", "time", "times", "place",
    "part", "parts", "point", "points", "case", "cases", "fact", "facts", "number", "numbers",
    "group", "groups", "kind", "kinds", "sort", "type", "types", "level", "levels", "lot",
    "lots", "area", "areas", "side", "sides", "end", "ends", "day", "days", "world", "life",
    "company", "companies", "team", "teams", "business", "businesses", "market", "markets",
    "industry", "users", "user", "customers", "customer", "million", "millions", "billion",
    "billions", "thousand", "thousands", "percent", "dollars", "worth", "price", "deal",
    "deals", "issue", "issues", "problem", "problems", "question", "questions", "reason",
    "reasons", "result", "results", "example", "examples", "idea", "ideas", "future",
    "based", "related", "available",
    // contraction stems left behind by the tokenizer ("wouldn't" -> "wouldn")
    "doesn", "didn", "isn", "aren", "wasn", "weren", "won", "couldn", "shouldn", "wouldn",
    "haven", "hasn", "hadn", "mustn", "needn",
];

/// Multi-word and single-word tech-domain phrases.
///
/// Regex fragments, matched case-insensitively on word boundaries. Longer
/// alternatives come first so a leftmost match prefers the full phrase.
pub const TECH_PHRASE_PATTERNS: &[&str] = &[
    // AI / ML
    r"artificial\s+general\s+intelligence",
    r"artificial\s+intelligence",
    r"generative\s+ai",
    r"large\s+language\s+models?",
    r"language\s+models?",
    r"machine\s+learning",
    r"deep\s+learning",
    r"reinforcement\s+learning",
    r"neural\s+networks?",
    r"computer\s+vision",
    r"natural\s+language\s+processing",
    r"ai\s+agents?",
    r"ai\s+safety",
    r"ai\s+regulation",
    r"foundation\s+models?",
    r"open\s+source\s+models?",
    r"prompt\s+engineering",
    r"vector\s+databases?",
    r"diffusion\s+models?",
    // security
    r"data\s+breach(?:es)?",
    r"zero[-\s]day",
    r"supply\s+chain\s+attacks?",
    r"ransomware\s+attacks?",
    r"cyber\s*security",
    r"cyber\s*attacks?",
    r"end[-\s]to[-\s]end\s+encryption",
    r"two[-\s]factor\s+authentication",
    r"password\s+managers?",
    r"phishing\s+campaigns?",
    r"security\s+vulnerabilit(?:y|ies)",
    // data and infrastructure
    r"big\s+data",
    r"data\s+science",
    r"data\s+centers?",
    r"data\s+privacy",
    r"cloud\s+computing",
    r"edge\s+computing",
    r"quantum\s+computing",
    r"quantum\s+computers?",
    r"serverless\s+computing",
    r"distributed\s+systems?",
    r"internet\s+of\s+things",
    // development
    r"software\s+development",
    r"web\s+development",
    r"mobile\s+apps?",
    r"developer\s+tools?",
    r"open\s+source",
    r"programming\s+languages?",
    r"version\s+control",
    r"continuous\s+integration",
    r"microservices",
    r"web\s*assembly",
    // hardware, devices, platforms
    r"electric\s+vehicles?",
    r"self[-\s]driving\s+cars?",
    r"autonomous\s+vehicles?",
    r"virtual\s+reality",
    r"augmented\s+reality",
    r"mixed\s+reality",
    r"smart\s+glasses",
    r"smart\s*phones?",
    r"semiconductors?",
    r"chip\s+shortage",
    r"social\s+media",
    r"streaming\s+services?",
    r"app\s+store",
    r"search\s+engines?",
    // crypto and fintech
    r"blockchain",
    r"cryptocurrenc(?:y|ies)",
    r"bitcoin\s+etfs?",
    r"stable\s*coins?",
    // business of tech
    r"antitrust\s+(?:lawsuit|case|probe)s?",
    r"series\s+[a-d]\s+funding",
    r"venture\s+capital",
    r"layoffs",
    r"initial\s+public\s+offering",
];

/// Companies, products and languages that are topics in their own right.
pub const ENTITY_PATTERNS: &[&str] = &[
    r"openai",
    r"anthropic",
    r"google\s+deepmind",
    r"deepmind",
    r"google",
    r"microsoft",
    r"apple",
    r"amazon\s+web\s+services",
    r"amazon",
    r"meta",
    r"nvidia",
    r"intel",
    r"tesla",
    r"spacex",
    r"samsung",
    r"netflix",
    r"github\s+copilot",
    r"github",
    r"gitlab",
    r"hugging\s*face",
    r"mistral",
    r"stripe",
    r"shopify",
    r"salesforce",
    r"oracle",
    r"chatgpt",
    r"claude",
    r"gemini",
    r"llama",
    r"copilot",
    r"gpt-?[3-5](?:\.5)?o?",
    r"iphone",
    r"android",
    r"windows",
    r"linux",
    r"kubernetes",
    r"docker",
    r"rust",
    r"python",
    r"javascript",
    r"typescript",
    r"golang",
    r"kotlin",
    r"swift",
    r"react",
    r"postgres(?:ql)?",
];

/// Built-in phrase groups in evaluation order.
pub const BUILTIN_PHRASE_GROUPS: &[(&str, &[&str])] = &[
    ("tech_phrase", TECH_PHRASE_PATTERNS),
    ("entity", ENTITY_PATTERNS),
];

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(|| {
    let groups = BUILTIN_PHRASE_GROUPS
        .iter()
        .map(|&(label, patterns)| PhraseGroup {
            label: label.to_string(),
            patterns: patterns.iter().map(|p| (*p).to_string()).collect(),
        })
        .collect::<Vec<_>>();
    Vocabulary::new(STOP_WORDS.iter().copied(), &groups)
        .expect("built-in phrase patterns are valid regex")
});

/// A labelled list of regex fragments combined into one alternation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseGroup {
    pub label: String,
    pub patterns: Vec<String>,
}

/// On-disk shape of a vocabulary override.
///
/// `stop_words` may be omitted to keep the built-in list.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyFile {
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,
    pub phrase_groups: Vec<PhraseGroup>,
}

#[derive(Debug, Clone)]
struct CompiledGroup {
    label: String,
    pattern_count: usize,
    regex: Regex,
}

/// Compiled stop-word set and phrase matchers.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    stop_words: HashSet<String>,
    groups: Vec<CompiledGroup>,
}

impl Vocabulary {
    /// The built-in vocabulary, compiled on first access.
    #[must_use]
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN
    }

    /// Compile a vocabulary from stop words and ordered phrase groups.
    ///
    /// Stop words are lowercased. Each group becomes a single case-insensitive
    /// alternation anchored on word boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`TrendingError::InvalidPattern`] if a group fails to compile.
    pub fn new<I, S>(stop_words: I, groups: &[PhraseGroup]) -> Result<Self, TrendingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = stop_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let groups = groups
            .iter()
            .map(|group| {
                let alternation = group.patterns.join("|");
                let regex = Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).map_err(|e| {
                    TrendingError::InvalidPattern {
                        label: group.label.clone(),
                        source: Box::new(e),
                    }
                })?;
                Ok(CompiledGroup {
                    label: group.label.clone(),
                    pattern_count: group.patterns.len(),
                    regex,
                })
            })
            .collect::<Result<Vec<_>, TrendingError>>()?;

        Ok(Self { stop_words, groups })
    }

    /// Parse and validate a YAML vocabulary override.
    ///
    /// # Errors
    ///
    /// Returns `TrendingError` if the YAML is malformed, fails validation, or
    /// contains a pattern that does not compile.
    pub fn from_yaml_str(content: &str) -> Result<Self, TrendingError> {
        let file: VocabularyFile = serde_yaml::from_str(content)?;
        validate_file(&file)?;

        match file.stop_words {
            Some(words) => Self::new(words, &file.phrase_groups),
            None => Self::new(STOP_WORDS.iter().copied(), &file.phrase_groups),
        }
    }

    /// Load a YAML vocabulary override from disk.
    ///
    /// # Errors
    ///
    /// Returns `TrendingError` if the file cannot be read or is invalid.
    pub fn from_yaml_file(path: &Path) -> Result<Self, TrendingError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TrendingError::VocabularyIo {
                path: path.display().to_string(),
                source: e,
            })?;
        let vocabulary = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            stop_words = vocabulary.stop_word_count(),
            phrase_groups = vocabulary.groups.len(),
            "loaded vocabulary override"
        );
        Ok(vocabulary)
    }

    /// Whether `lowercase` is a stop word. The caller lowercases.
    #[must_use]
    pub fn is_stop_word(&self, lowercase: &str) -> bool {
        self.stop_words.contains(lowercase)
    }

    #[must_use]
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// `(label, pattern_count)` for each phrase group, in evaluation order.
    pub fn group_summary(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.groups
            .iter()
            .map(|g| (g.label.as_str(), g.pattern_count))
    }

    pub(crate) fn phrase_matchers(&self) -> impl Iterator<Item = &Regex> + '_ {
        self.groups.iter().map(|g| &g.regex)
    }
}

fn validate_file(file: &VocabularyFile) -> Result<(), TrendingError> {
    if file.phrase_groups.is_empty() {
        return Err(TrendingError::Validation(
            "at least one phrase group is required".to_string(),
        ));
    }

    let mut seen_labels = HashSet::new();
    for group in &file.phrase_groups {
        let label = group.label.trim();
        if label.is_empty() {
            return Err(TrendingError::Validation(
                "phrase group label must be non-empty".to_string(),
            ));
        }
        if !seen_labels.insert(label.to_lowercase()) {
            return Err(TrendingError::Validation(format!(
                "duplicate phrase group label: '{label}'"
            )));
        }
        if group.patterns.is_empty() {
            return Err(TrendingError::Validation(format!(
                "phrase group '{label}' has no patterns"
            )));
        }
        if group.patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(TrendingError::Validation(format!(
                "phrase group '{label}' contains an empty pattern"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_compiles_both_groups_in_order() {
        let labels: Vec<&str> = Vocabulary::builtin()
            .group_summary()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["tech_phrase", "entity"]);
    }

    #[test]
    fn stop_words_are_lowercase() {
        for word in STOP_WORDS {
            assert_eq!(*word, word.to_lowercase(), "stop word '{word}' must be lowercase");
        }
    }

    #[test]
    fn builtin_stop_words_cover_news_filler() {
        let vocab = Vocabulary::builtin();
        for word in ["the", "released", "today", "announced", "this"] {
            assert!(vocab.is_stop_word(word), "'{word}' should be a stop word");
        }
        assert!(!vocab.is_stop_word("blockchain"));
    }

    #[test]
    fn yaml_override_without_stop_words_keeps_builtin_list() {
        let yaml = "phrase_groups:\n  - label: lang\n    patterns: ['rust', 'zig']\n";
        let vocab = Vocabulary::from_yaml_str(yaml).expect("valid override");
        assert_eq!(vocab.stop_word_count(), Vocabulary::builtin().stop_word_count());
        let summary: Vec<(&str, usize)> = vocab.group_summary().collect();
        assert_eq!(summary, vec![("lang", 2)]);
    }

    #[test]
    fn yaml_override_replaces_stop_words() {
        let yaml = "stop_words: ['Foo', 'bar']\nphrase_groups:\n  - label: x\n    patterns: ['y']\n";
        let vocab = Vocabulary::from_yaml_str(yaml).expect("valid override");
        assert_eq!(vocab.stop_word_count(), 2);
        assert!(vocab.is_stop_word("foo"));
        assert!(!vocab.is_stop_word("the"));
    }

    #[test]
    fn yaml_override_rejects_empty_groups() {
        let err = Vocabulary::from_yaml_str("phrase_groups: []\n").unwrap_err();
        assert!(matches!(err, TrendingError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn yaml_override_rejects_duplicate_labels() {
        let yaml = "phrase_groups:\n  - label: a\n    patterns: ['x']\n  - label: A\n    patterns: ['y']\n";
        let err = Vocabulary::from_yaml_str(yaml).unwrap_err();
        assert!(
            matches!(err, TrendingError::Validation(ref msg) if msg.contains("duplicate")),
            "got {err:?}"
        );
    }

    #[test]
    fn yaml_override_rejects_group_without_patterns() {
        let yaml = "phrase_groups:\n  - label: empty\n    patterns: []\n";
        let err = Vocabulary::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, TrendingError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn yaml_override_reports_bad_regex_with_label() {
        let yaml = "phrase_groups:\n  - label: broken\n    patterns: ['(unclosed']\n";
        let err = Vocabulary::from_yaml_str(yaml).unwrap_err();
        assert!(
            matches!(err, TrendingError::InvalidPattern { ref label, .. } if label == "broken"),
            "got {err:?}"
        );
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = Vocabulary::from_yaml_str("phrase_groups: {not: [a list").unwrap_err();
        assert!(matches!(err, TrendingError::VocabularyParse(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Vocabulary::from_yaml_file(Path::new("/nonexistent/vocabulary.yaml")).unwrap_err();
        assert!(matches!(err, TrendingError::VocabularyIo { .. }), "got {err:?}");
    }
}
