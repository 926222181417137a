//! Keyword and phrase extraction from free text.

use std::sync::LazyLock;

use regex::Regex;

use crate::vocabulary::Vocabulary;

/// A letter followed by three or more letters, digits or hyphens.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z][A-Za-z0-9-]{3,}\b").expect("valid token regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Extract candidate keywords using the built-in vocabulary.
///
/// See [`Vocabulary::extract_keywords`].
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    Vocabulary::builtin().extract_keywords(text)
}

/// Extract known tech phrases and entity names using the built-in vocabulary.
///
/// See [`Vocabulary::extract_phrases`].
#[must_use]
pub fn extract_phrases(text: &str) -> Vec<String> {
    Vocabulary::builtin().extract_phrases(text)
}

impl Vocabulary {
    /// Tokenize `text` into display-cased keywords, in order of appearance.
    ///
    /// Stop words and numeric tokens are dropped. A token capitalised in the
    /// source is kept verbatim. Lowercase tokens containing a digit or hyphen
    /// are uppercased when at most six characters long and title-cased
    /// otherwise. Remaining lowercase tokens survive only at six characters
    /// or more, title-cased. Duplicates are kept.
    #[must_use]
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        TOKEN_RE
            .find_iter(text)
            .filter_map(|m| self.case_keyword(m.as_str()))
            .collect()
    }

    /// Every match of every phrase group, title-cased with whitespace collapsed.
    ///
    /// Groups run in vocabulary order; matches within a group keep their
    /// order of appearance. Duplicates are kept.
    #[must_use]
    pub fn extract_phrases(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.phrase_matchers()
            .flat_map(|re| re.find_iter(text))
            .map(|m| title_case(&WHITESPACE_RE.replace_all(m.as_str(), " ")))
            .collect()
    }

    fn case_keyword(&self, token: &str) -> Option<String> {
        if self.is_stop_word(&token.to_lowercase()) {
            return None;
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let starts_upper = token.chars().next().is_some_and(char::is_uppercase);
        if starts_upper {
            return Some(token.to_string());
        }

        let len = token.chars().count();
        if token.chars().any(|c| c.is_ascii_digit() || c == '-') {
            if len <= 6 {
                Some(token.to_uppercase())
            } else {
                Some(title_case(token))
            }
        } else if len >= 6 {
            Some(title_case(token))
        } else {
            None
        }
    }
}

/// Uppercase the first letter of every letter run and lowercase the rest.
///
/// A letter starts a new run when the preceding character is not a letter,
/// so `gpt-4o` becomes `Gpt-4O` and `state-of-the-art` becomes
/// `State-Of-The-Art`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
