//! Term extraction for the vector space

use std::sync::LazyLock;

use regex::Regex;

use super::stopwords::is_stopword;

/// Runs of two or more word characters
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Lowercase `text` and split it into raw tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_REGEX
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Turns text into the terms the vector space counts
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    stop_words: bool,
}

impl Analyzer {
    pub fn new(stop_words: bool) -> Self {
        Self { stop_words }
    }

    pub fn terms(&self, text: &str) -> Vec<String> {
        let mut tokens = tokenize(text);
        if self.stop_words {
            tokens.retain(|t| !is_stopword(t));
        }
        tokens
    }
}
