//! Configuration file support for passage-qa
//!
//! Config file location: ~/.config/passage-qa/config.toml
//!
//! Example config:
//! ```toml
//! [corpus]
//! dir = "wikipedia_full_output"
//! suffixes = ["_full.txt"]
//!
//! [passages]
//! size = 400
//! stride = 200
//!
//! [vectorizer]
//! stop_words = true
//! max_df = 0.9
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chunker::Segmenter;
use crate::error::{QaError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,

    #[serde(default)]
    pub passages: PassageConfig,

    #[serde(default)]
    pub vectorizer: VectorizerConfig,

    #[serde(default)]
    pub answer: AnswerConfig,
}

/// Where documents come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Corpus root directory
    #[serde(default = "default_corpus_dir")]
    pub dir: PathBuf,

    /// File name suffixes that mark a file as a corpus document
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dir: default_corpus_dir(),
            suffixes: default_suffixes(),
            recursive: false,
        }
    }
}

fn default_corpus_dir() -> PathBuf {
    PathBuf::from("wikipedia_full_output")
}

fn default_suffixes() -> Vec<String> {
    vec!["_full.txt".to_string()]
}

/// Sliding window over the normalized document text, in characters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassageConfig {
    #[serde(default = "default_passage_size")]
    pub size: usize,

    #[serde(default = "default_passage_stride")]
    pub stride: usize,
}

impl Default for PassageConfig {
    fn default() -> Self {
        Self {
            size: default_passage_size(),
            stride: default_passage_stride(),
        }
    }
}

fn default_passage_size() -> usize {
    400
}

fn default_passage_stride() -> usize {
    200
}

/// TF-IDF fitting options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VectorizerConfig {
    /// Drop English stopwords
    #[serde(default = "default_true")]
    pub stop_words: bool,

    /// Drop terms present in more than this fraction of passages
    #[serde(default = "default_max_df")]
    pub max_df: f64,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            stop_words: true,
            max_df: default_max_df(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_df() -> f64 {
    0.9
}

/// Answer extraction and rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerConfig {
    /// Characters of the passage returned when it has no sentences
    #[serde(default = "default_fallback_chars")]
    pub fallback_chars: usize,

    /// Passages listed by `search`
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Column width for the wrapped answer
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Maximum width of the passage preview
    #[serde(default = "default_snippet_width")]
    pub snippet_width: usize,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            fallback_chars: default_fallback_chars(),
            top_k: default_top_k(),
            wrap_width: default_wrap_width(),
            snippet_width: default_snippet_width(),
        }
    }
}

fn default_fallback_chars() -> usize {
    800
}

fn default_top_k() -> usize {
    3
}

fn default_wrap_width() -> usize {
    90
}

fn default_snippet_width() -> usize {
    400
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("passage-qa")
            .join("config.toml")
    }

    /// Load config from the default location, returning defaults if not found
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            match Self::load_from(&path) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {:?}", path);
                    return config;
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path; any failure is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| QaError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| QaError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check the invariants the index builder relies on
    pub fn validate(&self) -> Result<()> {
        Segmenter::new(self.passages.size, self.passages.stride)?;
        let max_df = self.vectorizer.max_df;
        if !(max_df > 0.0 && max_df <= 1.0) {
            return Err(QaError::InvalidConfig(format!(
                "max_df must be in (0, 1] (got {})",
                max_df
            )));
        }
        if self.corpus.suffixes.is_empty() {
            return Err(QaError::InvalidConfig(
                "at least one corpus file suffix is required".into(),
            ));
        }
        if self.answer.wrap_width == 0 || self.answer.snippet_width == 0 {
            return Err(QaError::InvalidConfig("display widths must be > 0".into()));
        }
        Ok(())
    }

    /// Write the commented example config, replacing any existing file
    pub fn write_example(path: &Path) -> anyhow::Result<()> {
        let example = r#"# passage-qa configuration
# Location: ~/.config/passage-qa/config.toml

[corpus]
# Directory holding the plain-text documents
dir = "wikipedia_full_output"

# A file is a document when its name ends with one of these suffixes
suffixes = ["_full.txt"]

# Descend into subdirectories
recursive = false

[passages]
# Passage window and step, in characters of whitespace-normalized text
size = 400
stride = 200

[vectorizer]
# Remove English stopwords before weighting
stop_words = true

# Ignore terms present in more than this fraction of passages
max_df = 0.9

[answer]
# Characters returned when the best passage has no sentence boundaries
fallback_chars = 800

# Passages listed by `passage-qa search`
top_k = 3

# Output layout
wrap_width = 90
snippet_width = 400
"#;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, example)?;
        Ok(())
    }
}
