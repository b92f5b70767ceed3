//! Error types for corpus loading, indexing and querying

use std::path::PathBuf;

use thiserror::Error;

/// Startup failures: anything that prevents a usable index from being built
#[derive(Debug, Error)]
pub enum QaError {
    #[error("Corpus directory not found: {}", .0.display())]
    CorpusNotFound(PathBuf),

    #[error("No documents matching {suffixes:?} in {}", .root.display())]
    EmptyCorpus { root: PathBuf, suffixes: Vec<String> },

    #[error("Failed to read document {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk corpus directory: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Cannot fit a vector space on zero passages")]
    NoPassages,

    #[error(
        "Vocabulary is empty after stopword and max_df={max_df} filtering \
         ({passages} passages); try a larger max_df"
    )]
    EmptyVocabulary { passages: usize, max_df: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load config file {}: {message}", .path.display())]
    ConfigFile { path: PathBuf, message: String },
}

/// Per-query failures; these never invalidate the index
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Question is empty")]
    EmptyQuestion,
}

pub type Result<T> = std::result::Result<T, QaError>;
