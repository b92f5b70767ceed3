//! passage-qa - extractive question answering with TF-IDF passage retrieval
//!
//! Documents are cut into overlapping character windows, a TF-IDF vector
//! space is fitted over those passages, and each question is answered in
//! two passes: the closest passage first, then the closest sentence inside
//! it.

pub mod chunker;
pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod qa;

pub use config::Config;
pub use corpus::{load_documents, Document};
pub use error::{QaError, QueryError};
pub use index::CorpusIndex;
pub use qa::{answer_question, search_passages, Answer};
