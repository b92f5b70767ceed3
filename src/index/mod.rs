//! Index module - passages, TF-IDF vector space, and ranking

mod corpus_index;
mod passages;
pub mod ranker;
mod stopwords;
mod tokenize;
mod vectorizer;

pub use corpus_index::{CorpusIndex, IndexStats};
pub use passages::{collect_passages, Passage};
pub use ranker::{best, rank, top_k};
pub use stopwords::is_stopword;
pub use tokenize::{tokenize, Analyzer};
pub use vectorizer::{SparseVector, VectorSpace};
