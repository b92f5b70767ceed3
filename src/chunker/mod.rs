//! Chunking module - passage windows and sentence boundaries
//!
//! Documents are cut into overlapping fixed-size passages for coarse
//! retrieval; the winning passage is then split into sentences for the
//! fine pass.

mod sentences;
mod sliding;

pub use sentences::split_sentences;
pub use sliding::{segment, Segmenter, Span};

/// Collapse every whitespace run to a single space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
