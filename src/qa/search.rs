//! Passage-level search without sentence extraction

use serde::Serialize;

use crate::error::QueryError;
use crate::index::{ranker, CorpusIndex};

/// One ranked passage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassageHit {
    /// 1-based position in the result list
    pub rank: usize,
    pub doc_id: String,
    pub passage_index: usize,
    pub score: f32,
    pub text: String,
}

/// Top `k` passages for `query`, best first
pub fn search_passages(
    index: &CorpusIndex,
    query: &str,
    k: usize,
) -> Result<Vec<PassageHit>, QueryError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(QueryError::EmptyQuestion);
    }

    let vector = index.space().transform_one(query);
    let hits = ranker::top_k(&vector, index.vectors(), k)
        .into_iter()
        .enumerate()
        .map(|(i, (idx, score))| {
            let passage = &index.passages()[idx];
            PassageHit {
                rank: i + 1,
                doc_id: passage.doc_id.clone(),
                passage_index: passage.index,
                score,
                text: passage.text.clone(),
            }
        })
        .collect();

    Ok(hits)
}
