//! Cosine similarity ranking
//!
//! Vectors coming out of [`VectorSpace`](super::VectorSpace) are already
//! unit length, so cosine similarity is the dot product.

use super::vectorizer::SparseVector;

/// Cosine similarity of two L2-normalized vectors
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f32 {
    a.dot(b)
}

/// Score every candidate against `query`.
///
/// Sorted by score descending; equal scores keep ascending candidate order.
pub fn rank(query: &SparseVector, candidates: &[SparseVector]) -> Vec<(usize, f32)> {
    let mut scored: Vec<(usize, f32)> = candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| (idx, cosine(query, candidate)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored
}

/// First `k` entries of [`rank`]; all candidates when `k` exceeds their count
pub fn top_k(query: &SparseVector, candidates: &[SparseVector], k: usize) -> Vec<(usize, f32)> {
    let mut ranked = rank(query, candidates);
    ranked.truncate(k);
    ranked
}

/// Highest scoring candidate, lowest index on ties
pub fn best(query: &SparseVector, candidates: &[SparseVector]) -> Option<(usize, f32)> {
    let mut winner: Option<(usize, f32)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let score = cosine(query, candidate);
        if winner.map_or(true, |(_, best)| score > best) {
            winner = Some((idx, score));
        }
    }
    winner
}
