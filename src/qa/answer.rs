//! Two-stage answering: best passage, then best sentence inside it

use serde::Serialize;
use tracing::debug;

use crate::chunker::split_sentences;
use crate::error::QueryError;
use crate::index::{ranker, CorpusIndex};

/// Characters of the passage returned when it has no sentences
pub const DEFAULT_FALLBACK_CHARS: usize = 800;

#[derive(Debug, Clone, Copy)]
pub struct AnswerOptions {
    pub fallback_chars: usize,
}

impl Default for AnswerOptions {
    fn default() -> Self {
        Self {
            fallback_chars: DEFAULT_FALLBACK_CHARS,
        }
    }
}

/// Similarity of the winning passage and sentence to the question
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    pub passage: f32,
    pub sentence: f32,
}

/// Answer to one question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// Best sentence, or a prefix of the passage when it has no sentences
    pub answer: String,
    /// Identifier of the document the passage came from
    pub source: String,
    pub passage_index: usize,
    /// Full text of the winning passage
    pub passage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Scores>,
}

/// Answer `question` with the default options
pub fn answer_question(index: &CorpusIndex, question: &str) -> Result<Answer, QueryError> {
    answer_question_with(index, question, &AnswerOptions::default())
}

/// Rank all passages, then rank the sentences of the top passage only.
pub fn answer_question_with(
    index: &CorpusIndex,
    question: &str,
    options: &AnswerOptions,
) -> Result<Answer, QueryError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(QueryError::EmptyQuestion);
    }

    let query = index.space().transform_one(question);
    if query.is_zero() {
        debug!("No indexed terms in question {:?}", question);
    }

    // A built index always holds at least one passage
    let (passage_idx, passage_score) = ranker::best(&query, index.vectors()).unwrap_or((0, 0.0));
    let passage = &index.passages()[passage_idx];

    let sentences = split_sentences(&passage.text);
    if sentences.is_empty() {
        debug!(
            "Passage {}#{} has no sentences, returning its first {} chars",
            passage.doc_id, passage.index, options.fallback_chars
        );
        return Ok(Answer {
            answer: passage.text.chars().take(options.fallback_chars).collect(),
            source: passage.doc_id.clone(),
            passage_index: passage.index,
            passage: passage.text.clone(),
            scores: None,
        });
    }

    let sentence_vectors = index.space().transform(&sentences);
    let (sentence_idx, sentence_score) =
        ranker::best(&query, &sentence_vectors).unwrap_or((0, 0.0));

    debug!(
        "Answered from {}#{} (passage {:.4}, sentence {:.4})",
        passage.doc_id, passage.index, passage_score, sentence_score
    );

    Ok(Answer {
        answer: sentences[sentence_idx].to_string(),
        source: passage.doc_id.clone(),
        passage_index: passage.index,
        passage: passage.text.clone(),
        scores: Some(Scores {
            passage: passage_score,
            sentence: sentence_score,
        }),
    })
}
