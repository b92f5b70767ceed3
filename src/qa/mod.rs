//! Question answering over a built [`CorpusIndex`](crate::index::CorpusIndex)

mod answer;
mod search;

pub use answer::{
    answer_question, answer_question_with, Answer, AnswerOptions, Scores, DEFAULT_FALLBACK_CHARS,
};
pub use search::{search_passages, PassageHit};
