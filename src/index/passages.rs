//! Passages - the unit of coarse retrieval

use serde::Serialize;

use crate::chunker::Segmenter;
use crate::corpus::Document;

/// A window of one document's normalized text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passage {
    /// Identifier of the owning document
    pub doc_id: String,
    /// Position within that document's passage sequence
    pub index: usize,
    pub text: String,
}

/// Cut every document into passages, in document order.
///
/// Empty passages (from empty or whitespace-only documents) are skipped.
pub fn collect_passages(documents: &[Document], segmenter: &Segmenter) -> Vec<Passage> {
    let mut passages = Vec::new();

    for doc in documents {
        let before = passages.len();
        for (index, text) in segmenter.segment(&doc.text).into_iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            passages.push(Passage {
                doc_id: doc.id.clone(),
                index,
                text,
            });
        }

        if passages.len() == before {
            tracing::warn!("Document {} has no text, skipping", doc.id);
        } else {
            tracing::debug!("{}: {} passages", doc.id, passages.len() - before);
        }
    }

    passages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_passages() {
        let docs = vec![
            Document::new("a_full.txt", "x".repeat(25)),
            Document::new("b_full.txt", "   "),
            Document::new("c_full.txt", "short one"),
        ];
        let segmenter = Segmenter::new(10, 5).unwrap();
        let passages = collect_passages(&docs, &segmenter);

        let a: Vec<&Passage> = passages.iter().filter(|p| p.doc_id == "a_full.txt").collect();
        assert_eq!(a.len(), 4);
        assert_eq!(a.iter().map(|p| p.index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        assert!(passages.iter().all(|p| p.doc_id != "b_full.txt"));

        let last = passages.last().unwrap();
        assert_eq!(last.doc_id, "c_full.txt");
        assert_eq!(last.index, 0);
        assert_eq!(last.text, "short one");
    }

    #[test]
    fn test_passage_json_fields() {
        let passage = Passage {
            doc_id: "a_full.txt".into(),
            index: 3,
            text: "The sky is blue.".into(),
        };
        let value = serde_json::to_value(&passage).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"doc_id": "a_full.txt", "index": 3, "text": "The sky is blue."})
        );
    }
}
