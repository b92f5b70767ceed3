//! The immutable passage index queries run against

use serde::Serialize;
use tracing::info;

use crate::chunker::Segmenter;
use crate::config::{Config, PassageConfig, VectorizerConfig};
use crate::corpus::{load_documents, Document};
use crate::error::Result;

use super::passages::{collect_passages, Passage};
use super::vectorizer::{SparseVector, VectorSpace};

/// All passages of the corpus with one TF-IDF vector per passage.
///
/// `vectors()[i]` always belongs to `passages()[i]`. Never mutated after
/// [`CorpusIndex::build`].
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    passages: Vec<Passage>,
    vectors: Vec<SparseVector>,
    space: VectorSpace,
    document_count: usize,
}

/// Size summary of a built index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub passages: usize,
    pub vocabulary: usize,
    /// Stored (non-zero) weights across all passage vectors
    pub non_zero: usize,
}

impl CorpusIndex {
    /// Segment `documents` and fit the vector space over their passages
    pub fn build(
        documents: &[Document],
        passages: &PassageConfig,
        vectorizer: &VectorizerConfig,
    ) -> Result<Self> {
        let segmenter = Segmenter::new(passages.size, passages.stride)?;
        let passages = collect_passages(documents, &segmenter);
        info!("Segmented {} documents into {} passages", documents.len(), passages.len());

        let texts: Vec<&str> = passages.iter().map(|p| p.text.as_str()).collect();
        let (space, vectors) = VectorSpace::fit_transform(&texts, vectorizer)?;
        info!(
            "TF-IDF matrix shape: ({}, {})",
            vectors.len(),
            space.vocabulary_len()
        );

        Ok(Self {
            passages,
            vectors,
            space,
            document_count: documents.len(),
        })
    }

    /// Load the configured corpus and build its index
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let documents = load_documents(&config.corpus)?;
        Self::build(&documents, &config.passages, &config.vectorizer)
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn passage(&self, idx: usize) -> Option<&Passage> {
        self.passages.get(idx)
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.document_count,
            passages: self.passages.len(),
            vocabulary: self.space.vocabulary_len(),
            non_zero: self.vectors.iter().map(SparseVector::nnz).sum(),
        }
    }
}
