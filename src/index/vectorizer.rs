//! TF-IDF vector space over passages
//!
//! Weights follow the usual smoothed formulation:
//! `tf(t, d) * (ln((1 + n) / (1 + df(t))) + 1)`, with every vector then
//! L2-normalized so that cosine similarity is a plain dot product.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::config::VectorizerConfig;
use crate::error::{QaError, Result};

use super::tokenize::Analyzer;

/// Sparse vector as `(term id, weight)` pairs sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f32)>,
}

impl SparseVector {
    /// Build from unsorted entries; duplicate ids are not merged
    pub fn from_entries(mut entries: Vec<(u32, f32)>) -> Self {
        entries.sort_unstable_by_key(|(id, _)| *id);
        Self { entries }
    }

    pub fn entries(&self) -> &[(u32, f32)] {
        &self.entries
    }

    /// Number of non-zero terms
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    /// Scale to unit length; the zero vector stays zero
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }

    /// Dot product by merging the two sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vocabulary and idf weights learned from a passage collection
#[derive(Debug, Clone)]
pub struct VectorSpace {
    analyzer: Analyzer,
    vocabulary: FxHashMap<String, u32>,
    idf: Vec<f32>,
}

impl VectorSpace {
    /// Learn the vocabulary and idf weights from `texts`.
    ///
    /// Terms occurring in more than `max_df * texts.len()` texts are dropped.
    pub fn fit<S: AsRef<str>>(texts: &[S], options: &VectorizerConfig) -> Result<Self> {
        if texts.is_empty() {
            return Err(QaError::NoPassages);
        }

        let analyzer = Analyzer::new(options.stop_words);
        let mut doc_freq: FxHashMap<String, usize> = FxHashMap::default();
        for text in texts {
            let unique: FxHashSet<String> = analyzer.terms(text.as_ref()).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n = texts.len();
        let max_doc_count = options.max_df * n as f64;
        let seen = doc_freq.len();

        let mut kept: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df as f64 <= max_doc_count)
            .collect();

        if kept.is_empty() {
            return Err(QaError::EmptyVocabulary {
                passages: n,
                max_df: options.max_df,
            });
        }

        // Alphabetical term ids keep the space identical across runs
        kept.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = FxHashMap::default();
        let mut idf = Vec::with_capacity(kept.len());
        for (id, (term, df)) in kept.into_iter().enumerate() {
            idf.push((((1 + n) as f64 / (1 + df) as f64).ln() + 1.0) as f32);
            vocabulary.insert(term, id as u32);
        }

        debug!(
            "Fitted vector space: {} texts, {} terms kept of {}",
            n,
            vocabulary.len(),
            seen
        );

        Ok(Self {
            analyzer,
            vocabulary,
            idf,
        })
    }

    /// Fit on `texts` and return their vectors in the new space
    pub fn fit_transform<S: AsRef<str>>(
        texts: &[S],
        options: &VectorizerConfig,
    ) -> Result<(Self, Vec<SparseVector>)> {
        let space = Self::fit(texts, options)?;
        let vectors = space.transform(texts);
        Ok((space, vectors))
    }

    /// Map each text into the fitted space
    pub fn transform<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SparseVector> {
        texts.iter().map(|t| self.transform_one(t.as_ref())).collect()
    }

    /// Map one text into the fitted space; unknown terms contribute nothing
    pub fn transform_one(&self, text: &str) -> SparseVector {
        let mut counts: FxHashMap<u32, u32> = FxHashMap::default();
        for term in self.analyzer.terms(text) {
            if let Some(&id) = self.vocabulary.get(&term) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(id, tf)| (id, tf as f32 * self.idf[id as usize]))
            .collect();

        let mut vector = SparseVector::from_entries(entries);
        vector.normalize();
        vector
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&id| self.idf[id as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> VectorizerConfig {
        VectorizerConfig::default()
    }

    fn corpus() -> Vec<&'static str> {
        vec![
            "the quick brown fox jumps over the lazy dog",
            "a quick brown dog outpaces a swift fox",
            "the dog chases the cat around the yard",
            "rust programs compile to fast native code",
        ]
    }

    #[test]
    fn test_fit_empty_is_error() {
        let texts: Vec<String> = Vec::new();
        assert!(matches!(
            VectorSpace::fit(&texts, &options()),
            Err(QaError::NoPassages)
        ));
    }

    #[test]
    fn test_only_stopwords_is_error() {
        let err = VectorSpace::fit(&["the and of", "is it a"], &options()).unwrap_err();
        assert!(matches!(err, QaError::EmptyVocabulary { passages: 2, .. }));
    }

    #[test]
    fn test_single_text_filtered_by_max_df() {
        // Every term appears in 100% of one text
        assert!(VectorSpace::fit(&["lonely words here"], &options()).is_err());

        let lenient = VectorizerConfig {
            max_df: 1.0,
            ..options()
        };
        let space = VectorSpace::fit(&["lonely words here"], &lenient).unwrap();
        // "here" is a stopword
        assert_eq!(space.vocabulary_len(), 2);
        assert!(space.contains("lonely"));
        assert!(space.contains("words"));
        assert!(!space.contains("here"));
    }

    #[test]
    fn test_max_df_drops_ubiquitous_terms() {
        let texts = ["shared alpha", "shared beta", "shared gamma"];
        let space = VectorSpace::fit(&texts, &options()).unwrap();
        assert!(!space.contains("shared"));
        assert!(space.contains("alpha"));
    }

    #[test]
    fn test_smoothed_idf() {
        let space = VectorSpace::fit(&corpus(), &options()).unwrap();
        // "dog" appears in 3 of 4 texts
        let expected = (5.0f64 / 4.0).ln() + 1.0;
        assert!((space.idf("dog").unwrap() as f64 - expected).abs() < 1e-6);
        // "rust" appears in 1 of 4
        let expected = (5.0f64 / 2.0).ln() + 1.0;
        assert!((space.idf("rust").unwrap() as f64 - expected).abs() < 1e-6);
        assert!(space.idf("the").is_none());
    }

    #[test]
    fn test_self_similarity_is_one() {
        let (space, vectors) = VectorSpace::fit_transform(&corpus(), &options()).unwrap();
        let again = space.transform(&corpus());
        for (a, b) in vectors.iter().zip(&again) {
            assert!((a.dot(b) - 1.0).abs() < 1e-5);
            assert!((a.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_unseen_terms_are_ignored() {
        let space = VectorSpace::fit(&corpus(), &options()).unwrap();
        let v = space.transform_one("zebra quokka axolotl");
        assert!(v.is_zero());
        assert_eq!(v.nnz(), 0);

        let mixed = space.transform_one("zebra fox");
        assert_eq!(mixed.nnz(), 1);
        assert!((mixed.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_term_frequency_counts() {
        let space = VectorSpace::fit(&corpus(), &options()).unwrap();
        let once = space.transform_one("fox rust");
        let twice = space.transform_one("fox fox rust");
        // Doubling one term's count shifts the direction toward it
        let fox = space.transform_one("fox");
        assert!(twice.dot(&fox) > once.dot(&fox));
    }

    #[test]
    fn test_sparse_dot() {
        let a = SparseVector::from_entries(vec![(3, 1.0), (1, 2.0)]);
        let b = SparseVector::from_entries(vec![(1, 0.5), (2, 9.0), (3, 2.0)]);
        assert_eq!(a.entries(), &[(1, 2.0), (3, 1.0)]);
        assert_eq!(a.dot(&b), 3.0);
        assert_eq!(a.dot(&SparseVector::default()), 0.0);
    }
}
