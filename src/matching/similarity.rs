//! TF-IDF vector space and cosine similarity.
//!
//! A small self-contained vectorizer: unigram and bigram terms over
//! whitespace-split tokens, a vocabulary capped at the most frequent terms,
//! smoothed IDF weighting and L2-normalized document vectors.
//!
//! The corpus is rebuilt on every call. Nothing is cached or indexed.

use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

/// Maximum number of terms kept in the vocabulary.
pub const DEFAULT_MAX_FEATURES: usize = 100;

/// Longest n-gram extracted from a document.
pub const DEFAULT_MAX_NGRAM: usize = 2;

/// Vectorization failure.
///
/// The matcher treats this as "no similarity information" and returns an
/// empty result instead of propagating it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VectorizeError {
    #[error("empty vocabulary: documents contain no terms")]
    EmptyVocabulary,
}

/// Sparse document vector, sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from unsorted entries.
    fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|(idx, _)| *idx);
        Self { entries }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    #[must_use]
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }

    /// Dot product via a merge over the sorted indices.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ia, wa) = self.entries[i];
            let (ib, wb) = other.entries[j];
            match ia.cmp(&ib) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity of two L2-normalized vectors, clamped to `[0, 1]`.
    ///
    /// Identical non-zero vectors score exactly 1.0 so that rounding never
    /// pushes a perfect match below a 100% threshold.
    #[must_use]
    pub fn cosine(&self, other: &Self) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        if self == other {
            return 1.0;
        }
        self.dot(other).clamp(0.0, 1.0)
    }
}

/// Result of fitting a vectorizer on a corpus.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// Term to column index, in lexicographic term order
    vocabulary: IndexMap<String, usize>,
    /// Smoothed IDF per column
    idf: Vec<f64>,
    /// One L2-normalized row per document
    rows: Vec<SparseVector>,
}

impl TfidfMatrix {
    #[must_use]
    pub fn vocabulary(&self) -> &IndexMap<String, usize> {
        &self.vocabulary
    }

    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }

    #[must_use]
    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, doc: usize) -> Option<&SparseVector> {
        self.rows.get(doc)
    }
}

/// TF-IDF vectorizer over unigrams and bigrams.
#[derive(Debug, Clone, Copy)]
pub struct TfidfVectorizer {
    max_features: usize,
    max_ngram: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            max_ngram: DEFAULT_MAX_NGRAM,
        }
    }

    #[must_use]
    pub const fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Extract n-gram terms (1..=`max_ngram`) with their counts.
    fn term_counts(&self, doc: &str) -> HashMap<String, usize> {
        let tokens: Vec<&str> = doc.split_whitespace().collect();
        let mut counts = HashMap::new();
        for n in 1..=self.max_ngram {
            for window in tokens.windows(n) {
                *counts.entry(window.join(" ")).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Learn the vocabulary and IDF from `docs` and vectorize them.
    pub fn fit_transform(&self, docs: &[&str]) -> Result<TfidfMatrix, VectorizeError> {
        let doc_counts: Vec<HashMap<String, usize>> =
            docs.iter().map(|doc| self.term_counts(doc)).collect();

        // term -> (corpus frequency, document frequency)
        let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
        for counts in &doc_counts {
            for (term, &count) in counts {
                let entry = stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += count;
                entry.1 += 1;
            }
        }

        if stats.is_empty() || self.max_features == 0 {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let mut ranked: Vec<(&str, usize, usize)> = stats
            .into_iter()
            .map(|(term, (freq, df))| (term, freq, df))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);
        ranked.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let n_docs = docs.len() as f64;
        let mut vocabulary = IndexMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        for (idx, (term, _, df)) in ranked.iter().enumerate() {
            vocabulary.insert((*term).to_string(), idx);
            idf.push(smoothed_idf(n_docs, *df as f64));
        }

        let rows = doc_counts
            .iter()
            .map(|counts| {
                let entries = counts
                    .iter()
                    .filter_map(|(term, &count)| {
                        vocabulary
                            .get(term.as_str())
                            .map(|&idx| (idx, count as f64 * idf[idx]))
                    })
                    .collect();
                let mut row = SparseVector::from_entries(entries);
                row.l2_normalize();
                row
            })
            .collect();

        tracing::debug!(
            documents = docs.len(),
            vocabulary = vocabulary.len(),
            "fitted tf-idf vocabulary"
        );

        Ok(TfidfMatrix {
            vocabulary,
            idf,
            rows,
        })
    }
}

/// `ln((1 + n) / (1 + df)) + 1`
#[must_use]
pub fn smoothed_idf(n_docs: f64, df: f64) -> f64 {
    ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
}

/// Cosine similarity between the query text and each candidate text.
///
/// The query and candidates together form the corpus. The returned vector
/// has one entry per candidate, in input order.
pub fn similarities(
    query_text: &str,
    candidate_texts: &[String],
) -> Result<Vec<f64>, VectorizeError> {
    let corpus: Vec<&str> = std::iter::once(query_text)
        .chain(candidate_texts.iter().map(String::as_str))
        .collect();

    let matrix = TfidfVectorizer::new().fit_transform(&corpus)?;
    let (query, candidates) = matrix
        .rows
        .split_first()
        .ok_or(VectorizeError::EmptyVocabulary)?;

    Ok(candidates.iter().map(|row| query.cosine(row)).collect())
}
