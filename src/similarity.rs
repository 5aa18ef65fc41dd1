//! Inverse document frequency functions.
//!
//! Similarity queries weigh each candidate term by `tf * idf`, where the idf
//! comes from a [`Similarity`] implementation shared with the rest of the
//! search stack.

use std::fmt::Debug;

/// Trait for the inverse document frequency part of a scoring model.
pub trait Similarity: Send + Sync + Debug {
    /// Compute the idf of a term found in `doc_freq` of `doc_count` documents.
    ///
    /// The result is never negative and never increases with `doc_freq`.
    fn idf(&self, doc_freq: u64, doc_count: u64) -> f32;

    /// Get the name of this similarity.
    fn name(&self) -> &'static str;
}

/// Lucene's classic TF-IDF idf: `1 + ln((N + 1) / (df + 1))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicSimilarity;

impl Similarity for ClassicSimilarity {
    fn idf(&self, doc_freq: u64, doc_count: u64) -> f32 {
        let n = doc_count as f64;
        let df = doc_freq as f64;
        (1.0 + ((n + 1.0) / (df + 1.0)).ln()).max(0.0) as f32
    }

    fn name(&self) -> &'static str {
        "classic"
    }
}

/// BM25 idf: `ln(1 + (N - df + 0.5) / (df + 0.5))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bm25Similarity;

impl Similarity for Bm25Similarity {
    fn idf(&self, doc_freq: u64, doc_count: u64) -> f32 {
        let n = doc_count as f64;
        let df = (doc_freq as f64).min(n);
        (1.0 + (n - df + 0.5) / (df + 0.5)).ln() as f32
    }

    fn name(&self) -> &'static str {
        "bm25"
    }
}
