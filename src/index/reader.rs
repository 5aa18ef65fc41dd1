//! Index reader trait for retrieving documents and term statistics.

use crate::document::document::Document;
use crate::error::Result;
use crate::index::term_vector::TermVectors;

/// Trait for index readers.
///
/// A reader is a consistent snapshot: the answers it gives must not change
/// while a single query is being built from it.
pub trait IndexReader: Send + Sync + std::fmt::Debug {
    /// Get the number of live documents in the index.
    fn doc_count(&self) -> u64;

    /// Get the stored fields of a document by ID.
    fn document(&self, doc_id: u64) -> Result<Option<Document>>;

    /// Get the term vectors recorded for a document.
    ///
    /// Returns `None` when the document has no term vector for any field.
    fn term_vectors(&self, doc_id: u64) -> Result<Option<TermVectors>>;

    /// Get the number of documents containing `term` in `field`.
    fn term_doc_freq(&self, field: &str, term: &str) -> Result<u64>;
}
