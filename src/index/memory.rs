//! In-memory index reader over a fixed set of documents.
//!
//! The snapshot is computed once from the documents handed to the builder:
//! every text value is analyzed with the field's analyzer, document
//! frequencies are counted per `(field, term)` and term vectors are recorded
//! for the fields that ask for them.
//!
//! # Examples
//!
//! ```
//! use kindred::document::Document;
//! use kindred::index::{IndexReader, MemoryIndexReader};
//!
//! let reader = MemoryIndexReader::builder()
//!     .store_term_vectors("body")
//!     .add_document(Document::builder().add_text("body", "cats and dogs").build())
//!     .add_document(Document::builder().add_text("body", "cats").build())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(reader.doc_count(), 2);
//! assert_eq!(reader.term_doc_freq("body", "cats").unwrap(), 2);
//! assert!(reader.term_vectors(0).unwrap().is_some());
//! ```

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::analysis::analyzer::PerFieldAnalyzer;
use crate::document::document::Document;
use crate::document::value_converter::{TextValueConverter, ValueConverter};
use crate::error::{KindredError, Result};
use crate::index::reader::IndexReader;
use crate::index::term_vector::{TermVector, TermVectors};

/// A read-only index snapshot held in memory.
#[derive(Debug)]
pub struct MemoryIndexReader {
    documents: Vec<Document>,
    term_vectors: Vec<Option<TermVectors>>,
    doc_freqs: AHashMap<String, AHashMap<String, u64>>,
}

impl MemoryIndexReader {
    /// Create a builder for an in-memory snapshot.
    pub fn builder() -> MemoryIndexReaderBuilder {
        MemoryIndexReaderBuilder::new()
    }

    fn check_doc_id(&self, doc_id: u64) -> Result<usize> {
        usize::try_from(doc_id)
            .ok()
            .filter(|id| *id < self.documents.len())
            .ok_or_else(|| {
                KindredError::index(format!(
                    "document {doc_id} is out of range (max doc {})",
                    self.documents.len()
                ))
            })
    }
}

impl IndexReader for MemoryIndexReader {
    fn doc_count(&self) -> u64 {
        self.documents.len() as u64
    }


    fn document(&self, doc_id: u64) -> Result<Option<Document>> {
        let id = self.check_doc_id(doc_id)?;
        Ok(Some(self.documents[id].clone()))
    }

    fn term_vectors(&self, doc_id: u64) -> Result<Option<TermVectors>> {
        let id = self.check_doc_id(doc_id)?;
        Ok(self.term_vectors[id].clone())
    }

    fn term_doc_freq(&self, field: &str, term: &str) -> Result<u64> {
        Ok(self
            .doc_freqs
            .get(field)
            .and_then(|terms| terms.get(term))
            .copied()
            .unwrap_or(0))
    }
}

/// Builder for [`MemoryIndexReader`].
#[derive(Debug)]
pub struct MemoryIndexReaderBuilder {
    analyzer: Arc<PerFieldAnalyzer>,
    converter: Arc<dyn ValueConverter>,
    term_vector_fields: AHashSet<String>,
    documents: Vec<Document>,
}

impl MemoryIndexReaderBuilder {
    /// Create a builder using the default per-field analyzer.
    pub fn new() -> Self {
        MemoryIndexReaderBuilder {
            analyzer: Arc::new(PerFieldAnalyzer::default()),
            converter: Arc::new(TextValueConverter),
            term_vector_fields: AHashSet::new(),
            documents: Vec::new(),
        }
    }

    /// Set the analyzer used to turn field text into indexed terms.
    pub fn analyzer(mut self, analyzer: Arc<PerFieldAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Set the converter used to turn field values into text.
    pub fn converter(mut self, converter: Arc<dyn ValueConverter>) -> Self {
        self.converter = converter;
        self
    }

    /// Record term vectors for a field.
    pub fn store_term_vectors(mut self, field: impl Into<String>) -> Self {
        self.term_vector_fields.insert(field.into());
        self
    }

    /// Add a document; it receives the next document ID, starting at 0.
    pub fn add_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Add several documents in order.
    pub fn add_documents<I: IntoIterator<Item = Document>>(mut self, documents: I) -> Self {
        self.documents.extend(documents);
        self
    }

    /// Analyze every document and freeze the snapshot.
    pub fn build(self) -> Result<MemoryIndexReader> {
        let mut doc_freqs: AHashMap<String, AHashMap<String, u64>> = AHashMap::new();
        let mut term_vectors = Vec::with_capacity(self.documents.len());

        for document in &self.documents {
            let mut vectors = TermVectors::new();

            for (field, values) in document.fields() {
                let mut frequencies: AHashMap<String, u64> = AHashMap::new();
                for value in values {
                    let Some(text) = self.converter.to_text(field, value) else {
                        continue;
                    };
                    for token in self.analyzer.analyze_field(field, &text)? {
                        if !token.is_stopped() {
                            *frequencies.entry(token.text).or_insert(0) += 1;
                        }
                    }
                }

                let field_freqs = doc_freqs.entry(field.clone()).or_default();
                for term in frequencies.keys() {
                    *field_freqs.entry(term.clone()).or_insert(0) += 1;
                }

                if self.term_vector_fields.contains(field) && !frequencies.is_empty() {
                    vectors.insert(field.clone(), TermVector::from_frequencies(frequencies));
                }
            }

            term_vectors.push((!vectors.is_empty()).then_some(vectors));
        }

        log::debug!(
            "built in-memory index snapshot with {} documents and {} fields",
            self.documents.len(),
            doc_freqs.len()
        );

        Ok(MemoryIndexReader {
            documents: self.documents,
            term_vectors,
            doc_freqs,
        })
    }
}

impl Default for MemoryIndexReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
