//! Per-field term frequency collection from a reference document.
//!
//! Terms come from stored term vectors when the index has them, and from
//! re-analyzing stored or projected field values otherwise. Both paths drop
//! noise words through [`MoreLikeThisConfig::is_noise_word`].

use ahash::AHashMap;

use crate::analysis::analyzer::{Analyzer, KeywordAnalyzer, PerFieldAnalyzer};
use crate::document::document::Document;
use crate::document::projector::DocumentProjector;
use crate::document::value_converter::ValueConverter;
use crate::error::{KindredError, Result};
use crate::index::reader::IndexReader;
use crate::index::term_vector::TermVector;
use crate::more_like_this::config::MoreLikeThisConfig;
use crate::more_like_this::field::{FieldCompatibility, FieldContext};

/// Occurrences of each term within one field of the reference document.
pub type TermFrequencyMap = AHashMap<String, u64>;

/// The document similar documents are searched for.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceDocument<E> {
    /// A document already in the index, by its position.
    ByIndexPosition(u64),
    /// An application entity, projected onto fields on demand.
    ByFieldValues(E),
}

/// Collects term frequencies of the reference document, one map per field.
pub struct TermFrequencyCollector<'a> {
    reader: &'a dyn IndexReader,
    analyzer: &'a PerFieldAnalyzer,
    default_converter: &'a dyn ValueConverter,
    config: &'a MoreLikeThisConfig,
    entity_type: &'a str,
    keyword_analyzer: KeywordAnalyzer,
}

impl<'a> TermFrequencyCollector<'a> {
    /// Create a collector reading from `reader`.
    pub fn new(
        reader: &'a dyn IndexReader,
        analyzer: &'a PerFieldAnalyzer,
        default_converter: &'a dyn ValueConverter,
        config: &'a MoreLikeThisConfig,
        entity_type: &'a str,
    ) -> Self {
        TermFrequencyCollector {
            reader,
            analyzer,
            default_converter,
            config,
            entity_type,
            keyword_analyzer: KeywordAnalyzer::new(),
        }
    }

    /// Collect the term frequencies of every field in `fields`.
    ///
    /// The result is aligned with `fields`; incompatible fields yield `None`.
    pub fn collect<E>(
        &self,
        reference: &ReferenceDocument<E>,
        projector: Option<&dyn DocumentProjector<E>>,
        fields: &[FieldContext],
        compatibility: &FieldCompatibility,
    ) -> Result<Vec<Option<TermFrequencyMap>>> {
        match reference {
            ReferenceDocument::ByIndexPosition(doc_id) => {
                self.collect_indexed(*doc_id, fields, compatibility)
            }
            ReferenceDocument::ByFieldValues(entity) => {
                let projector = projector.ok_or_else(|| {
                    KindredError::configuration(format!(
                        "a projector is required to compare an entity of type {}",
                        self.entity_type
                    ))
                })?;
                self.collect_projected(entity, projector, fields, compatibility)
            }
        }
    }

    fn collect_indexed(
        &self,
        doc_id: u64,
        fields: &[FieldContext],
        compatibility: &FieldCompatibility,
    ) -> Result<Vec<Option<TermFrequencyMap>>> {
        let term_vectors = self
            .reader
            .term_vectors(doc_id)
            .map_err(|e| KindredError::index_read(self.entity_type, "read term vectors", e))?;

        // Loaded at most once, and only if a field has no term vector
        let mut stored: Option<Document> = None;
        let mut result = Vec::with_capacity(fields.len());

        for context in fields {
            let field = context.field();
            if !compatibility.is_compatible(field) {
                log::debug!("skipping field {field} of {}: not compatible", self.entity_type);
                result.push(None);
                continue;
            }

            let mut frequencies = TermFrequencyMap::new();
            match term_vectors.as_ref().and_then(|vectors| vectors.terms(field)) {
                Some(vector) => {
                    log::trace!("collecting {field} of document {doc_id} from its term vector");
                    self.add_term_vector_frequencies(&mut frequencies, vector);
                }
                None => {
                    log::trace!("collecting {field} of document {doc_id} from stored values");
                    if stored.is_none() {
                        stored = Some(self.load_document(doc_id)?);
                    }
                    if let Some(document) = &stored {
                        self.add_document_frequencies(&mut frequencies, context, document)?;
                    }
                }
            }
            result.push(Some(frequencies));
        }

        Ok(result)
    }

    fn collect_projected<E>(
        &self,
        entity: &E,
        projector: &dyn DocumentProjector<E>,
        fields: &[FieldContext],
        compatibility: &FieldCompatibility,
    ) -> Result<Vec<Option<TermFrequencyMap>>> {
        let names: Vec<&str> = fields
            .iter()
            .map(FieldContext::field)
            .filter(|field| compatibility.is_compatible(field))
            .collect();
        let document = projector.project(entity, &names)?;

        fields
            .iter()
            .map(|context| {
                if !compatibility.is_compatible(context.field()) {
                    return Ok(None);
                }
                let mut frequencies = TermFrequencyMap::new();
                self.add_document_frequencies(&mut frequencies, context, &document)?;
                Ok(Some(frequencies))
            })
            .collect()
    }

    fn load_document(&self, doc_id: u64) -> Result<Document> {
        self.reader
            .document(doc_id)
            .and_then(|document| {
                document.ok_or_else(|| {
                    KindredError::index(format!("document {doc_id} has no stored fields"))
                })
            })
            .map_err(|e| KindredError::index_read(self.entity_type, "load stored document", e))
    }

    /// Add the stored frequencies of a term vector, skipping noise words.
    pub fn add_term_vector_frequencies(
        &self,
        frequencies: &mut TermFrequencyMap,
        vector: &TermVector,
    ) {
        for entry in vector.iter() {
            if self.config.is_noise_word(&entry.term) {
                continue;
            }
            *frequencies.entry(entry.term.clone()).or_insert(0) += entry.total_term_freq;
        }
    }

    /// Add the terms of every value of `context`'s field in `document`.
    ///
    /// The token cap applies to the field as a whole, across its values.
    pub fn add_document_frequencies(
        &self,
        frequencies: &mut TermFrequencyMap,
        context: &FieldContext,
        document: &Document,
    ) -> Result<()> {
        let field = context.field();
        let converter = context
            .converter()
            .map(|converter| converter.as_ref())
            .unwrap_or(self.default_converter);

        let mut budget = self.config.max_num_tokens_parsed;
        for value in document.get_fields(field) {
            let Some(text) = converter.to_text(field, value) else {
                continue;
            };
            self.add_text_frequencies(frequencies, context, &text, &mut budget)?;
        }
        Ok(())
    }

    /// Analyze `text` and count its terms, consuming at most `budget` tokens.
    pub fn add_text_frequencies(
        &self,
        frequencies: &mut TermFrequencyMap,
        context: &FieldContext,
        text: &str,
        budget: &mut usize,
    ) -> Result<()> {
        let field = context.field();
        let tokens = if context.ignores_analyzer() {
            self.keyword_analyzer.analyze(text)?
        } else {
            self.analyzer.analyze_field(field, text)?
        };

        for token in tokens {
            if *budget == 0 {
                log::debug!(
                    "stopped analyzing {field} after {} tokens",
                    self.config.max_num_tokens_parsed
                );
                break;
            }
            *budget -= 1;

            if token.is_stopped() || self.config.is_noise_word(&token.text) {
                continue;
            }
            *frequencies.entry(token.text).or_insert(0) += 1;
        }
        Ok(())
    }
}
