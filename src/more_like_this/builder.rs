//! Fluent entry point for building similarity queries.

use std::sync::Arc;

use crate::analysis::analyzer::PerFieldAnalyzer;
use crate::document::document::Document;
use crate::document::projector::DocumentProjector;
use crate::document::value_converter::{TextValueConverter, ValueConverter};
use crate::error::{KindredError, Result};
use crate::index::reader::IndexReader;
use crate::more_like_this::assembler::QueryAssembler;
use crate::more_like_this::collector::{ReferenceDocument, TermFrequencyCollector};
use crate::more_like_this::config::MoreLikeThisConfig;
use crate::more_like_this::field::{FieldCompatibility, FieldContext};
use crate::more_like_this::scorer::{ScoredTermQueue, TermScorer};
use crate::query::query::Query;
use crate::similarity::Similarity;

/// Builds a query matching documents similar to a reference document.
///
/// The builder is consumed by [`build`](Self::build), so every request
/// starts from fresh state. Building twice from equal inputs against the
/// same index snapshot gives structurally equal queries.
///
/// # Examples
///
/// ```
/// use kindred::document::Document;
/// use kindred::index::MemoryIndexReader;
/// use kindred::more_like_this::MoreLikeThisBuilder;
/// use kindred::similarity::ClassicSimilarity;
///
/// let reader = MemoryIndexReader::builder()
///     .store_term_vectors("body")
///     .add_document(Document::builder().add_text("body", "cats purr").build())
///     .add_document(Document::builder().add_text("body", "cats and dogs").build())
///     .add_document(Document::builder().add_text("body", "dogs bark").build())
///     .build()
///     .unwrap();
///
/// let query = MoreLikeThisBuilder::<Document>::new("Pet", &reader, &ClassicSimilarity)
///     .compatible_fields(["body"])
///     .field("body")
///     .like_document(0)
///     .build()
///     .unwrap();
///
/// assert_eq!(query.description(), "(body:purr body:cats)");
/// ```
pub struct MoreLikeThisBuilder<'a, E = Document> {
    entity_type: String,
    reader: &'a dyn IndexReader,
    similarity: &'a dyn Similarity,
    analyzer: Arc<PerFieldAnalyzer>,
    default_converter: Arc<dyn ValueConverter>,
    projector: Option<&'a dyn DocumentProjector<E>>,
    compatibility: FieldCompatibility,
    fields: Vec<FieldContext>,
    reference: Option<ReferenceDocument<E>>,
    config: MoreLikeThisConfig,
}

impl<'a, E> MoreLikeThisBuilder<'a, E> {
    /// Start a query for entities of `entity_type` stored in `reader`.
    pub fn new(
        entity_type: impl Into<String>,
        reader: &'a dyn IndexReader,
        similarity: &'a dyn Similarity,
    ) -> Self {
        MoreLikeThisBuilder {
            entity_type: entity_type.into(),
            reader,
            similarity,
            analyzer: Arc::new(PerFieldAnalyzer::default()),
            default_converter: Arc::new(TextValueConverter),
            projector: None,
            compatibility: FieldCompatibility::default(),
            fields: Vec::new(),
            reference: None,
            config: MoreLikeThisConfig::default(),
        }
    }

    /// Set the per-field analyzers used when re-analyzing field values.
    pub fn analyzer(mut self, analyzer: Arc<PerFieldAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Set the converter for fields without their own.
    pub fn default_converter(mut self, converter: Arc<dyn ValueConverter>) -> Self {
        self.default_converter = converter;
        self
    }

    /// Set the projector turning an entity into field values.
    pub fn projector(mut self, projector: &'a dyn DocumentProjector<E>) -> Self {
        self.projector = Some(projector);
        self
    }

    /// Set the fields indexed with enough information to be compared.
    pub fn compatible_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compatibility = FieldCompatibility::new(names);
        self
    }

    /// Set the field compatibility filter.
    pub fn compatibility(mut self, compatibility: FieldCompatibility) -> Self {
        self.compatibility = compatibility;
        self
    }

    /// Compare one more field.
    pub fn field(mut self, field: impl Into<FieldContext>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Compare the given fields, in order.
    pub fn fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldContext>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Set the reference document.
    pub fn reference(mut self, reference: ReferenceDocument<E>) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Use the indexed document at `doc_id` as reference.
    pub fn like_document(self, doc_id: u64) -> Self {
        self.reference(ReferenceDocument::ByIndexPosition(doc_id))
    }

    /// Use `entity` as reference; requires a projector.
    pub fn like_entity(self, entity: E) -> Self {
        self.reference(ReferenceDocument::ByFieldValues(entity))
    }

    /// Replace the thresholds.
    pub fn config(mut self, config: MoreLikeThisConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the query.
    pub fn build(self) -> Result<Box<dyn Query>> {
        let entity_type = self.entity_type.as_str();
        if self.fields.is_empty() {
            return Err(KindredError::configuration(format!(
                "a more like this query on entity {entity_type} requires at least one field"
            )));
        }
        self.config.validate()?;
        let reference = self.reference.as_ref().ok_or_else(|| {
            KindredError::configuration(format!(
                "no reference document given for entity {entity_type}"
            ))
        })?;

        log::debug!(
            "building more like this query for {entity_type} on {} fields",
            self.fields.len()
        );

        // One collection size for every field of the request
        let doc_count = self.reader.doc_count();

        let collector = TermFrequencyCollector::new(
            self.reader,
            &self.analyzer,
            self.default_converter.as_ref(),
            &self.config,
            entity_type,
        );
        let frequencies =
            collector.collect(reference, self.projector, &self.fields, &self.compatibility)?;

        let scorer = TermScorer::new(
            self.reader,
            self.similarity,
            &self.config,
            entity_type,
            doc_count,
        );
        let queues = self
            .fields
            .iter()
            .zip(&frequencies)
            .map(|(context, terms)| scorer.score_field(context.field(), terms.as_ref()))
            .collect::<Result<Vec<Option<ScoredTermQueue>>>>()?;

        QueryAssembler::new(&self.config, entity_type).assemble(&self.fields, queues)
    }
}
