//! Fields taking part in a similarity query.

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;

use crate::document::value_converter::ValueConverter;
use crate::query::customizer::{BoostCustomizer, IdentityCustomizer, QueryCustomizer};

/// Decides whether a field carries enough index information to be compared.
///
/// A field is compatible when it is indexed with term information (term
/// vectors, or stored values that can be re-analyzed). Incompatible fields
/// never contribute terms.
#[derive(Debug, Clone, Default)]
pub struct FieldCompatibility {
    compatible: AHashSet<String>,
}

impl FieldCompatibility {
    /// Create a filter accepting the given field names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldCompatibility {
            compatible: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark another field as compatible.
    pub fn add_field(&mut self, name: impl Into<String>) {
        self.compatible.insert(name.into());
    }

    /// Check whether a field may be used.
    pub fn is_compatible(&self, field: &str) -> bool {
        self.compatible.contains(field)
    }
}

impl<S: Into<String>> FromIterator<S> for FieldCompatibility {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FieldCompatibility::new(iter)
    }
}

/// Per-field settings of a similarity query.
///
/// # Examples
///
/// ```
/// use kindred::more_like_this::FieldContext;
///
/// let title = FieldContext::new("title").boosted(2.0);
/// let isbn = FieldContext::new("isbn").ignore_analyzer();
///
/// assert_eq!(title.field(), "title");
/// assert!(isbn.ignores_analyzer());
/// ```
#[derive(Clone)]
pub struct FieldContext {
    field: String,
    converter: Option<Arc<dyn ValueConverter>>,
    ignore_analyzer: bool,
    customizer: Arc<dyn QueryCustomizer>,
}

impl FieldContext {
    /// Create a context for `field` using the field's analyzer and no customization.
    pub fn new(field: impl Into<String>) -> Self {
        FieldContext {
            field: field.into(),
            converter: None,
            ignore_analyzer: false,
            customizer: Arc::new(IdentityCustomizer),
        }
    }

    /// Treat every stored value of the field as a single token.
    pub fn ignore_analyzer(mut self) -> Self {
        self.ignore_analyzer = true;
        self
    }

    /// Convert stored values of this field with `converter`.
    pub fn with_converter(mut self, converter: Arc<dyn ValueConverter>) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Post-process the query generated for this field.
    pub fn with_customizer(mut self, customizer: Arc<dyn QueryCustomizer>) -> Self {
        self.customizer = customizer;
        self
    }

    /// Multiply the boost of the query generated for this field.
    pub fn boosted(self, boost: f32) -> Self {
        self.with_customizer(Arc::new(BoostCustomizer::new(boost)))
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the field-specific value converter, if any.
    pub fn converter(&self) -> Option<&Arc<dyn ValueConverter>> {
        self.converter.as_ref()
    }

    /// Check whether analysis is bypassed for this field.
    pub fn ignores_analyzer(&self) -> bool {
        self.ignore_analyzer
    }

    /// Get the customizer applied to this field's query.
    pub fn customizer(&self) -> &dyn QueryCustomizer {
        self.customizer.as_ref()
    }
}

impl From<&str> for FieldContext {
    fn from(field: &str) -> Self {
        FieldContext::new(field)
    }
}

impl From<String> for FieldContext {
    fn from(field: String) -> Self {
        FieldContext::new(field)
    }
}

impl fmt::Debug for FieldContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldContext")
            .field("field", &self.field)
            .field("converter", &self.converter.as_ref().map(|c| c.name()))
            .field("ignore_analyzer", &self.ignore_analyzer)
            .field("customizer", &self.customizer)
            .finish()
    }
}
