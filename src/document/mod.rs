//! Document module.
//!
//! Documents are the field-name → values view of an entity: either the stored
//! fields of an indexed document or the projection of a not-yet-indexed
//! entity. [`ValueConverter`] turns a raw value into indexable text and
//! [`DocumentProjector`] projects an application entity onto a document.

#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;
pub mod projector;
pub mod value_converter;

// Re-export commonly used types
pub use document::{Document, DocumentBuilder};
pub use field_value::FieldValue;
pub use projector::{DocumentProjector, FieldSubsetProjector};
pub use value_converter::{DisplayValueConverter, TextValueConverter, ValueConverter};
