//! Projection of application entities onto documents.

use crate::document::document::Document;
use crate::error::Result;

/// Projects an entity onto the subset of fields needed for term extraction.
///
/// Implementations receive every field name of interest in one call and
/// should not derive fields outside that list.
pub trait DocumentProjector<E: ?Sized>: Send + Sync {
    /// Build the field-name → values view of `entity` for `fields`.
    fn project(&self, entity: &E, fields: &[&str]) -> Result<Document>;
}

impl<E, F> DocumentProjector<E> for F
where
    E: ?Sized,
    F: Fn(&E, &[&str]) -> Result<Document> + Send + Sync,
{
    fn project(&self, entity: &E, fields: &[&str]) -> Result<Document> {
        self(entity, fields)
    }
}

/// Projects a [`Document`] onto a copy holding only the requested fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldSubsetProjector;

impl DocumentProjector<Document> for FieldSubsetProjector {
    fn project(&self, entity: &Document, fields: &[&str]) -> Result<Document> {
        let mut projected = Document::new();
        for field in fields {
            for value in entity.get_fields(field) {
                projected.add_field(*field, value.clone());
            }
        }
        Ok(projected)
    }
}
