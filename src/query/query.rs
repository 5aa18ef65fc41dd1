//! Base query trait.

use std::any::Any;
use std::fmt::Debug;

/// Trait for search queries.
pub trait Query: Send + Sync + Debug {
    /// Get the boost factor for this query.
    fn boost(&self) -> f32;

    /// Set the boost factor for this query.
    fn set_boost(&mut self, boost: f32);

    /// Get a human-readable description of this query.
    ///
    /// Two queries with the same description are structurally identical.
    fn description(&self) -> String;

    /// Clone this query.
    fn clone_box(&self) -> Box<dyn Query>;

    /// Get this query as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get the field name this query searches in, if applicable.
    /// Returns None for queries that don't target a specific field (e.g., BooleanQuery).
    fn field(&self) -> Option<&str> {
        None
    }
}

impl Clone for Box<dyn Query> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Append `^boost` to a description unless the boost is neutral.
pub(crate) fn with_boost_suffix(description: String, boost: f32) -> String {
    if boost == 1.0 {
        description
    } else {
        format!("{description}^{boost}")
    }
}
