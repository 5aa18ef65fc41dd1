//! Error types for the Kindred library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`KindredError`] enum.
//!
//! # Examples
//!
//! ```
//! use kindred::error::{KindredError, Result};
//!
//! fn check_fields(fields: &[&str]) -> Result<()> {
//!     if fields.is_empty() {
//!         return Err(KindredError::configuration("no field to compare"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_fields(&[]).is_err());
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Kindred operations.
#[derive(Error, Debug)]
pub enum KindredError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index-related errors raised by an index reader
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid or incomplete configuration of a query builder
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A boolean query refused another clause
    #[error("Too many clauses: maximum clause count is {0}")]
    TooManyClauses(usize),

    /// A read against the index reader failed while building a query for an entity type
    #[error("Unable to {operation} on the index of entity {entity_type}: {source}")]
    IndexRead {
        /// Name of the entity type the query was built for.
        entity_type: String,
        /// The reader operation that failed.
        operation: String,
        /// The underlying error.
        #[source]
        source: Box<KindredError>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KindredError.
pub type Result<T> = std::result::Result<T, KindredError>;

impl KindredError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        KindredError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KindredError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        KindredError::Query(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        KindredError::Configuration(msg.into())
    }

    /// Wrap a failed index read with the entity type and operation it belonged to.
    pub fn index_read<E, O>(entity_type: E, operation: O, source: KindredError) -> Self
    where
        E: Into<String>,
        O: Into<String>,
    {
        KindredError::IndexRead {
            entity_type: entity_type.into(),
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KindredError::Other(msg.into())
    }

    /// Check whether this error reports an invalid configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, KindredError::Configuration(_))
    }
}
