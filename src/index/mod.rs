//! Index reading for similarity queries.
//!
//! The [`IndexReader`] trait is the read-only view of an index snapshot the
//! query builders consume. [`MemoryIndexReader`] implements it over a fixed
//! set of documents held in memory.

pub mod memory;
pub mod reader;
pub mod term_vector;

// Re-export commonly used types
pub use memory::{MemoryIndexReader, MemoryIndexReaderBuilder};
pub use reader::IndexReader;
pub use term_vector::{TermVector, TermVectorEntry, TermVectors};
