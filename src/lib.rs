//! # Kindred
//!
//! Find-similar-documents query construction for full-text search indexes.
//!
//! ## Features
//!
//! - More like this queries from indexed documents or application entities
//! - Term vectors when available, re-analysis of stored values otherwise
//! - Pluggable text analysis, per field
//! - Classic TF-IDF and BM25 inverse document frequencies
//! - Serde-backed configuration

pub mod analysis;
pub mod document;
pub mod error;
pub mod index;
pub mod more_like_this;
pub mod query;
pub mod similarity;

pub mod prelude {
    pub use crate::analysis::{Analyzer, PerFieldAnalyzer, StandardAnalyzer};
    pub use crate::document::{Document, FieldValue};
    pub use crate::error::{KindredError, Result};
    pub use crate::index::{IndexReader, MemoryIndexReader};
    pub use crate::more_like_this::{
        FieldContext, MoreLikeThisBuilder, MoreLikeThisConfig, ReferenceDocument,
    };
    pub use crate::query::{BooleanQuery, Query, TermQuery};
    pub use crate::similarity::{Bm25Similarity, ClassicSimilarity, Similarity};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
