//! More like this queries.
//!
//! Given a reference document, either one already in the index or an
//! application entity projected onto fields, the builder extracts the most
//! characteristic terms of each requested field and assembles them into a
//! disjunctive query:
//!
//! 1. [`TermFrequencyCollector`] counts the terms of every compatible field,
//!    reading term vectors when the index has them and re-analyzing field
//!    values otherwise.
//! 2. [`TermScorer`] looks up document frequencies, drops terms outside the
//!    configured thresholds and ranks the rest by `tf * idf`.
//! 3. [`QueryAssembler`] turns the best terms into term queries, optionally
//!    boosted relative to the best term of their field.
//!
//! [`MoreLikeThisBuilder`] runs the three steps for one request.

pub mod assembler;
pub mod builder;
pub mod collector;
pub mod config;
pub mod field;
pub mod scorer;

pub use assembler::QueryAssembler;
pub use builder::MoreLikeThisBuilder;
pub use collector::{ReferenceDocument, TermFrequencyCollector, TermFrequencyMap};
pub use config::MoreLikeThisConfig;
pub use field::{FieldCompatibility, FieldContext};
pub use scorer::{ScoredTerm, ScoredTermQueue, TermScorer};
