//! Query representation produced by the similarity query builders.
//!
//! Queries form a tree of [`TermQuery`] leaves combined by [`BooleanQuery`]
//! nodes. Executing them is the job of the search engine they are handed to.

pub mod boolean;
pub mod customizer;
#[allow(clippy::module_inception)]
pub mod query;
pub mod term;

pub use boolean::{BooleanClause, BooleanQuery, DEFAULT_MAX_CLAUSE_COUNT, Occur};
pub use customizer::{BoostCustomizer, FilterCustomizer, IdentityCustomizer, QueryCustomizer};
pub use query::Query;
pub use term::TermQuery;
