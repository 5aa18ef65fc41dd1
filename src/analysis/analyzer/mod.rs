//! Analyzer implementations combining tokenizers and filters.
//!
//! - [`StandardAnalyzer`] - Unicode words, lowercased, English stop words removed
//! - [`PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`KeywordAnalyzer`] - Treats entire input as one token
//! - [`PerFieldAnalyzer`] - Different analyzers per field

#[allow(clippy::module_inception)]
mod analyzer;
mod keyword;
mod per_field;
mod pipeline;
mod standard;

pub use analyzer::Analyzer;
pub use keyword::KeywordAnalyzer;
pub use per_field::PerFieldAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
