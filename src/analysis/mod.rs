//! Text analysis module for Kindred.
//!
//! Tokenizers split raw text into tokens, filters transform the stream, and
//! analyzers combine both. Similarity queries use a [`PerFieldAnalyzer`] to
//! turn stored or supplied field text into terms.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
