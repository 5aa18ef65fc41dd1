//! Core analyzer trait definition.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Examples
///
/// ```
/// use kindred::analysis::analyzer::{Analyzer, StandardAnalyzer};
///
/// let analyzer = StandardAnalyzer::new();
/// let tokens: Vec<_> = analyzer.analyze("The quick brown fox").unwrap().collect();
///
/// // "The" is removed as a stop word, others are lowercased
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].text, "quick");
/// ```
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
