//! Thresholds controlling term selection for similarity queries.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KindredError, Result};
use crate::query::boolean::DEFAULT_MAX_CLAUSE_COUNT;

/// Ignore words shorter than this (0 disables the bound).
pub const DEFAULT_MIN_WORD_LEN: usize = 0;

/// Ignore words longer than this (0 disables the bound).
pub const DEFAULT_MAX_WORD_LEN: usize = 0;

/// Ignore terms occurring fewer times than this in the reference field.
///
/// Frequencies are counted per field rather than merged across fields, so
/// a single occurrence is already significant.
pub const DEFAULT_MIN_TERM_FREQ: u64 = 1;

/// Ignore terms found in fewer documents than this.
pub const DEFAULT_MIN_DOC_FREQ: u64 = 1;

/// Ignore terms found in more documents than this.
pub const DEFAULT_MAX_DOC_FREQ: u64 = u64::MAX;

/// Maximum number of terms contributed by one field (0 means unlimited).
pub const DEFAULT_MAX_QUERY_TERMS: usize = 25;

/// Maximum number of tokens examined per field when analyzing text.
pub const DEFAULT_MAX_NUM_TOKENS_PARSED: usize = 5000;

/// Configuration of a more like this query.
///
/// # Examples
///
/// ```
/// use kindred::more_like_this::MoreLikeThisConfig;
///
/// let config = MoreLikeThisConfig::default()
///     .with_min_word_len(3)
///     .with_max_word_len(12)
///     .with_stop_words(["the", "and"])
///     .with_boost_factor(2.0);
///
/// assert!(config.validate().is_ok());
/// assert!(config.is_noise_word("a"));
/// assert!(config.is_noise_word("the"));
/// assert!(!config.is_noise_word("cat"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoreLikeThisConfig {
    /// Minimum term length in characters (0 disables).
    pub min_word_len: usize,

    /// Maximum term length in characters (0 disables).
    pub max_word_len: usize,

    /// Terms that never take part in a similarity query.
    pub stop_words: BTreeSet<String>,

    /// Minimum occurrences of a term in the reference field.
    pub min_term_freq: u64,

    /// Minimum number of documents containing a term.
    pub min_doc_freq: u64,

    /// Maximum number of documents containing a term.
    pub max_doc_freq: u64,

    /// Maximum terms contributed per field (0 means unlimited).
    pub max_query_terms: usize,

    /// Maximum tokens examined per field when analyzing text.
    pub max_num_tokens_parsed: usize,

    /// Whether term queries are boosted relative to the best term of their field.
    pub boost: bool,

    /// Boost given to the best term of a field when boosting is enabled.
    pub boost_factor: f32,

    /// Clause ceiling of every generated boolean query.
    pub max_clause_count: usize,
}

impl Default for MoreLikeThisConfig {
    fn default() -> Self {
        Self {
            min_word_len: DEFAULT_MIN_WORD_LEN,
            max_word_len: DEFAULT_MAX_WORD_LEN,
            stop_words: BTreeSet::new(),
            min_term_freq: DEFAULT_MIN_TERM_FREQ,
            min_doc_freq: DEFAULT_MIN_DOC_FREQ,
            max_doc_freq: DEFAULT_MAX_DOC_FREQ,
            max_query_terms: DEFAULT_MAX_QUERY_TERMS,
            max_num_tokens_parsed: DEFAULT_MAX_NUM_TOKENS_PARSED,
            boost: false,
            boost_factor: 1.0,
            max_clause_count: DEFAULT_MAX_CLAUSE_COUNT,
        }
    }
}

impl MoreLikeThisConfig {
    /// Parse a configuration from JSON; missing keys take their default.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Set the minimum term length.
    pub fn with_min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    /// Set the maximum term length.
    pub fn with_max_word_len(mut self, len: usize) -> Self {
        self.max_word_len = len;
        self
    }

    /// Set the stop words.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the minimum term frequency in the reference field.
    pub fn with_min_term_freq(mut self, freq: u64) -> Self {
        self.min_term_freq = freq;
        self
    }

    /// Set the minimum document frequency.
    pub fn with_min_doc_freq(mut self, freq: u64) -> Self {
        self.min_doc_freq = freq;
        self
    }

    /// Set the maximum document frequency.
    pub fn with_max_doc_freq(mut self, freq: u64) -> Self {
        self.max_doc_freq = freq;
        self
    }

    /// Set the maximum number of terms per field.
    pub fn with_max_query_terms(mut self, max: usize) -> Self {
        self.max_query_terms = max;
        self
    }

    /// Set the per-field token cap.
    pub fn with_max_num_tokens_parsed(mut self, max: usize) -> Self {
        self.max_num_tokens_parsed = max;
        self
    }

    /// Enable or disable term boosting.
    pub fn with_boost(mut self, boost: bool) -> Self {
        self.boost = boost;
        self
    }

    /// Enable term boosting with the given factor.
    pub fn with_boost_factor(mut self, factor: f32) -> Self {
        self.boost = true;
        self.boost_factor = factor;
        self
    }

    /// Set the clause ceiling of generated boolean queries.
    pub fn with_max_clause_count(mut self, max: usize) -> Self {
        self.max_clause_count = max;
        self
    }

    /// Check that the thresholds are consistent with each other.
    pub fn validate(&self) -> Result<()> {
        if self.min_word_len > 0 && self.max_word_len > 0 && self.min_word_len > self.max_word_len
        {
            return Err(KindredError::configuration(format!(
                "min_word_len ({}) is greater than max_word_len ({})",
                self.min_word_len, self.max_word_len
            )));
        }
        if self.min_doc_freq > self.max_doc_freq {
            return Err(KindredError::configuration(format!(
                "min_doc_freq ({}) is greater than max_doc_freq ({})",
                self.min_doc_freq, self.max_doc_freq
            )));
        }
        if !self.boost_factor.is_finite() || self.boost_factor < 0.0 {
            return Err(KindredError::configuration(format!(
                "boost_factor must be a non-negative number, got {}",
                self.boost_factor
            )));
        }
        Ok(())
    }

    /// Check whether a term is a noise word: outside the length bounds or a stop word.
    pub fn is_noise_word(&self, term: &str) -> bool {
        let len = term.chars().count();
        if self.min_word_len > 0 && len < self.min_word_len {
            return true;
        }
        if self.max_word_len > 0 && len > self.max_word_len {
            return true;
        }
        self.stop_words.contains(term)
    }
}
