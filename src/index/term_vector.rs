//! Per-document term vectors.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One distinct term of a field's term vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermVectorEntry {
    /// The term text.
    pub term: String,
    /// Total number of occurrences of the term in the field of the document.
    pub total_term_freq: u64,
}

/// The distinct terms recorded for one field of one document, sorted by term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermVector {
    entries: Vec<TermVectorEntry>,
}

impl TermVector {
    /// Create a term vector from `(term, frequency)` pairs.
    ///
    /// Duplicate terms are merged by summing their frequencies.
    pub fn from_frequencies<I, S>(frequencies: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut merged: AHashMap<String, u64> = AHashMap::new();
        for (term, freq) in frequencies {
            *merged.entry(term.into()).or_insert(0) += freq;
        }

        let mut entries: Vec<TermVectorEntry> = merged
            .into_iter()
            .map(|(term, total_term_freq)| TermVectorEntry {
                term,
                total_term_freq,
            })
            .collect();
        entries.sort_by(|a, b| a.term.cmp(&b.term));

        TermVector { entries }
    }

    /// Iterate over the distinct terms in term order.
    pub fn iter(&self) -> impl Iterator<Item = &TermVectorEntry> {
        self.entries.iter()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the term vector is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The term vectors of every field of one document that records them.
#[derive(Debug, Clone, Default)]
pub struct TermVectors {
    fields: AHashMap<String, TermVector>,
}

impl TermVectors {
    /// Create an empty set of term vectors.
    pub fn new() -> Self {
        TermVectors {
            fields: AHashMap::new(),
        }
    }

    /// Set the term vector of a field.
    pub fn insert(&mut self, field: impl Into<String>, vector: TermVector) {
        self.fields.insert(field.into(), vector);
    }

    /// Get the term vector of a field, if one was recorded.
    pub fn terms(&self, field: &str) -> Option<&TermVector> {
        self.fields.get(field)
    }

    /// Number of fields with a term vector.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field has a term vector.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
