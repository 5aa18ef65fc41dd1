//! Ranking of candidate terms by `tf * idf`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{KindredError, Result};
use crate::index::reader::IndexReader;
use crate::more_like_this::collector::TermFrequencyMap;
use crate::more_like_this::config::MoreLikeThisConfig;
use crate::similarity::Similarity;

/// A candidate term with the statistics it was ranked by.
#[derive(Debug, Clone)]
pub struct ScoredTerm {
    /// The term text.
    pub term: String,
    /// The field the term belongs to.
    pub field: String,
    /// `term_freq * idf`.
    pub score: f32,
    /// Inverse document frequency of the term.
    pub idf: f32,
    /// Number of documents containing the term.
    pub doc_freq: u64,
    /// Occurrences of the term in the reference field.
    pub term_freq: u64,
}

// Higher scores rank first; equal scores rank by ascending term.
impl Ord for ScoredTerm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.term.cmp(&self.term))
    }
}

impl PartialOrd for ScoredTerm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScoredTerm {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredTerm {}

/// Priority queue of scored terms, highest score first.
#[derive(Debug, Clone, Default)]
pub struct ScoredTermQueue {
    heap: BinaryHeap<ScoredTerm>,
}

impl ScoredTermQueue {
    /// Create a queue able to hold `capacity` terms without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        ScoredTermQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Add a scored term.
    pub fn push(&mut self, term: ScoredTerm) {
        self.heap.push(term);
    }

    /// Remove and return the best remaining term.
    pub fn pop(&mut self) -> Option<ScoredTerm> {
        self.heap.pop()
    }

    /// Number of queued terms.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consume the queue into its terms, best first.
    pub fn into_ranked(self) -> Vec<ScoredTerm> {
        let mut terms = self.heap.into_sorted_vec();
        terms.reverse();
        terms
    }
}

/// Scores and filters the collected terms of one field at a time.
pub struct TermScorer<'a> {
    reader: &'a dyn IndexReader,
    similarity: &'a dyn Similarity,
    config: &'a MoreLikeThisConfig,
    entity_type: &'a str,
    doc_count: u64,
}

impl<'a> TermScorer<'a> {
    /// Create a scorer; `doc_count` is the collection size for the whole request.
    pub fn new(
        reader: &'a dyn IndexReader,
        similarity: &'a dyn Similarity,
        config: &'a MoreLikeThisConfig,
        entity_type: &'a str,
        doc_count: u64,
    ) -> Self {
        TermScorer {
            reader,
            similarity,
            config,
            entity_type,
            doc_count,
        }
    }

    /// Rank the terms of `field`.
    ///
    /// Returns `None` when the field produced no frequency map.
    pub fn score_field(
        &self,
        field: &str,
        frequencies: Option<&TermFrequencyMap>,
    ) -> Result<Option<ScoredTermQueue>> {
        let Some(frequencies) = frequencies else {
            return Ok(None);
        };

        let config = self.config;
        let mut queue = ScoredTermQueue::with_capacity(frequencies.len());

        for (term, &term_freq) in frequencies {
            if config.min_term_freq > 0 && term_freq < config.min_term_freq {
                continue;
            }

            let doc_freq = self
                .reader
                .term_doc_freq(field, term)
                .map_err(|e| {
                    KindredError::index_read(self.entity_type, "read document frequency", e)
                })?;

            if config.min_doc_freq > 0 && doc_freq < config.min_doc_freq {
                continue;
            }
            if doc_freq > config.max_doc_freq {
                continue;
            }
            if doc_freq == 0 {
                log::trace!("term {field}:{term} is not in the index");
                continue;
            }

            let idf = self.similarity.idf(doc_freq, self.doc_count);
            queue.push(ScoredTerm {
                term: term.clone(),
                field: field.to_string(),
                score: term_freq as f32 * idf,
                idf,
                doc_freq,
                term_freq,
            });
        }

        log::debug!(
            "kept {} of {} terms for field {field}",
            queue.len(),
            frequencies.len()
        );
        Ok(Some(queue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::document::Document;
    use crate::index::memory::MemoryIndexReader;
    use crate::similarity::ClassicSimilarity;

    fn scored(term: &str, score: f32) -> ScoredTerm {
        ScoredTerm {
            term: term.to_string(),
            field: "body".to_string(),
            score,
            idf: score,
            doc_freq: 1,
            term_freq: 1,
        }
    }

    fn frequencies(entries: &[(&str, u64)]) -> TermFrequencyMap {
        entries
            .iter()
            .map(|(term, freq)| (term.to_string(), *freq))
            .collect()
    }

    // cat in 1 document, dog in 3, bird in 4 of 4
    fn reader() -> MemoryIndexReader {
        MemoryIndexReader::builder()
            .add_document(Document::builder().add_text("body", "cat dog bird").build())
            .add_document(Document::builder().add_text("body", "dog bird").build())
            .add_document(Document::builder().add_text("body", "dog bird").build())
            .add_document(Document::builder().add_text("body", "bird").build())
            .build()
            .unwrap()
    }

    #[derive(Debug)]
    struct FixedFrequencies;

    impl IndexReader for FixedFrequencies {
        fn doc_count(&self) -> u64 {
            100
        }


        fn document(&self, _doc_id: u64) -> Result<Option<Document>> {
            Ok(None)
        }

        fn term_vectors(
            &self,
            _doc_id: u64,
        ) -> Result<Option<crate::index::term_vector::TermVectors>> {
            Ok(None)
        }

        fn term_doc_freq(&self, _field: &str, term: &str) -> Result<u64> {
            Ok(match term {
                "cat" => 5,
                "dog" => 50,
                _ => 0,
            })
        }
    }

    #[test]
    fn test_rare_term_outranks_common_term() {
        let config = MoreLikeThisConfig::default()
            .with_min_doc_freq(1)
            .with_max_doc_freq(1000);
        let scorer = TermScorer::new(&FixedFrequencies, &ClassicSimilarity, &config, "Note", 100);

        let map = frequencies(&[("cat", 3), ("dog", 1)]);
        let ranked = scorer
            .score_field("title", Some(&map))
            .unwrap()
            .unwrap()
            .into_ranked();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].term, "cat");
        assert_eq!(ranked[0].field, "title");
        assert_eq!(ranked[0].doc_freq, 5);
        assert!(ranked[0].score > ranked[1].score);
        assert!(ranked[0].idf > ranked[1].idf);
    }

    #[test]
    fn test_queue_order() {
        let mut queue = ScoredTermQueue::with_capacity(3);
        queue.push(scored("b", 1.0));
        queue.push(scored("c", 2.0));
        queue.push(scored("a", 1.0));

        let terms: Vec<_> = queue.into_ranked().into_iter().map(|t| t.term).collect();
        assert_eq!(terms, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_score_field_ranks_rare_terms_first() {
        let reader = reader();
        let config = MoreLikeThisConfig::default();
        let scorer = TermScorer::new(&reader, &ClassicSimilarity, &config, "Note", 4);

        let map = frequencies(&[("cat", 1), ("dog", 1), ("unknown", 3)]);
        let mut queue = scorer.score_field("body", Some(&map)).unwrap().unwrap();

        assert_eq!(queue.len(), 2);
        let best = queue.pop().unwrap();
        assert_eq!(best.term, "cat");
        assert_eq!(best.doc_freq, 1);
        assert_eq!(best.score, best.idf);
        assert_eq!(queue.pop().unwrap().term, "dog");
    }

    #[test]
    fn test_score_field_thresholds() {
        let reader = reader();
        let config = MoreLikeThisConfig::default()
            .with_min_term_freq(2)
            .with_max_doc_freq(3);
        let scorer = TermScorer::new(&reader, &ClassicSimilarity, &config, "Note", 4);

        let map = frequencies(&[("cat", 1), ("dog", 2), ("bird", 5)]);
        let ranked = scorer
            .score_field("body", Some(&map))
            .unwrap()
            .unwrap()
            .into_ranked();

        // cat is too rare in the reference, bird too common in the index
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].term, "dog");
        assert_eq!(ranked[0].term_freq, 2);
    }

    #[test]
    fn test_min_doc_freq() {
        let reader = reader();
        let config = MoreLikeThisConfig::default().with_min_doc_freq(2);
        let scorer = TermScorer::new(&reader, &ClassicSimilarity, &config, "Note", 4);

        let map = frequencies(&[("cat", 1), ("dog", 1)]);
        let ranked = scorer
            .score_field("body", Some(&map))
            .unwrap()
            .unwrap()
            .into_ranked();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].term, "dog");
    }

    #[test]
    fn test_absent_map() {
        let reader = reader();
        let config = MoreLikeThisConfig::default();
        let scorer = TermScorer::new(&reader, &ClassicSimilarity, &config, "Note", 4);
        assert!(scorer.score_field("body", None).unwrap().is_none());

        let empty = TermFrequencyMap::new();
        assert!(scorer.score_field("body", Some(&empty)).unwrap().unwrap().is_empty());
    }
}
