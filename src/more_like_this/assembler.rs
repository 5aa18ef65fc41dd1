//! Assembly of ranked terms into the final disjunction.

use crate::error::{KindredError, Result};
use crate::more_like_this::config::MoreLikeThisConfig;
use crate::more_like_this::field::FieldContext;
use crate::more_like_this::scorer::ScoredTermQueue;
use crate::query::boolean::BooleanQuery;
use crate::query::query::Query;
use crate::query::term::TermQuery;

/// Turns per-field term queues into a query.
///
/// Each field becomes a disjunction of term queries. With a single field that
/// disjunction is the result; with several, the field queries are themselves
/// combined as optional clauses.
pub struct QueryAssembler<'a> {
    config: &'a MoreLikeThisConfig,
    entity_type: &'a str,
}

impl<'a> QueryAssembler<'a> {
    /// Create an assembler using the thresholds of `config`.
    pub fn new(config: &'a MoreLikeThisConfig, entity_type: &'a str) -> Self {
        QueryAssembler {
            config,
            entity_type,
        }
    }

    /// Combine the queues of `fields`, aligned by position.
    pub fn assemble(
        &self,
        fields: &[FieldContext],
        queues: Vec<Option<ScoredTermQueue>>,
    ) -> Result<Box<dyn Query>> {
        match fields {
            [] => Err(KindredError::configuration(format!(
                "a more like this query on entity {} requires at least one field",
                self.entity_type
            ))),
            [context] => match queues.into_iter().next().flatten() {
                Some(queue) => self.field_query(context, queue),
                None => Err(self.incompatible_field(context.field())),
            },
            _ => {
                let mut query = BooleanQuery::new().with_max_clause_count(self.config.max_clause_count);
                for (context, queue) in fields.iter().zip(queues) {
                    let Some(queue) = queue else {
                        continue;
                    };
                    if queue.is_empty() {
                        log::debug!("skipping field {}: no term survived", context.field());
                        continue;
                    }
                    let field_query = self.field_query(context, queue)?;
                    match query.add_should(field_query) {
                        Ok(()) => {}
                        Err(KindredError::TooManyClauses(max)) => {
                            log::debug!(
                                "dropping remaining fields of {}: clause limit {max} reached",
                                self.entity_type
                            );
                            break;
                        }
                        Err(e) => return Err(e),
                    }
                }
                Ok(Box::new(query))
            }
        }
    }

    /// Build the disjunction of one field's terms, best first.
    pub fn field_query(
        &self,
        context: &FieldContext,
        mut queue: ScoredTermQueue,
    ) -> Result<Box<dyn Query>> {
        let config = self.config;
        let mut query = BooleanQuery::new().with_max_clause_count(config.max_clause_count);
        let mut best_score = None;

        while let Some(scored) = queue.pop() {
            let mut term_query = TermQuery::new(scored.field, scored.term);
            if config.boost {
                let best = *best_score.get_or_insert(scored.score);
                term_query.set_boost(self.term_boost(scored.score, best));
            }

            match query.add_should(Box::new(term_query)) {
                Ok(()) => {}
                Err(KindredError::TooManyClauses(max)) => {
                    log::debug!(
                        "truncating terms of field {}: clause limit {max} reached",
                        context.field()
                    );
                    break;
                }
                Err(e) => return Err(e),
            }

            if config.max_query_terms > 0 && query.len() >= config.max_query_terms {
                break;
            }
        }

        context.customizer().customize(Box::new(query))
    }

    fn term_boost(&self, score: f32, best_score: f32) -> f32 {
        if best_score > 0.0 {
            self.config.boost_factor * (score / best_score)
        } else {
            self.config.boost_factor
        }
    }

    fn incompatible_field(&self, field: &str) -> KindredError {
        KindredError::configuration(format!(
            "field {field} of entity {} cannot be used in a more like this query: \
             it is neither stored nor indexed with term vectors",
            self.entity_type
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::more_like_this::scorer::ScoredTerm;
    use crate::query::boolean::Occur;

    fn queue(field: &str, terms: &[(&str, f32)]) -> ScoredTermQueue {
        let mut queue = ScoredTermQueue::with_capacity(terms.len());
        for (term, score) in terms {
            queue.push(ScoredTerm {
                term: term.to_string(),
                field: field.to_string(),
                score: *score,
                idf: *score,
                doc_freq: 1,
                term_freq: 1,
            });
        }
        queue
    }

    fn terms_of(query: &dyn Query) -> Vec<String> {
        let boolean = query.as_any().downcast_ref::<BooleanQuery>().unwrap();
        boolean
            .clauses()
            .iter()
            .map(|clause| {
                clause
                    .query
                    .as_any()
                    .downcast_ref::<TermQuery>()
                    .unwrap()
                    .term()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_single_field() {
        let config = MoreLikeThisConfig::default();
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .assemble(
                &[FieldContext::new("body")],
                vec![Some(queue("body", &[("dog", 1.0), ("cat", 3.0)]))],
            )
            .unwrap();

        assert_eq!(terms_of(query.as_ref()), vec!["cat", "dog"]);
        assert_eq!(query.description(), "(body:cat body:dog)");
    }

    #[test]
    fn test_single_incompatible_field() {
        let config = MoreLikeThisConfig::default();
        let assembler = QueryAssembler::new(&config, "Book");
        let error = assembler
            .assemble(&[FieldContext::new("isbn")], vec![None])
            .unwrap_err();

        assert!(error.is_configuration());
        let message = error.to_string();
        assert!(message.contains("isbn"));
        assert!(message.contains("Book"));
    }

    #[test]
    fn test_no_fields() {
        let config = MoreLikeThisConfig::default();
        let assembler = QueryAssembler::new(&config, "Book");
        assert!(assembler.assemble(&[], vec![]).unwrap_err().is_configuration());
    }

    #[test]
    fn test_multiple_fields_skip_incompatible() {
        let config = MoreLikeThisConfig::default();
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .assemble(
                &[
                    FieldContext::new("title"),
                    FieldContext::new("isbn"),
                    FieldContext::new("body"),
                ],
                vec![
                    Some(queue("title", &[("dune", 2.0)])),
                    None,
                    Some(queue("body", &[("spice", 1.0)])),
                ],
            )
            .unwrap();

        let outer = query.as_any().downcast_ref::<BooleanQuery>().unwrap();
        assert_eq!(outer.len(), 2);
        assert!(outer.clauses().iter().all(|c| c.occur == Occur::Should));
        assert_eq!(query.description(), "((title:dune) (body:spice))");
    }

    #[test]
    fn test_multiple_fields_skip_fields_without_terms() {
        let config = MoreLikeThisConfig::default().with_max_clause_count(1);
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .assemble(
                &[FieldContext::new("title"), FieldContext::new("body")],
                vec![
                    Some(ScoredTermQueue::default()),
                    Some(queue("body", &[("spice", 1.0)])),
                ],
            )
            .unwrap();

        // The empty title queue must not take the only clause slot
        assert_eq!(query.description(), "((body:spice))");
    }

    #[test]
    fn test_max_query_terms() {
        let config = MoreLikeThisConfig::default().with_max_query_terms(2);
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .field_query(
                &FieldContext::new("body"),
                queue("body", &[("a", 1.0), ("b", 2.0), ("c", 3.0)]),
            )
            .unwrap();
        assert_eq!(terms_of(query.as_ref()), vec!["c", "b"]);

        // Zero disables the limit
        let config = MoreLikeThisConfig::default().with_max_query_terms(0);
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .field_query(
                &FieldContext::new("body"),
                queue("body", &[("a", 1.0), ("b", 2.0), ("c", 3.0)]),
            )
            .unwrap();
        assert_eq!(terms_of(query.as_ref()).len(), 3);
    }

    #[test]
    fn test_boost_relative_to_best_term() {
        let config = MoreLikeThisConfig::default().with_boost_factor(2.0);
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .field_query(
                &FieldContext::new("body"),
                queue("body", &[("cat", 4.0), ("dog", 1.0)]),
            )
            .unwrap();

        let boolean = query.as_any().downcast_ref::<BooleanQuery>().unwrap();
        let boosts: Vec<f32> = boolean.clauses().iter().map(|c| c.query.boost()).collect();
        assert_eq!(boosts, vec![2.0, 0.5]);
    }

    #[test]
    fn test_boost_with_zero_best_score() {
        let config = MoreLikeThisConfig::default().with_boost_factor(3.0);
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .field_query(
                &FieldContext::new("body"),
                queue("body", &[("cat", 0.0), ("dog", 0.0)]),
            )
            .unwrap();

        let boolean = query.as_any().downcast_ref::<BooleanQuery>().unwrap();
        assert!(boolean.clauses().iter().all(|c| c.query.boost() == 3.0));
    }

    #[test]
    fn test_clause_limit_truncates_terms() {
        let config = MoreLikeThisConfig::default()
            .with_max_query_terms(0)
            .with_max_clause_count(2);
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .field_query(
                &FieldContext::new("body"),
                queue("body", &[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]),
            )
            .unwrap();
        assert_eq!(terms_of(query.as_ref()), vec!["d", "c"]);
    }

    #[test]
    fn test_clause_limit_truncates_fields() {
        let config = MoreLikeThisConfig::default().with_max_clause_count(1);
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .assemble(
                &[FieldContext::new("title"), FieldContext::new("body")],
                vec![
                    Some(queue("title", &[("dune", 1.0)])),
                    Some(queue("body", &[("spice", 1.0)])),
                ],
            )
            .unwrap();
        assert_eq!(query.description(), "((title:dune))");
    }

    #[test]
    fn test_customizer_applied() {
        let config = MoreLikeThisConfig::default();
        let assembler = QueryAssembler::new(&config, "Book");
        let query = assembler
            .field_query(
                &FieldContext::new("title").boosted(2.0),
                queue("title", &[("dune", 1.0)]),
            )
            .unwrap();
        assert_eq!(query.boost(), 2.0);
        assert_eq!(query.description(), "(title:dune)^2");
    }
}
