//! Boolean query implementation for combining multiple queries.

use crate::error::{KindredError, Result};
use crate::query::query::{Query, with_boost_suffix};

/// Default ceiling on the number of clauses a boolean query accepts.
pub const DEFAULT_MAX_CLAUSE_COUNT: usize = 1024;

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    /// The clause must match (equivalent to AND).
    Must,
    /// The clause should match (equivalent to OR).
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

/// A clause in a boolean query.
#[derive(Debug, Clone)]
pub struct BooleanClause {
    /// The query for this clause.
    pub query: Box<dyn Query>,
    /// The occurrence requirement.
    pub occur: Occur,
}

impl BooleanClause {
    /// Create a new boolean clause.
    pub fn new(query: Box<dyn Query>, occur: Occur) -> Self {
        BooleanClause { query, occur }
    }

    /// Create a MUST clause.
    pub fn must(query: Box<dyn Query>) -> Self {
        BooleanClause::new(query, Occur::Must)
    }

    /// Create a SHOULD clause.
    pub fn should(query: Box<dyn Query>) -> Self {
        BooleanClause::new(query, Occur::Should)
    }

    /// Create a MUST_NOT clause.
    pub fn must_not(query: Box<dyn Query>) -> Self {
        BooleanClause::new(query, Occur::MustNot)
    }
}

/// A boolean query that combines multiple queries with boolean logic.
///
/// The query holds at most `max_clause_count` clauses; adding one more fails
/// with [`KindredError::TooManyClauses`] and leaves the query unchanged.
#[derive(Debug, Clone)]
pub struct BooleanQuery {
    /// The clauses in this boolean query.
    clauses: Vec<BooleanClause>,
    /// The boost factor for this query.
    boost: f32,
    /// Maximum number of clauses accepted.
    max_clause_count: usize,
}

impl BooleanQuery {
    /// Create a new empty boolean query with the default clause ceiling.
    pub fn new() -> Self {
        BooleanQuery {
            clauses: Vec::new(),
            boost: 1.0,
            max_clause_count: DEFAULT_MAX_CLAUSE_COUNT,
        }
    }

    /// Set the maximum number of clauses accepted.
    pub fn with_max_clause_count(mut self, max_clause_count: usize) -> Self {
        self.max_clause_count = max_clause_count;
        self
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Add a clause to this boolean query.
    pub fn add_clause(&mut self, clause: BooleanClause) -> Result<()> {
        if self.clauses.len() >= self.max_clause_count {
            return Err(KindredError::TooManyClauses(self.max_clause_count));
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// Add a MUST clause.
    pub fn add_must(&mut self, query: Box<dyn Query>) -> Result<()> {
        self.add_clause(BooleanClause::must(query))
    }

    /// Add a SHOULD clause.
    pub fn add_should(&mut self, query: Box<dyn Query>) -> Result<()> {
        self.add_clause(BooleanClause::should(query))
    }

    /// Add a MUST_NOT clause.
    pub fn add_must_not(&mut self, query: Box<dyn Query>) -> Result<()> {
        self.add_clause(BooleanClause::must_not(query))
    }

    /// Get the clauses.
    pub fn clauses(&self) -> &[BooleanClause] {
        &self.clauses
    }

    /// Get the maximum number of clauses accepted.
    pub fn max_clause_count(&self) -> usize {
        self.max_clause_count
    }

    /// Get the number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Check if this query is empty.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Get clauses by occurrence type.
    pub fn clauses_by_occur(&self, occur: Occur) -> Vec<&BooleanClause> {
        self.clauses.iter().filter(|c| c.occur == occur).collect()
    }
}

impl Default for BooleanQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for BooleanQuery {
    fn boost(&self) -> f32 {
        self.boost
    }

    fn set_boost(&mut self, boost: f32) {
        self.boost = boost;
    }

    fn description(&self) -> String {
        let parts: Vec<String> = self
            .clauses
            .iter()
            .map(|clause| match clause.occur {
                Occur::Must => format!("+{}", clause.query.description()),
                Occur::Should => clause.query.description(),
                Occur::MustNot => format!("-{}", clause.query.description()),
            })
            .collect();

        with_boost_suffix(format!("({})", parts.join(" ")), self.boost)
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::term::TermQuery;

    #[test]
    fn test_boolean_query_description() {
        let mut query = BooleanQuery::new();
        query
            .add_should(Box::new(TermQuery::new("title", "cat")))
            .unwrap();
        query
            .add_must(Box::new(TermQuery::new("title", "dog").with_boost(0.5)))
            .unwrap();
        query
            .add_must_not(Box::new(TermQuery::new("body", "bird")))
            .unwrap();

        assert_eq!(query.len(), 3);
        assert_eq!(query.clauses_by_occur(Occur::Should).len(), 1);
        assert_eq!(
            query.description(),
            "(title:cat +title:dog^0.5 -body:bird)"
        );

        let boosted = query.clone().with_boost(2.0);
        assert_eq!(
            boosted.description(),
            "(title:cat +title:dog^0.5 -body:bird)^2"
        );
    }

    #[test]
    fn test_clause_ceiling() {
        let mut query = BooleanQuery::new().with_max_clause_count(2);
        query
            .add_should(Box::new(TermQuery::new("f", "a")))
            .unwrap();
        query
            .add_should(Box::new(TermQuery::new("f", "b")))
            .unwrap();

        let result = query.add_should(Box::new(TermQuery::new("f", "c")));
        assert!(matches!(result, Err(KindredError::TooManyClauses(2))));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_default_ceiling() {
        let query = BooleanQuery::default();
        assert!(query.is_empty());
        assert_eq!(query.max_clause_count(), DEFAULT_MAX_CLAUSE_COUNT);
        assert_eq!(query.field(), None);
    }
}
