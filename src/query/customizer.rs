//! Post-processing of generated per-field queries.
//!
//! A [`QueryCustomizer`] receives the disjunction built for one field and
//! returns the query that actually goes into the final result, for example
//! with a field boost applied or wrapped together with a filter.

use std::fmt::Debug;

use crate::error::Result;
use crate::query::boolean::BooleanQuery;
use crate::query::query::Query;

/// Adjusts a generated query before it is merged into its parent.
pub trait QueryCustomizer: Send + Sync + Debug {
    /// Return the customized query.
    fn customize(&self, query: Box<dyn Query>) -> Result<Box<dyn Query>>;
}

/// Returns the query unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCustomizer;

impl QueryCustomizer for IdentityCustomizer {
    fn customize(&self, query: Box<dyn Query>) -> Result<Box<dyn Query>> {
        Ok(query)
    }
}

/// Multiplies the boost of the query by a constant.
#[derive(Debug, Clone, Copy)]
pub struct BoostCustomizer {
    boost: f32,
}

impl BoostCustomizer {
    /// Create a customizer applying `boost`.
    pub fn new(boost: f32) -> Self {
        BoostCustomizer { boost }
    }
}

impl QueryCustomizer for BoostCustomizer {
    fn customize(&self, mut query: Box<dyn Query>) -> Result<Box<dyn Query>> {
        let boost = query.boost() * self.boost;
        query.set_boost(boost);
        Ok(query)
    }
}

/// Requires both the generated query and a filter query to match.
#[derive(Debug, Clone)]
pub struct FilterCustomizer {
    filter: Box<dyn Query>,
}

impl FilterCustomizer {
    /// Create a customizer that combines the generated query with `filter`.
    pub fn new(filter: Box<dyn Query>) -> Self {
        FilterCustomizer { filter }
    }
}

impl QueryCustomizer for FilterCustomizer {
    fn customize(&self, query: Box<dyn Query>) -> Result<Box<dyn Query>> {
        let mut wrapped = BooleanQuery::new();
        wrapped.add_must(query)?;
        wrapped.add_must(self.filter.clone())?;
        Ok(Box::new(wrapped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::term::TermQuery;

    #[test]
    fn test_identity_customizer() {
        let query = IdentityCustomizer
            .customize(Box::new(TermQuery::new("title", "cat")))
            .unwrap();
        assert_eq!(query.description(), "title:cat");
    }

    #[test]
    fn test_boost_customizer_multiplies() {
        let query = BoostCustomizer::new(2.0)
            .customize(Box::new(TermQuery::new("title", "cat").with_boost(1.5)))
            .unwrap();
        assert_eq!(query.boost(), 3.0);
    }

    #[test]
    fn test_filter_customizer_wraps() {
        let customizer = FilterCustomizer::new(Box::new(TermQuery::new("lang", "en")));
        let query = customizer
            .customize(Box::new(TermQuery::new("title", "cat")))
            .unwrap();
        assert_eq!(query.description(), "(+title:cat +lang:en)");
    }
}
