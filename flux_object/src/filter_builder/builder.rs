//! Predicate builder
//!
//! Accumulates comparisons, connectives, groups and raw fragments in call
//! order and renders them into a Flux predicate.

use serde::{Deserialize, Serialize};

use crate::errors::FluxError;
use crate::filter_builder::entry::{
    Comparison, ComparisonOperator, Connective, FilterEntry, GroupMarker,
};
use crate::filter_builder::rendering::FilterRenderer;
use crate::validation::{validate_entries, ValidationError};

/// Fluent builder for Flux filter predicates
///
/// Operator setters (`eq`, `gt`, ...) modify the most recently added
/// comparison. For example, to filter on `foo` not equal to `bar`:
///
/// ```rust
/// use flux_object::FilterBuilder;
///
/// let predicate = FilterBuilder::new().add_comparison("foo", "bar").neq().build();
/// assert_eq!(predicate, r#"r.foo != "bar""#);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterBuilder {
    entries: Vec<FilterEntry>,
    #[serde(skip)]
    misuse: Option<FluxError>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            misuse: None,
        }
    }

    /// Add a comparison on `field` with the operator set to `==`
    pub fn add_comparison(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .push(FilterEntry::Comparison(Comparison::new(field, value)));
        self
    }

    /// Set the operator of the last comparison
    ///
    /// If the last entry is not a comparison the builder is left unchanged
    /// and the misuse is reported by [`FilterBuilder::try_build`].
    pub fn operator(mut self, operator: ComparisonOperator) -> Self {
        if let Err(err) = self.try_set_operator(operator) {
            tracing::warn!(%err, "operator ignored");
            self.misuse.get_or_insert(err);
        }
        self
    }

    /// Set the operator of the last comparison, failing if there is none
    pub fn try_set_operator(&mut self, operator: ComparisonOperator) -> Result<(), FluxError> {
        match self.entries.last_mut() {
            Some(FilterEntry::Comparison(comparison)) => {
                comparison.operator = operator;
                Ok(())
            }
            last => Err(FluxError::NoActiveComparison {
                operator,
                found: last.map(|entry| entry.kind()).unwrap_or("nothing"),
            }),
        }
    }

    pub fn eq(self) -> Self {
        self.operator(ComparisonOperator::Eq)
    }

    pub fn neq(self) -> Self {
        self.operator(ComparisonOperator::Neq)
    }

    pub fn gt(self) -> Self {
        self.operator(ComparisonOperator::Gt)
    }

    pub fn gte(self) -> Self {
        self.operator(ComparisonOperator::Gte)
    }

    pub fn lt(self) -> Self {
        self.operator(ComparisonOperator::Lt)
    }

    pub fn lte(self) -> Self {
        self.operator(ComparisonOperator::Lte)
    }

    /// Add a logical connective
    pub fn connective(mut self, connective: Connective) -> Self {
        self.entries.push(FilterEntry::Connective(connective));
        self
    }

    pub fn and(self) -> Self {
        self.connective(Connective::And)
    }

    pub fn or(self) -> Self {
        self.connective(Connective::Or)
    }

    pub fn not(self) -> Self {
        self.connective(Connective::Not)
    }

    /// Add a complete predicate, rendered inside parentheses as given
    pub fn add_raw_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.entries.push(FilterEntry::Raw(fragment.into()));
        self
    }

    pub fn open_group(mut self) -> Self {
        self.entries.push(FilterEntry::Group(GroupMarker::Open));
        self
    }

    pub fn close_group(mut self) -> Self {
        self.entries.push(FilterEntry::Group(GroupMarker::Close));
        self
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First operator setter applied without a comparison to modify
    pub fn misuse(&self) -> Option<&FluxError> {
        self.misuse.as_ref()
    }

    /// Check the entries for unbalanced groups and misplaced connectives
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_entries(&self.entries)
    }

    /// Build the predicate string
    pub fn build(&self) -> String {
        FilterRenderer::render(&self.entries)
    }

    /// Build the predicate string, rejecting misuse and malformed structure
    pub fn try_build(&self) -> Result<String, FluxError> {
        if let Some(err) = &self.misuse {
            return Err(err.clone());
        }
        self.validate()?;
        Ok(self.build())
    }
}
