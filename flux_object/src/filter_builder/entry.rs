//! Filter entry types
//!
//! A predicate is accumulated as an ordered log of entries. Each entry is
//! exactly one of a comparison, a logical connective, a group marker, or a
//! pre-formatted fragment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators available inside a Flux predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[default]
    Eq, // ==
    Neq, // !=
    Gt,  // >
    Gte, // >=
    Lt,  // <
    Lte, // <=
}

impl ComparisonOperator {
    pub fn to_flux(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "==",
            ComparisonOperator::Neq => "!=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Gte => ">=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Lte => "<=",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_flux())
    }
}

/// Logical keywords joining predicate terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connective {
    And,
    Or,
    Not,
}

impl Connective {
    pub fn to_flux(&self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
            Connective::Not => "not",
        }
    }

    /// `not` negates the term after it; `and`/`or` sit between two terms
    pub fn is_prefix(&self) -> bool {
        matches!(self, Connective::Not)
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_flux())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupMarker {
    Open,
    Close,
}

/// `r.<field> <operator> "<value>"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub field: String,
    pub value: String,
    pub operator: ComparisonOperator,
}

impl Comparison {
    /// Create an equality comparison
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            operator: ComparisonOperator::Eq,
        }
    }
}

/// Single entry in a predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterEntry {
    Comparison(Comparison),
    Connective(Connective),
    Group(GroupMarker),
    Raw(String),
}

impl FilterEntry {
    /// Short name of the entry kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FilterEntry::Comparison(_) => "a comparison",
            FilterEntry::Connective(_) => "a connective",
            FilterEntry::Group(GroupMarker::Open) => "a group start",
            FilterEntry::Group(GroupMarker::Close) => "a group end",
            FilterEntry::Raw(_) => "a raw fragment",
        }
    }
}

impl fmt::Display for FilterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterEntry::Group(GroupMarker::Open) => f.write_str("("),
            FilterEntry::Group(GroupMarker::Close) => f.write_str(")"),
            FilterEntry::Raw(text) => write!(f, "({})", text),
            FilterEntry::Connective(connective) => write!(f, " {} ", connective),
            FilterEntry::Comparison(comparison) => write!(
                f,
                "r.{} {} \"{}\"",
                comparison.field, comparison.operator, comparison.value
            ),
        }
    }
}
