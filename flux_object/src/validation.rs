//! Validation module
//!
//! Opt-in structural checks for predicate entries. Rendering never runs
//! these; callers ask for them through `FilterBuilder::validate` or
//! `FilterBuilder::try_build`.

use std::fmt;

use crate::filter_builder::{Connective, FilterEntry, GroupMarker};

/// Structural problems in a predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Predicate has no entries
    Empty,
    /// Group end without a matching group start
    UnexpectedCloseGroup { position: usize },
    /// Group start that is never closed
    UnclosedGroup { open: usize },
    /// Group with nothing between its start and end
    EmptyGroup { position: usize },
    /// Binary connective with no term on its left
    LeadingConnective {
        position: usize,
        connective: Connective,
    },
    /// Connective with no term on its right
    TrailingConnective {
        position: usize,
        connective: Connective,
    },
    /// Binary connective directly after another connective
    AdjacentConnectives {
        position: usize,
        first: Connective,
        second: Connective,
    },
    /// Two terms with no binary connective between them
    MissingConnective { position: usize },
    /// Comparison with an empty field name
    EmptyField { position: usize },
    /// Raw fragment with no text, rendering as `()`
    EmptyFragment { position: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Filter cannot be empty"),
            ValidationError::UnexpectedCloseGroup { position } => {
                write!(f, "Group end at entry {} has no matching group start", position)
            }
            ValidationError::UnclosedGroup { open } => {
                write!(f, "Group started at entry {} is never closed", open)
            }
            ValidationError::EmptyGroup { position } => {
                write!(f, "Group started at entry {} is empty", position)
            }
            ValidationError::LeadingConnective {
                position,
                connective,
            } => {
                write!(
                    f,
                    "Connective '{}' at entry {} has no term on its left",
                    connective, position
                )
            }
            ValidationError::TrailingConnective {
                position,
                connective,
            } => {
                write!(
                    f,
                    "Connective '{}' at entry {} has no term on its right",
                    connective, position
                )
            }
            ValidationError::AdjacentConnectives {
                position,
                first,
                second,
            } => {
                write!(
                    f,
                    "Connective '{}' at entry {} directly follows '{}'",
                    second, position, first
                )
            }
            ValidationError::MissingConnective { position } => {
                write!(f, "Entry {} follows a term without a connective", position)
            }
            ValidationError::EmptyField { position } => {
                write!(f, "Comparison at entry {} has an empty field name", position)
            }
            ValidationError::EmptyFragment { position } => {
                write!(f, "Raw fragment at entry {} is empty", position)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// What the previous entry left the expression expecting
#[derive(Debug, Clone, Copy)]
enum Previous {
    Start,
    GroupOpen(usize),
    Term,
    Connective(usize, Connective),
}

/// Check that entries form a well-formed predicate
///
/// `and`/`or` need a term on both sides. `not` is a prefix and may start
/// an expression or follow `and`/`or`/`(` (or another `not`). Groups must
/// balance and may not be empty.
pub fn validate_entries(entries: &[FilterEntry]) -> Result<(), ValidationError> {
    if entries.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut open_groups: Vec<usize> = Vec::new();
    let mut previous = Previous::Start;

    for (position, entry) in entries.iter().enumerate() {
        previous = match entry {
            FilterEntry::Comparison(_) | FilterEntry::Raw(_) => {
                match entry {
                    FilterEntry::Comparison(comparison) if comparison.field.is_empty() => {
                        return Err(ValidationError::EmptyField { position });
                    }
                    FilterEntry::Raw(fragment) if fragment.trim().is_empty() => {
                        return Err(ValidationError::EmptyFragment { position });
                    }
                    _ => {}
                }
                expect_term_slot(previous, position)?;
                Previous::Term
            }
            FilterEntry::Group(GroupMarker::Open) => {
                expect_term_slot(previous, position)?;
                open_groups.push(position);
                Previous::GroupOpen(position)
            }
            FilterEntry::Group(GroupMarker::Close) => {
                if open_groups.pop().is_none() {
                    return Err(ValidationError::UnexpectedCloseGroup { position });
                }
                match previous {
                    Previous::GroupOpen(open) => {
                        return Err(ValidationError::EmptyGroup { position: open });
                    }
                    Previous::Connective(at, connective) => {
                        return Err(ValidationError::TrailingConnective {
                            position: at,
                            connective,
                        });
                    }
                    Previous::Start | Previous::Term => {}
                }
                Previous::Term
            }
            FilterEntry::Connective(connective) if connective.is_prefix() => {
                expect_term_slot(previous, position)?;
                Previous::Connective(position, *connective)
            }
            FilterEntry::Connective(connective) => {
                match previous {
                    Previous::Term => {}
                    Previous::Connective(_, first) => {
                        return Err(ValidationError::AdjacentConnectives {
                            position,
                            first,
                            second: *connective,
                        });
                    }
                    Previous::Start | Previous::GroupOpen(_) => {
                        return Err(ValidationError::LeadingConnective {
                            position,
                            connective: *connective,
                        });
                    }
                }
                Previous::Connective(position, *connective)
            }
        };
    }

    if let Previous::Connective(position, connective) = previous {
        return Err(ValidationError::TrailingConnective {
            position,
            connective,
        });
    }

    match open_groups.last() {
        Some(&open) => Err(ValidationError::UnclosedGroup { open }),
        None => Ok(()),
    }
}

/// A term, group start or `not` may only appear where a term is expected
fn expect_term_slot(previous: Previous, position: usize) -> Result<(), ValidationError> {
    match previous {
        Previous::Term => Err(ValidationError::MissingConnective { position }),
        _ => Ok(()),
    }
}
