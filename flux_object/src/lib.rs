//! Flux Object - Core query construction layer for FluxHaus
//!
//! This crate provides the predicate builder used inside `filter()` stages,
//! the pipeline builder that chains Flux stages with `|>`, and the opt-in
//! structural validation for predicates.

pub mod errors;
pub mod filter_builder;
pub mod prelude;
pub mod query_builder;
pub mod validation;

pub use errors::FluxError;
pub use filter_builder::{
    Comparison, ComparisonOperator, Connective, FilterBuilder, FilterEntry, GroupMarker,
};
pub use query_builder::{Aggregate, Elapsed, FluxQueryBuilder, Pagination, SortOrder};
pub use validation::{validate_entries, ValidationError};
