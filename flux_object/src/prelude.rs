//! Convenience re-exports for common flux-object usage

// Error types
pub use crate::errors::FluxError;

// Predicate building
pub use crate::filter_builder::{
    Comparison, ComparisonOperator, Connective, FilterBuilder, FilterEntry, GroupMarker,
};

// Pipeline building
pub use crate::query_builder::{Aggregate, Elapsed, FluxQueryBuilder, Pagination, SortOrder};

// Validation
pub use crate::validation::{validate_entries, ValidationError};

// Timestamps accepted by `range()`
pub use chrono::{DateTime, Utc};
