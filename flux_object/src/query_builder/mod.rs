//! Query builder utilities
//!
//! This module provides Flux pipeline construction utilities.

pub mod aggregation;
pub mod builder;
pub mod formatting;
pub mod ordering;
pub mod pagination;

#[cfg(test)]
mod tests;

pub use aggregation::{Aggregate, Elapsed};
pub use builder::FluxQueryBuilder;
pub use ordering::SortOrder;
pub use pagination::Pagination;
