//! Predicate builder
//!
//! This module builds the boolean expressions passed to Flux `filter()` stages.

pub mod builder;
pub mod entry;
pub mod rendering;


pub use builder::FilterBuilder;
pub use entry::{Comparison, ComparisonOperator, Connective, FilterEntry, GroupMarker};
pub use rendering::FilterRenderer;
