//! Query builder utilities
//!
//! This module provides Flux sort direction handling.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Value of the `desc` argument of `sort()`
    pub fn to_flux(&self) -> &'static str {
        match self {
            SortOrder::Asc => "false",
            SortOrder::Desc => "true",
        }
    }
}
