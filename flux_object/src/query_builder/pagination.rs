//! Query builder utilities
//!
//! This module provides Flux `limit()` construction.

/// Pagination configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            offset: None,
        }
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn to_flux(&self) -> String {
        let mut args = vec![format!("n: {}", self.limit)];

        if let Some(offset) = self.offset {
            args.push(format!("offset: {}", offset));
        }

        format!("limit({})", args.join(", "))
    }
}
