//! Convenience re-exports for common FluxHaus usage
//!
//! This prelude module re-exports the most commonly used items from the FluxHaus crates,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use fluxhaus::prelude::*;
//!
//! let predicate = FilterBuilder::new().add_comparison("host", "web-1");
//! let query = FluxQueryBuilder::new().from("telemetry").filter_by(&predicate).build();
//! ```

// Core FluxHaus components
pub use crate::core::FluxHaus;
pub use crate::errors::FluxHausError;

// Re-export centralized config
pub use config::{AppConfig, QueryConfig};

// Re-export commonly used flux-object types for convenience
pub use flux_object::prelude::*;

// Common external dependencies
pub use serde::{Deserialize, Serialize};
