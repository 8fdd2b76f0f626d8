//! # FluxHaus
//!
//! Fluent builders for Flux queries: a predicate builder for the boolean
//! expressions used inside `filter()` stages, and a pipeline builder that
//! chains stages with `|>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use fluxhaus::prelude::*;
//! use chrono::TimeZone;
//!
//! let predicate = FilterBuilder::new()
//!     .add_comparison("_measurement", "cpu")
//!     .and()
//!     .open_group()
//!     .add_comparison("host", "web-1")
//!     .or()
//!     .add_comparison("host", "web-2")
//!     .close_group();
//!
//! let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
//! let query = FluxQueryBuilder::new()
//!     .from("telemetry")
//!     .range(start, None)
//!     .filter(&predicate.try_build().unwrap())
//!     .mean()
//!     .build();
//!
//! assert_eq!(
//!     query,
//!     r#"from(bucket: "telemetry") |> range(start: 2022-01-01T00:00:00Z) |> filter(fn: (r) => r._measurement == "cpu" and (r.host == "web-1" or r.host == "web-2")) |> mean()"#
//! );
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::FluxHaus;
pub use crate::errors::FluxHausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, QueryConfig};

// Re-export the builder crate
pub use flux_object;
pub use flux_object::{FilterBuilder, FluxError, FluxQueryBuilder};
