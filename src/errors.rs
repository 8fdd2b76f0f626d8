//! Error types for the FluxHaus crate
//!
//! This module contains all error types that can be returned by FluxHaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FluxHausError {
    #[error("Query construction error: {0}")]
    Query(#[from] flux_object::FluxError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
