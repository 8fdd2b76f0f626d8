//! Core FluxHaus functionality
//!
//! This module contains the main FluxHaus struct, which applies the query
//! configuration (bucket, predicate strictness, default limit) to the
//! builders from `flux_object`.

use flux_object::{FilterBuilder, FluxQueryBuilder};

use crate::errors::FluxHausError;
use config::{AppConfig, QueryConfig};

/// Main FluxHaus coordinator that seeds queries from configuration
#[derive(Debug, Clone)]
pub struct FluxHaus {
    config: QueryConfig,
}

impl FluxHaus {
    /// Create new FluxHaus from a query configuration
    pub fn new(config: QueryConfig) -> Result<Self, FluxHausError> {
        config.validate()?;
        debug_log!(bucket = %config.bucket, strict = config.strict_filters, "FluxHaus configured");
        Ok(Self { config })
    }

    /// Create new FluxHaus from a loaded application configuration
    pub fn from_app_config(config: AppConfig) -> Result<Self, FluxHausError> {
        Self::new(config.query)
    }

    /// Load configuration from `FLUXHAUS_CONFIG` or `./fluxhaus.toml`
    pub fn load() -> Result<Self, FluxHausError> {
        Self::from_app_config(AppConfig::load()?)
    }

    /// Get configuration reference
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Start a query reading from the configured bucket
    pub fn query(&self) -> FluxQueryBuilder {
        FluxQueryBuilder::new().from(&self.config.bucket)
    }

    /// Render a predicate, validating it first when strict filters are enabled
    pub fn render_filter(&self, filter: &FilterBuilder) -> Result<String, FluxHausError> {
        if self.config.strict_filters {
            let predicate = filter.try_build()?;
            trace_log!(entries = filter.len(), "strict predicate accepted");
            Ok(predicate)
        } else {
            Ok(filter.build())
        }
    }

    /// Start a query from the configured bucket with a filter stage and,
    /// when configured, the default limit
    pub fn filtered_query(
        &self,
        filter: &FilterBuilder,
    ) -> Result<FluxQueryBuilder, FluxHausError> {
        let predicate = self.render_filter(filter)?;
        let query = self.query().filter(&predicate);

        Ok(match self.config.default_limit {
            Some(limit) => query.limit(limit, None),
            None => query,
        })
    }
}
