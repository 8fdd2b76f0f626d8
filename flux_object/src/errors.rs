use thiserror::Error;

use crate::filter_builder::ComparisonOperator;
use crate::validation::ValidationError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluxError {
    #[error("Cannot apply operator '{operator}': last filter entry is {found}, not a comparison")]
    NoActiveComparison {
        operator: ComparisonOperator,
        found: &'static str,
    },

    #[error("Filter validation error: {0}")]
    Validation(#[from] ValidationError),
}
