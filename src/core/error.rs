//! Error types shared across the crate.

use super::options::OptionsError;
use thiserror::Error;

/// Errors that can occur while computing statistics or fitting a line.
///
/// Every operation in this crate reports failure through this enum; no
/// function returns NaN or infinity as an error sentinel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("input has no observations")]
    EmptyInput,

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("all x values are identical, slope is undefined")]
    DegenerateInput,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

/// Convenience alias used throughout the crate.
pub type StatsResult<T> = Result<T, StatsError>;
