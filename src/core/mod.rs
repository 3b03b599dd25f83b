//! Core types for regression analysis.

mod error;
mod line;
mod options;
mod result;

pub use error::{StatsError, StatsResult};
pub use line::FittedLine;
pub use options::{EngineOptions, EngineOptionsBuilder, OptionsError};
pub use result::{LineStatistics, RegressionResult};
