//! Descriptive statistics and simple linear regression with inferential
//! statistics.
//!
//! This library computes mean, variance, and standard deviation over small
//! in-memory samples, and fits ordinary-least-squares lines through
//! bivariate datasets with full uncertainty quantification: the standard
//! error and confidence interval of the slope, and the confidence interval
//! of a prediction. Critical values come from the Student-t distribution at
//! n − 2 degrees of freedom rather than fixed table constants.
//!
//! All operations are pure functions over immutable input slices; failures
//! (empty input, too few points for inference, zero variance in x) are
//! explicit error values, never NaN sentinels.
//!
//! # Example
//!
//! ```rust
//! use simple_regression::prelude::*;
//!
//! let data = [(1.0, 2.1), (2.0, 3.9), (3.0, 6.2), (4.0, 7.8)];
//!
//! // Fit and extrapolate by hand...
//! let line = fit(&data)?;
//! let y = line.evaluate(5.0);
//!
//! // ...or let the engine bundle prediction and uncertainty.
//! let result = RegressionEngine::builder()
//!     .confidence_level(0.95)
//!     .build()?
//!     .predict(&data, 5.0)?;
//!
//! assert_eq!(result.prediction, y);
//! println!("y = {:.2} ± {:.2}", result.prediction, result.prediction_interval);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod descriptive;
pub mod engine;
pub mod inference;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        EngineOptions, EngineOptionsBuilder, FittedLine, LineStatistics, OptionsError,
        RegressionResult, StatsError, StatsResult,
    };
    pub use crate::descriptive::{mean, standard_deviation, variance, Correction};
    pub use crate::engine::{predict, RegressionEngine, RegressionEngineBuilder};
    pub use crate::inference::{
        compute_statistics, prediction_interval, slope_interval, slope_standard_error,
    };
    pub use crate::solvers::fit;
    pub use crate::utils::round_to;
}

pub use crate::core::{
    EngineOptions, EngineOptionsBuilder, FittedLine, LineStatistics, OptionsError,
    RegressionResult, StatsError, StatsResult,
};
pub use crate::descriptive::{mean, standard_deviation, variance, Correction};
pub use crate::engine::{predict, RegressionEngine, RegressionEngineBuilder};
pub use crate::solvers::fit;
pub use crate::utils::round_to;
