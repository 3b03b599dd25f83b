//! The regression engine facade.

use crate::core::{EngineOptions, EngineOptionsBuilder, OptionsError, RegressionResult, StatsResult};
use crate::inference::compute_statistics;
use crate::solvers::fit;

/// Answers "predict y at x, with uncertainty bounds" over a bivariate
/// dataset.
///
/// The engine fits the least-squares line, evaluates it at the requested x,
/// computes the uncertainty statistics from the dataset's residuals, and
/// bundles everything into a [`RegressionResult`].
///
/// # Example
///
/// ```
/// use simple_regression::RegressionEngine;
///
/// let data = [(1.0, 2.1), (2.0, 3.9), (3.0, 6.2), (4.0, 7.8)];
///
/// let engine = RegressionEngine::builder().confidence_level(0.95).build()?;
/// let result = engine.predict(&data, 5.0)?;
///
/// let (lower, upper) = result.prediction_bounds();
/// assert!(lower <= result.prediction && result.prediction <= upper);
/// # Ok::<(), simple_regression::StatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegressionEngine {
    options: EngineOptions,
}

impl RegressionEngine {
    /// Create a new engine with the given options.
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the engine.
    pub fn builder() -> RegressionEngineBuilder {
        RegressionEngineBuilder::default()
    }

    /// Get the options this engine was built with.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Fit a line through `data` and predict y at `x` with uncertainty
    /// bounds.
    ///
    /// The whole call fails if any stage fails: a dataset too small for
    /// inference (n < 3) yields `InsufficientData` even though the line
    /// itself could be fitted — no partial result is returned. Callers who
    /// want a bare prediction without uncertainty can use [`fit`] and
    /// [`FittedLine::evaluate`](crate::FittedLine::evaluate) directly.
    ///
    /// # Errors
    /// * `StatsError::EmptyInput` if `data` has no observations.
    /// * `StatsError::InsufficientData` if n < 3.
    /// * `StatsError::DegenerateInput` if every x value is identical.
    pub fn predict(&self, data: &[(f64, f64)], x: f64) -> StatsResult<RegressionResult> {
        let line = fit(data)?;
        let prediction = line.evaluate(x);
        let stats = compute_statistics(data, &line, self.options.confidence_level)?;

        Ok(RegressionResult {
            prediction,
            prediction_interval: stats.prediction_interval,
            slope_std_error: stats.slope_std_error,
            slope_interval: stats.slope_interval,
            line,
            confidence_level: self.options.confidence_level,
            n_observations: data.len(),
        })
    }
}

/// Builder for `RegressionEngine`.
#[derive(Debug, Clone, Default)]
pub struct RegressionEngineBuilder {
    builder: EngineOptionsBuilder,
}

impl RegressionEngineBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Build the engine, validating the options.
    pub fn build(self) -> Result<RegressionEngine, OptionsError> {
        Ok(RegressionEngine::new(self.builder.build()?))
    }
}

/// Predict y at `x` with uncertainty bounds, using the default options
/// (95% confidence level).
///
/// Convenience wrapper around [`RegressionEngine::predict`].
pub fn predict(data: &[(f64, f64)], x: f64) -> StatsResult<RegressionResult> {
    RegressionEngine::default().predict(data, x)
}
