//! Engine options and configuration.

use thiserror::Error;

/// Configuration options for the regression engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Confidence level for confidence intervals (default: 0.95).
    pub confidence_level: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }
}

/// Errors that can occur when validating engine options.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptionsError {
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
}

impl EngineOptions {
    /// Create a new builder for engine options.
    pub fn builder() -> EngineOptionsBuilder {
        EngineOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        Ok(())
    }
}

/// Builder for `EngineOptions`.
#[derive(Debug, Clone, Default)]
pub struct EngineOptionsBuilder {
    options: EngineOptions,
}

impl EngineOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<EngineOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> EngineOptions {
        self.options
    }
}
