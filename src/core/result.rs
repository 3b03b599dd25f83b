//! Regression result structures.

use super::line::FittedLine;

/// Uncertainty statistics for a fitted line, derived from the residuals of
/// the dataset it was fitted on.
///
/// All interval fields are half-widths: the interval around an estimate `e`
/// is `e ± field`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStatistics {
    /// Residual standard deviation: sqrt(SSR / (n − 2)).
    pub residual_std_dev: f64,

    /// Standard error of the slope estimate.
    pub slope_std_error: f64,

    /// Half-width of the confidence interval for the slope.
    pub slope_interval: f64,

    /// Half-width of the confidence interval for a prediction.
    pub prediction_interval: f64,
}

/// Complete result of a prediction with uncertainty bounds.
///
/// A plain value object: constructed once by the engine and never updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult {
    /// Predicted y at the requested x.
    pub prediction: f64,

    /// Half-width of the confidence interval around `prediction`.
    pub prediction_interval: f64,

    /// Standard error of the slope estimate.
    pub slope_std_error: f64,

    /// Half-width of the confidence interval around the slope.
    pub slope_interval: f64,

    /// The line the prediction was made from.
    pub line: FittedLine,

    /// Confidence level the intervals were computed at.
    pub confidence_level: f64,

    /// Number of observations in the dataset.
    pub n_observations: usize,
}

impl RegressionResult {
    /// Lower and upper bounds of the prediction confidence interval.
    pub fn prediction_bounds(&self) -> (f64, f64) {
        (
            self.prediction - self.prediction_interval,
            self.prediction + self.prediction_interval,
        )
    }

    /// Lower and upper bounds of the slope confidence interval.
    pub fn slope_bounds(&self) -> (f64, f64) {
        (
            self.line.slope - self.slope_interval,
            self.line.slope + self.slope_interval,
        )
    }

    /// Residual degrees of freedom (n − 2).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(2)
    }
}
