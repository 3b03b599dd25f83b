//! Slope inference calculations.

use crate::core::{FittedLine, StatsResult};
use crate::inference::summary::ResidualSummary;
use crate::inference::t_critical;

/// Standard error of the slope of `line` over the dataset it was fitted on.
///
/// SE(slope) = s_y / sqrt(Σ(x − x̄)²), where s_y is the residual standard
/// deviation with n − 2 degrees of freedom.
///
/// # Errors
/// * `StatsError::EmptyInput` if `data` has no observations.
/// * `StatsError::InsufficientData` if n < 3.
/// * `StatsError::DegenerateInput` if every x value is identical.
pub fn slope_standard_error(data: &[(f64, f64)], line: &FittedLine) -> StatsResult<f64> {
    ResidualSummary::from_data(data, line)?.slope_std_error()
}

/// Half-width of the confidence interval for the slope at `confidence_level`.
///
/// The interval is slope ± t · SE(slope), with t the two-tailed Student-t
/// critical value at n − 2 degrees of freedom.
pub fn slope_interval(
    data: &[(f64, f64)],
    line: &FittedLine,
    confidence_level: f64,
) -> StatsResult<f64> {
    let summary = ResidualSummary::from_data(data, line)?;
    let se = summary.slope_std_error()?;
    Ok(t_critical(summary.residual_df(), confidence_level) * se)
}
