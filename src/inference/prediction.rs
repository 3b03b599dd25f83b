//! Prediction interval calculations.

use crate::core::{FittedLine, StatsResult};
use crate::inference::summary::ResidualSummary;
use crate::inference::t_critical;

/// Half-width of the confidence interval for a prediction made from `line`,
/// at `confidence_level`.
///
/// The interval is ŷ ± t · s_y / sqrt(n), with s_y the residual standard
/// deviation and t the two-tailed Student-t critical value at n − 2 degrees
/// of freedom.
///
/// # Errors
/// * `StatsError::EmptyInput` if `data` has no observations.
/// * `StatsError::InsufficientData` if n < 3.
pub fn prediction_interval(
    data: &[(f64, f64)],
    line: &FittedLine,
    confidence_level: f64,
) -> StatsResult<f64> {
    let summary = ResidualSummary::from_data(data, line)?;
    let sy = summary.residual_std_dev()?;
    Ok(t_critical(summary.residual_df(), confidence_level) * sy / (summary.n as f64).sqrt())
}
