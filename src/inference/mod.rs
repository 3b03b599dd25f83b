//! Statistical inference (standard errors and confidence intervals).

mod prediction;
mod slope;
mod summary;

pub use prediction::prediction_interval;
pub use slope::{slope_interval, slope_standard_error};

use crate::core::{FittedLine, LineStatistics, StatsResult};
use statrs::distribution::{ContinuousCDF, StudentsT};
use summary::ResidualSummary;

/// Two-tailed Student-t critical value for the given degrees of freedom and
/// confidence level.
///
/// Returns NaN when `df` is not positive; callers validating their inputs
/// (as every operation in this crate does) never hit that case.
pub fn t_critical(df: f64, confidence_level: f64) -> f64 {
    if df <= 0.0 {
        return f64::NAN;
    }

    let t_dist = StudentsT::new(0.0, 1.0, df).expect("valid t-distribution parameters");
    let alpha = 1.0 - confidence_level;
    t_dist.inverse_cdf(1.0 - alpha / 2.0)
}

/// Compute all uncertainty statistics for `line` over the dataset it was
/// fitted on, at `confidence_level`.
///
/// Residuals and x deviations are accumulated in a single walk over the
/// data; the slope standard error and both interval half-widths are derived
/// from those sums.
///
/// # Errors
/// * `StatsError::EmptyInput` if `data` has no observations.
/// * `StatsError::InsufficientData` if n < 3 (the residual standard
///   deviation needs n − 2 ≥ 1 degrees of freedom).
/// * `StatsError::DegenerateInput` if every x value is identical.
pub fn compute_statistics(
    data: &[(f64, f64)],
    line: &FittedLine,
    confidence_level: f64,
) -> StatsResult<LineStatistics> {
    let summary = ResidualSummary::from_data(data, line)?;

    let residual_std_dev = summary.residual_std_dev()?;
    let slope_std_error = summary.slope_std_error()?;
    let t_crit = t_critical(summary.residual_df(), confidence_level);

    Ok(LineStatistics {
        residual_std_dev,
        slope_std_error,
        slope_interval: t_crit * slope_std_error,
        prediction_interval: t_crit * residual_std_dev / (summary.n as f64).sqrt(),
    })
}
