//! Ordinary least squares fit of a bivariate dataset.

use crate::core::{FittedLine, StatsError};

/// Fit the least-squares line through a set of `(x, y)` pairs.
///
/// Two passes over the data: the first computes the means of x and y, the
/// second accumulates the sum of deviation products Σ(x − x̄)(y − ȳ) and the
/// sum of squared x deviations Σ(x − x̄)². The slope is their ratio and the
/// intercept follows from the means.
///
/// # Errors
/// * `StatsError::EmptyInput` if `data` has no observations.
/// * `StatsError::DegenerateInput` if every x value is identical — the slope
///   is mathematically undefined and no line is produced.
///
/// # Example
///
/// ```
/// use simple_regression::fit;
///
/// let data = [(0.0, 3.0), (1.0, 5.0), (2.0, 7.0)];
/// let line = fit(&data)?;
///
/// assert!((line.slope - 2.0).abs() < 1e-12);
/// assert!((line.intercept - 3.0).abs() < 1e-12);
/// # Ok::<(), simple_regression::StatsError>(())
/// ```
pub fn fit(data: &[(f64, f64)]) -> Result<FittedLine, StatsError> {
    let n = data.len();

    if n == 0 {
        return Err(StatsError::EmptyInput);
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for &(x, y) in data {
        sum_x += x;
        sum_y += y;
    }
    let mean_x = sum_x / n as f64;
    let mean_y = sum_y / n as f64;

    let mut deviation_sum = 0.0;
    let mut ssx = 0.0;
    for &(x, y) in data {
        deviation_sum += (x - mean_x) * (y - mean_y);
        ssx += (x - mean_x).powi(2);
    }

    if ssx == 0.0 {
        return Err(StatsError::DegenerateInput);
    }

    let slope = deviation_sum / ssx;
    let intercept = mean_y - slope * mean_x;

    Ok(FittedLine { slope, intercept })
}
