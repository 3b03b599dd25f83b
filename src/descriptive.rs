//! Descriptive statistics: mean, variance, standard deviation.

use crate::core::{StatsError, StatsResult};

/// Divisor used when computing variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Correction {
    /// Divide by N: the sample is the complete population.
    Population,

    /// Divide by N − 1 (Bessel's correction): the sample is a subset of a
    /// larger population.
    #[default]
    Sample,
}

/// Arithmetic mean of a sample.
///
/// # Errors
/// `StatsError::EmptyInput` if the sample is empty.
pub fn mean(sample: &[f64]) -> StatsResult<f64> {
    if sample.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Variance of a sample: the sum of squared deviations from the mean,
/// divided by N or N − 1 per `correction`.
///
/// With `Correction::Sample` and a single observation the divisor N − 1 is
/// zero and the result is infinite; callers wanting a finite value for one
/// point should use `Correction::Population`.
///
/// # Errors
/// `StatsError::EmptyInput` if the sample is empty.
pub fn variance(sample: &[f64], correction: Correction) -> StatsResult<f64> {
    let n = sample.len();
    if n == 0 {
        return Err(StatsError::EmptyInput);
    }

    let x_bar = mean(sample)?;
    let sum_sq: f64 = sample.iter().map(|&x| (x - x_bar).powi(2)).sum();

    let divisor = match correction {
        Correction::Population => n as f64,
        Correction::Sample => n as f64 - 1.0,
    };

    Ok(sum_sq / divisor)
}

/// Standard deviation of a sample: the square root of [`variance`].
///
/// # Errors
/// `StatsError::EmptyInput` if the sample is empty.
pub fn standard_deviation(sample: &[f64], correction: Correction) -> StatsResult<f64> {
    Ok(variance(sample, correction)?.sqrt())
}
