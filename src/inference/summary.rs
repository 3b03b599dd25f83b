//! Residual accumulation over a fitted dataset.

use crate::core::{FittedLine, StatsError, StatsResult};

/// Sums needed by every inference computation: the residual sum of squares
/// and the sum of squared x deviations, accumulated in one walk over the
/// dataset the line was fitted on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResidualSummary {
    /// Number of observations.
    pub n: usize,
    /// Sum of squared residuals, Σ(y − ŷ)².
    pub ssr: f64,
    /// Sum of squared x deviations, Σ(x − x̄)².
    pub ssx: f64,
}

impl ResidualSummary {
    pub fn from_data(data: &[(f64, f64)], line: &FittedLine) -> StatsResult<Self> {
        let n = data.len();
        if n == 0 {
            return Err(StatsError::EmptyInput);
        }

        let mean_x = data.iter().map(|&(x, _)| x).sum::<f64>() / n as f64;

        let mut ssr = 0.0;
        let mut ssx = 0.0;
        for &(x, y) in data {
            ssr += line.residual(x, y).powi(2);
            ssx += (x - mean_x).powi(2);
        }

        Ok(Self { n, ssr, ssx })
    }

    /// Residual degrees of freedom, n − 2.
    pub fn residual_df(&self) -> f64 {
        self.n as f64 - 2.0
    }

    /// Residual standard deviation: sqrt(SSR / (n − 2)).
    ///
    /// Requires n ≥ 3 so that at least one degree of freedom remains.
    pub fn residual_std_dev(&self) -> StatsResult<f64> {
        if self.n < 3 {
            return Err(StatsError::InsufficientData {
                needed: 3,
                got: self.n,
            });
        }
        Ok((self.ssr / self.residual_df()).sqrt())
    }

    /// Standard error of the slope: s_y / sqrt(SSX).
    pub fn slope_std_error(&self) -> StatsResult<f64> {
        let sy = self.residual_std_dev()?;
        if self.ssx == 0.0 {
            return Err(StatsError::DegenerateInput);
        }
        Ok(sy / self.ssx.sqrt())
    }
}
