//! Common test utilities and data generators.

/// Weight (y) against height (x) for ten adults, the reference dataset used
/// across the integration tests.
///
/// Fitted by least squares it gives slope ≈ 6.1376, intercept ≈ −266.5344,
/// residual std dev ≈ 8.6414 (df = 8).
pub fn weight_height_data() -> Vec<(f64, f64)> {
    vec![
        (63.0, 127.0),
        (64.0, 121.0),
        (66.0, 142.0),
        (69.0, 157.0),
        (69.0, 162.0),
        (71.0, 156.0),
        (71.0, 169.0),
        (72.0, 165.0),
        (73.0, 181.0),
        (75.0, 208.0),
    ]
}

/// Generate `n` points exactly on the line y = slope·x + intercept.
pub fn perfect_line_data(slope: f64, intercept: f64, n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            (x, slope * x + intercept)
        })
        .collect()
}

/// Generate `n` points on y = slope·x + intercept plus deterministic noise
/// of roughly `noise_scale` amplitude.
pub fn noisy_line_data(
    slope: f64,
    intercept: f64,
    n: usize,
    noise_scale: f64,
    seed: u64,
) -> Vec<(f64, f64)> {
    // Simple deterministic "random" for reproducibility
    let mut state = seed;
    let mut next_rand = || -> f64 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    (0..n)
        .map(|i| {
            let x = i as f64;
            (x, slope * x + intercept + noise_scale * next_rand())
        })
        .collect()
}

/// Sum of squared residuals of `data` against an arbitrary line.
pub fn sum_squared_residuals(data: &[(f64, f64)], slope: f64, intercept: f64) -> f64 {
    data.iter()
        .map(|&(x, y)| (y - (slope * x + intercept)).powi(2))
        .sum()
}
