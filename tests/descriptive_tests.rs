//! Descriptive statistics tests.

mod common;

use approx::assert_relative_eq;
use simple_regression::{mean, standard_deviation, variance, Correction, StatsError};

// ============================================================================
// Mean
// ============================================================================

#[test]
fn test_mean_basic() {
    assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5, epsilon = 1e-12);
}

#[test]
fn test_mean_single_element() {
    assert_relative_eq!(mean(&[7.5]).unwrap(), 7.5, epsilon = 1e-12);
}

#[test]
fn test_mean_empty_fails() {
    assert!(matches!(mean(&[]), Err(StatsError::EmptyInput)));
}

// ============================================================================
// Variance
// ============================================================================

#[test]
fn test_population_variance_known_value() {
    // Deviations from mean 5 are ±3 and ±1; squares sum to 20.
    let sample = [2.0, 4.0, 6.0, 8.0];
    assert_relative_eq!(
        variance(&sample, Correction::Population).unwrap(),
        5.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_bessel_relation() {
    // variance(s, Sample) = variance(s, Population) · N / (N − 1)
    let samples: [&[f64]; 3] = [
        &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0],
        &[1.0, 1.0, 1.0, 1.0],
        &[-3.5, 0.0, 12.25],
    ];

    for sample in samples {
        let n = sample.len() as f64;
        let population = variance(sample, Correction::Population).unwrap();
        let corrected = variance(sample, Correction::Sample).unwrap();
        assert_relative_eq!(corrected, population * n / (n - 1.0), epsilon = 1e-12);
    }
}

#[test]
fn test_variance_empty_fails() {
    assert!(matches!(
        variance(&[], Correction::Population),
        Err(StatsError::EmptyInput)
    ));
    assert!(matches!(
        variance(&[], Correction::Sample),
        Err(StatsError::EmptyInput)
    ));
}

#[test]
fn test_constant_sample_has_zero_variance() {
    let sample = [4.2, 4.2, 4.2, 4.2, 4.2];
    assert_relative_eq!(
        variance(&sample, Correction::Population).unwrap(),
        0.0,
        epsilon = 1e-15
    );
    assert_relative_eq!(
        variance(&sample, Correction::Sample).unwrap(),
        0.0,
        epsilon = 1e-15
    );
}

// ============================================================================
// Standard Deviation
// ============================================================================

#[test]
fn test_standard_deviation_is_sqrt_of_variance() {
    let data = common::weight_height_data();
    let heights: Vec<f64> = data.iter().map(|&(x, _)| x).collect();

    for correction in [Correction::Population, Correction::Sample] {
        let v = variance(&heights, correction).unwrap();
        let sd = standard_deviation(&heights, correction).unwrap();
        assert_relative_eq!(sd, v.sqrt(), epsilon = 1e-12);
    }
}

#[test]
fn test_standard_deviation_known_value() {
    // Population SD of [2, 4, 6, 8] is sqrt(5).
    let sample = [2.0, 4.0, 6.0, 8.0];
    assert_relative_eq!(
        standard_deviation(&sample, Correction::Population).unwrap(),
        5.0f64.sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn test_standard_deviation_empty_fails() {
    assert!(matches!(
        standard_deviation(&[], Correction::Population),
        Err(StatsError::EmptyInput)
    ));
}
