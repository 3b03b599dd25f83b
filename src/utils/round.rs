//! Parameterized decimal rounding.

/// Round `value` to `places` decimal digits, rounding up when the fractional
/// part at that precision is at least `round_on`.
///
/// `round_to(v, 0.5, p)` gives conventional round-half-up; other thresholds
/// bias the rounding (`round_on = 0.0` always rounds up, `round_on = 1.0`
/// always truncates). Negative values floor toward negative infinity when
/// below the threshold, so `round_to(-2.5, 0.5, 0)` is −3.
///
/// Pure and total for finite input.
pub fn round_to(value: f64, round_on: f64, places: i32) -> f64 {
    let pow = 10f64.powi(places);
    let digit = pow * value;
    let fraction = digit.fract();

    let rounded = if fraction >= round_on {
        digit.ceil()
    } else {
        digit.floor()
    };

    rounded / pow
}
