use crate::estimator::constants::DISPLAY_DECIMALS;

/// Round to the nearest integer, halves going up.
///
/// Negative halves go toward positive infinity (`-0.5` -> `0`), unlike
/// `f64::round`, which rounds them away from zero.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    if value < 0.0 {
        (value + 0.5).floor()
    } else {
        value.round()
    }
}

/// Round to two decimal places (half up).
#[inline]
pub fn round2(value: f64) -> f64 {
    let factor = 10_f64.powi(DISPLAY_DECIMALS);
    round_half_up(value * factor) / factor
}

/// Convert a whole, non-negative float to a count.
#[inline]
pub fn to_count(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value as u32
    } else {
        0
    }
}
