//! Rounding helpers
//!
//! Half-up rounding shared by the nutrient scaler and the profile normalizer.

/// Round to the nearest integer, ties toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. NaN and infinities are returned unchanged.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // exact for finite values; NaN for infinities, which fails the comparison
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to `decimals` places: scale by `10^decimals`, round half-up, scale back.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return round_half_up(value);
    }
    let scale = 10f64.powi(decimals as i32);
    round_half_up(value * scale) / scale
}
