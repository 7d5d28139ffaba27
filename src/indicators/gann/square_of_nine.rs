//! Gann Square of 9
//!
//! Each 45° step around the square adds 0.125 to the square root of price.

use crate::common::math::round_half_up;

pub const SQUARE_OF_NINE_STEPS: u32 = 8;
const STEP: f64 = 0.125;

/// Levels at 45° through 360° above and below `base_price`, deduplicated and ascending.
///
/// Non-finite or non-positive prices have no square root on the wheel and
/// produce no levels.
pub fn calculate_gann_square_of_nine(base_price: f64) -> Vec<f64> {
    if !base_price.is_finite() || base_price <= 0.0 {
        return Vec::new();
    }

    let root = base_price.sqrt();
    let mut levels: Vec<f64> = (1..=SQUARE_OF_NINE_STEPS)
        .flat_map(|i| {
            let increment = i as f64 * STEP;
            [
                round_half_up((root + increment).powi(2)),
                round_half_up((root - increment).powi(2)),
            ]
        })
        .collect();

    levels.sort_by(|a, b| a.total_cmp(b));
    levels.dedup();
    levels
}
