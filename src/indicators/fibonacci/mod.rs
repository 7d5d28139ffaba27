//! Fibonacci retracement and extension levels
//!
//! Retracement models a pullback inside the swing, anchored at the high in an
//! uptrend and at the low in a downtrend. Extension projects beyond the swing
//! from the opposite anchor.

use crate::common::math::round_half_up;
use crate::models::{FibonacciKind, FibonacciLevel};

pub const FIB_RETRACEMENT_RATIOS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];
pub const FIB_EXTENSION_RATIOS: [f64; 7] = [1.0, 1.272, 1.414, 1.618, 2.0, 2.618, 3.618];

/// Percentage label with one decimal, e.g. `0.618` -> `"61.8%"`.
pub fn ratio_label(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn level(ratio: f64, price: f64, kind: FibonacciKind) -> FibonacciLevel {
    FibonacciLevel {
        level: ratio,
        price: round_half_up(price),
        label: ratio_label(ratio),
        kind,
    }
}

/// Calculate retracement levels for the swing.
///
/// Uptrend: `high - range * r`. Downtrend: `low + range * r`.
pub fn calculate_fibonacci_retracement(
    swing_high: f64,
    swing_low: f64,
    is_uptrend: bool,
) -> Vec<FibonacciLevel> {
    let range = swing_high - swing_low;

    FIB_RETRACEMENT_RATIOS
        .iter()
        .map(|&r| {
            let price = if is_uptrend {
                swing_high - range * r
            } else {
                swing_low + range * r
            };
            level(r, price, FibonacciKind::Retracement)
        })
        .collect()
}

/// Calculate extension levels for the swing.
///
/// Uptrend: `low + range * r`. Downtrend: `high - range * r`.
pub fn calculate_fibonacci_extension(
    swing_high: f64,
    swing_low: f64,
    is_uptrend: bool,
) -> Vec<FibonacciLevel> {
    let range = swing_high - swing_low;

    FIB_EXTENSION_RATIOS
        .iter()
        .map(|&r| {
            let price = if is_uptrend {
                swing_low + range * r
            } else {
                swing_high - range * r
            };
            level(r, price, FibonacciKind::Extension)
        })
        .collect()
}
