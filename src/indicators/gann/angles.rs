//! Gann angle projection
//!
//! Levels are a static snapshot at the current bar count rather than a fan
//! that grows per elapsed bar from a pivot: `price_per_bar * bars * ratio`
//! reduces to `range * ratio`. This departs from classical Gann angle theory
//! and is kept as-is so levels line up with the Fibonacci projections.

use crate::common::math::round_half_up;
use crate::models::GannLevel;

/// A fixed Gann angle: price/time ratio, display label, geometric degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GannAngle {
    pub ratio: f64,
    pub label: &'static str,
    pub degrees: f64,
}

pub const GANN_ANGLES: [GannAngle; 9] = [
    GannAngle { ratio: 1.0 / 8.0, label: "1×8", degrees: 82.5 },
    GannAngle { ratio: 1.0 / 4.0, label: "1×4", degrees: 75.0 },
    GannAngle { ratio: 1.0 / 3.0, label: "1×3", degrees: 71.25 },
    GannAngle { ratio: 1.0 / 2.0, label: "1×2", degrees: 63.75 },
    GannAngle { ratio: 1.0, label: "1×1", degrees: 45.0 },
    GannAngle { ratio: 2.0, label: "2×1", degrees: 26.25 },
    GannAngle { ratio: 3.0, label: "3×1", degrees: 18.75 },
    GannAngle { ratio: 4.0, label: "4×1", degrees: 15.0 },
    GannAngle { ratio: 8.0, label: "8×1", degrees: 7.5 },
];

/// Project a level for every angle in [`GANN_ANGLES`].
///
/// Anchored at the swing low in an uptrend (moving up) and at the swing high
/// otherwise (moving down). A zero bar count has no price-per-bar and yields
/// no levels.
pub fn calculate_gann_levels(
    swing_high: f64,
    swing_low: f64,
    bars_count: usize,
    is_uptrend: bool,
) -> Vec<GannLevel> {
    if bars_count == 0 {
        return Vec::new();
    }

    let price_range = swing_high - swing_low;
    let base_price = if is_uptrend { swing_low } else { swing_high };
    let bars = bars_count as f64;
    let price_per_bar = price_range / bars;

    GANN_ANGLES
        .iter()
        .map(|angle| {
            let price_move = price_per_bar * bars * angle.ratio;
            let price = if is_uptrend {
                base_price + price_move
            } else {
                base_price - price_move
            };
            GannLevel {
                angle: angle.degrees,
                price: round_half_up(price),
                label: angle.label.to_string(),
            }
        })
        .collect()
}
