//! Support and Resistance levels from floor pivots

use crate::common::math::{self, round_half_up};
use crate::models::{PricePoint, SupportResistanceLevels};

/// Calculate pivot support and resistance levels
///
/// Pivot `P = (H + L + C) / 3` over closing prices, with
/// `R1 = 2P - L`, `R2 = P + (H - L)`, `S1 = 2P - H`, `S2 = P - (H - L)`.
/// Only resistances above and supports below `current_price` are kept.
pub fn calculate_support_resistance(
    prices: &[PricePoint],
    current_price: f64,
) -> SupportResistanceLevels {
    let closes: Vec<f64> = prices.iter().map(|p| p.price).collect();
    let (Some((low, high)), Some(&close)) = (math::min_max(&closes), closes.last()) else {
        return SupportResistanceLevels::default();
    };

    let pivot = (high + low + close) / 3.0;
    let r1 = 2.0 * pivot - low;
    let r2 = pivot + (high - low);
    let s1 = 2.0 * pivot - high;
    let s2 = pivot - (high - low);

    let mut resistance: Vec<f64> = [r1, r2]
        .into_iter()
        .filter(|&r| r > current_price)
        .map(round_half_up)
        .collect();
    let mut support: Vec<f64> = [s1, s2]
        .into_iter()
        .filter(|&s| s < current_price)
        .map(round_half_up)
        .collect();

    resistance.sort_by(|a, b| a.total_cmp(b));
    support.sort_by(|a, b| b.total_cmp(a));

    SupportResistanceLevels {
        support,
        resistance,
    }
}

/// Pivot levels relative to the series' own last close
pub fn calculate_support_resistance_default(prices: &[PricePoint]) -> SupportResistanceLevels {
    match prices.last() {
        Some(last) => calculate_support_resistance(prices, last.price),
        None => SupportResistanceLevels::default(),
    }
}
