//! Swing high/low location

use crate::models::{PricePoint, SwingPoints};

/// Find the global swing high and low of a series.
///
/// Uses each point's `high`/`low` when present, else its `price`. The running
/// extremes start from the first point's `price` and only move on a strict
/// improvement, so ties keep the earliest occurrence. An empty series yields
/// zeroed bounds and empty dates.
pub fn find_swing_points(prices: &[PricePoint]) -> SwingPoints {
    let Some(first) = prices.first() else {
        return SwingPoints::default();
    };

    let mut swing = SwingPoints {
        high: first.price,
        low: first.price,
        high_date: first.date.clone(),
        low_date: first.date.clone(),
        high_index: 0,
        low_index: 0,
    };

    for (index, point) in prices.iter().enumerate() {
        let candidate_high = point.high_or_price();
        let candidate_low = point.low_or_price();

        if candidate_high > swing.high {
            swing.high = candidate_high;
            swing.high_date = point.date.clone();
            swing.high_index = index;
        }
        if candidate_low < swing.low {
            swing.low = candidate_low;
            swing.low_date = point.date.clone();
            swing.low_index = index;
        }
    }

    swing
}
