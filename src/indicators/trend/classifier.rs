use crate::models::{PricePoint, Trend};

/// Half-width of the neutral band around the swing midpoint, as a fraction of the range.
pub const NEUTRAL_BAND: f64 = 0.1;

/// Classify the series by where its last price sits relative to the swing midpoint.
///
/// Bullish above `mid + 10% range`, bearish below `mid - 10% range`, neutral
/// inside the band. Fewer than two points is always neutral.
pub fn determine_trend(prices: &[PricePoint], swing_high: f64, swing_low: f64) -> Trend {
    let [_, .., last] = prices else {
        return Trend::Neutral;
    };

    let current = last.price;
    let mid = (swing_high + swing_low) / 2.0;
    let band = (swing_high - swing_low) * NEUTRAL_BAND;

    if current > mid + band {
        Trend::Bullish
    } else if current < mid - band {
        Trend::Bearish
    } else {
        Trend::Neutral
    }
}
