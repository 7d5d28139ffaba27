//! Technical analysis engine: swing -> trend -> {Fibonacci, Gann} -> PRZ.

use tracing::debug;

use crate::indicators::{
    calculate_fibonacci_extension, calculate_fibonacci_retracement, calculate_gann_levels,
    determine_trend, find_prz, find_swing_points, AnalysisError, DEFAULT_PRZ_TOLERANCE,
};
use crate::models::{FibonacciLevels, PricePoint, SwingPoints, TechnicalAnalysis, Trend};

/// Configured orchestrator. Stateless between calls and safe to share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisEngine {
    tolerance: f64,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_PRZ_TOLERANCE,
        }
    }
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom PRZ tolerance (fraction of the anchor price).
    pub fn with_tolerance(tolerance: f64) -> Result<Self, AnalysisError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(AnalysisError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Run the full analysis over a date-ascending series.
    ///
    /// Rejects empty series and non-finite or non-positive values before any
    /// computation. Ordering is assumed, not checked: callers sort by date.
    pub fn analyze(&self, prices: &[PricePoint]) -> Result<TechnicalAnalysis, AnalysisError> {
        validate_series(prices)?;

        let swing = find_swing_points(prices);
        let trend = determine_trend(prices, swing.high, swing.low);
        let is_uptrend = anchor_is_uptrend(trend, &swing);

        let retracement = calculate_fibonacci_retracement(swing.high, swing.low, is_uptrend);
        let extension = calculate_fibonacci_extension(swing.high, swing.low, is_uptrend);
        let gann = calculate_gann_levels(swing.high, swing.low, prices.len(), is_uptrend);
        let prz = find_prz(&retracement, &extension, &gann, self.tolerance);

        debug!(
            bars = prices.len(),
            swing_high = swing.high,
            swing_low = swing.low,
            trend = %trend,
            is_uptrend,
            zones = prz.len(),
            "Technical analysis complete"
        );

        Ok(TechnicalAnalysis {
            fibonacci: FibonacciLevels {
                retracement,
                extension,
            },
            gann,
            prz,
            swing: (&swing).into(),
            trend,
        })
    }
}

/// Anchor direction for Fibonacci/Gann projections.
///
/// A bullish label or a high that occurs after the low both count as up, so a
/// neutral series whose high came last is still projected upward.
pub fn anchor_is_uptrend(trend: Trend, swing: &SwingPoints) -> bool {
    trend == Trend::Bullish || swing.high_index > swing.low_index
}

/// Input checks applied before analysis.
pub fn validate_series(prices: &[PricePoint]) -> Result<(), AnalysisError> {
    if prices.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }

    for (index, point) in prices.iter().enumerate() {
        for value in [Some(point.price), point.high, point.low].into_iter().flatten() {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalysisError::InvalidPrice { index, value });
            }
        }
    }

    Ok(())
}

/// Analyze with the default 2% PRZ tolerance.
pub fn perform_technical_analysis(
    prices: &[PricePoint],
) -> Result<TechnicalAnalysis, AnalysisError> {
    AnalysisEngine::default().analyze(prices)
}
