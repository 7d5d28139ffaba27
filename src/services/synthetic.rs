//! Synthetic random-walk history seeded from the live price.
//!
//! Stands in for real historical closes: starts 5% under the current price and
//! walks with a slight upward bias, one point per Jalali calendar day.

use chrono::{FixedOffset, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::common::jalali::jalali_dates;
use crate::common::math::round_half_up;
use crate::indicators::AnalysisError;
use crate::models::PricePoint;

use super::market_data::PriceHistoryProvider;

/// Tehran standard time, UTC+03:30.
const TEHRAN_OFFSET_SECS: i32 = 3 * 3600 + 30 * 60;

const START_DISCOUNT: f64 = 0.95;
const DAILY_VOLATILITY: f64 = 0.02;
const UPWARD_BIAS: f64 = 0.45;
const MAX_DECIMALS: i32 = 8;

#[derive(Debug, Clone, Default)]
pub struct SyntheticHistoryProvider {
    seed: Option<u64>,
    today: Option<NaiveDate>,
}

impl SyntheticHistoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed seed for reproducible series.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the last date of the series instead of using today in Tehran.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| match FixedOffset::east_opt(TEHRAN_OFFSET_SECS) {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Utc::now().date_naive(),
        })
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// Decimal places kept for generated prices.
///
/// Whole units from 100 upward; cheaper assets keep three significant digits
/// so sub-unit prices never round down to zero.
pub fn price_decimals(current_price: f64) -> i32 {
    if current_price >= 100.0 {
        0
    } else {
        (2 - current_price.log10().floor() as i32).clamp(0, MAX_DECIMALS)
    }
}

fn quantize(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = round_half_up(value * scale) / scale;
    if rounded > 0.0 {
        rounded
    } else {
        value
    }
}

/// Random walk over `dates` around `current_price`.
pub fn generate_history<R: Rng + ?Sized>(
    rng: &mut R,
    current_price: f64,
    dates: &[String],
) -> Vec<PricePoint> {
    let volatility = current_price * DAILY_VOLATILITY;
    let decimals = price_decimals(current_price);
    let mut price = current_price * START_DISCOUNT;

    dates
        .iter()
        .map(|date| {
            price += (rng.random::<f64>() - UPWARD_BIAS) * volatility;
            let high = price + rng.random::<f64>() * volatility * 0.5;
            let low = price - rng.random::<f64>() * volatility * 0.5;

            PricePoint::new(date.clone(), quantize(price, decimals))
                .with_range(quantize(high, decimals), quantize(low, decimals))
        })
        .collect()
}

impl PriceHistoryProvider for SyntheticHistoryProvider {
    fn price_history(
        &self,
        slug: &str,
        current_price: f64,
        days: usize,
    ) -> Result<Vec<PricePoint>, AnalysisError> {
        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(AnalysisError::InvalidPrice {
                index: 0,
                value: current_price,
            });
        }

        let dates = jalali_dates(self.today(), days);
        let history = generate_history(&mut self.rng(), current_price, &dates);

        debug!(slug, days, points = history.len(), "Generated synthetic history");
        Ok(history)
    }

    fn name(&self) -> &'static str {
        "synthetic"
    }
}
