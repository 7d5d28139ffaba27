//! Price history provider interface.

use crate::indicators::AnalysisError;
use crate::models::PricePoint;

pub trait PriceHistoryProvider: Send + Sync {
    /// Date-ascending history for `slug` covering the last `days` days,
    /// ending at `current_price`'s day.
    fn price_history(
        &self,
        slug: &str,
        current_price: f64,
        days: usize,
    ) -> Result<Vec<PricePoint>, AnalysisError>;

    fn name(&self) -> &'static str;
}
