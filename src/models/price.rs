use serde::{Deserialize, Serialize};

/// One observation in a date-ascending price series.
///
/// `date` is a Jalali `YYYY/MM/DD` string in practice; the engine only relies on
/// the series being ordered oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
            high: None,
            low: None,
        }
    }

    pub fn with_range(mut self, high: f64, low: f64) -> Self {
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    /// Intraday high, or the reference price when no high was recorded.
    pub fn high_or_price(&self) -> f64 {
        self.high.unwrap_or(self.price)
    }

    /// Intraday low, or the reference price when no low was recorded.
    pub fn low_or_price(&self) -> f64 {
        self.low.unwrap_or(self.price)
    }
}

/// Extremes of a series together with where they occurred.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwingPoints {
    pub high: f64,
    pub low: f64,
    pub high_date: String,
    pub low_date: String,
    pub high_index: usize,
    pub low_index: usize,
}

impl SwingPoints {
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

/// Swing bounds as exposed in an analysis result (no positions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingSummary {
    pub high: f64,
    pub low: f64,
    pub high_date: String,
    pub low_date: String,
}

impl From<&SwingPoints> for SwingSummary {
    fn from(swing: &SwingPoints) -> Self {
        Self {
            high: swing.high,
            low: swing.low,
            high_date: swing.high_date.clone(),
            low_date: swing.low_date.clone(),
        }
    }
}
