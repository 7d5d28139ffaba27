//! Technical analysis result types.

use serde::{Deserialize, Serialize};

use super::price::SwingSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Bullish => "bullish",
            Trend::Bearish => "bearish",
            Trend::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FibonacciKind {
    Retracement,
    Extension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevel {
    /// Ratio, e.g. 0.618
    pub level: f64,
    /// Projected price, rounded to a whole unit
    pub price: f64,
    /// Percentage label, e.g. "61.8%"
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FibonacciKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GannLevel {
    /// Geometric angle in degrees (informational)
    pub angle: f64,
    pub price: f64,
    /// Angle ratio, e.g. "1×1"
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrzStrength {
    Weak,
    Medium,
    Strong,
}

impl PrzStrength {
    /// Strength for a cluster of `count` confluent levels (count >= 2).
    pub fn from_confluences(count: usize) -> Self {
        if count >= 4 {
            PrzStrength::Strong
        } else if count == 3 {
            PrzStrength::Medium
        } else {
            PrzStrength::Weak
        }
    }
}

/// Potential Reversal Zone: a price band where several levels cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrzZone {
    pub low: f64,
    pub high: f64,
    pub strength: PrzStrength,
    pub confluences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevels {
    pub retracement: Vec<FibonacciLevel>,
    pub extension: Vec<FibonacciLevel>,
}

/// Full result of one analysis run. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    pub fibonacci: FibonacciLevels,
    pub gann: Vec<GannLevel>,
    pub prz: Vec<PrzZone>,
    pub swing: SwingSummary,
    pub trend: Trend,
}

/// Classic floor-pivot levels relative to the current price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportResistanceLevels {
    /// Below the current price, nearest first
    pub support: Vec<f64>,
    /// Above the current price, nearest first
    pub resistance: Vec<f64>,
}
