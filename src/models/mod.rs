//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod asset;
pub mod price;

pub use analysis::{
    FibonacciKind, FibonacciLevel, FibonacciLevels, GannLevel, PrzStrength, PrzZone,
    SupportResistanceLevels, TechnicalAnalysis, Trend,
};
pub use asset::{analysis_assets, find_asset, AnalysisAsset, AnalysisReport, ANALYSIS_ASSETS};
pub use price::{PricePoint, SwingPoints, SwingSummary};
