//! Tahlil: technical-analysis engine for the Persian finance dashboard.
//!
//! Swing detection, Fibonacci retracement/extension, Gann angle levels and
//! Potential Reversal Zone (PRZ) confluence over a date-ordered price series,
//! plus the HTTP surface that serves the analysis dashboard.

pub mod analysis;
pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

pub use analysis::{perform_technical_analysis, AnalysisEngine};
pub use indicators::AnalysisError;
pub use models::{PricePoint, TechnicalAnalysis, Trend};
