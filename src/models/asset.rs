//! Dashboard asset catalogue and the analysis report served over HTTP.

use serde::{Deserialize, Serialize};

use super::analysis::{SupportResistanceLevels, TechnicalAnalysis};
use super::price::PricePoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisAsset {
    pub slug: String,
    pub name: String,
    pub icon: String,
}

/// Assets offered on the analysis dashboard: (slug, Persian name, icon).
pub const ANALYSIS_ASSETS: &[(&str, &str, &str)] = &[
    ("USD", "دلار آمریکا", "💵"),
    ("EUR", "یورو", "💶"),
    ("GBP", "پوند انگلیس", "💷"),
    ("AED", "درهم امارات", "🇦🇪"),
    ("geram18", "طلای ۱۸ عیار", "🥇"),
    ("geram24", "طلای ۲۴ عیار", "🏆"),
    ("SEKE_EMAMI", "سکه امامی", "🪙"),
    ("SEKE_BAHAR", "سکه بهار آزادی", "🌸"),
    ("ONS", "انس جهانی طلا", "📊"),
    ("TETHER", "تتر", "₮"),
];

pub fn analysis_assets() -> Vec<AnalysisAsset> {
    ANALYSIS_ASSETS
        .iter()
        .map(|(slug, name, icon)| AnalysisAsset {
            slug: slug.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

/// Catalogue entry for `slug`, or a generic entry named after the slug.
pub fn find_asset(slug: &str) -> AnalysisAsset {
    analysis_assets()
        .into_iter()
        .find(|a| a.slug == slug)
        .unwrap_or_else(|| AnalysisAsset {
            slug: slug.to_string(),
            name: slug.to_string(),
            icon: "📈".to_string(),
        })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub asset: AnalysisAsset,
    pub current_price: f64,
    pub historical_prices: Vec<PricePoint>,
    pub analysis: TechnicalAnalysis,
    pub support_resistance: SupportResistanceLevels,
    pub square_of_nine: Vec<f64>,
}
