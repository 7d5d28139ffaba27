//! Environment-driven configuration.

use std::env;

use tracing::warn;

use crate::indicators::prz::DEFAULT_PRZ_TOLERANCE;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HISTORY_DAYS: usize = 30;
pub const MAX_HISTORY_DAYS: usize = 365;

/// Deployment environment name (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}

pub fn get_port() -> u16 {
    parse_env("PORT").unwrap_or(DEFAULT_PORT)
}

/// Tunables for the analysis endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Relative PRZ clustering window (0.02 = 2%).
    pub tolerance: f64,
    pub default_days: usize,
    pub max_days: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_PRZ_TOLERANCE,
            default_days: DEFAULT_HISTORY_DAYS,
            max_days: MAX_HISTORY_DAYS,
        }
    }
}

impl AnalysisConfig {
    /// Read `PRZ_TOLERANCE`, `ANALYSIS_DEFAULT_DAYS` and `ANALYSIS_MAX_DAYS`,
    /// falling back to defaults for missing or malformed values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let tolerance = match parse_env::<f64>("PRZ_TOLERANCE") {
            Some(t) if t.is_finite() && t >= 0.0 => t,
            Some(t) => {
                warn!(tolerance = t, "Ignoring invalid PRZ_TOLERANCE");
                defaults.tolerance
            }
            None => defaults.tolerance,
        };

        let max_days = parse_env("ANALYSIS_MAX_DAYS")
            .filter(|d: &usize| *d > 0)
            .unwrap_or(defaults.max_days);
        let default_days = parse_env("ANALYSIS_DEFAULT_DAYS")
            .filter(|d: &usize| *d > 0)
            .unwrap_or(defaults.default_days)
            .min(max_days);

        Self {
            tolerance,
            default_days,
            max_days,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
