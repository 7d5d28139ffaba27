//! Unit tests for the synthetic history provider

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tahlil::analysis::AnalysisEngine;
use tahlil::indicators::AnalysisError;
use tahlil::services::{
    generate_history, price_decimals, PriceHistoryProvider, SyntheticHistoryProvider,
};

fn provider() -> SyntheticHistoryProvider {
    SyntheticHistoryProvider::new()
        .with_seed(42)
        .with_today(NaiveDate::from_ymd_opt(2025, 3, 22).unwrap())
}

#[test]
fn test_history_length_and_dates() {
    let history = provider().price_history("USD", 850_000.0, 30).unwrap();
    assert_eq!(history.len(), 30);
    assert_eq!(history.last().unwrap().date, "1404/01/02");
    assert!(history.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_history_bounds_bracket_price() {
    let history = provider().price_history("geram18", 6_500_000.0, 60).unwrap();
    for point in &history {
        assert!(point.price > 0.0);
        assert!(point.high.unwrap() >= point.price);
        assert!(point.low.unwrap() <= point.price);
        assert_eq!(point.price.fract(), 0.0);
    }
}

#[test]
fn test_seeded_history_reproducible() {
    let first = provider().price_history("EUR", 920_000.0, 30).unwrap();
    let second = provider().price_history("EUR", 920_000.0, 30).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_walk_starts_below_current_price() {
    let dates = vec!["1404/01/01".to_string()];
    let mut rng = StdRng::seed_from_u64(1);
    let history = generate_history(&mut rng, 1_000.0, &dates);
    // 950 start, one step of at most +/-11
    assert!(history[0].price >= 939.0 && history[0].price <= 961.0);
}

#[test]
fn test_invalid_current_price_rejected() {
    let err = provider().price_history("USD", -5.0, 30).unwrap_err();
    assert_eq!(err, AnalysisError::InvalidPrice { index: 0, value: -5.0 });
}

#[test]
fn test_zero_days_is_empty() {
    assert!(provider().price_history("USD", 850_000.0, 0).unwrap().is_empty());
}

#[test]
fn test_price_decimals_by_magnitude() {
    assert_eq!(price_decimals(850_000.0), 0);
    assert_eq!(price_decimals(100.0), 0);
    assert_eq!(price_decimals(42.0), 1);
    assert_eq!(price_decimals(1.2), 2);
    assert_eq!(price_decimals(0.5), 3);
}

#[test]
fn test_sub_unit_history_stays_positive_and_analyzable() {
    for current in [0.5, 0.9, 1.2] {
        let history = provider().price_history("TETHER", current, 30).unwrap();
        for point in &history {
            assert!(point.price > 0.0, "price {} at current {}", point.price, current);
            assert!(point.low.unwrap() > 0.0);
            assert!(point.high.unwrap() >= point.price);
            assert!(point.low.unwrap() <= point.price);
        }
        assert!(history.iter().any(|p| p.price.fract() != 0.0));
        assert!(AnalysisEngine::new().analyze(&history).is_ok());
    }
}
