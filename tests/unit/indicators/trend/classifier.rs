//! Unit tests for trend classification

use tahlil::indicators::trend::determine_trend;
use tahlil::models::{PricePoint, Trend};

fn series(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PricePoint::new(format!("1404/10/{:02}", i + 1), p))
        .collect()
}

#[test]
fn test_single_point_is_neutral() {
    assert_eq!(determine_trend(&series(&[500.0]), 1000.0, 100.0), Trend::Neutral);
}

#[test]
fn test_empty_is_neutral() {
    assert_eq!(determine_trend(&[], 120.0, 90.0), Trend::Neutral);
}

#[test]
fn test_two_points_are_classified() {
    assert_eq!(determine_trend(&series(&[90.0, 120.0]), 120.0, 90.0), Trend::Bullish);
    assert_eq!(determine_trend(&series(&[120.0, 90.0]), 120.0, 90.0), Trend::Bearish);
}

#[test]
fn test_midpoint_is_neutral() {
    assert_eq!(
        determine_trend(&series(&[90.0, 110.0, 100.0]), 110.0, 90.0),
        Trend::Neutral
    );
}

#[test]
fn test_bullish_above_band() {
    assert_eq!(
        determine_trend(&series(&[100.0, 90.0, 120.0]), 120.0, 90.0),
        Trend::Bullish
    );
}

#[test]
fn test_bearish_below_band() {
    assert_eq!(determine_trend(&series(&[120.0, 90.0]), 120.0, 90.0), Trend::Bearish);
}

#[test]
fn test_band_edge_is_neutral() {
    // mid 150, band 10: exactly 160 stays neutral, 161 turns bullish
    assert_eq!(
        determine_trend(&series(&[100.0, 200.0, 160.0]), 200.0, 100.0),
        Trend::Neutral
    );
    assert_eq!(
        determine_trend(&series(&[100.0, 200.0, 161.0]), 200.0, 100.0),
        Trend::Bullish
    );
    assert_eq!(
        determine_trend(&series(&[100.0, 200.0, 140.0]), 200.0, 100.0),
        Trend::Neutral
    );
    assert_eq!(
        determine_trend(&series(&[100.0, 200.0, 139.0]), 200.0, 100.0),
        Trend::Bearish
    );
}
