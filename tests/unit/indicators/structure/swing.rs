//! Unit tests for swing point detection

use tahlil::indicators::structure::find_swing_points;
use tahlil::models::PricePoint;

fn series(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PricePoint::new(format!("1404/10/{:02}", i + 1), p))
        .collect()
}

#[test]
fn test_swing_from_closing_prices() {
    let swing = find_swing_points(&series(&[100.0, 90.0, 120.0]));
    assert_eq!(swing.high, 120.0);
    assert_eq!(swing.high_index, 2);
    assert_eq!(swing.high_date, "1404/10/03");
    assert_eq!(swing.low, 90.0);
    assert_eq!(swing.low_index, 1);
    assert_eq!(swing.low_date, "1404/10/02");
}

#[test]
fn test_swing_prefers_intraday_bounds() {
    let prices = vec![
        PricePoint::new("1404/10/01", 100.0).with_range(105.0, 95.0),
        PricePoint::new("1404/10/02", 102.0).with_range(110.0, 99.0),
        PricePoint::new("1404/10/03", 101.0).with_range(110.0, 94.0),
    ];
    let swing = find_swing_points(&prices);
    assert_eq!(swing.high, 110.0);
    assert_eq!(swing.high_index, 1);
    assert_eq!(swing.low, 94.0);
    assert_eq!(swing.low_index, 2);
}

#[test]
fn test_swing_ties_keep_first_occurrence() {
    let swing = find_swing_points(&series(&[100.0, 120.0, 120.0, 90.0, 90.0]));
    assert_eq!(swing.high_index, 1);
    assert_eq!(swing.low_index, 3);
}

#[test]
fn test_swing_first_point_intraday_high() {
    let prices = vec![
        PricePoint::new("1404/10/01", 100.0).with_range(105.0, 100.0),
        PricePoint::new("1404/10/02", 101.0),
    ];
    let swing = find_swing_points(&prices);
    assert_eq!(swing.high, 105.0);
    assert_eq!(swing.high_index, 0);
    assert_eq!(swing.low, 100.0);
}

#[test]
fn test_swing_empty_series() {
    let swing = find_swing_points(&[]);
    assert_eq!(swing.high, 0.0);
    assert_eq!(swing.low, 0.0);
    assert!(swing.high_date.is_empty());
    assert!(swing.low_date.is_empty());
}

#[test]
fn test_swing_single_point_has_zero_range() {
    let swing = find_swing_points(&series(&[250.0]));
    assert_eq!(swing.high, swing.low);
    assert_eq!(swing.range(), 0.0);
}

#[test]
fn test_swing_matches_series_extremes() {
    let values = [310.0, 295.5, 330.25, 301.0, 288.0, 329.0, 288.0, 315.0];
    let swing = find_swing_points(&series(&values));
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    let min = values.iter().cloned().fold(f64::MAX, f64::min);
    assert_eq!(swing.high, max);
    assert_eq!(swing.low, min);
    assert_eq!(swing.high_index, 2);
    assert_eq!(swing.low_index, 4);
}
