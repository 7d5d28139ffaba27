//! Unit tests for PRZ confluence detection

use std::collections::HashSet;

use tahlil::indicators::fibonacci::{
    calculate_fibonacci_extension, calculate_fibonacci_retracement, ratio_label,
};
use tahlil::indicators::gann::calculate_gann_levels;
use tahlil::indicators::prz::{find_prz, find_prz_default};
use tahlil::models::{FibonacciKind, FibonacciLevel, GannLevel, PrzStrength};

fn retracement(level: f64, price: f64) -> FibonacciLevel {
    FibonacciLevel {
        level,
        price,
        label: ratio_label(level),
        kind: FibonacciKind::Retracement,
    }
}

fn extension(level: f64, price: f64) -> FibonacciLevel {
    FibonacciLevel {
        level,
        price,
        label: ratio_label(level),
        kind: FibonacciKind::Extension,
    }
}

fn gann(label: &str, price: f64) -> GannLevel {
    GannLevel {
        angle: 45.0,
        price,
        label: label.to_string(),
    }
}

#[test]
fn test_window_anchored_at_lowest_level() {
    // 103 is 1.5 from 101.5 but 3 from the 100 anchor, so it stays out
    let fib = vec![retracement(0.5, 100.0), retracement(0.618, 101.5)];
    let ext = vec![extension(1.272, 103.0)];
    let zones = find_prz(&fib, &ext, &[], 0.02);

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].low, 100.0);
    assert_eq!(zones[0].high, 101.5);
    assert_eq!(zones[0].strength, PrzStrength::Weak);
    assert_eq!(zones[0].confluences, vec!["فیبو 50.0%", "فیبو 61.8%"]);
}

#[test]
fn test_singleton_skipped_and_neighbour_retried() {
    let fib = vec![retracement(0.5, 100.0)];
    let ext = vec![extension(1.618, 103.0)];
    let gann_levels = vec![gann("1×1", 104.0)];
    let zones = find_prz(&fib, &ext, &gann_levels, 0.02);

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].low, 103.0);
    assert_eq!(zones[0].high, 104.0);
    assert_eq!(zones[0].confluences, vec!["اکستنشن 161.8%", "گن 1×1"]);
}

#[test]
fn test_strength_by_confluence_count() {
    let medium = find_prz(
        &[retracement(0.5, 200.0)],
        &[extension(1.0, 201.0)],
        &[gann("1×1", 202.0)],
        0.02,
    );
    assert_eq!(medium.len(), 1);
    assert_eq!(medium[0].strength, PrzStrength::Medium);

    let strong = find_prz(
        &[retracement(0.5, 200.0), retracement(0.618, 203.0)],
        &[extension(1.0, 201.0)],
        &[gann("1×1", 202.0)],
        0.02,
    );
    assert_eq!(strong.len(), 1);
    assert_eq!(strong[0].strength, PrzStrength::Strong);
    assert_eq!(strong[0].low, 200.0);
    assert_eq!(strong[0].high, 203.0);
}

#[test]
fn test_confluences_in_price_order_ties_by_source() {
    let zones = find_prz(
        &[retracement(0.0, 120.0), retracement(0.236, 119.0)],
        &[extension(1.0, 120.0)],
        &[gann("1×1", 120.0)],
        0.02,
    );
    assert_eq!(
        zones[0].confluences,
        vec!["فیبو 23.6%", "فیبو 0.0%", "اکستنشن 100.0%", "گن 1×1"]
    );
}

#[test]
fn test_widely_spaced_levels_have_no_zones() {
    let fib = vec![retracement(0.0, 100.0), retracement(0.5, 150.0)];
    let ext = vec![extension(1.618, 200.0)];
    let gann_levels = vec![gann("2×1", 300.0)];
    assert!(find_prz(&fib, &ext, &gann_levels, 0.02).is_empty());
}

#[test]
fn test_empty_inputs() {
    assert!(find_prz(&[], &[], &[], 0.02).is_empty());
}

#[test]
fn test_zero_tolerance_only_exact_matches() {
    let zones = find_prz(
        &[retracement(0.5, 105.0), retracement(0.618, 106.0)],
        &[],
        &[gann("1×2", 105.0)],
        0.0,
    );
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].confluences, vec!["فیبو 50.0%", "گن 1×2"]);
}

#[test]
fn test_deterministic_and_disjoint() {
    let (high, low) = (48_750.0, 41_200.0);
    let retr = calculate_fibonacci_retracement(high, low, true);
    let ext = calculate_fibonacci_extension(high, low, true);
    let gann_levels = calculate_gann_levels(high, low, 30, true);

    let first = find_prz_default(&retr, &ext, &gann_levels);
    let second = find_prz_default(&retr, &ext, &gann_levels);
    assert_eq!(first, second);

    let mut seen = HashSet::new();
    for zone in &first {
        assert!(zone.confluences.len() >= 2);
        assert!(zone.low <= zone.high);
        for label in &zone.confluences {
            assert!(seen.insert(label.clone()), "{} appears in two zones", label);
        }
    }
    assert!(first.windows(2).all(|w| w[0].high < w[1].low));
}

#[test]
fn test_flat_levels_form_one_strong_zone() {
    let retr = calculate_fibonacci_retracement(100.0, 100.0, true);
    let ext = calculate_fibonacci_extension(100.0, 100.0, true);
    let gann_levels = calculate_gann_levels(100.0, 100.0, 5, true);
    let zones = find_prz_default(&retr, &ext, &gann_levels);

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].strength, PrzStrength::Strong);
    assert_eq!(zones[0].confluences.len(), 23);
    assert_eq!((zones[0].low, zones[0].high), (100.0, 100.0));
}
