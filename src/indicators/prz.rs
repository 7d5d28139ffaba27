//! Potential Reversal Zone detection
//!
//! Fibonacci and Gann levels are merged, sorted by price and swept once. Each
//! cluster is anchored at its lowest level: a following level joins while it is
//! within `anchor * tolerance` of the anchor. The window is never re-centred as
//! the cluster grows.

use crate::common::math;
use crate::models::{FibonacciLevel, GannLevel, PrzStrength, PrzZone};

/// Default clustering window, 2% of the anchor price.
pub const DEFAULT_PRZ_TOLERANCE: f64 = 0.02;

pub const MIN_CONFLUENCES: usize = 2;

/// Source prefixes shown to dashboard users.
pub const RETRACEMENT_SOURCE: &str = "فیبو";
pub const EXTENSION_SOURCE: &str = "اکستنشن";
pub const GANN_SOURCE: &str = "گن";

/// A single level tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSource {
    pub price: f64,
    pub source: String,
}

/// Flatten the three level sets into labelled prices, in input order.
pub fn collect_level_sources(
    fib_retracement: &[FibonacciLevel],
    fib_extension: &[FibonacciLevel],
    gann_levels: &[GannLevel],
) -> Vec<LevelSource> {
    let retracements = fib_retracement.iter().map(|f| LevelSource {
        price: f.price,
        source: format!("{} {}", RETRACEMENT_SOURCE, f.label),
    });
    let extensions = fib_extension.iter().map(|f| LevelSource {
        price: f.price,
        source: format!("{} {}", EXTENSION_SOURCE, f.label),
    });
    let ganns = gann_levels.iter().map(|g| LevelSource {
        price: g.price,
        source: format!("{} {}", GANN_SOURCE, g.label),
    });

    retracements.chain(extensions).chain(ganns).collect()
}

/// Find confluence zones among the given levels, ascending by price.
///
/// A cluster needs at least two members. A level that fails to cluster with
/// its right-hand neighbour is skipped and that neighbour is tried as the
/// next anchor; a successful cluster is consumed whole.
pub fn find_prz(
    fib_retracement: &[FibonacciLevel],
    fib_extension: &[FibonacciLevel],
    gann_levels: &[GannLevel],
    tolerance: f64,
) -> Vec<PrzZone> {
    let mut levels = collect_level_sources(fib_retracement, fib_extension, gann_levels);
    // Stable, so equal prices keep retracement/extension/gann order
    levels.sort_by(|a, b| a.price.total_cmp(&b.price));

    let mut zones = Vec::new();
    let mut i = 0;

    while i < levels.len() {
        let base_price = levels[i].price;
        let tolerance_range = base_price * tolerance;

        let mut j = i + 1;
        while j < levels.len() && levels[j].price - base_price <= tolerance_range {
            j += 1;
        }

        let cluster = &levels[i..j];
        if cluster.len() >= MIN_CONFLUENCES {
            let prices: Vec<f64> = cluster.iter().map(|l| l.price).collect();
            let (low, high) = math::min_max(&prices).unwrap_or((base_price, base_price));

            zones.push(PrzZone {
                low,
                high,
                strength: PrzStrength::from_confluences(cluster.len()),
                confluences: cluster.iter().map(|l| l.source.clone()).collect(),
            });
            i = j;
        } else {
            i += 1;
        }
    }

    zones
}

/// Find confluence zones with the default 2% tolerance
pub fn find_prz_default(
    fib_retracement: &[FibonacciLevel],
    fib_extension: &[FibonacciLevel],
    gann_levels: &[GannLevel],
) -> Vec<PrzZone> {
    find_prz(fib_retracement, fib_extension, gann_levels, DEFAULT_PRZ_TOLERANCE)
}
