// src/core/scanner/vulnerability_scanner.rs

use crate::core::knowledge_base::VULNERABILITIES;
use crate::core::models::VulnerabilityTemplate;
use crate::core::scanner::seed::Seed;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

/// How the catalog is ordered before the first `count` entries are taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SelectionStrategy {
    /// Reproduces the historical constant-comparator sort. Reports stay
    /// byte-compatible with those produced before the shuffled mode existed.
    #[default]
    Legacy,
    /// A seeded Fisher-Yates permutation.
    Shuffled,
}

/// Selects and orders the vulnerabilities reported for `seed`.
///
/// Returns between 1 and 7 distinct catalog entries.
pub fn select_vulnerabilities(
    seed: Seed,
    strategy: SelectionStrategy,
) -> Vec<&'static VulnerabilityTemplate> {
    let count = seed.vulnerability_count();
    let ordered = match strategy {
        SelectionStrategy::Legacy => legacy_order(&VULNERABILITIES, seed.ordering_bias()),
        SelectionStrategy::Shuffled => shuffled_order(&VULNERABILITIES, seed),
    };
    debug!(%seed, count, ?strategy, "Selected vulnerability subset.");
    ordered.into_iter().take(count).collect()
}

/// Orders `catalog` the way a natural merge sort does under a comparator that
/// returns `bias` for every pair.
///
/// Run detection compares each element with its predecessor. A negative
/// constant makes the whole slice one strictly descending run, which gets
/// reversed in place. Zero or positive makes it one ascending run, left alone.
/// No merging happens after that, so those are the only two outcomes.
fn legacy_order<T>(catalog: &[T], bias: i32) -> Vec<&T> {
    let mut ordered: Vec<&T> = catalog.iter().collect();
    if bias < 0 {
        ordered.reverse();
    }
    ordered
}

fn shuffled_order<T>(catalog: &[T], seed: Seed) -> Vec<&T> {
    let mut rng = StdRng::seed_from_u64(u64::from(seed.value()));
    let mut ordered: Vec<&T> = catalog.iter().collect();
    ordered.shuffle(&mut rng);
    ordered
}
