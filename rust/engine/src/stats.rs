use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::analysis::RankedEntry;
use crate::tiers::PositionTier;

/// Where one tier sits within a ranked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierStatistics {
    pub tier: PositionTier,
    /// Entries in strictly better tiers.
    pub above_count: usize,
    /// Entries in strictly worse tiers.
    pub below_count: usize,
    /// Entries sharing the tier, the reference included.
    pub tie_size: usize,
    /// Distinct tiers better than this one.
    pub tiers_above: usize,
    /// Distinct tiers worse than this one.
    pub tiers_below: usize,
    pub total: usize,
}

impl TierStatistics {
    pub fn is_tied(&self) -> bool {
        self.tie_size > 1
    }
}

/// Counts entries and distinct tiers around `reference_tier`.
///
/// Works on any slice of entries; order does not matter. A tier absent from
/// `entries` yields a zero `tie_size`.
pub fn tier_statistics(entries: &[RankedEntry], reference_tier: PositionTier) -> TierStatistics {
    let mut above_count = 0;
    let mut below_count = 0;
    let mut tie_size = 0;
    let mut above = BTreeSet::new();
    let mut below = BTreeSet::new();
    for entry in entries {
        if entry.tier < reference_tier {
            above_count += 1;
            above.insert(entry.tier);
        } else if entry.tier > reference_tier {
            below_count += 1;
            below.insert(entry.tier);
        } else {
            tie_size += 1;
        }
    }
    TierStatistics {
        tier: reference_tier,
        above_count,
        below_count,
        tie_size,
        tiers_above: above.len(),
        tiers_below: below.len(),
        total: entries.len(),
    }
}

/// Tiers holding more than one entry, with their sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TieReport {
    sizes: BTreeMap<PositionTier, usize>,
}

impl TieReport {
    pub fn tied_tiers(&self) -> Vec<PositionTier> {
        self.sizes.keys().copied().collect()
    }

    pub fn size(&self, tier: PositionTier) -> Option<usize> {
        self.sizes.get(&tier).copied()
    }

    /// Number of tied tiers.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Entries sitting in some tied tier.
    pub fn tied_entries(&self) -> usize {
        self.sizes.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PositionTier, usize)> + '_ {
        self.sizes.iter().map(|(t, n)| (*t, *n))
    }
}

pub fn tie_report(entries: &[RankedEntry]) -> TieReport {
    let mut counts: BTreeMap<PositionTier, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.tier).or_default() += 1;
    }
    counts.retain(|_, n| *n > 1);
    TieReport { sizes: counts }
}
