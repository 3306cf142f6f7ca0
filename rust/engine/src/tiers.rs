use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enumerate::Evaluated;
use crate::errors::AnalysisError;

/// Betting stage, determined by how many community cards are out.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Three community cards
    Flop,
    /// Four community cards
    Turn,
    /// Five community cards
    River,
}

impl Street {
    pub fn board_len(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    pub fn from_board_len(len: usize) -> Result<Street, AnalysisError> {
        match len {
            3 => Ok(Street::Flop),
            4 => Ok(Street::Turn),
            5 => Ok(Street::River),
            n => Err(AnalysisError::InvalidBoardSize(n)),
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        })
    }
}

/// Ordinal rank bucket; 1 is the best.
pub type PositionTier = u32;

/// Number of entries in each tier of one analysis pass.
///
/// Tiers are dense, so the population is stored as a vector indexed by
/// `tier - 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierPopulation {
    counts: Vec<usize>,
}

impl TierPopulation {
    pub(crate) fn push_entry(&mut self, tier: PositionTier) {
        let idx = tier as usize - 1;
        if self.counts.len() <= idx {
            self.counts.resize(idx + 1, 0);
        }
        self.counts[idx] += 1;
    }

    /// Entries in `tier`, zero for tiers that do not exist.
    pub fn get(&self, tier: PositionTier) -> usize {
        (tier as usize)
            .checked_sub(1)
            .and_then(|idx| self.counts.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// Worst tier present (the number of tiers), zero when empty.
    pub fn last_tier(&self) -> PositionTier {
        self.counts.len() as PositionTier
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in tiers strictly better than `tier`.
    pub fn better_than(&self, tier: PositionTier) -> usize {
        let end = (tier as usize).saturating_sub(1).min(self.counts.len());
        self.counts[..end].iter().sum()
    }

    /// Entries in tiers strictly worse than `tier`.
    pub fn worse_than(&self, tier: PositionTier) -> usize {
        let start = (tier as usize).min(self.counts.len());
        self.counts[start..].iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PositionTier, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, n)| (i as PositionTier + 1, *n))
    }
}

/// An evaluated combination with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiered {
    pub evaluated: Evaluated,
    pub tier: PositionTier,
}

/// Sorts a field best-first and assigns dense tiers.
///
/// Entries with equal ranking keys share a tier; every change of key opens the
/// next one. Inside a tier entries are ordered by their canonical hole pair so
/// the output does not depend on enumeration order.
pub fn assign_tiers(mut field: Vec<Evaluated>) -> (Vec<Tiered>, TierPopulation) {
    field.sort_by(|a, b| b.best.key.cmp(&a.best.key).then(a.hole.cmp(&b.hole)));

    let mut population = TierPopulation::default();
    let mut tiered = Vec::with_capacity(field.len());
    let mut tier: PositionTier = 0;
    let mut previous = None;
    for evaluated in field {
        if previous != Some(evaluated.best.key) {
            tier += 1;
            previous = Some(evaluated.best.key);
        }
        population.push_entry(tier);
        tiered.push(Tiered { evaluated, tier });
    }
    (tiered, population)
}
