use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::RankedEntry;
use crate::cards::{HoleCombination, Rank};
use crate::hand::Category;
use crate::tiers::PositionTier;

/// One tier of a ranked field in starting-hand notation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CondensedTier {
    pub tier: PositionTier,
    pub category: Category,
    pub cards_used: u8,
    pub strength: f64,
    /// Size of the tier before condensing.
    pub combinations: usize,
    /// `AKs`, `AKo`, `AKos` or `QQ`, strongest ranks first.
    pub hands: Vec<String>,
}

#[derive(Default)]
struct Suitedness {
    suited: bool,
    offsuit: bool,
}

/// Collapses each tier's hole pairs into rank notation.
///
/// Non-pairs get `s` when only suited combinations of those ranks are in the
/// tier, `o` when only offsuit ones are, and `os` when both are. Category, cards
/// used and strength come from the tier's first entry. Expects `entries`
/// grouped by tier, as `analyze` returns them.
pub fn condense(entries: &[RankedEntry]) -> Vec<CondensedTier> {
    let mut out = Vec::new();
    for group in entries.chunk_by(|a, b| a.tier == b.tier) {
        let first = &group[0];
        let mut by_ranks: BTreeMap<(Reverse<Rank>, Reverse<Rank>), Suitedness> = BTreeMap::new();
        for entry in group {
            let slot = by_ranks.entry(rank_pair(&entry.hole)).or_default();
            if entry.hole.is_suited() {
                slot.suited = true;
            } else {
                slot.offsuit = true;
            }
        }
        let hands = by_ranks
            .into_iter()
            .map(|((Reverse(high), Reverse(low)), seen)| notation(high, low, &seen))
            .collect();
        out.push(CondensedTier {
            tier: first.tier,
            category: first.category(),
            cards_used: first.cards_used,
            strength: first.strength,
            combinations: group.len(),
            hands,
        });
    }
    out
}

fn rank_pair(hole: &HoleCombination) -> (Reverse<Rank>, Reverse<Rank>) {
    (Reverse(hole.high().rank), Reverse(hole.low().rank))
}

fn notation(high: Rank, low: Rank, seen: &Suitedness) -> String {
    let mut s = format!("{}{}", high.symbol(), low.symbol());
    if high != low {
        if seen.offsuit {
            s.push('o');
        }
        if seen.suited {
            s.push('s');
        }
    }
    s
}
