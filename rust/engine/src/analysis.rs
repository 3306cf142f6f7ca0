use serde::Serialize;
use tracing::debug;

use crate::cards::{Card, HoleCombination};
use crate::condensed::{condense, CondensedTier};
use crate::deck::Deck;
use crate::enumerate::{enumerate, Evaluated};
use crate::errors::AnalysisError;
use crate::hand::{Category, HandRankingKey};
use crate::stats::{tie_report, tier_statistics, TieReport, TierStatistics};
use crate::strength::Scoring;
use crate::tiers::{assign_tiers, PositionTier, Street, TierPopulation};

/// A scored hole combination in one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub hole: HoleCombination,
    pub best_hand: [Card; 5],
    pub key: HandRankingKey,
    pub cards_used: u8,
    pub tier: PositionTier,
    pub strength: f64,
}

impl RankedEntry {
    pub fn category(&self) -> Category {
        self.key.category
    }
}

/// Tiers and scores an evaluated field.
///
/// Entries come back best first; inside a tier they follow canonical hole
/// order.
pub fn rank_field(
    field: Vec<Evaluated>,
    street: Street,
    scoring: &Scoring,
) -> (Vec<RankedEntry>, TierPopulation) {
    let (tiered, population) = assign_tiers(field);
    let scores = scoring.tier_scores(street, &population);
    let entries = tiered
        .into_iter()
        .map(|t| RankedEntry {
            hole: t.evaluated.hole,
            best_hand: t.evaluated.best.cards,
            key: t.evaluated.best.key,
            cards_used: t.evaluated.best.cards_used,
            tier: t.tier,
            strength: scores.get(t.tier as usize - 1).copied().unwrap_or(0.0),
        })
        .collect();
    (entries, population)
}

/// The full ranked field of one street, built around a reference hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub street: Street,
    pub board: Vec<Card>,
    pub scoring: Scoring,
    entries: Vec<RankedEntry>,
    population: TierPopulation,
    #[serde(skip)]
    reference_index: usize,
}

impl Analysis {
    /// Every entry, best first.
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn population(&self) -> &TierPopulation {
        &self.population
    }

    pub fn reference(&self) -> &RankedEntry {
        &self.entries[self.reference_index]
    }

    pub fn statistics(&self) -> TierStatistics {
        tier_statistics(&self.entries, self.reference().tier)
    }

    pub fn ties(&self) -> TieReport {
        tie_report(&self.entries)
    }

    pub fn condensed(&self) -> Vec<CondensedTier> {
        condense(&self.entries)
    }

    pub fn find(&self, hole: &HoleCombination) -> Option<&RankedEntry> {
        self.entries.iter().find(|e| e.hole == *hole)
    }
}

/// Enumerates, tiers and scores every hole combination for one street.
///
/// `deck` holds the cards not on the board and not in `reference`; it is only
/// read. The whole field is recomputed on every call.
///
/// ```
/// use boardrank_engine::analysis::analyze;
/// use boardrank_engine::cards::{parse_cards, HoleCombination};
/// use boardrank_engine::deck::Deck;
/// use boardrank_engine::strength::Scoring;
/// use boardrank_engine::tiers::Street;
///
/// let hole = parse_cards("As Ks").unwrap();
/// let board = parse_cards("Qs Js Ts").unwrap();
/// let deck = Deck::without(&[hole.clone(), board.clone()].concat()).unwrap();
/// let reference = HoleCombination::from_slice(&hole).unwrap();
///
/// let analysis = analyze(&deck, &board, &reference, Street::Flop, &Scoring::default()).unwrap();
/// assert_eq!(analysis.entries().len(), 1082);
/// assert_eq!(analysis.reference().tier, 1);
/// assert_eq!(analysis.reference().strength, 100.0);
/// ```
pub fn analyze(
    deck: &Deck,
    board: &[Card],
    reference: &HoleCombination,
    street: Street,
    scoring: &Scoring,
) -> Result<Analysis, AnalysisError> {
    if Street::from_board_len(board.len())? != street {
        return Err(AnalysisError::StreetMismatch {
            street,
            board_len: board.len(),
        });
    }
    let field = enumerate(deck, board, reference)?;

    let (entries, population) = rank_field(field, street, scoring);
    let reference_index = entries
        .iter()
        .position(|e| e.hole == *reference)
        .ok_or(AnalysisError::EmptyEnumeration)?;

    debug!(
        %street,
        entries = entries.len(),
        tiers = population.last_tier(),
        scoring = ?scoring,
        "analysis pass complete"
    );
    Ok(Analysis {
        street,
        board: board.to_vec(),
        scoring: *scoring,
        entries,
        population,
        reference_index,
    })
}
