use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::best::{best_of, check_board, BestHand};
use crate::cards::{Card, HoleCombination};
use crate::errors::AnalysisError;

/// Outcome of comparing several hole pairs on one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Showdown {
    /// Best hand per hole pair, in input order.
    pub hands: Vec<BestHand>,
    /// Indices of every hole pair holding the top key.
    pub winners: Vec<usize>,
}

impl Showdown {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Finds the winning hole pairs on `board`.
///
/// Equal keys split: every index holding the maximum is a winner.
pub fn showdown(board: &[Card], holes: &[HoleCombination]) -> Result<Showdown, AnalysisError> {
    check_board(board)?;
    if holes.is_empty() {
        return Err(AnalysisError::EmptyEnumeration);
    }
    let mut seen = HashSet::with_capacity(board.len() + holes.len() * 2);
    for card in board.iter().copied().chain(holes.iter().flat_map(|h| h.cards())) {
        if !seen.insert(card) {
            return Err(AnalysisError::DuplicateCard(card));
        }
    }

    let hands: Vec<BestHand> = holes.iter().map(|h| best_of(h, board)).collect();
    let top = hands.iter().map(|h| h.key).max();
    let winners: Vec<usize> = hands
        .iter()
        .enumerate()
        .filter(|(_, h)| Some(h.key) == top)
        .map(|(i, _)| i)
        .collect();
    debug!(players = holes.len(), winners = winners.len(), "showdown");
    Ok(Showdown { hands, winners })
}
