use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::best::{best_of, check_board, BestHand};
use crate::cards::{Card, HoleCombination};
use crate::deck::Deck;
use crate::errors::AnalysisError;

/// One hole combination with its best hand on the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluated {
    pub hole: HoleCombination,
    pub best: BestHand,
}

/// Evaluates every hole combination that could sit opposite (or be) `reference`.
///
/// The effective deck is `deck` plus the reference's two cards. A combination
/// is kept when it shares no card with the reference, or both of them; pairs
/// holding exactly one reference card are skipped. The reference itself is
/// always in the result, even when `deck` still contains one of its cards.
///
/// Fails when the board size is outside 3..=5, when the board repeats a card,
/// when the reference or `deck` overlaps the board (`DuplicateCard`), or when
/// fewer than two cards remain to form an opposing combination
/// (`EmptyEnumeration`).
pub fn enumerate(
    deck: &Deck,
    board: &[Card],
    reference: &HoleCombination,
) -> Result<Vec<Evaluated>, AnalysisError> {
    check_board(board)?;
    let mut on_board = HashSet::with_capacity(board.len());
    for card in board {
        if !on_board.insert(*card) {
            return Err(AnalysisError::DuplicateCard(*card));
        }
    }
    for card in reference.cards() {
        if on_board.contains(&card) {
            return Err(AnalysisError::DuplicateCard(card));
        }
    }
    if let Some(card) = deck.cards().iter().find(|c| on_board.contains(*c)) {
        return Err(AnalysisError::DuplicateCard(*card));
    }

    let others: Vec<Card> = deck
        .cards()
        .iter()
        .copied()
        .filter(|c| !reference.contains(*c))
        .collect();
    if others.len() < 2 {
        return Err(AnalysisError::EmptyEnumeration);
    }

    let mut field = Vec::with_capacity(others.len() * (others.len() - 1) / 2 + 1);
    field.push(evaluate(*reference, board));
    for (i, a) in others.iter().enumerate() {
        for b in &others[i + 1..] {
            // distinct deck cards, never equal
            let hole = HoleCombination::new(*a, *b)?;
            field.push(evaluate(hole, board));
        }
    }

    debug!(
        board = board.len(),
        deck = deck.len(),
        combinations = field.len(),
        "enumerated hole combinations"
    );
    Ok(field)
}

fn evaluate(hole: HoleCombination, board: &[Card]) -> Evaluated {
    Evaluated {
        hole,
        best: best_of(&hole, board),
    }
}
