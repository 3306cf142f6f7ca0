use thiserror::Error;

use crate::cards::Card;
use crate::tiers::Street;

/// Failures surfaced by the analysis core.
///
/// All of them are local and deterministic: retrying the same call with the
/// same inputs fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Card {0} is not available in the current deck or board")]
    InvalidCard(Card),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Invalid board size: {0} (expected 3, 4 or 5 cards)")]
    InvalidBoardSize(usize),
    #[error("No valid hole card combination can be drawn from the deck")]
    EmptyEnumeration,
    #[error("Unrecognized card: {0:?}")]
    UnparsableCard(String),
    #[error("Hole cards must be exactly 2 cards (got {0})")]
    InvalidHoleSize(usize),
    #[error("Street {street} needs a different board (got {board_len} cards)")]
    StreetMismatch { street: Street, board_len: usize },
}
