use std::collections::HashSet;

use serde::Serialize;

use crate::cards::{Card, HoleCombination};
use crate::errors::AnalysisError;
use crate::hand::{identify, HandRankingKey};

/// The strongest five card hand a hole pair makes with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestHand {
    /// The five cards, in the order they were picked from hole + board.
    pub cards: [Card; 5],
    pub key: HandRankingKey,
    /// How many of the two hole cards the hand uses (0, 1 or 2).
    pub cards_used: u8,
}

/// Picks the best five card hand out of `hole` plus a 3 to 5 card board.
///
/// Every five card subset is ranked and the first one holding the maximum key
/// is returned. Fails if the board size is outside 3..=5 or a card repeats.
///
/// ```
/// use boardrank_engine::best::best_hand;
/// use boardrank_engine::cards::{parse_cards, HoleCombination};
/// use boardrank_engine::hand::Category;
///
/// let hole = HoleCombination::from_slice(&parse_cards("As Ks").unwrap()).unwrap();
/// let board = parse_cards("Qs Js Ts").unwrap();
/// let best = best_hand(&hole, &board).unwrap();
/// assert_eq!(best.key.category, Category::RoyalFlush);
/// assert_eq!(best.cards_used, 2);
/// ```
pub fn best_hand(hole: &HoleCombination, board: &[Card]) -> Result<BestHand, AnalysisError> {
    check_board(board)?;
    let mut seen = HashSet::with_capacity(7);
    for card in hole.cards().iter().chain(board.iter()) {
        if !seen.insert(*card) {
            return Err(AnalysisError::DuplicateCard(*card));
        }
    }
    Ok(best_of(hole, board))
}

pub(crate) fn check_board(board: &[Card]) -> Result<(), AnalysisError> {
    if (3..=5).contains(&board.len()) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidBoardSize(board.len()))
    }
}

// Inputs already validated by the caller.
pub(crate) fn best_of(hole: &HoleCombination, board: &[Card]) -> BestHand {
    let mut all = [hole.high(); 7];
    all[1] = hole.low();
    all[2..2 + board.len()].copy_from_slice(board);
    let all = &all[..2 + board.len()];

    // the first subset in enumeration order; later ones replace it only when
    // strictly better
    let first = [all[0], all[1], all[2], all[3], all[4]];
    let mut best: ([Card; 5], HandRankingKey) = (first, identify(&first));
    for_each_five(all, |hand| {
        let key = identify(hand);
        if key > best.1 {
            best = (*hand, key);
        }
    });

    let (cards, key) = best;
    let cards_used = cards.iter().filter(|c| hole.contains(**c)).count() as u8;
    BestHand {
        cards,
        key,
        cards_used,
    }
}

/// Calls `f` for every five card subset of `cards`, in lexicographic index order.
pub fn for_each_five<F>(cards: &[Card], mut f: F)
where
    F: FnMut(&[Card; 5]),
{
    let n = cards.len();
    if n < 5 {
        return;
    }
    let mut h = [cards[0]; 5];
    for c1 in 0..n {
        h[0] = cards[c1];
        for c2 in (c1 + 1)..n {
            h[1] = cards[c2];
            for c3 in (c2 + 1)..n {
                h[2] = cards[c3];
                for c4 in (c3 + 1)..n {
                    h[3] = cards[c4];
                    for c5 in (c4 + 1)..n {
                        h[4] = cards[c5];
                        f(&h);
                    }
                }
            }
        }
    }
}
