use rand::Rng;
use tracing::trace;

use crate::analysis::{analyze, Analysis};
use crate::cards::{Card, HoleCombination};
use crate::deck::Deck;
use crate::errors::AnalysisError;
use crate::strength::Scoring;
use crate::tiers::Street;

/// One hand followed from the flop to the river.
///
/// The session owns the deck the board is dealt from. Every card put on the
/// board leaves the deck, so the deck always excludes the board and the
/// reference hole cards, which is the shape [`analyze`] expects.
///
/// ```
/// use boardrank_engine::cards::{parse_cards, HoleCombination};
/// use boardrank_engine::session::HandSession;
/// use boardrank_engine::strength::Scoring;
/// use boardrank_engine::tiers::Street;
///
/// let hole = HoleCombination::from_slice(&parse_cards("Ah Ad").unwrap()).unwrap();
/// let mut session = HandSession::new(hole).unwrap();
/// let flop = parse_cards("2c 7d Ks").unwrap();
/// session.deal_flop([flop[0], flop[1], flop[2]]).unwrap();
/// assert_eq!(session.reveal("9h".parse().unwrap()).unwrap(), Street::Turn);
///
/// let turn = session.analyze(&Scoring::default()).unwrap();
/// assert_eq!(turn.street, Street::Turn);
/// ```
#[derive(Debug, Clone)]
pub struct HandSession {
    deck: Deck,
    hole: HoleCombination,
    board: Vec<Card>,
}

impl HandSession {
    /// A fresh session with `hole` already taken out of a full deck.
    pub fn new(hole: HoleCombination) -> Result<Self, AnalysisError> {
        Ok(Self {
            deck: Deck::without(&hole.cards())?,
            hole,
            board: Vec::with_capacity(5),
        })
    }

    /// A fresh session with two hole cards dealt at random.
    pub fn deal<R: Rng>(rng: &mut R) -> Result<Self, AnalysisError> {
        Self::deal_around(&[], rng)
    }

    /// Like [`HandSession::deal`], but the hole never takes a card from
    /// `reserved`. Reserved cards stay in the deck for a later
    /// [`HandSession::deal_flop`] or [`HandSession::reveal`].
    pub fn deal_around<R: Rng>(reserved: &[Card], rng: &mut R) -> Result<Self, AnalysisError> {
        let mut deck = Deck::without(reserved)?;
        let a = deck.deal_random(rng).ok_or(AnalysisError::EmptyEnumeration)?;
        let b = deck.deal_random(rng).ok_or(AnalysisError::EmptyEnumeration)?;
        for &card in reserved {
            deck.restore(card)?;
        }
        trace!(reserved = reserved.len(), "hole dealt");
        Ok(Self {
            deck,
            hole: HoleCombination::new(a, b)?,
            board: Vec::with_capacity(5),
        })
    }

    pub fn hole(&self) -> &HoleCombination {
        &self.hole
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current street, `None` before the flop.
    pub fn street(&self) -> Option<Street> {
        Street::from_board_len(self.board.len()).ok()
    }

    /// Puts the three flop cards on an empty board.
    ///
    /// Nothing changes on failure.
    pub fn deal_flop(&mut self, flop: [Card; 3]) -> Result<Street, AnalysisError> {
        if !self.board.is_empty() {
            return Err(AnalysisError::InvalidBoardSize(self.board.len() + 3));
        }
        for (i, card) in flop.iter().enumerate() {
            if flop[..i].contains(card) {
                return Err(AnalysisError::DuplicateCard(*card));
            }
            if !self.deck.contains(*card) {
                return Err(AnalysisError::InvalidCard(*card));
            }
        }
        for card in flop {
            self.deck.remove(card)?;
            self.board.push(card);
        }
        trace!(board = ?self.board, "flop dealt");
        Ok(Street::Flop)
    }

    /// Reveals a chosen turn or river card.
    pub fn reveal(&mut self, card: Card) -> Result<Street, AnalysisError> {
        self.check_can_reveal()?;
        self.deck.remove(card)?;
        self.board.push(card);
        self.revealed(card)
    }

    /// Reveals the next street from the deck; on an empty board this deals the
    /// whole flop.
    pub fn reveal_random<R: Rng>(&mut self, rng: &mut R) -> Result<Street, AnalysisError> {
        if self.board.is_empty() {
            let mut flop = Vec::with_capacity(3);
            for _ in 0..3 {
                flop.push(self.deck.deal_random(rng).ok_or(AnalysisError::EmptyEnumeration)?);
            }
            self.board.extend(flop);
            trace!(board = ?self.board, "flop dealt");
            return Ok(Street::Flop);
        }
        self.check_can_reveal()?;
        let card = self
            .deck
            .deal_random(rng)
            .ok_or(AnalysisError::EmptyEnumeration)?;
        self.board.push(card);
        self.revealed(card)
    }

    /// Ranks every hole combination on the current street.
    pub fn analyze(&self, scoring: &Scoring) -> Result<Analysis, AnalysisError> {
        let street = Street::from_board_len(self.board.len())?;
        analyze(&self.deck, &self.board, &self.hole, street, scoring)
    }

    fn check_can_reveal(&self) -> Result<(), AnalysisError> {
        match self.board.len() {
            3 | 4 => Ok(()),
            n => Err(AnalysisError::InvalidBoardSize(n + 1)),
        }
    }

    fn revealed(&self, card: Card) -> Result<Street, AnalysisError> {
        let street = Street::from_board_len(self.board.len())?;
        trace!(%card, %street, "board card revealed");
        Ok(street)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::seeded_rng;

    fn session(hole: &str) -> HandSession {
        HandSession::new(HoleCombination::from_slice(&parse_cards(hole).unwrap()).unwrap()).unwrap()
    }

    #[test]
    fn failed_flop_leaves_session_untouched() {
        let mut s = session("As Ks");
        let cards = parse_cards("2c 3c As").unwrap();
        let err = s.deal_flop([cards[0], cards[1], cards[2]]).unwrap_err();
        assert_eq!(err, AnalysisError::InvalidCard(cards[2]));
        assert!(s.board().is_empty());
        assert_eq!(s.deck().len(), 50);
    }

    #[test]
    fn reveal_needs_a_flop_and_stops_at_the_river() {
        let mut s = session("As Ks");
        let nine: Card = "9d".parse().unwrap();
        assert_eq!(s.reveal(nine), Err(AnalysisError::InvalidBoardSize(1)));

        let mut rng = seeded_rng(3);
        assert_eq!(s.reveal_random(&mut rng), Ok(Street::Flop));
        assert_eq!(s.reveal_random(&mut rng), Ok(Street::Turn));
        assert_eq!(s.reveal_random(&mut rng), Ok(Street::River));
        assert_eq!(
            s.reveal_random(&mut rng),
            Err(AnalysisError::InvalidBoardSize(6))
        );
        assert_eq!(s.deck().len(), 45);
        assert_eq!(s.street(), Some(Street::River));
    }

    #[test]
    fn seeded_deal_is_reproducible() {
        let a = HandSession::deal(&mut seeded_rng(11)).unwrap();
        let b = HandSession::deal(&mut seeded_rng(11)).unwrap();
        assert_eq!(a.hole(), b.hole());
        assert_eq!(a.deck().len(), 50);
    }

    #[test]
    fn dealt_hole_avoids_reserved_cards() {
        let flop = parse_cards("As Ks Qs").unwrap();
        for seed in 0..200 {
            let mut s = HandSession::deal_around(&flop, &mut seeded_rng(seed)).unwrap();
            assert!(flop.iter().all(|c| !s.hole().contains(*c)), "seed {seed}");
            assert_eq!(s.deck().len(), 50);
            assert_eq!(s.deal_flop([flop[0], flop[1], flop[2]]), Ok(Street::Flop));
        }
    }

    #[test]
    fn repeated_reserved_card_is_rejected() {
        let ace: Card = "Ah".parse().unwrap();
        assert_eq!(
            HandSession::deal_around(&[ace, ace], &mut seeded_rng(1)).unwrap_err(),
            AnalysisError::DuplicateCard(ace)
        );
    }
}
