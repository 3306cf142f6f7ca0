use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::cards::{all_suits, full_deck, Card, Suit};
use crate::errors::AnalysisError;

/// The cards still available for dealing or enumeration.
///
/// A deck is an owned value: every analysis pass works on its own copy, and the
/// caller decides when cards leave it (for the board or a player's hand) and
/// when they come back. Construction is deterministic; any randomness comes
/// from an RNG the caller passes in.
///
/// # Examples
///
/// ```
/// use boardrank_engine::cards::{Card, Rank, Suit};
/// use boardrank_engine::deck::Deck;
///
/// let mut deck = Deck::new();
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// deck.remove(ace).unwrap();
/// assert_eq!(deck.len(), 51);
/// assert!(deck.remove(ace).is_err());
/// deck.restore(ace).unwrap();
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in suit-major order.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// A full deck minus `used`, failing on repeated cards in `used`.
    pub fn without(used: &[Card]) -> Result<Self, AnalysisError> {
        let mut deck = Self::new();
        for &card in used {
            deck.remove(card)
                .map_err(|_| AnalysisError::DuplicateCard(card))?;
        }
        Ok(deck)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Takes `card` out of the deck; fails if it is not there.
    pub fn remove(&mut self, card: Card) -> Result<(), AnalysisError> {
        let pos = self
            .cards
            .iter()
            .position(|c| *c == card)
            .ok_or(AnalysisError::InvalidCard(card))?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Puts `card` back; fails if the deck already holds it.
    pub fn restore(&mut self, card: Card) -> Result<(), AnalysisError> {
        if self.contains(card) {
            return Err(AnalysisError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns a uniformly chosen card, or `None` when empty.
    pub fn deal_random<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.cards.len());
        Some(self.cards.remove(idx))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Reproducible RNG for dealing; same seed, same cards.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Display colour of a suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum SuitColor {
    Red,
    Black,
}

/// Colour and symbol for every suit, handed to display layers together with a
/// fresh deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitTable {
    entries: [(Suit, SuitColor); 4],
}

impl SuitTable {
    pub fn color(&self, suit: Suit) -> SuitColor {
        self.entries
            .iter()
            .find(|(s, _)| *s == suit)
            .map(|(_, color)| *color)
            .unwrap_or(SuitColor::Black)
    }

    pub fn symbol(&self, suit: Suit) -> char {
        suit.symbol()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suit, SuitColor)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for SuitTable {
    fn default() -> Self {
        let entries = all_suits().map(|suit| {
            let color = match suit {
                Suit::Hearts | Suit::Diamonds => SuitColor::Red,
                Suit::Clubs | Suit::Spades => SuitColor::Black,
            };
            (suit, color)
        });
        Self { entries }
    }
}

/// A complete 52-card deck together with its suit table.
pub fn new_deck() -> (Deck, SuitTable) {
    (Deck::new(), SuitTable::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    #[test]
    fn without_rejects_repeated_cards() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(Deck::without(&[ah]).unwrap().len(), 51);
        assert_eq!(
            Deck::without(&[ah, ah]),
            Err(AnalysisError::DuplicateCard(ah))
        );
    }

    #[test]
    fn restore_rejects_cards_already_present() {
        let mut deck = Deck::new();
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(deck.restore(kd), Err(AnalysisError::DuplicateCard(kd)));
    }

    #[test]
    fn suit_table_colors() {
        let (_, table) = new_deck();
        assert_eq!(table.color(Suit::Hearts), SuitColor::Red);
        assert_eq!(table.color(Suit::Diamonds), SuitColor::Red);
        assert_eq!(table.color(Suit::Clubs), SuitColor::Black);
        assert_eq!(table.color(Suit::Spades), SuitColor::Black);
        assert_eq!(table.iter().count(), 4);
        assert_eq!(table.symbol(Suit::Spades), '♠');
    }

    #[test]
    fn shuffle_keeps_every_card_and_reset_refills() {
        let mut deck = Deck::without(&parse_cards("Ah Kd").unwrap()).unwrap();
        let before = deck.clone();
        deck.shuffle(&mut seeded_rng(4));
        assert_eq!(deck.len(), 50);
        assert_ne!(deck, before);
        let mut sorted = deck.cards().to_vec();
        sorted.sort();
        let mut expected = before.cards().to_vec();
        expected.sort();
        assert_eq!(sorted, expected);

        let mut again = before.clone();
        again.shuffle(&mut seeded_rng(4));
        assert_eq!(again, deck);

        deck.reset();
        assert_eq!(deck, Deck::new());
    }

    #[test]
    fn deal_random_drains_the_deck() {
        let mut deck = Deck::new();
        let mut rng = seeded_rng(9);
        let mut dealt = Vec::new();
        while let Some(card) = deck.deal_random(&mut rng) {
            dealt.push(card);
        }
        assert_eq!(dealt.len(), 52);
        assert!(deck.is_empty());
        dealt.sort();
        dealt.dedup();
        assert_eq!(dealt.len(), 52);
    }
}
