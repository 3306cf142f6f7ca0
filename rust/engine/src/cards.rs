use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Some(Suit::Clubs),
            'd' | '♦' => Some(Suit::Diamonds),
            'h' | '♥' => Some(Suit::Hearts),
            's' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values run 2..=14; the Ace is always high.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Numeric value used for straights and tie-breaks (2..=14).
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    fn parse(text: &str) -> Option<Rank> {
        match text.to_ascii_uppercase().as_str() {
            "10" | "T" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            digit => digit
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=9).contains(v))
                .and_then(Rank::from_value),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            low => char::from(b'0' + low.value()),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; equality and hashing go by the (rank, suit) pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { suit, rank }
    }

    /// Numeric rank value of the card (2..=14).
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = AnalysisError;

    /// Parses `As`, `10h`, `Td`, `q♣` and similar forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || AnalysisError::UnparsableCard(s.to_string());
        let mut chars = s.trim().chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_char)
            .ok_or_else(unparsable)?;
        let rank = Rank::parse(chars.as_str()).ok_or_else(unparsable)?;
        Ok(Card { suit, rank })
    }
}

/// Parses a whitespace or comma separated list of cards, rejecting repeats.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, AnalysisError> {
    let mut seen = HashSet::new();
    let mut cards = Vec::new();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let card: Card = token.parse()?;
        if !seen.insert(card) {
            return Err(AnalysisError::DuplicateCard(card));
        }
        cards.push(card);
    }
    Ok(cards)
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

// Rank descending, then suit.
fn canonical_cmp(a: &Card, b: &Card) -> Ordering {
    b.rank.cmp(&a.rank).then(a.suit.cmp(&b.suit))
}

/// An unordered pair of distinct hole cards.
///
/// The pair is stored canonically (higher rank first, suit as secondary key) so
/// that two combinations holding the same cards are equal and hash alike no
/// matter the order they were given in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HoleCombination {
    high: Card,
    low: Card,
}

impl HoleCombination {
    pub fn new(a: Card, b: Card) -> Result<Self, AnalysisError> {
        match canonical_cmp(&a, &b) {
            Ordering::Equal => Err(AnalysisError::DuplicateCard(a)),
            Ordering::Less => Ok(Self { high: a, low: b }),
            Ordering::Greater => Ok(Self { high: b, low: a }),
        }
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, AnalysisError> {
        match cards {
            [a, b] => Self::new(*a, *b),
            _ => Err(AnalysisError::InvalidHoleSize(cards.len())),
        }
    }

    pub fn high(&self) -> Card {
        self.high
    }

    pub fn low(&self) -> Card {
        self.low
    }

    pub fn cards(&self) -> [Card; 2] {
        [self.high, self.low]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.high == card || self.low == card
    }

    /// Number of cards this pair has in common with `other` (0, 1 or 2).
    pub fn shared_with(&self, other: &HoleCombination) -> usize {
        other.cards().iter().filter(|c| self.contains(**c)).count()
    }

    pub fn is_suited(&self) -> bool {
        self.high.suit == self.low.suit
    }

    pub fn is_pair(&self) -> bool {
        self.high.rank == self.low.rank
    }
}

impl Ord for HoleCombination {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical_cmp(&self.high, &other.high).then_with(|| canonical_cmp(&self.low, &other.low))
    }
}

impl PartialOrd for HoleCombination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HoleCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_card_spellings() {
        let ace: Card = "As".parse().unwrap();
        assert_eq!(ace, Card::new(Rank::Ace, Suit::Spades));
        assert_eq!("10h".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!("td".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!("Q♣".parse::<Card>().unwrap(), Card::new(Rank::Queen, Suit::Clubs));
        assert_eq!("7H".parse::<Card>().unwrap(), Card::new(Rank::Seven, Suit::Hearts));
    }

    #[test]
    fn rejects_garbage_cards() {
        for bad in ["", "A", "1s", "11h", "Ax", "ZZs"] {
            assert!(
                matches!(bad.parse::<Card>(), Err(AnalysisError::UnparsableCard(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for card in full_deck() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn parse_cards_rejects_repeats() {
        let cards = parse_cards("As, Kd  Qh").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(
            parse_cards("As Ks As"),
            Err(AnalysisError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)))
        );
    }

    #[test]
    fn numeric_values_are_ace_high() {
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).value(), 2);
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).value(), 10);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).value(), 14);
        assert_eq!(Rank::from_value(1), None);
    }

    #[test]
    fn hole_combination_is_order_independent() {
        let a = Card::new(Rank::King, Suit::Hearts);
        let b = Card::new(Rank::Ace, Suit::Clubs);
        let x = HoleCombination::new(a, b).unwrap();
        let y = HoleCombination::new(b, a).unwrap();
        assert_eq!(x, y);
        assert_eq!(x.high(), b);
        assert_eq!(x.to_string(), "AcKh");
    }

    #[test]
    fn hole_combination_pairs_sort_by_suit() {
        let h = Card::new(Rank::Seven, Suit::Hearts);
        let c = Card::new(Rank::Seven, Suit::Clubs);
        let pair = HoleCombination::new(h, c).unwrap();
        assert_eq!(pair.cards(), [c, h]);
        assert!(pair.is_pair());
        assert!(!pair.is_suited());
    }

    #[test]
    fn hole_combination_rejects_same_card() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(HoleCombination::new(a, a), Err(AnalysisError::DuplicateCard(a)));
    }
}
