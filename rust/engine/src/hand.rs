use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::cards::{Card, Suit};

/// The ten poker hand classes, numbered 1 (High Card) to 10 (Royal Flush).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    fn carries_suit(self) -> bool {
        matches!(
            self,
            Category::Flush | Category::StraightFlush | Category::RoyalFlush
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully ordered ranking of a five card hand.
///
/// Keys compare by category first, then by the tie-break vector: the distinct
/// ranks of the hand ordered by group size and then value (so `[7, 13, 12, 2]`
/// for a pair of sevens with K-Q-2), followed by the common suit for the
/// flush categories. The suit entry makes two flushes that differ only in suit
/// compare unequal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub struct HandRankingKey {
    pub category: Category,
    // distinct ranks, high -> low by importance, zero padded
    ranks: [u8; 5],
    suit: Option<Suit>,
}

impl HandRankingKey {
    /// Rank part of the tie-break vector, without padding.
    pub fn ranks(&self) -> &[u8] {
        let len = self.ranks.iter().take_while(|r| **r != 0).count();
        &self.ranks[..len]
    }

    /// Trailing suit discriminator; only present for flush categories.
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }
}

/// Classifies exactly five cards.
///
/// Straights need five distinct ranks spanning exactly four steps with the Ace
/// valued 14, so A-2-3-4-5 is not a straight.
pub fn identify(hand: &[Card; 5]) -> HandRankingKey {
    let mut rank_counts = [0u8; 15];
    for c in hand.iter() {
        rank_counts[c.value() as usize] += 1;
    }

    // (count, rank), bigger groups first then higher ranks
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|r| rank_counts[*r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let mut ranks = [0u8; 5];
    for (slot, (_, r)) in ranks.iter_mut().zip(groups.iter()) {
        *slot = *r;
    }

    let suit = hand[0].suit;
    let is_flush = hand.iter().all(|c| c.suit == suit);
    let high = hand.iter().map(Card::value).max().unwrap_or(0);
    let low = hand.iter().map(Card::value).min().unwrap_or(0);
    let is_straight = groups.len() == 5 && high - low == 4;

    let largest = groups.first().map(|g| g.0).unwrap_or(0);
    let pairs = groups.iter().filter(|g| g.0 == 2).count();

    let category = if is_flush && is_straight && high == 14 {
        Category::RoyalFlush
    } else if is_flush && is_straight {
        Category::StraightFlush
    } else if largest == 4 {
        Category::FourOfAKind
    } else if largest == 3 && pairs == 1 {
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if largest == 3 {
        Category::ThreeOfAKind
    } else if pairs == 2 {
        Category::TwoPair
    } else if pairs == 1 {
        Category::OnePair
    } else {
        Category::HighCard
    };

    HandRankingKey {
        category,
        ranks,
        suit: category.carries_suit().then_some(suit),
    }
}

/// Total order over ranking keys.
pub fn compare_hands(a: &HandRankingKey, b: &HandRankingKey) -> Ordering {
    a.cmp(b)
}

/// Orders cards for display: quads, trips and pairs first (bigger and higher
/// groups leading), then the remaining cards high to low.
pub fn order_for_display(cards: &[Card]) -> Vec<Card> {
    let mut rank_counts = [0u8; 15];
    for c in cards {
        rank_counts[c.value() as usize] += 1;
    }
    let mut ordered = cards.to_vec();
    ordered.sort_by(|a, b| {
        let ka = (rank_counts[a.value() as usize], a.value());
        let kb = (rank_counts[b.value() as usize], b.value());
        kb.cmp(&ka).then(a.suit.cmp(&b.suit))
    });
    ordered
}
