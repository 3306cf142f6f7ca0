//! Card, hand and tier formatters for terminal display.
//!
//! Pure functions turning engine values into report lines. Suits print as
//! Unicode symbols where the terminal supports them, and as `h d c s` letters
//! otherwise.
//!
//! ## Example
//!
//! ```rust
//! use boardrank_engine::cards::{Card, Rank, Suit};
//! use boardrank_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use boardrank_engine::analysis::RankedEntry;
use boardrank_engine::cards::{Card, HoleCombination, Suit};
use boardrank_engine::condensed::CondensedTier;
use boardrank_engine::deck::SuitTable;
use boardrank_engine::hand::order_for_display;
use boardrank_engine::stats::{TieReport, TierStatistics};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        SuitTable::default().symbol(suit).to_string()
    } else {
        suit.to_string()
    }
}

/// Format a Card as a string combining rank and suit, e.g. "A♠" or "As".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank, format_suit(card.suit))
}

/// Format a board (list of cards) as a string in bracket notation.
///
/// Returns "[A♠ K♥ Q♦]", or "[]" if empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_hole(hole: &HoleCombination) -> String {
    format!("{} {}", format_card(&hole.high()), format_card(&hole.low()))
}

/// A five card hand with its groups in front.
pub fn format_hand(cards: &[Card]) -> String {
    let ordered: Vec<String> = order_for_display(cards).iter().map(format_card).collect();
    ordered.join(" ")
}

pub fn format_strength(strength: f64) -> String {
    format!("{:.2}", strength)
}

pub const FULL_HEADER: &str = "Tier  Strength  Hole    Best hand        Used  Category";
pub const CONDENSED_HEADER: &str = "Tier  Strength  Used  Combos  Category         Hands";

pub fn format_entry_row(entry: &RankedEntry) -> String {
    format!(
        "{:>4}  {:>8}  {:<6}  {:<15}  {:>4}  {}",
        entry.tier,
        format_strength(entry.strength),
        entry.hole.to_string(),
        format_hand(&entry.best_hand),
        entry.cards_used,
        entry.category(),
    )
}

pub fn format_condensed_row(tier: &CondensedTier) -> String {
    format!(
        "{:>4}  {:>8}  {:>4}  {:>6}  {:<15}  {}",
        tier.tier,
        format_strength(tier.strength),
        tier.cards_used,
        tier.combinations,
        tier.category.to_string(),
        tier.hands.join(" "),
    )
}

/// Summary lines for the reference hand.
pub fn format_statistics(entry: &RankedEntry, stats: &TierStatistics) -> Vec<String> {
    vec![
        format!(
            "Hand: {}  {}  [{}]  ({} from hole)",
            format_hole(&entry.hole),
            entry.category(),
            format_hand(&entry.best_hand),
            entry.cards_used,
        ),
        format!(
            "Tier: {}  Strength: {}",
            stats.tier,
            format_strength(entry.strength)
        ),
        format!(
            "Above: {} hands in {} tiers  Below: {} hands in {} tiers  Tied: {} of {}",
            stats.above_count,
            stats.tiers_above,
            stats.below_count,
            stats.tiers_below,
            stats.tie_size,
            stats.total,
        ),
    ]
}

pub fn format_ties(report: &TieReport) -> String {
    if report.is_empty() {
        "Ties: none".to_string()
    } else {
        format!(
            "Ties: {} tiers with more than one hand ({} hands)",
            report.len(),
            report.tied_entries()
        )
    }
}
