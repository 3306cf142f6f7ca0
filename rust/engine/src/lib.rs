//! # boardrank-engine: Hold'em Board Ranking Core
//!
//! Ranks every two-card hole combination against a Texas Hold'em board.
//! For one street it enumerates the hole pairs that could still be dealt,
//! picks each pair's best five card hand, groups equal hands into dense tiers
//! and scores every tier from 0 to 100. Everything here is synchronous and
//! deterministic; randomness only enters through an RNG the caller passes in.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card, Suit, Rank and canonical hole pairs, plus text parsing
//! - [`deck`] - Owned deck with seeded random dealing and the suit table
//! - [`hand`] - Five card classification and the total ranking order
//! - [`best`] - Best five card hand from hole cards and a board
//! - [`enumerate`] - Every valid hole combination against a reference hand
//! - [`tiers`] - Streets, tier assignment and tier populations
//! - [`strength`] - Relative-position and street-normalized scoring
//! - [`stats`] - Above/below/tie counts and tie reports
//! - [`analysis`] - The per-street pipeline and its ranked entries
//! - [`session`] - Following one hand from flop to river
//! - [`condensed`] - Starting-hand notation per tier (`AKs`, `QQ`)
//! - [`showdown`] - Winners among several hole pairs
//! - [`errors`] - Error type for every fallible operation
//!
//! ## Quick Start
//!
//! ```rust
//! use boardrank_engine::cards::{parse_cards, HoleCombination};
//! use boardrank_engine::session::HandSession;
//! use boardrank_engine::strength::Scoring;
//!
//! let hole = HoleCombination::from_slice(&parse_cards("Kc Qc").unwrap()).unwrap();
//! let mut session = HandSession::new(hole).unwrap();
//! let flop = parse_cards("7c 7d 2h").unwrap();
//! session.deal_flop([flop[0], flop[1], flop[2]]).unwrap();
//!
//! let analysis = session.analyze(&Scoring::default()).unwrap();
//! let stats = analysis.statistics();
//! println!(
//!     "{} is in tier {} with {} hands above and {} tied",
//!     analysis.reference().hole,
//!     stats.tier,
//!     stats.above_count,
//!     stats.tie_size,
//! );
//! assert!(stats.is_tied());
//! ```
//!
//! ## Choosing a Strength Formula
//!
//! ```rust
//! use boardrank_engine::strength::{Scoring, StreetDivisors};
//!
//! let relative = Scoring::RelativePosition;
//! let street = Scoring::StreetNormalized(StreetDivisors::default());
//! assert_ne!(relative, street);
//! ```

pub mod analysis;
pub mod best;
pub mod cards;
pub mod condensed;
pub mod deck;
pub mod enumerate;
pub mod errors;
pub mod hand;
pub mod session;
pub mod showdown;
pub mod stats;
pub mod strength;
pub mod tiers;
