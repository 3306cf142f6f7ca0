//! Strength scores (0-100) derived from tier populations.
//!
//! Two formulas are supported and selected with [`Scoring`]; they produce
//! different numbers for the same field and are not interchangeable:
//!
//! - [`Scoring::RelativePosition`]: `100 * (1 - better / total)` per tier, then
//!   min-max rescaled over the field so the best tier scores 100 and the worst 0.
//! - [`Scoring::StreetNormalized`]: `100 * worse / divisor`, where the divisor is
//!   a fixed per-street constant approximating the number of opposing hole
//!   pairs on that street.
//!
//! Scores are rounded to two decimals. Both are non-increasing in tier.
use serde::{Deserialize, Serialize};

use crate::tiers::{PositionTier, Street, TierPopulation};

/// Opposing two card combinations left on the flop, C(47, 2).
pub const FLOP_DIVISOR: u32 = 1081;
/// Opposing two card combinations left on the turn, C(46, 2).
pub const TURN_DIVISOR: u32 = 1035;
/// Opposing two card combinations left on the river, C(45, 2).
pub const RIVER_DIVISOR: u32 = 990;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetDivisors {
    pub flop: u32,
    pub turn: u32,
    pub river: u32,
}

impl StreetDivisors {
    pub fn for_street(&self, street: Street) -> u32 {
        match street {
            Street::Flop => self.flop,
            Street::Turn => self.turn,
            Street::River => self.river,
        }
    }
}

impl Default for StreetDivisors {
    fn default() -> Self {
        Self {
            flop: FLOP_DIVISOR,
            turn: TURN_DIVISOR,
            river: RIVER_DIVISOR,
        }
    }
}

/// Strength formula used for an analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Scoring {
    #[default]
    RelativePosition,
    StreetNormalized(StreetDivisors),
}

impl Scoring {
    /// Score of every tier, indexed by `tier - 1`.
    pub fn tier_scores(&self, street: Street, population: &TierPopulation) -> Vec<f64> {
        let tiers = 1..=population.last_tier();
        match self {
            Scoring::RelativePosition => {
                let total = population.total();
                let raw: Vec<f64> = tiers
                    .map(|tier| relative_position(tier, total, population))
                    .collect();
                min_max_normalize(&raw)
            }
            Scoring::StreetNormalized(divisors) => {
                let divisor = divisors.for_street(street);
                tiers
                    .map(|tier| street_normalized(population.worse_than(tier), divisor))
                    .collect()
            }
        }
    }
}

fn relative_position(tier: PositionTier, total: usize, population: &TierPopulation) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let better = population.better_than(tier) as f64;
    round2(100.0 * (1.0 - better / total as f64))
}

fn street_normalized(worse: usize, divisor: u32) -> f64 {
    if divisor == 0 {
        return 0.0;
    }
    round2((100.0 * worse as f64 / divisor as f64).clamp(0.0, 100.0))
}

/// Rescales so the smallest value maps to 0 and the largest to 100. A field
/// where every value is the same scores 100 throughout.
fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values
        .iter()
        .map(|v| {
            if max == min {
                100.0
            } else {
                round2((v - min) / (max - min) * 100.0)
            }
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
