// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Next card odds computed from a shoe composition.
//!
//! The blackjack and bust chances are approximations:
//!
//! - [blackjack_chance] divides both the ace and the ten-value counts by the
//!   remaining cards minus one instead of modelling two draws without replacement.
//! - [bust_chance] counts the distinct ranks that would bust the hand, a rank
//!   counts once however many cards of that rank are left.
use serde::Serialize;

use shoecount_cards::Rank;

use crate::{Shoe, ShoeError};

/// The chance the next card has a given rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankChance {
    /// The card rank.
    pub rank: Rank,
    /// The number of cards left with this rank.
    pub count: usize,
    /// The chance in percent.
    pub percent: f64,
}

/// A summary of the shoe odds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Odds {
    /// The next card chances in display order.
    pub distribution: Vec<RankChance>,
    /// The number of ten-value cards left.
    pub ten_value_count: usize,
    /// The chance the next card is a ten-value card.
    pub ten_value_percent: f64,
    /// The blackjack chance, `None` if there are less than two cards left.
    pub blackjack: Option<f64>,
    /// The number of cards left.
    pub remaining: usize,
}

impl Odds {
    /// Computes the odds for a shoe, `None` if the shoe is empty.
    pub fn from_shoe(shoe: &Shoe) -> Option<Odds> {
        let distribution = next_card_distribution(shoe).ok()?;
        let ten_value_percent = ten_value_percent(shoe).ok()?;

        Some(Odds {
            distribution,
            ten_value_count: shoe.counts().ten_value_count(),
            ten_value_percent,
            blackjack: blackjack_chance(shoe),
            remaining: shoe.remaining(),
        })
    }
}

fn percent(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}

/// The chance of each rank being the next card.
pub fn next_card_distribution(shoe: &Shoe) -> Result<Vec<RankChance>, ShoeError> {
    let remaining = non_empty(shoe)?;
    let chances = shoe
        .counts()
        .iter()
        .map(|(rank, count)| RankChance {
            rank,
            count,
            percent: percent(count, remaining),
        })
        .collect();

    Ok(chances)
}

/// The chance the next card is a ten, jack, queen or king.
pub fn ten_value_percent(shoe: &Shoe) -> Result<f64, ShoeError> {
    let remaining = non_empty(shoe)?;
    Ok(percent(shoe.counts().ten_value_count(), remaining))
}

/// The chance of a blackjack on the next two cards.
pub fn blackjack_chance(shoe: &Shoe) -> Option<f64> {
    let remaining = shoe.remaining();
    if remaining <= 1 {
        return None;
    }

    let counts = shoe.counts();
    let others = (remaining - 1) as f64;
    let ace = counts.get(Rank::Ace) as f64 / others;
    let ten = counts.ten_value_count() as f64 / others;

    Some(ace * ten * 100.0)
}

/// The ranks left in the shoe that would bust a hand of `hand_value`.
///
/// Aces count as one.
pub fn busting_ranks(shoe: &Shoe, hand_value: u32) -> Vec<Rank> {
    let max_ok = 21 - i64::from(hand_value);
    shoe.counts()
        .iter()
        .filter(|&(rank, count)| count > 0 && i64::from(rank.value()) > max_ok)
        .map(|(rank, _)| rank)
        .collect()
}

/// The chance the next card busts a hand of `hand_value`.
pub fn bust_chance(shoe: &Shoe, hand_value: u32) -> Result<f64, ShoeError> {
    let remaining = non_empty(shoe)?;
    Ok(percent(busting_ranks(shoe, hand_value).len(), remaining))
}

fn non_empty(shoe: &Shoe) -> Result<usize, ShoeError> {
    match shoe.remaining() {
        0 => Err(ShoeError::EmptyShoe),
        n => Ok(n),
    }
}
