// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds report printing.
use anyhow::Result;
use std::io;

use shoecount_core::{Odds, Shoe, ShoeError, odds};

/// Prints the next card chances for the shoe.
pub fn write_odds(w: &mut impl io::Write, shoe: &Shoe) -> Result<()> {
    let Some(odds) = Odds::from_shoe(shoe) else {
        writeln!(w, "No cards remaining")?;
        return Ok(());
    };

    for chance in &odds.distribution {
        write_line(w, chance.rank.name(), chance.percent, chance.count)?;
    }

    write_line(
        w,
        "Any 10-Value",
        odds.ten_value_percent,
        odds.ten_value_count,
    )?;

    match odds.blackjack {
        Some(chance) => writeln!(w, "Chance for blackjack: {chance:.2}%")?,
        None => writeln!(w, "No chance for blackjack")?,
    }

    writeln!(w, "{} cards left", odds.remaining)?;
    w.flush()?;

    Ok(())
}

/// Prints the chance the next card busts a hand of `hand_value`.
pub fn write_bust(w: &mut impl io::Write, shoe: &Shoe, hand_value: u32) -> Result<()> {
    match odds::bust_chance(shoe, hand_value) {
        Ok(chance) => writeln!(w, "Chance for bust: {chance:.2}%")?,
        Err(ShoeError::EmptyShoe) => writeln!(w, "No remaining cards")?,
        Err(e) => return Err(e.into()),
    }

    w.flush()?;
    Ok(())
}

fn write_line(w: &mut impl io::Write, label: &str, percent: f64, count: usize) -> Result<()> {
    writeln!(w, "{label:<12} : {percent:.2}% ({count} cards left)")?;
    Ok(())
}
