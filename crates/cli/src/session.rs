// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Interactive session loop.
use anyhow::Result;
use log::{error, info, warn};
use std::io;

use shoecount_core::{ParseRankError, Rank, Shoe, ShoeError};

use crate::report;

const PROMPT: &str = "Give cards to remove from deck. 10/T=Ten, J=Jack, Q=Queen, K=King, A=Ace\n  \
                      Or you can give 'b' to get the percent chance for bust if you take the \
                      next card, 'quit' to exit: ";

/// Parses the ranks in an input line.
///
/// A line with commas is split on commas, otherwise each character is a rank
/// with `10` read as `T`.
pub fn parse_tokens(line: &str) -> Vec<Result<Rank, ParseRankError>> {
    let line = line.trim();
    if line.contains(',') {
        line.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect()
    } else {
        line.replace("10", "T")
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_string().parse())
            .collect()
    }
}

/// A session that reads dealt cards and prints the shoe odds.
pub struct Session<R, W> {
    shoe: Shoe,
    input: R,
    output: W,
}

impl<R: io::BufRead, W: io::Write> Session<R, W> {
    /// Creates a new session for the given shoe.
    pub fn new(shoe: Shoe, input: R, output: W) -> Self {
        Self {
            shoe,
            input,
            output,
        }
    }

    /// The session shoe.
    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Runs the session until the input ends or the player quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", "=".repeat(40))?;

            let Some(line) = self.read_line(PROMPT)? else {
                break;
            };

            match line.trim().to_ascii_lowercase().as_str() {
                "quit" | "exit" => break,
                "b" => self.bust()?,
                _ => {
                    self.remove_cards(&line)?;
                    report::write_odds(&mut self.output, &self.shoe)?;
                }
            }
        }

        info!("Session ended with {} cards left", self.shoe.remaining());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }

    fn bust(&mut self) -> Result<()> {
        let Some(line) = self.read_line("Current hand value: ")? else {
            return Ok(());
        };

        match line.trim().parse::<u32>() {
            Ok(hand_value) => report::write_bust(&mut self.output, &self.shoe, hand_value)?,
            Err(e) => {
                warn!("Invalid hand value {:?}: {e}", line.trim());
                writeln!(self.output, "-Warning- Invalid hand value {}", line.trim())?;
            }
        }

        Ok(())
    }

    fn remove_cards(&mut self, line: &str) -> Result<()> {
        for token in parse_tokens(line) {
            let rank = match token {
                Ok(rank) => rank,
                Err(e) => {
                    warn!("{e}");
                    writeln!(self.output, "-Warning- Had trouble getting the value of {}", e.0)?;
                    continue;
                }
            };

            match self.shoe.remove_rank(rank) {
                Ok(_) => writeln!(self.output, "Removed a {}", rank.name())?,
                Err(ShoeError::RankNotFound(rank)) => {
                    warn!("No card with rank {} left", rank.name());
                    writeln!(self.output, "-Warning- No card with value {} found!", rank.name())?;
                }
                Err(e) => {
                    // The shoe is unchanged, report and keep going.
                    error!("Failed to remove {}: {e}", rank.name());
                    writeln!(self.output, "-Error- {e}")?;
                }
            }
        }

        Ok(())
    }
}
