// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shoecount core types.
//!
//! A [Shoe] holds one or more decks shuffled together and tracks how many cards
//! of each rank are left as cards are drawn or removed:
//!
//! ```
//! # use shoecount_core::{Rank, Shoe, odds};
//! let mut shoe = Shoe::with_seed(1, 42).unwrap();
//! shoe.remove_rank(Rank::Ace).unwrap();
//! assert_eq!(shoe.counts().get(Rank::Ace), 3);
//! assert_eq!(shoe.remaining(), 51);
//!
//! // Three aces and sixteen ten-value cards left.
//! let bj = odds::blackjack_chance(&shoe).unwrap();
//! assert!((bj - 3.0 / 50.0 * 16.0 / 50.0 * 100.0).abs() < 1e-9);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod counter;
pub mod error;
pub mod odds;
pub mod shoe;

pub use counter::RankCounter;
pub use error::ShoeError;
pub use odds::Odds;
pub use shoe::Shoe;

// Reexport cards types.
pub use shoecount_cards::{Card, Deck, ParseRankError, Rank, Suit};
