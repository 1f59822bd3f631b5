// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shoecount cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use shoecount_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(kd.rank().value(), 10);
//! assert_eq!(ah.rank().value(), 1);
//! ```
//!
//! ranks can be parsed from the tokens a player types when reporting dealt cards:
//!
//! ```
//! # use shoecount_cards::Rank;
//! assert_eq!("10".parse(), Ok(Rank::Ten));
//! assert_eq!("q".parse(), Ok(Rank::Queen));
//! assert!("X".parse::<Rank>().is_err());
//! ```
//!
//! and a [Deck] type for building a standard 52 cards deck:
//!
//! ```
//! # use shoecount_cards::Deck;
//! let deck = Deck::new_and_shuffled(&mut rand::rng());
//! assert_eq!(deck.count(), Deck::SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseRankError, Rank, Suit};
