// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shoe errors.
use thiserror::Error;

use shoecount_cards::Rank;

/// Errors returned by shoe operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A shoe must hold at least one deck.
    #[error("invalid deck count {0}, a shoe needs at least one deck")]
    InvalidDeckCount(usize),
    /// There are no cards left in the shoe.
    #[error("no cards remaining")]
    EmptyShoe,
    /// There is no card left with the given rank.
    #[error("no card with rank {} found", .0.name())]
    RankNotFound(Rank),
    /// A rank count would become negative.
    #[error("count for rank {} would become negative ({count} {delta:+})", .rank.name())]
    Invariant {
        /// The rank being updated.
        rank: Rank,
        /// The count before the update.
        count: usize,
        /// The rejected update.
        delta: isize,
    },
}
