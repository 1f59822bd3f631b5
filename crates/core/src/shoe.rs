// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A multi-deck blackjack shoe.
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use shoecount_cards::{Card, Deck, Rank};

use crate::{RankCounter, ShoeError};

/// A shoe of one or more decks shuffled together.
///
/// The shoe keeps a [RankCounter] in sync with the remaining cards, every
/// mutation updates the counter before touching the cards so that a failed update
/// leaves both unchanged.
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: usize,
    /// The remaining cards, the top of the shoe is the last card.
    cards: Vec<Card>,
    counter: RankCounter,
}

impl Shoe {
    /// Creates a shoe with `decks` decks shuffled with the given rng.
    pub fn new<R: Rng + ?Sized>(decks: usize, rng: &mut R) -> Result<Self, ShoeError> {
        if decks == 0 {
            return Err(ShoeError::InvalidDeckCount(decks));
        }

        let mut cards = Vec::with_capacity(decks * Deck::SIZE);
        for _ in 0..decks {
            cards.extend(Deck::default());
        }

        // Shuffle all decks together.
        cards.shuffle(rng);

        let counter = RankCounter::from_cards(&cards);
        debug!("Created shoe with {decks} decks and {} cards", cards.len());

        Ok(Self {
            decks,
            cards,
            counter,
        })
    }

    /// Creates a shoe shuffled with the thread rng.
    pub fn shuffled(decks: usize) -> Result<Self, ShoeError> {
        Self::new(decks, &mut rand::rng())
    }

    /// Creates a shoe with a reproducible shuffle.
    pub fn with_seed(decks: usize, seed: u64) -> Result<Self, ShoeError> {
        Self::new(decks, &mut StdRng::seed_from_u64(seed))
    }

    /// Draws the card at the top of the shoe.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        let card = *self.cards.last().ok_or(ShoeError::EmptyShoe)?;
        self.counter.decrement(card.rank())?;
        self.cards.pop();

        debug!("Drew {card}, {} cards left", self.cards.len());
        Ok(card)
    }

    /// Removes a card with the given rank, the removed card is the matching card
    /// closest to the top of the shoe.
    pub fn remove_rank(&mut self, rank: Rank) -> Result<Card, ShoeError> {
        let idx = self
            .cards
            .iter()
            .rposition(|c| c.rank() == rank)
            .ok_or(ShoeError::RankNotFound(rank))?;

        self.counter.decrement(rank)?;
        let card = self.cards.remove(idx);

        debug!("Removed {card}, {} cards left", self.cards.len());
        Ok(card)
    }

    /// The number of cards left in the shoe.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the shoe is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The number of decks this shoe was built with.
    pub fn decks(&self) -> usize {
        self.decks
    }

    /// The remaining cards count by rank.
    pub fn counts(&self) -> &RankCounter {
        &self.counter
    }

    /// The remaining cards, the top of the shoe is the last card.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Rebuilds the ranks counter from the remaining cards.
    pub fn recompute(&mut self) -> &RankCounter {
        let counter = RankCounter::from_cards(&self.cards);
        if counter != self.counter {
            debug!("Recomputed shoe counts differ from tracked counts");
        }

        self.counter = counter;
        &self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_sync(shoe: &Shoe) {
        assert_eq!(shoe.counts(), &RankCounter::from_cards(shoe.cards()));
        assert_eq!(shoe.counts().total_count(), shoe.remaining());
    }

    #[test]
    fn new_shoe() {
        for decks in [1, 2, 6, 8] {
            let shoe = Shoe::with_seed(decks, 42).unwrap();
            assert_eq!(shoe.decks(), decks);
            assert_eq!(shoe.remaining(), decks * Deck::SIZE);
            for rank in Rank::ranks() {
                assert_eq!(shoe.counts().get(rank), 4 * decks);
            }
            assert_in_sync(&shoe);
        }

        assert_eq!(Shoe::shuffled(6).unwrap().remaining(), 312);
        assert_eq!(Shoe::shuffled(0).unwrap_err(), ShoeError::InvalidDeckCount(0));
    }

    #[test]
    fn seeded_shoes_match() {
        let s1 = Shoe::with_seed(6, 1234).unwrap();
        let s2 = Shoe::with_seed(6, 1234).unwrap();
        assert_eq!(s1.cards(), s2.cards());

        // A fresh unshuffled shoe is ordered by deck, a shuffled one should not be.
        let ordered = (0..6).flat_map(|_| Deck::default()).collect::<Vec<_>>();
        assert_ne!(s1.cards(), ordered.as_slice());
    }

    #[test]
    fn draw_until_empty() {
        let mut shoe = Shoe::with_seed(1, 7).unwrap();
        let top = *shoe.cards().last().unwrap();
        assert_eq!(shoe.draw().unwrap(), top);

        for _ in 0..shoe.remaining() {
            shoe.draw().unwrap();
            assert_in_sync(&shoe);
        }

        assert!(shoe.is_empty());
        assert_eq!(shoe.counts().total_count(), 0);
        assert_eq!(shoe.draw(), Err(ShoeError::EmptyShoe));
        assert_in_sync(&shoe);
    }

    #[test]
    fn remove_aces() {
        let mut shoe = Shoe::with_seed(1, 3).unwrap();

        for left in (0..4).rev() {
            let card = shoe.remove_rank(Rank::Ace).unwrap();
            assert_eq!(card.rank(), Rank::Ace);
            assert_eq!(shoe.counts().get(Rank::Ace), left);
            assert_in_sync(&shoe);
        }

        assert_eq!(shoe.remaining(), 48);
        assert_eq!(
            shoe.remove_rank(Rank::Ace),
            Err(ShoeError::RankNotFound(Rank::Ace))
        );
        assert_eq!(shoe.remaining(), 48);
        assert_in_sync(&shoe);
    }

    #[test]
    fn mixed_draws_and_removals() {
        let mut shoe = Shoe::with_seed(2, 99).unwrap();
        let ranks = Rank::ranks().collect::<Vec<_>>();
        let mut removed = 0;

        for idx in 0..60 {
            if idx % 3 == 0 {
                shoe.draw().unwrap();
            }

            // Ranks may run out after draws, the shoe must stay consistent.
            let rank = ranks[idx % Rank::COUNT];
            let before = shoe.counts().get(rank);
            match shoe.remove_rank(rank) {
                Ok(_) => {
                    assert_eq!(shoe.counts().get(rank), before - 1);
                    removed += 1;
                }
                Err(e) => {
                    assert_eq!(e, ShoeError::RankNotFound(rank));
                    assert_eq!(before, 0);
                }
            }
            assert_in_sync(&shoe);
        }

        assert_eq!(shoe.remaining(), 2 * Deck::SIZE - 20 - removed);
    }

    #[test]
    fn ten_value_count() {
        let mut shoe = Shoe::with_seed(1, 5).unwrap();
        assert_eq!(shoe.counts().ten_value_count(), 16);

        shoe.remove_rank(Rank::King).unwrap();
        shoe.remove_rank(Rank::Ten).unwrap();
        shoe.remove_rank(Rank::Five).unwrap();
        assert_eq!(shoe.counts().ten_value_count(), 14);
    }

    #[test]
    fn recompute_counts() {
        let mut shoe = Shoe::with_seed(1, 11).unwrap();
        shoe.draw().unwrap();
        shoe.remove_rank(Rank::Queen).unwrap();

        let tracked = shoe.counts().clone();
        assert_eq!(shoe.recompute(), &tracked);
        assert_in_sync(&shoe);
    }
}
