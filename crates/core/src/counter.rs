// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Remaining cards count by rank.
use serde::{Deserialize, Serialize};

use shoecount_cards::{Card, Rank};

use crate::ShoeError;

/// Number of remaining cards for each rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCounter {
    counts: [usize; Rank::COUNT],
}

impl RankCounter {
    /// Creates a counter by counting the given cards.
    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut counter = Self::default();
        for card in cards {
            counter.counts[card.rank() as usize] += 1;
        }

        counter
    }

    /// The number of cards with the given rank.
    pub fn get(&self, rank: Rank) -> usize {
        self.counts[rank as usize]
    }

    /// Adds `delta` to the count for `rank`.
    ///
    /// Fails without changing the count if the result would be negative.
    pub fn increment(&mut self, rank: Rank, delta: isize) -> Result<(), ShoeError> {
        let count = self.counts[rank as usize];
        let updated = count
            .checked_add_signed(delta)
            .ok_or(ShoeError::Invariant { rank, count, delta })?;

        self.counts[rank as usize] = updated;
        Ok(())
    }

    /// Removes one card from the count for `rank`.
    pub fn decrement(&mut self, rank: Rank) -> Result<(), ShoeError> {
        self.increment(rank, -1)
    }

    /// The number of tens, jacks, queens and kings.
    pub fn ten_value_count(&self) -> usize {
        Rank::ranks()
            .filter(Rank::is_ten_value)
            .map(|r| self.get(r))
            .sum()
    }

    /// The total number of cards.
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates the ranks counts in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, usize)> + '_ {
        Rank::ranks().map(|r| (r, self.get(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoecount_cards::{Deck, Suit};

    #[test]
    fn count_deck() {
        let cards = Deck::default().into_iter().collect::<Vec<_>>();
        let counter = RankCounter::from_cards(&cards);

        assert!(counter.iter().all(|(_, count)| count == 4));
        assert_eq!(counter.total_count(), Deck::SIZE);
        assert_eq!(counter.ten_value_count(), 16);
    }

    #[test]
    fn empty_counter() {
        let counter = RankCounter::default();
        assert_eq!(counter.get(Rank::Ace), 0);
        assert_eq!(counter.total_count(), 0);
        assert_eq!(counter.ten_value_count(), 0);
    }

    #[test]
    fn increment_and_decrement() {
        let mut counter = RankCounter::default();
        counter.increment(Rank::Jack, 3).unwrap();
        counter.increment(Rank::Ten, 1).unwrap();
        counter.increment(Rank::Five, 2).unwrap();
        assert_eq!(counter.get(Rank::Jack), 3);
        assert_eq!(counter.ten_value_count(), 4);
        assert_eq!(counter.total_count(), 6);

        counter.decrement(Rank::Jack).unwrap();
        counter.increment(Rank::Five, -2).unwrap();
        assert_eq!(counter.get(Rank::Jack), 2);
        assert_eq!(counter.get(Rank::Five), 0);
        assert_eq!(counter.total_count(), 3);
    }

    #[test]
    fn negative_count_is_rejected() {
        let mut counter = RankCounter::from_cards(&[Card::new(Rank::Ace, Suit::Spades)]);

        assert_eq!(
            counter.increment(Rank::Ace, -2),
            Err(ShoeError::Invariant {
                rank: Rank::Ace,
                count: 1,
                delta: -2
            })
        );
        assert_eq!(counter.get(Rank::Ace), 1);

        counter.decrement(Rank::Ace).unwrap();
        assert!(matches!(
            counter.decrement(Rank::Ace),
            Err(ShoeError::Invariant { .. })
        ));
        assert_eq!(counter.get(Rank::Ace), 0);
    }
}
