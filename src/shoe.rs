//! The shoe: one or more shuffled decks drawn from the top.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{OptionsError, ShoeExhausted};

/// A shuffled stack of cards. The top of the shoe is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates a shoe of `num_decks` standard decks and shuffles it once.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidDeckCount`] if `num_decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::Shoe;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let shoe = Shoe::new(2, &mut rng).unwrap();
    /// assert_eq!(shoe.remaining(), 104);
    /// ```
    pub fn new<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Result<Self, OptionsError> {
        if num_decks == 0 {
            return Err(OptionsError::InvalidDeckCount);
        }
        Ok(Self::shuffled(num_decks, rng))
    }

    /// Builds and shuffles without validating the deck count.
    pub(crate) fn shuffled<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);
        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        log::debug!("built shoe of {num_decks} deck(s), {} cards", cards.len());
        Self { cards }
    }

    /// Creates a rigged shoe that yields `draws` in the given order.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns `count` cards from the top of the shoe, in draw order.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if fewer than `count` cards remain. The shoe is
    /// left untouched in that case; partial draws never happen.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, ShoeExhausted> {
        let remaining = self.cards.len();
        if remaining < count {
            log::warn!("shoe exhausted: requested {count}, remaining {remaining}");
            return Err(ShoeExhausted {
                requested: count,
                remaining,
            });
        }

        let drawn: Vec<Card> = self.cards.drain(remaining - count..).rev().collect();
        log::trace!("drew {drawn:?}");
        Ok(drawn)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if the shoe is empty.
    pub fn draw_one(&mut self) -> Result<Card, ShoeExhausted> {
        let card = self.cards.pop().ok_or(ShoeExhausted {
            requested: 1,
            remaining: 0,
        })?;
        log::trace!("drew {card}");
        Ok(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
