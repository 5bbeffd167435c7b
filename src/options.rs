//! Game configuration options.

use crate::error::OptionsError;
use crate::hand::BLACKJACK;

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_dealer_stands_on(17)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// The dealer keeps drawing while below this score.
    pub dealer_stands_on: u8,
    /// Whether the dealer stands on a soft hand equal to `dealer_stands_on`
    /// (soft 17 with the default threshold). When `false`, the dealer draws
    /// to that soft total.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            dealer_stands_on: 17,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the score at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets whether the dealer stands on a soft hand equal to the stand
    /// threshold (soft 17 by default, soft 18 with a threshold of 18).
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Checks the options for values the engine cannot play with.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks or the stand threshold is above 21.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::InvalidDeckCount);
        }
        if self.dealer_stands_on > BLACKJACK {
            return Err(OptionsError::InvalidStandThreshold(self.dealer_stands_on));
        }
        Ok(())
    }
}
