//! Round controller and session state.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{OptionsError, ReshuffleError, ShoeExhausted};
use crate::event::RoundEvent;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{RoundOutcome, Settlement};
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
mod round;
pub mod state;

pub use round::RoundReport;
pub use state::GameState;

/// A single-seat blackjack session against an automated dealer.
///
/// The game owns the shoe and both hands for the whole session. The shoe is
/// shuffled once and drained across rounds; when it runs dry the caller
/// decides whether to [`reshuffle`](Game::reshuffle).
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// How the current round ended, once known.
    settlement: Option<Settlement>,
    /// Result of the current round, once settled.
    outcome: Option<RoundOutcome>,
    /// Events of the current round.
    events: Vec<RoundEvent>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid (see [`GameOptions::validate`]).
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_decks(1), 42).unwrap();
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(options.decks, &mut rng);

        Ok(Self {
            shoe,
            options,
            state: GameState::Idle,
            player: Hand::new("Player"),
            dealer: Hand::new("Dealer"),
            settlement: None,
            outcome: None,
            events: Vec::new(),
            rng,
        })
    }

    /// Replaces the shoe with a freshly shuffled one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        self.ensure_between_rounds()?;
        self.shoe = Shoe::shuffled(self.options.decks, &mut self.rng);
        log::debug!("reshuffled, {} cards in shoe", self.shoe.remaining());
        Ok(())
    }

    /// Replaces the shoe with the given one, for example a rigged shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn replace_shoe(&mut self, shoe: Shoe) -> Result<(), ReshuffleError> {
        self.ensure_between_rounds()?;
        self.shoe = shoe;
        Ok(())
    }

    fn ensure_between_rounds(&self) -> Result<(), ReshuffleError> {
        if self.state.in_round() {
            return Err(ReshuffleError::InvalidState);
        }
        Ok(())
    }

    /// Draws a card, aborting the round if the shoe is empty.
    fn draw(&mut self) -> Result<Card, ShoeExhausted> {
        self.shoe.draw_one().inspect_err(|_| self.abort())
    }

    fn abort(&mut self) {
        log::warn!("round aborted in {:?}: shoe exhausted", self.state);
        self.state = GameState::Aborted;
    }

    fn transition(&mut self, next: GameState) {
        log::debug!("{:?} -> {next:?}", self.state);
        self.state = next;
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, including the hole card.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the settled outcome of the current round, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns the events recorded since the last deal.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Returns what the player is allowed to see.
    #[must_use]
    pub fn table(&self) -> TableView<'_> {
        TableView {
            state: self.state,
            player: &self.player,
            dealer: &self.dealer,
            cards_remaining: self.shoe.remaining(),
            events: &self.events,
        }
    }

    /// Clears both hands and returns the game to [`GameState::Idle`].
    ///
    /// The shoe is left as it is.
    pub fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.settlement = None;
        self.outcome = None;
        self.events.clear();
        self.transition(GameState::Idle);
    }
}

/// A borrowed snapshot of the table from the player's seat.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// Current game state.
    pub state: GameState,
    /// The player's hand.
    pub player: &'a Hand,
    dealer: &'a Hand,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
    /// Events of the current round so far.
    pub events: &'a [RoundEvent],
}

impl TableView<'_> {
    /// Returns whether the dealer's hole card has been turned over.
    #[must_use]
    pub const fn dealer_revealed(&self) -> bool {
        matches!(self.state, GameState::DealerTurn | GameState::RoundOver)
    }

    /// Returns the dealer's cards with the hole card masked as `None`
    /// until it is revealed.
    #[must_use]
    pub fn dealer_cards(&self) -> Vec<Option<Card>> {
        let revealed = self.dealer_revealed();
        self.dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(i, &card)| (revealed || i != 0).then_some(card))
            .collect()
    }

    /// Returns the dealer score the player can see: the up card's value while
    /// the hole card is hidden, the full score afterwards.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        if self.dealer_revealed() {
            self.dealer.score()
        } else {
            self.dealer.up_value()
        }
    }
}
