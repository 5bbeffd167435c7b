use crate::error::{DealError, ShoeExhausted};
use crate::event::RoundEvent;
use crate::result::Settlement;

use super::{Game, GameState};

/// Cards needed for the initial deal: two each.
const INITIAL_DEAL: usize = 4;

impl Game {
    /// Starts a round: clears both hands, deals two cards to the player and
    /// then two to the dealer, and checks for blackjack.
    ///
    /// If either side has 21 the round goes straight to
    /// [`GameState::RoundOver`]; otherwise it moves to [`GameState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, or if the shoe
    /// holds fewer than four cards. Nothing is dealt in that case and the game
    /// moves to [`GameState::Aborted`].
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state.in_round() {
            return Err(DealError::InvalidState);
        }

        self.clear_round();
        self.transition(GameState::Dealing);

        let remaining = self.shoe.remaining();
        if remaining < INITIAL_DEAL {
            self.abort();
            return Err(ShoeExhausted {
                requested: INITIAL_DEAL,
                remaining,
            }
            .into());
        }

        let cards = self.shoe.draw(2)?;
        self.player.add_cards(&cards);
        let cards = self.shoe.draw(2)?;
        self.dealer.add_cards(&cards);

        if let Some(&dealer_up) = self.dealer.up_card() {
            self.events.push(RoundEvent::Dealt {
                player: self.player.cards().to_vec(),
                player_score: self.player.score(),
                dealer_up,
                dealer_up_value: dealer_up.value(),
            });
        }

        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            log::debug!(
                "blackjack on the deal: player {}, dealer {}",
                self.player.score(),
                self.dealer.score()
            );
            self.events.push(RoundEvent::DealerRevealed {
                hand: self.dealer.cards().to_vec(),
                score: self.dealer.score(),
            });
            self.settlement = Some(Settlement::Blackjack);
            self.transition(GameState::RoundOver);
        } else {
            self.transition(GameState::PlayerTurn);
        }

        Ok(())
    }
}
