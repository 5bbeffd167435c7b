use crate::card::Card;
use crate::decision::Decision;
use crate::error::ActionError;
use crate::event::RoundEvent;
use crate::result::Settlement;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Applies a player decision.
    ///
    /// Returns the drawn card for [`Decision::Hit`] and `None` for
    /// [`Decision::Stand`].
    ///
    /// # Errors
    ///
    /// See [`Game::hit`] and [`Game::stand`].
    pub fn act(&mut self, decision: Decision) -> Result<Option<Card>, ActionError> {
        match decision {
            Decision::Hit => self.hit().map(Some),
            Decision::Stand => self.stand().map(|()| None),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round at once; the dealer does not draw.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the shoe is
    /// empty. An empty shoe aborts the round.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_cards(&[card]);

        let score = self.player.score();
        let bust = self.player.is_bust();
        self.events.push(RoundEvent::PlayerHit {
            card,
            hand: self.player.cards().to_vec(),
            score,
            bust,
        });

        if bust {
            log::debug!("player bust with {score}");
            self.settlement = Some(Settlement::PlayerBust);
            self.transition(GameState::RoundOver);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.events.push(RoundEvent::PlayerStood {
            score: self.player.score(),
        });
        self.transition(GameState::DealerTurn);

        Ok(())
    }
}
