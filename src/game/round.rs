use alloc::vec::Vec;

use crate::decision::Decider;
use crate::error::RoundError;
use crate::event::RoundEvent;
use crate::result::RoundOutcome;

use super::{Game, GameState};

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// The settled outcome.
    pub outcome: RoundOutcome,
    /// Events in the order they happened.
    pub events: Vec<RoundEvent>,
}

impl Game {
    /// Plays a full round, asking `decider` for each player decision.
    ///
    /// Decisions the decider cannot produce are recorded as
    /// [`RoundEvent::DecisionRejected`] and asked for again.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the shoe runs
    /// out. Events recorded before the failure stay available through
    /// [`Game::events`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Decision, Game, GameOptions, InvalidDecision, TableView};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7).unwrap();
    /// let mut always_stand =
    ///     |_: &TableView<'_>| -> Result<Decision, InvalidDecision> { Ok(Decision::Stand) };
    /// let report = game.play_round(&mut always_stand).unwrap();
    /// assert_eq!(game.outcome(), Some(report.outcome));
    /// ```
    pub fn play_round<D>(&mut self, decider: &mut D) -> Result<RoundReport, RoundError>
    where
        D: Decider + ?Sized,
    {
        self.deal()?;

        while self.state == GameState::PlayerTurn {
            let decision = decider.decide(&self.table());
            match decision {
                Ok(decision) => {
                    self.act(decision)?;
                }
                Err(err) => {
                    log::debug!("{err}");
                    self.events.push(RoundEvent::DecisionRejected);
                }
            }
        }

        if self.state == GameState::DealerTurn {
            self.dealer_play()?;
        }

        let outcome = self.settle()?;

        Ok(RoundReport {
            outcome,
            events: self.events.clone(),
        })
    }
}
