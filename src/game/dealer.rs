use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealerError, SettleError};
use crate::event::RoundEvent;
use crate::result::{RoundOutcome, Settlement, resolve};

use super::{Game, GameState};

impl Game {
    /// Returns whether the dealer must take another card.
    fn dealer_must_draw(&self) -> bool {
        let value = self.dealer.score();
        let threshold = self.options.dealer_stands_on;

        value < threshold
            || (value == threshold && self.dealer.is_soft() && !self.options.stand_on_soft_17)
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals the hole card and draws one card at a time while
    /// below the stand threshold (17 by default). A bust stops the drawing
    /// immediately.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn, or if the shoe runs
    /// out while the dealer must draw. An empty shoe aborts the round.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        self.events.push(RoundEvent::DealerRevealed {
            hand: self.dealer.cards().to_vec(),
            score: self.dealer.score(),
        });

        let mut drawn_cards = Vec::new();
        let mut settlement = Settlement::Showdown;

        while self.dealer_must_draw() {
            let card = self.draw()?;
            self.dealer.add_cards(&[card]);
            drawn_cards.push(card);

            let bust = self.dealer.is_bust();
            self.events.push(RoundEvent::DealerDrew {
                card,
                hand: self.dealer.cards().to_vec(),
                score: self.dealer.score(),
                bust,
            });

            if bust {
                log::debug!("dealer bust with {}", self.dealer.score());
                settlement = Settlement::DealerBust;
                break;
            }
        }

        self.settlement = Some(settlement);
        self.transition(GameState::RoundOver);

        Ok(drawn_cards)
    }

    /// Settles the round and returns its outcome.
    ///
    /// Calling this again for the same round returns the same outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn settle(&mut self) -> Result<RoundOutcome, SettleError> {
        if let Some(outcome) = self.outcome {
            return Ok(outcome);
        }

        let settlement = match (self.state, self.settlement) {
            (GameState::RoundOver, Some(settlement)) => settlement,
            _ => return Err(SettleError::InvalidState),
        };

        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        let outcome = RoundOutcome {
            player_score,
            dealer_score,
            outcome: resolve(player_score, dealer_score, settlement),
        };
        log::debug!("settled: {outcome:?}");

        self.outcome = Some(outcome);
        self.events.push(RoundEvent::Settled(outcome));

        Ok(outcome)
    }
}
