//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The shoe must contain at least one deck.
    #[error("the shoe must contain at least one deck")]
    InvalidDeckCount,
    /// The dealer stand threshold is above 21.
    #[error("dealer stand threshold {0} is above 21")]
    InvalidStandThreshold(u8),
}

/// A draw asked for more cards than the shoe holds.
///
/// Nothing is removed from the shoe when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("shoe exhausted: requested {requested} card(s), {remaining} remaining")]
pub struct ShoeExhausted {
    /// Number of cards requested.
    pub requested: usize,
    /// Number of cards left in the shoe.
    pub remaining: usize,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the shoe for the initial deal.
    #[error(transparent)]
    ShoeExhausted(#[from] ShoeExhausted),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the shoe.
    #[error(transparent)]
    ShoeExhausted(#[from] ShoeExhausted),
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// It is not the dealer's turn.
    #[error("invalid game state for dealer play")]
    InvalidState,
    /// No cards left in the shoe.
    #[error(transparent)]
    ShoeExhausted(#[from] ShoeExhausted),
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The round has not reached settlement.
    #[error("invalid game state for settlement")]
    InvalidState,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// A round is in progress.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// A player decision was not one of the accepted choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid decision, expected hit or stand")]
pub struct InvalidDecision;

/// Errors that can end [`Game::play_round`](crate::Game::play_round) early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play failed.
    #[error(transparent)]
    Dealer(#[from] DealerError),
    /// Settlement failed.
    #[error(transparent)]
    Settle(#[from] SettleError),
}

impl RoundError {
    /// Returns the shoe exhaustion details if this error was caused by an empty shoe.
    #[must_use]
    pub const fn shoe_exhausted(&self) -> Option<ShoeExhausted> {
        match self {
            Self::Deal(DealError::ShoeExhausted(e))
            | Self::Action(ActionError::ShoeExhausted(e))
            | Self::Dealer(DealerError::ShoeExhausted(e)) => Some(*e),
            _ => None,
        }
    }
}
