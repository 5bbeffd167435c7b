//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round in progress.
    #[default]
    Idle,
    /// Dealing initial cards and checking for blackjack.
    Dealing,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundOver,
    /// Round stopped because the shoe ran out of cards.
    Aborted,
}

impl GameState {
    /// Returns whether a round is underway.
    #[must_use]
    pub const fn in_round(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn | Self::DealerTurn)
    }
}
