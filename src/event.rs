//! Events emitted during a round for the caller to render.

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::RoundOutcome;

/// Something observable that happened during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// Initial two cards each. Only the dealer's up card is exposed.
    Dealt {
        /// The player's cards.
        player: Vec<Card>,
        /// The player's score.
        player_score: u8,
        /// The dealer's visible (second) card.
        dealer_up: Card,
        /// Base value of the dealer's visible card.
        dealer_up_value: u8,
    },
    /// A decision was not understood; the player is asked again.
    DecisionRejected,
    /// The player drew a card.
    PlayerHit {
        /// The card drawn.
        card: Card,
        /// The player's cards after the draw.
        hand: Vec<Card>,
        /// The player's new score.
        score: u8,
        /// Whether the draw busted the player.
        bust: bool,
    },
    /// The player stood.
    PlayerStood {
        /// The player's final score.
        score: u8,
    },
    /// The dealer's hole card was turned over.
    DealerRevealed {
        /// The dealer's full hand.
        hand: Vec<Card>,
        /// The dealer's score.
        score: u8,
    },
    /// The dealer drew a card.
    DealerDrew {
        /// The card drawn.
        card: Card,
        /// The dealer's cards after the draw.
        hand: Vec<Card>,
        /// The dealer's new score.
        score: u8,
        /// Whether the draw busted the dealer.
        bust: bool,
    },
    /// The round was settled.
    Settled(RoundOutcome),
}
