//! Round outcome types and the settlement rule.

use crate::hand::BLACKJACK;

/// Result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player has the higher score.
    PlayerWins,
    /// Dealer has the higher score.
    DealerWins,
    /// Equal scores.
    Push,
    /// Only the player reached 21 on the initial deal.
    PlayerBlackjack,
    /// Only the dealer reached 21 on the initial deal.
    DealerBlackjack,
    /// Both reached 21 on the initial deal (a push).
    BothBlackjack,
    /// Player went over 21; the dealer did not play.
    PlayerBust,
    /// Dealer went over 21 while drawing.
    DealerBust,
}

/// Which side won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl Outcome {
    /// Returns the winning side, or `None` for a push.
    #[must_use]
    pub const fn winner(self) -> Option<Winner> {
        match self {
            Self::PlayerWins | Self::PlayerBlackjack | Self::DealerBust => Some(Winner::Player),
            Self::DealerWins | Self::DealerBlackjack | Self::PlayerBust => Some(Winner::Dealer),
            Self::Push | Self::BothBlackjack => None,
        }
    }
}

/// How a round reached settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Settlement {
    /// A side had 21 straight after the deal.
    Blackjack,
    /// The player busted while hitting.
    PlayerBust,
    /// The dealer busted while drawing.
    DealerBust,
    /// Both sides finished their turns; scores are compared.
    Showdown,
}

/// Maps final scores and the way the round ended to an [`Outcome`].
///
/// ```
/// use bjcore::{resolve, Outcome, Settlement};
///
/// assert_eq!(resolve(19, 19, Settlement::Showdown), Outcome::Push);
/// assert_eq!(resolve(21, 21, Settlement::Blackjack), Outcome::BothBlackjack);
/// ```
#[must_use]
pub const fn resolve(player_score: u8, dealer_score: u8, reason: Settlement) -> Outcome {
    match reason {
        Settlement::Blackjack => {
            if player_score == BLACKJACK && dealer_score == BLACKJACK {
                Outcome::BothBlackjack
            } else if player_score == BLACKJACK {
                Outcome::PlayerBlackjack
            } else {
                Outcome::DealerBlackjack
            }
        }
        Settlement::PlayerBust => Outcome::PlayerBust,
        Settlement::DealerBust => Outcome::DealerBust,
        Settlement::Showdown => {
            if player_score > dealer_score {
                Outcome::PlayerWins
            } else if player_score < dealer_score {
                Outcome::DealerWins
            } else {
                Outcome::Push
            }
        }
    }
}

/// Final state of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// How the round ended.
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showdown_compares_scores() {
        assert_eq!(resolve(20, 18, Settlement::Showdown), Outcome::PlayerWins);
        assert_eq!(resolve(17, 20, Settlement::Showdown), Outcome::DealerWins);
        assert_eq!(resolve(18, 18, Settlement::Showdown), Outcome::Push);
    }

    #[test]
    fn blackjack_picks_the_side_with_21() {
        assert_eq!(resolve(21, 12, Settlement::Blackjack), Outcome::PlayerBlackjack);
        assert_eq!(resolve(15, 21, Settlement::Blackjack), Outcome::DealerBlackjack);
        assert_eq!(resolve(21, 21, Settlement::Blackjack), Outcome::BothBlackjack);
    }

    #[test]
    fn busts_ignore_scores() {
        assert_eq!(resolve(25, 10, Settlement::PlayerBust), Outcome::PlayerBust);
        assert_eq!(resolve(18, 24, Settlement::DealerBust), Outcome::DealerBust);
    }

    #[test]
    fn winner_mapping() {
        assert_eq!(Outcome::DealerBust.winner(), Some(Winner::Player));
        assert_eq!(Outcome::PlayerBust.winner(), Some(Winner::Dealer));
        assert_eq!(Outcome::BothBlackjack.winner(), None);
    }
}
