//! Player decisions and the input boundary that supplies them.

use core::str::FromStr;

use crate::error::InvalidDecision;
use crate::game::TableView;

/// A choice the player makes on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// Keep the current hand and pass to the dealer.
    Stand,
}

impl FromStr for Decision {
    type Err = InvalidDecision;

    /// Parses raw player input, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use bjcore::Decision;
    ///
    /// assert_eq!("Hit".parse::<Decision>(), Ok(Decision::Hit));
    /// assert_eq!(" stop ".parse::<Decision>(), Ok(Decision::Stand));
    /// assert!("fold".parse::<Decision>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if ["hit", "h", "get"].iter().any(|w| input.eq_ignore_ascii_case(w)) {
            Ok(Self::Hit)
        } else if ["stand", "s", "stop"]
            .iter()
            .any(|w| input.eq_ignore_ascii_case(w))
        {
            Ok(Self::Stand)
        } else {
            Err(InvalidDecision)
        }
    }
}

/// Supplies player decisions to [`Game::play_round`](crate::Game::play_round).
///
/// Returning [`InvalidDecision`] does not use up the turn; the game asks again.
pub trait Decider {
    /// Chooses the next action given the current table.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDecision`] when the input could not be understood.
    fn decide(&mut self, table: &TableView<'_>) -> Result<Decision, InvalidDecision>;
}

impl<F> Decider for F
where
    F: FnMut(&TableView<'_>) -> Result<Decision, InvalidDecision>,
{
    fn decide(&mut self, table: &TableView<'_>) -> Result<Decision, InvalidDecision> {
        self(table)
    }
}
