//! Player and dealer hand representation.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Score limit; anything above busts.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let limit = usize::from(BLACKJACK);
    let mut value: usize = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += usize::from(card.value());
    }

    while value > limit && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= limit;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// The cards held by one seat at the table.
///
/// The score is always recomputed from the cards, so it can never go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    name: String,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand owned by `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Returns the owner's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends cards in draw order and returns how many were added.
    ///
    /// A return of `0` means nothing was dealt.
    pub fn add_cards(&mut self, cards: &[Card]) -> usize {
        self.cards.extend_from_slice(cards);
        cards.len()
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// Every ace starts at 11. While the total is over 21 and an ace is still
    /// counted high, one ace drops to 1. The result can still exceed 21, and
    /// totals past `u8::MAX` are reported as `u8::MAX`.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (an ace is still counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand counts as blackjack for this game.
    ///
    /// Any 21 qualifies, whatever the number of cards, so `7 7 7` is a
    /// blackjack here. Use [`Hand::is_natural`] for the two-card rule.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.score() == BLACKJACK
    }

    /// Returns whether the hand is a natural (21 with exactly two cards).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.is_blackjack()
    }

    /// The masked card of the initial deal (index 0).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// The visible card of the initial deal (index 1).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Base value of the up card, or 0 before it is dealt.
    #[must_use]
    pub fn up_value(&self) -> u8 {
        self.up_card().map_or(0, Card::value)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::seq::SliceRandom;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(Suit::Clubs, r)).collect();
        let mut hand = Hand::new("test");
        hand.add_cards(&cards);
        hand
    }

    #[test]
    fn two_aces_and_a_king_score_twelve() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::King]);
        assert_eq!(hand.score(), 12);
        assert!(!hand.is_soft());
        assert!(!hand.is_bust());
    }

    #[test]
    fn ace_king_is_blackjack() {
        let hand = hand_of(&[Rank::Ace, Rank::King]);
        assert_eq!(hand.score(), 21);
        assert!(hand.is_blackjack());
        assert!(hand.is_natural());
        assert!(hand.is_soft());
    }

    #[test]
    fn three_sevens_also_count_as_blackjack() {
        let hand = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(hand.score(), 21);
        assert!(hand.is_blackjack());
        assert!(!hand.is_natural());
    }

    #[test]
    fn non_ace_hand_is_plain_sum() {
        let hand = hand_of(&[Rank::Jack, Rank::Queen, Rank::Two]);
        assert_eq!(hand.score(), 22);
        assert!(hand.is_bust());
    }

    #[test]
    fn score_ignores_card_order() {
        let ranks = [Rank::Ace, Rank::Five, Rank::Ace, Rank::Nine, Rank::Ace, Rank::Three];
        let expected = hand_of(&ranks).score();

        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut shuffled = ranks;
            shuffled.shuffle(&mut rng);
            assert_eq!(hand_of(&shuffled).score(), expected);
        }
    }

    #[test]
    fn empty_add_is_observable_and_clear_is_idempotent() {
        let mut hand = hand_of(&[Rank::Four, Rank::Six]);
        assert_eq!(hand.add_cards(&[]), 0);
        assert_eq!(hand.len(), 2);

        hand.clear();
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.score(), 0);
    }

    #[test]
    fn up_card_is_second_dealt() {
        let hand = hand_of(&[Rank::Eight, Rank::Ace]);
        assert_eq!(hand.hole_card().map(|c| c.rank), Some(Rank::Eight));
        assert_eq!(hand.up_card().map(|c| c.rank), Some(Rank::Ace));
        assert_eq!(hand.up_value(), 11);
    }

    #[test]
    fn large_hands_score_exactly() {
        assert_eq!(hand_of(&[Rank::Ace; 24]).score(), 24);

        let mut hand = hand_of(&[Rank::King; 25]);
        hand.add_cards(&[Card::new(Suit::Clubs, Rank::Ace)]);
        assert_eq!(hand.score(), 251);
        assert!(!hand.is_soft());

        assert_eq!(hand_of(&[Rank::King; 30]).score(), u8::MAX);
    }
}
