//! Hand scoring.

use crate::card::Card;

/// Sums the blackjack value of every card in a hand.
///
/// Aces count 1. There is no soft total.
///
/// ```
/// use bjcards::{Card, Suit, hand::blackjack_score};
///
/// let hand = [Card::new(1, Suit::Clubs), Card::new(13, Suit::Spades)];
/// assert_eq!(blackjack_score(&hand), 11);
/// ```
#[must_use]
pub fn blackjack_score(cards: &[Card]) -> u32 {
    cards
        .iter()
        .map(|card| u32::from(card.blackjack_value()))
        .sum()
}

/// Returns whether `score` exceeds `limit`.
#[must_use]
pub const fn is_bust(score: u32, limit: u32) -> bool {
    score > limit
}
