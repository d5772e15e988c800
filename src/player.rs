//! A seat at the table and the hand it holds.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::HitError;
use crate::hand::{blackjack_score, is_bust};
use crate::options::ResetPolicy;

/// A blackjack player.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Cards in the hand, in the order received.
    hand: Vec<Card>,
    /// Whether the player declined further cards this round.
    staying: bool,
    /// Whether the hand went over the bust limit.
    busted: bool,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Vec::new(),
            staying: false,
            busted: false,
        }
    }

    /// Creates a player already holding `hand`.
    #[must_use]
    pub const fn with_hand(hand: Vec<Card>) -> Self {
        Self {
            hand,
            staying: false,
            busted: false,
        }
    }

    /// Draws one card from `deck` into the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is staying or busted, or if the deck
    /// is empty. The hand is unchanged on error.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, HitError> {
        if self.busted {
            return Err(HitError::Busted);
        }
        if self.staying {
            return Err(HitError::Staying);
        }

        let card = deck.draw_one()?;
        self.hand.push(card);
        Ok(card)
    }

    /// Declines further cards this round.
    pub const fn stay(&mut self) {
        self.staying = true;
    }

    /// Flags the player as busted.
    pub const fn mark_busted(&mut self) {
        self.busted = true;
    }

    /// Clears the hand and the stay flag. A bust is kept.
    pub fn reset(&mut self) {
        self.reset_with(ResetPolicy::KeepBust);
    }

    /// Clears the hand and the stay flag, and the bust flag if `policy`
    /// says so.
    pub fn reset_with(&mut self, policy: ResetPolicy) {
        self.hand.clear();
        self.staying = false;
        if policy == ResetPolicy::ClearBust {
            self.busted = false;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns whether the player is staying.
    #[must_use]
    pub const fn is_staying(&self) -> bool {
        self.staying
    }

    /// Returns whether the player has busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns whether the player may take another card.
    #[must_use]
    pub const fn can_hit(&self) -> bool {
        !self.staying && !self.busted
    }

    /// Flags the player as busted if the hand scores above `limit`.
    ///
    /// Returns whether the hand is over the limit. A player already busted
    /// stays busted either way.
    pub fn evaluate_bust(&mut self, limit: u32) -> bool {
        if is_bust(self.score(), limit) {
            self.mark_busted();
            true
        } else {
            false
        }
    }

    /// Calculates the score of the hand.
    #[must_use]
    pub fn score(&self) -> u32 {
        blackjack_score(&self.hand)
    }
}
