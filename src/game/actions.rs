use tracing::{debug, info};

use crate::card::Card;
use crate::error::ActionError;
use crate::player::Player;

use super::Game;

impl Game {
    fn player_mut(&mut self, index: usize) -> Result<&mut Player, ActionError> {
        self.players
            .get_mut(index)
            .ok_or(ActionError::PlayerNotFound)
    }

    /// Player action: Hit (take one card from the shared deck).
    ///
    /// The bust flag is not updated; call [`Game::evaluate_bust`] for that.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not found, is staying or busted, or
    /// the deck is empty.
    pub fn hit(&mut self, index: usize) -> Result<Card, ActionError> {
        let player = self
            .players
            .get_mut(index)
            .ok_or(ActionError::PlayerNotFound)?;
        let card = player.hit(&mut self.deck)?;
        debug!(player = index, %card, "player hit");
        Ok(card)
    }

    /// Player action: Stay (take no more cards this round).
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not found.
    pub fn stay(&mut self, index: usize) -> Result<(), ActionError> {
        self.player_mut(index)?.stay();
        debug!(player = index, "player stays");
        Ok(())
    }

    /// Returns the score of the player's hand.
    #[must_use]
    pub fn score(&self, index: usize) -> Option<u32> {
        self.players.get(index).map(Player::score)
    }

    /// Flags the player as busted if their score exceeds the bust limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not found.
    pub fn evaluate_bust(&mut self, index: usize) -> Result<(), ActionError> {
        let limit = self.options.bust_limit;
        let player = self.player_mut(index)?;
        if player.evaluate_bust(limit) {
            info!(player = index, score = player.score(), limit, "player busted");
        }
        Ok(())
    }
}
