//! Table coordination: the players and the shared deck.

use alloc::vec::Vec;

use tracing::{debug, info};

use crate::deck::Deck;
use crate::options::TableOptions;
use crate::player::Player;

mod actions;

/// A table that owns a shared deck and its players.
///
/// Players only touch the deck while a hit is in progress, so seat actions
/// go through the game and address players by index.
#[derive(Debug, Clone)]
pub struct Game {
    /// Seated players.
    players: Vec<Player>,
    /// The shared deck.
    deck: Deck,
    /// Table options.
    options: TableOptions,
}

impl Game {
    /// Creates a game with `player_count` fresh players and shuffles the
    /// deck once.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::{Deck, Game};
    ///
    /// let game = Game::new(2, Deck::standard(42));
    /// assert_eq!(game.player_count(), 2);
    /// assert_eq!(game.deck().size(), 52);
    /// ```
    #[must_use]
    pub fn new(player_count: usize, deck: Deck) -> Self {
        Self::with_options(player_count, deck, TableOptions::default())
    }

    /// Creates a game with custom table options.
    ///
    /// The deck is shuffled `options.initial_shuffles` times.
    #[must_use]
    pub fn with_options(player_count: usize, mut deck: Deck, options: TableOptions) -> Self {
        deck.shuffle(options.initial_shuffles);

        let players = (0..player_count).map(|_| Player::new()).collect();
        info!(player_count, cards = deck.size(), "created new game");

        Self {
            players,
            deck,
            options,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns all players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the shared deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the shared deck mutably.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Ends the round and returns every drawn card to the bottom of the deck.
    ///
    /// Hands are cleared first according to the reset policy, since the
    /// drawn pile includes the cards players hold.
    pub fn reshuffle(&mut self) {
        self.reset_round();
        self.deck.reshuffle();
    }

    /// Starts a new round: every hand is cleared according to the table's
    /// reset policy.
    pub fn reset_round(&mut self) {
        let policy = self.options.reset_policy;
        for player in &mut self.players {
            player.reset_with(policy);
        }
        debug!(?policy, players = self.players.len(), "reset round");
    }
}
