//! Error types for deck, player and game operations.

use thiserror::Error;

/// A draw asked for more cards than the draw pile holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough cards in the deck: requested {requested}, remaining {remaining}")]
pub struct EmptyDeckError {
    /// Number of cards requested.
    pub requested: usize,
    /// Number of cards left in the draw pile.
    pub remaining: usize,
}

/// Errors that can occur when a player takes a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HitError {
    /// Player has chosen to stay this round.
    #[error("player is staying")]
    Staying,
    /// Player has busted.
    #[error("player has busted")]
    Busted,
    /// The deck could not supply a card.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during seat actions on a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No player sits at the given index.
    #[error("player not found")]
    PlayerNotFound,
    /// The player could not take a hit.
    #[error(transparent)]
    Hit(#[from] HitError),
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// Input was empty.
    #[error("empty card text")]
    Empty,
    /// Rank part is not `A`, `J`, `Q`, `K` or a number in `1..=13`.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit letter is not one of `C`, `D`, `H`, `S`.
    #[error("invalid suit: '{0}'")]
    InvalidSuit(char),
}
