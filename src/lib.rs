//! Playing cards, a drawable deck and blackjack bust scoring with optional
//! `no_std` support.
//!
//! The crate provides [`Card`], a [`Deck`] with a draw pile and a drawn pile,
//! [`Player`] hands and a [`Game`] that seats players around one shared deck
//! and flags busts.
//!
//! # Example
//!
//! ```
//! use bjcards::{Deck, Game};
//!
//! let mut game = Game::new(1, Deck::standard(42));
//! game.hit(0).unwrap();
//! game.hit(0).unwrap();
//! game.evaluate_bust(0).unwrap();
//! assert!(!game.player(0).unwrap().is_busted());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, CardParseError, EmptyDeckError, HitError};
pub use game::Game;
pub use options::{ResetPolicy, TableOptions};
pub use player::Player;
