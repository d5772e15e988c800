//! Draw pile and discard pile with a seeded shuffle source.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, KING, Suit};
use crate::error::EmptyDeckError;

/// An ordered deck of cards.
///
/// Index 0 of the draw pile is the top card. Drawn cards move to the drawn
/// pile in draw order until [`Deck::reshuffle`] returns them to the bottom of
/// the draw pile.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left to draw.
    cards: Vec<Card>,
    /// Cards already drawn, oldest first.
    drawn: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an unshuffled standard 52-card deck.
    ///
    /// Cards are ordered by suit (hearts, diamonds, clubs, spades) and then
    /// by rank from ace to king.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::Deck;
    ///
    /// let mut deck = Deck::standard(42);
    /// assert_eq!(deck.size(), 52);
    /// let top = deck.draw(1).unwrap();
    /// assert_eq!(top[0].to_string(), "AH");
    /// ```
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::from_cards(standard_cards(), seed)
    }

    /// Creates a deck from a custom card list with an empty drawn pile.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self::with_rng(cards, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a deck from a custom card list using the given generator.
    #[must_use]
    pub const fn with_rng(cards: Vec<Card>, rng: ChaCha8Rng) -> Self {
        Self {
            cards,
            drawn: Vec::new(),
            rng,
        }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub fn empty(seed: u64) -> Self {
        Self::from_cards(Vec::new(), seed)
    }

    /// Shuffles the draw pile `passes` times.
    ///
    /// The drawn pile is untouched.
    pub fn shuffle(&mut self, passes: usize) {
        for _ in 0..passes {
            self.cards.shuffle(&mut self.rng);
        }
        debug!(passes, cards = self.cards.len(), "shuffled deck");
    }

    /// Draws `n` cards from the top of the draw pile.
    ///
    /// The cards are returned in draw order and recorded on the drawn pile.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if fewer than `n` cards remain. Both piles
    /// are left unchanged in that case.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, EmptyDeckError> {
        if n > self.cards.len() {
            return Err(EmptyDeckError {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        let cards: Vec<Card> = self.cards.drain(..n).collect();
        self.drawn.extend_from_slice(&cards);
        debug!(n, remaining = self.cards.len(), "drew cards");
        Ok(cards)
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the draw pile is empty.
    pub fn draw_one(&mut self) -> Result<Card, EmptyDeckError> {
        self.draw(1).map(|mut cards| cards.remove(0))
    }

    /// Shuffles the drawn pile and places it under the draw pile.
    ///
    /// The existing draw pile keeps its order.
    pub fn reshuffle(&mut self) {
        self.drawn.shuffle(&mut self.rng);
        let returned = self.drawn.len();
        self.cards.append(&mut self.drawn);
        debug!(returned, cards = self.cards.len(), "reshuffled drawn cards");
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the draw pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the draw pile, top card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the drawn pile in draw order.
    #[must_use]
    pub fn drawn(&self) -> &[Card] {
        &self.drawn
    }
}

/// Builds the 52 cards of a standard deck in canonical order.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=KING {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}
