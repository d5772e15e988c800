//! Card types and their text rendering.

use core::fmt;
use core::str::FromStr;

use crate::error::CardParseError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Maps a single-letter suit symbol (`C`, `D`, `H`, `S`, any case).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the uppercase suit letter.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

const RANK_SYMBOLS: [&str; 14] = [
    "?", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Construction never fails: an unrecognized rank leaves the rank at `0`
/// and an unrecognized suit leaves it unset. Such a card renders its rank
/// as `?` so the incoherent value stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Card {
    rank: u8,
    suit: Option<Suit>,
    hidden: bool,
}

const fn rank_from_symbol(symbol: &str) -> Option<u8> {
    match symbol.as_bytes() {
        [b'A' | b'a'] => Some(ACE),
        [b'J' | b'j'] => Some(JACK),
        [b'Q' | b'q'] => Some(QUEEN),
        [b'K' | b'k'] => Some(KING),
        [d @ b'2'..=b'9'] => Some(*d - b'0'),
        [b'1', b'0'] => Some(10),
        _ => None,
    }
}

fn suit_from_text(text: &str) -> Option<Suit> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Suit::from_symbol(symbol),
        _ => None,
    }
}

impl Card {
    /// Creates a face-up card from a numeric rank (1 = Ace, 11 = Jack,
    /// 12 = Queen, 13 = King).
    ///
    /// A rank outside `1..=13` is ignored and the card keeps rank `0`.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        let rank = match rank {
            ACE..=KING => rank,
            _ => 0,
        };
        Self {
            rank,
            suit: Some(suit),
            hidden: false,
        }
    }

    /// Creates a face-up card from rank and suit symbols.
    ///
    /// Ranks accept `A`, `J`, `Q`, `K` in either case or a number from `2`
    /// to `10`; suits accept `C`, `D`, `H`, `S` in either case. Anything
    /// else is ignored and leaves that field at its default.
    ///
    /// ```
    /// use bjcards::{Card, Suit};
    ///
    /// let card = Card::parse("k", "s");
    /// assert_eq!(card.rank(), 13);
    /// assert_eq!(card.suit(), Some(Suit::Spades));
    ///
    /// let odd = Card::parse("Z", "x");
    /// assert_eq!(odd.rank(), 0);
    /// assert_eq!(odd.suit(), None);
    /// ```
    #[must_use]
    pub fn parse(rank: &str, suit: &str) -> Self {
        Self {
            rank: rank_from_symbol(rank).unwrap_or(0),
            suit: suit_from_text(suit),
            hidden: false,
        }
    }

    /// Returns the rank, or `0` if none was recognized.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit, or `None` if none was recognized.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Returns whether the card is face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Turns the card face down.
    pub const fn set_face_down(&mut self) {
        self.hidden = true;
    }

    /// Turns the card face up.
    pub const fn set_face_up(&mut self) {
        self.hidden = false;
    }

    /// Point value of the card.
    ///
    /// Tens and face cards count 10 and an ace always counts 1.
    #[must_use]
    pub const fn blackjack_value(&self) -> u8 {
        if self.rank >= 10 { 10 } else { self.rank }
    }

    /// Returns the rank symbol used in the card's rendering.
    #[must_use]
    pub const fn rank_symbol(&self) -> &'static str {
        RANK_SYMBOLS[self.rank as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hidden {
            return f.write_str("XX");
        }
        f.write_str(self.rank_symbol())?;
        if let Some(suit) = self.suit {
            write!(f, "{suit}")?;
        }
        Ok(())
    }
}

/// Parses the face-up rendering of a card, for example `10H`, `AC` or `ks`.
///
/// Unlike [`Card::parse`], this rejects anything that does not name a
/// complete card.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let Some((split, symbol)) = text.char_indices().last() else {
            return Err(CardParseError::Empty);
        };
        let suit = Suit::from_symbol(symbol).ok_or(CardParseError::InvalidSuit(symbol))?;
        let rank_text = &text[..split];
        let rank = rank_from_symbol(rank_text).ok_or(CardParseError::InvalidRank)?;
        Ok(Self::new(rank, suit))
    }
}
