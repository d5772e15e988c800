//! Deck integration tests.

use std::collections::HashSet;

use bjcards::{Card, DECK_SIZE, Deck, EmptyDeckError, Suit};

fn sorted(cards: &[Card]) -> Vec<(u8, char)> {
    let mut keys: Vec<(u8, char)> = cards
        .iter()
        .map(|c| (c.rank(), c.suit().map_or('?', Suit::symbol)))
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn standard_deck_is_full_and_unique() {
    let deck = Deck::standard(1);
    assert_eq!(deck.size(), DECK_SIZE);
    assert!(deck.drawn().is_empty());

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            assert!(unique.contains(&Card::new(rank, suit)));
        }
    }
}

#[test]
fn standard_deck_canonical_order() {
    let deck = Deck::standard(1);
    let cards = deck.cards();
    assert_eq!(cards[0], Card::new(1, Suit::Hearts));
    assert_eq!(cards[12], Card::new(13, Suit::Hearts));
    assert_eq!(cards[13], Card::new(1, Suit::Diamonds));
    assert_eq!(cards[26], Card::new(1, Suit::Clubs));
    assert_eq!(cards[51], Card::new(13, Suit::Spades));
}

#[test]
fn unshuffled_draws_come_from_the_top() {
    let mut deck = Deck::standard(1);
    assert_eq!(deck.draw(1).unwrap(), vec![Card::new(1, Suit::Hearts)]);
    assert_eq!(deck.draw(1).unwrap(), vec![Card::new(2, Suit::Hearts)]);
    assert_eq!(
        deck.drawn(),
        &[Card::new(1, Suit::Hearts), Card::new(2, Suit::Hearts)]
    );
    assert_eq!(deck.size(), 50);
}

#[test]
fn draw_many_keeps_draw_order() {
    let mut deck = Deck::standard(1);
    let cards = deck.draw(3).unwrap();
    let rendered: Vec<String> = cards.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["AH", "2H", "3H"]);
    assert_eq!(deck.drawn(), cards.as_slice());
}

#[test]
fn draw_exactly_remaining_then_fail() {
    let mut deck = Deck::from_cards(
        vec![Card::new(5, Suit::Clubs), Card::new(6, Suit::Clubs)],
        1,
    );
    assert_eq!(deck.draw(2).unwrap().len(), 2);
    assert_eq!(deck.size(), 0);
    assert!(deck.is_empty());

    assert_eq!(
        deck.draw(1).unwrap_err(),
        EmptyDeckError {
            requested: 1,
            remaining: 0
        }
    );
    assert_eq!(
        deck.draw_one().unwrap_err(),
        EmptyDeckError {
            requested: 1,
            remaining: 0
        }
    );
}

#[test]
fn draw_one_records_the_drawn_card() {
    let mut deck = Deck::standard(1);
    assert_eq!(deck.draw_one().unwrap(), Card::new(1, Suit::Hearts));
    assert_eq!(deck.draw_one().unwrap(), Card::new(2, Suit::Hearts));
    assert_eq!(
        deck.drawn(),
        &[Card::new(1, Suit::Hearts), Card::new(2, Suit::Hearts)]
    );
    assert_eq!(deck.size(), 50);
}

#[test]
fn failed_draw_leaves_piles_unchanged() {
    let mut deck = Deck::standard(1);
    deck.draw(50).unwrap();
    let err = deck.draw(3).unwrap_err();
    assert_eq!(err.requested, 3);
    assert_eq!(err.remaining, 2);
    assert_eq!(deck.size(), 2);
    assert_eq!(deck.drawn().len(), 50);
}

#[test]
fn draw_zero_is_a_no_op() {
    let mut deck = Deck::empty(1);
    assert!(deck.draw(0).unwrap().is_empty());
    assert!(deck.drawn().is_empty());
}

#[test]
fn reshuffle_returns_drawn_cards_to_the_bottom() {
    let mut deck = Deck::standard(3);
    let drawn = deck.draw(10).unwrap();
    let remaining = deck.cards().to_vec();

    deck.reshuffle();
    assert!(deck.drawn().is_empty());
    assert_eq!(deck.size(), DECK_SIZE);
    assert_eq!(&deck.cards()[..42], remaining.as_slice());
    assert_eq!(sorted(&deck.cards()[42..]), sorted(&drawn));
}

#[test]
fn reshuffle_with_nothing_drawn() {
    let mut deck = Deck::standard(3);
    let before = deck.cards().to_vec();
    deck.reshuffle();
    assert_eq!(deck.cards(), before.as_slice());
}

#[test]
fn shuffle_is_seeded() {
    let mut d1 = Deck::standard(42);
    let mut d2 = Deck::standard(42);
    let mut d3 = Deck::standard(43);
    d1.shuffle(2);
    d2.shuffle(2);
    d3.shuffle(2);
    assert_eq!(d1.cards(), d2.cards());
    assert_ne!(d1.cards(), d3.cards());
    assert_eq!(sorted(d1.cards()), sorted(Deck::standard(0).cards()));
}

#[test]
fn shuffle_zero_passes_keeps_order() {
    let mut deck = Deck::standard(42);
    deck.shuffle(0);
    assert_eq!(deck.cards(), Deck::standard(0).cards());
}

#[test]
fn shuffle_leaves_drawn_pile_alone() {
    let mut deck = Deck::standard(5);
    let drawn = deck.draw(4).unwrap();
    deck.shuffle(3);
    assert_eq!(deck.drawn(), drawn.as_slice());
    assert_eq!(deck.size(), 48);
}
