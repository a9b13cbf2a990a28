//! The deal builder: constructs the initial legal layout from an ordered
//! 52-card sequence (spec.md §4.2).

use std::collections::HashSet;

use crate::common::{Card, Stock, TableauSlot};
use crate::error::{Error, Result};
use crate::game::{Game, NUM_TABLEAU};

/// Builds the initial [Game] layout from a shuffled 52-card sequence, as
/// supplied by the deck source (spec.md §4.2).
///
/// `cards` is given top-first-drawn-last: the *last* element is dealt
/// first (it becomes the bottom of tableau column 0), matching the
/// convention used throughout this crate that a pile's top is its last
/// element.
///
/// Fails with [Error::InvalidDeck] unless `cards` has exactly 52 entries,
/// all distinct.
pub fn deal(cards: Vec<Card>, deck_id: String) -> Result<Game> {
    if cards.len() != Card::N || !all_distinct(&cards) {
        return Err(Error::InvalidDeck);
    }

    let mut remaining = cards;
    let mut columns: [Vec<Card>; NUM_TABLEAU] = Default::default();

    for i in 0..NUM_TABLEAU {
        for column in columns.iter_mut().skip(i) {
            let mut card = remaining.pop().expect("length already checked");
            card.face_up = false;
            column.push(card);
        }
    }

    for column in columns.iter_mut() {
        if let Some(top) = column.last_mut() {
            top.face_up = true;
        }
    }

    let tableau = columns.map(TableauSlot::from_cards);
    let stock = Stock::from_cards(remaining);

    Ok(Game::new(tableau, stock, deck_id))
}

fn all_distinct(cards: &[Card]) -> bool {
    let set: HashSet<Card> = cards.iter().cloned().collect();
    set.len() == cards.len()
}
