use serde::{Deserialize, Serialize};

use crate::common::card::{Card, FrenchSuit, Rank};

/// A tableau column: an ordered run of cards, index 0 at the bottom,
/// the last element on top (spec.md §3 "TableauSlot").
///
/// This type only stores cards; it does not itself refuse an invariant-
/// breaking push — the rules kernel in [crate::variant::klondike] is the
/// only code that mutates a live game, and it only ever performs moves
/// that keep the invariants of spec.md §3 intact.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableauSlot {
    cards: Vec<Card>,
}

impl TableauSlot {
    pub fn new() -> Self {
        TableauSlot { cards: Vec::new() }
    }

    /// Builds a slot from an already-valid sequence (used by the deal
    /// builder and by tests); does not itself validate the invariants.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        TableauSlot { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The card `count` positions down from the top, i.e. at index
    /// `len - count` (spec.md §4.3.1 step 3's `moving_bottom`).
    pub fn card_from_top(&self, count: usize) -> Option<&Card> {
        if count == 0 || count > self.cards.len() {
            return None;
        }
        self.cards.get(self.cards.len() - count)
    }

    /// Detaches the trailing `count` cards, in order, leaving them in the
    /// slot's remainder. Panics if `count` exceeds the slot's length —
    /// callers must check with [TableauSlot::len] first.
    pub fn take_suffix(&mut self, count: usize) -> Vec<Card> {
        let split_at = self.cards.len() - count;
        self.cards.split_off(split_at)
    }

    /// Appends cards to the top, preserving their given order and
    /// visibility (spec.md §4.3.1 "append...in unchanged order").
    pub fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// Appends a single card, forcing it face-up (used by talon → tableau
    /// moves, spec.md §4.3.4).
    pub fn push_face_up(&mut self, mut card: Card) {
        card.face_up = true;
        self.cards.push(card);
    }

    /// Flips the new top card face-up if it is currently face-down
    /// (spec.md's "Auto-reveal"). Returns whether a flip happened.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }
}

impl Default for TableauSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// A suit-keyed foundation pile: Ace at the bottom, building up with no
/// gaps (spec.md §3 "FoundationSlot").
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FoundationSlot {
    suit: FrenchSuit,
    cards: Vec<Card>,
}

impl FoundationSlot {
    pub fn new(suit: FrenchSuit) -> Self {
        FoundationSlot {
            suit,
            cards: Vec::new(),
        }
    }

    pub fn suit(&self) -> FrenchSuit {
        self.suit
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Pushes a card onto the foundation. Callers (the rules kernel) are
    /// responsible for having already validated the Ace-first,
    /// no-gaps rule of spec.md §3; this only records the card.
    pub fn push(&mut self, mut card: Card) {
        card.face_up = true;
        self.cards.push(card);
    }

    /// True once this suit's foundation holds all 13 ranks, Ace to King
    /// (spec.md §4.3.7).
    pub fn is_complete(&self) -> bool {
        self.cards.len() == Rank::N && self.top().map(|c| c.rank) == Some(Rank::King)
    }
}

/// The face-down stock pile; the top of the stock is the last element
/// (spec.md §3 "Stock").
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    cards: Vec<Card>,
}

impl Stock {
    pub fn new() -> Self {
        Stock { cards: Vec::new() }
    }

    /// Builds a stock from cards in stock order, forcing them face-down.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Stock {
            cards: cards
                .into_iter()
                .map(|mut c| {
                    c.face_up = false;
                    c
                })
                .collect(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn push(&mut self, mut card: Card) {
        card.face_up = false;
        self.cards.push(card);
    }
}

impl Default for Stock {
    fn default() -> Self {
        Self::new()
    }
}

/// The face-up talon (waste) pile; only the top card is playable
/// (spec.md §3 "Talon").
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Talon {
    cards: Vec<Card>,
}

impl Talon {
    pub fn new() -> Self {
        Talon { cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn push(&mut self, mut card: Card) {
        card.face_up = true;
        self.cards.push(card);
    }
}

impl Default for Talon {
    fn default() -> Self {
        Self::new()
    }
}
