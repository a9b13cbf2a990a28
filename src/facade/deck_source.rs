//! The deck-source contract the façade consumes (spec.md §6): an
//! external collaborator that mints shuffled decks and can hand out
//! cards from a previously minted deck by id.

use std::collections::HashMap;
use std::sync::Mutex;

use rand::seq::SliceRandom;

use crate::card::Card as CardTrait;
use crate::common::Card;
use crate::error::{Error, Result};

pub trait DeckSource: Send + Sync {
    /// Mints a new shuffled 52-card deck and returns its opaque id
    /// alongside the full ordered card sequence.
    fn new_deck(&self) -> Result<(String, Vec<Card>)>;

    /// Returns the next `count` cards from the deck registered under
    /// `deck_id`, consuming them from that deck's remaining order.
    fn draw(&self, deck_id: &str, count: usize) -> Result<Vec<Card>>;
}

/// A deck source backed by an in-process table, standing in for the
/// networked deck-generation service spec.md §6 describes as a
/// consumed interface.
#[derive(Default)]
pub struct InMemoryDeckSource {
    decks: Mutex<HashMap<String, Vec<Card>>>,
}

impl InMemoryDeckSource {
    pub fn new() -> Self {
        InMemoryDeckSource {
            decks: Mutex::new(HashMap::new()),
        }
    }
}

impl DeckSource for InMemoryDeckSource {
    fn new_deck(&self) -> Result<(String, Vec<Card>)> {
        let mut deck = Card::new_deck();
        deck.shuffle(&mut rand::thread_rng());

        let id = uuid::Uuid::new_v4().to_string();
        self.decks
            .lock()
            .map_err(|_| Error::DeckSourceUnavailable)?
            .insert(id.clone(), deck.clone());

        Ok((id, deck))
    }

    fn draw(&self, deck_id: &str, count: usize) -> Result<Vec<Card>> {
        let mut decks = self.decks.lock().map_err(|_| Error::DeckSourceUnavailable)?;
        let remaining = decks.get_mut(deck_id).ok_or(Error::DeckSourceUnavailable)?;
        if count > remaining.len() {
            return Err(Error::DeckSourceUnavailable);
        }
        Ok(remaining.drain(..count).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_deck_is_full_and_distinct() {
        let source = InMemoryDeckSource::new();
        let (_, deck) = source.new_deck().unwrap();
        assert_eq!(deck.len(), Card::N);

        let distinct: HashSet<Card> = deck.into_iter().collect();
        assert_eq!(distinct.len(), Card::N);
    }

    #[test]
    fn draw_consumes_from_the_registered_deck() {
        let source = InMemoryDeckSource::new();
        let (id, deck) = source.new_deck().unwrap();
        let first_seven = source.draw(&id, 7).unwrap();
        assert_eq!(first_seven, deck[..7]);
        assert!(source.draw(&id, 100).is_err());
    }

    #[test]
    fn unknown_deck_id_is_unavailable() {
        let source = InMemoryDeckSource::new();
        assert_eq!(
            source.draw("nonexistent", 1),
            Err(Error::DeckSourceUnavailable)
        );
    }
}
