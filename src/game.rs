//! The [Game] aggregate: the four pile sets bundled together, plus
//! snapshot/restore and win detection (spec.md §3 "Game", §4.4, §4.3.7).

use serde::{Deserialize, Serialize};

use crate::card::{Card as CardTrait, Rank as RankTrait};
use crate::common::{Card, FoundationSlot, FrenchSuit, Stock, Talon, TableauSlot};
use crate::error::{Error, Result};

/// The number of tableau columns in Klondike Solitaire.
pub const NUM_TABLEAU: usize = 7;

/// The number of foundation piles in Klondike Solitaire (one per suit).
pub const NUM_FOUNDATIONS: usize = FrenchSuit::N;

/// The complete state of one Klondike game: seven tableau columns, four
/// foundations, a stock and a talon, plus the opaque deck id the deal was
/// built from (spec.md §3 "Game").
///
/// `Game` is itself the snapshot format described in spec.md §4.4: it
/// derives [Serialize]/[Deserialize] with a fixed field order, so
/// serializing a `Game` is always deterministic, and [Game::restore]
/// reconstructs one from exactly that serialised shape.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub tableau: [TableauSlot; NUM_TABLEAU],
    pub foundations: [FoundationSlot; NUM_FOUNDATIONS],
    pub stock: Stock,
    pub talon: Talon,
    pub deck_id: String,
    won: bool,
}

impl Game {
    pub(crate) fn new(
        tableau: [TableauSlot; NUM_TABLEAU],
        stock: Stock,
        deck_id: String,
    ) -> Game {
        Game {
            tableau,
            foundations: FrenchSuit::VALUES.map(FoundationSlot::new),
            stock,
            talon: Talon::new(),
            deck_id,
            won: false,
        }
    }

    /// Builds a `Game` from already-constructed piles, bypassing the deal
    /// builder. Used by tests and benchmarks that need to start from a
    /// specific layout; does not itself validate the invariants of
    /// spec.md §3 — call [Game::validate] if that matters to the caller.
    pub fn from_parts(
        tableau: [TableauSlot; NUM_TABLEAU],
        foundations: [FoundationSlot; NUM_FOUNDATIONS],
        stock: Stock,
        talon: Talon,
        deck_id: String,
    ) -> Game {
        Game {
            tableau,
            foundations,
            stock,
            talon,
            deck_id,
            won: false,
        }
    }

    pub fn foundation(&self, suit: FrenchSuit) -> &FoundationSlot {
        &self.foundations[suit.index()]
    }

    pub(crate) fn foundation_mut(&mut self, suit: FrenchSuit) -> &mut FoundationSlot {
        &mut self.foundations[suit.index()]
    }

    /// True once every foundation holds all 13 ranks of its suit
    /// (spec.md §4.3.7).
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(FoundationSlot::is_complete)
    }

    /// True once a move has produced a win; the engine refuses further
    /// moves once this is set (spec.md §4.3.7 "the game is frozen").
    pub fn is_frozen(&self) -> bool {
        self.won
    }

    /// Marks the game frozen after a winning move. Idempotent.
    pub(crate) fn freeze_if_won(&mut self) {
        if self.is_won() {
            self.won = true;
        }
    }

    pub(crate) fn guard_not_frozen(&self) -> Result<()> {
        if self.won {
            Err(Error::GameOver)
        } else {
            Ok(())
        }
    }

    /// A deterministic, complete serialisation of the game (spec.md §4.4).
    pub fn snapshot(&self) -> Game {
        self.clone()
    }

    /// Reconstructs a `Game` from a snapshot, rejecting it with
    /// [Error::CorruptSnapshot] unless its card multiset is exactly the
    /// 52-card deck and every per-pile invariant of spec.md §3 holds.
    pub fn restore(snapshot: Game) -> Result<Game> {
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Serialises the game to the deterministic JSON wire format of
    /// spec.md §4.4: `Game`'s field order is fixed, so two equal games
    /// always produce byte-identical JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|_| Error::CorruptSnapshot)
    }

    /// Parses and validates a game from the JSON format [Game::to_json]
    /// produces, applying the same checks as [Game::restore].
    pub fn from_json(json: &str) -> Result<Game> {
        let snapshot: Game = serde_json::from_str(json).map_err(|_| Error::CorruptSnapshot)?;
        Game::restore(snapshot)
    }

    /// Checks the cross-pile and per-pile invariants of spec.md §3 and §8.
    pub fn validate(&self) -> Result<()> {
        self.validate_card_conservation()?;
        for slot in &self.tableau {
            validate_tableau_slot(slot)?;
        }
        for foundation in &self.foundations {
            validate_foundation_slot(foundation)?;
        }
        Ok(())
    }

    fn validate_card_conservation(&self) -> Result<()> {
        let mut seen: Vec<Card> = Vec::with_capacity(Card::N);
        for slot in &self.tableau {
            seen.extend_from_slice(slot.cards());
        }
        for foundation in &self.foundations {
            seen.extend_from_slice(foundation.cards());
        }
        seen.extend_from_slice(self.stock.cards());
        seen.extend_from_slice(self.talon.cards());

        if seen.len() != Card::N {
            return Err(Error::CorruptSnapshot);
        }
        let full_deck = Card::new_deck();
        for card in &full_deck {
            if seen.iter().filter(|c| *c == card).count() != 1 {
                return Err(Error::CorruptSnapshot);
            }
        }
        Ok(())
    }
}

fn validate_tableau_slot(slot: &TableauSlot) -> Result<()> {
    let cards = slot.cards();
    if cards.is_empty() {
        return Ok(());
    }
    if !cards.last().unwrap().face_up {
        return Err(Error::CorruptSnapshot);
    }
    // Face-down cards must form a contiguous prefix starting at index 0:
    // once we see a face-up card, every subsequent card must also be face-up.
    let mut seen_face_up = false;
    for card in cards {
        if card.face_up {
            seen_face_up = true;
        } else if seen_face_up {
            return Err(Error::CorruptSnapshot);
        }
    }
    for pair in cards.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        if !lower.face_up || !upper.face_up {
            continue;
        }
        if upper.rank.value() + 1 != lower.rank.value() || upper.color() == lower.color() {
            return Err(Error::CorruptSnapshot);
        }
    }
    Ok(())
}

fn validate_foundation_slot(foundation: &FoundationSlot) -> Result<()> {
    for (i, card) in foundation.cards().iter().enumerate() {
        if card.suit != foundation.suit() {
            return Err(Error::CorruptSnapshot);
        }
        if card.rank.value() as usize != i + 1 {
            return Err(Error::CorruptSnapshot);
        }
    }
    Ok(())
}
