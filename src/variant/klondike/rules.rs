//! The rules kernel: validates and applies the six move kinds of
//! spec.md §4.3, maintaining face-up/face-down state and detecting wins.
//!
//! Every public method here takes `&self` and returns a *new* [Game] on
//! success, leaving `self` untouched either way. All preconditions for a
//! given operation are checked — in the order spec.md lists them — before
//! any pile is mutated, so a failed call can never leave the game in a
//! partially-applied state (spec.md §4.3's atomicity guarantee, §8
//! "Atomicity").

use crate::card::Rank as RankTrait;
use crate::common::{FrenchSuit, Rank};
use crate::error::{Error, Result};
use crate::game::{Game, NUM_TABLEAU};

impl Game {
    /// Moves `count` cards from the top of tableau column `from` onto
    /// tableau column `to` (spec.md §4.3.1).
    pub fn move_tableau_to_tableau(&self, from: usize, to: usize, count: usize) -> Result<Game> {
        self.guard_not_frozen()?;

        // Step 1: shape of the request itself.
        if from == to || from >= NUM_TABLEAU || to >= NUM_TABLEAU || count == 0 {
            return Err(Error::InvalidCount);
        }

        // Step 2: source has enough cards.
        let source = &self.tableau[from];
        if source.is_empty() {
            return Err(Error::EmptySource);
        }
        if count > source.len() {
            return Err(Error::InvalidCount);
        }

        // Step 3: the card about to become the bottom of the moving run
        // must already be face-up.
        let moving_bottom = *source.card_from_top(count).unwrap();
        if !moving_bottom.face_up {
            return Err(Error::FaceDownMove);
        }

        // Step 4: destination placement.
        let dest = &self.tableau[to];
        match dest.top() {
            None if moving_bottom.rank != Rank::King => {
                return Err(Error::IllegalPlacement)
            }
            Some(target)
                if target.rank.value() != moving_bottom.rank.value() + 1
                    || target.color() == moving_bottom.color() =>
            {
                return Err(Error::IllegalPlacement)
            }
            _ => {}
        }

        let mut next = self.clone();
        let moving = next.tableau[from].take_suffix(count);
        next.tableau[to].extend(moving);
        next.tableau[from].reveal_top();
        Ok(next)
    }

    /// Moves the top card of tableau column `from` onto the foundation of
    /// the given `suit` (spec.md §4.3.2).
    pub fn move_tableau_to_foundation(&self, from: usize, suit: FrenchSuit) -> Result<Game> {
        self.guard_not_frozen()?;

        let source = self
            .tableau
            .get(from)
            .filter(|s| !s.is_empty())
            .ok_or(Error::EmptySource)?;

        let top = *source.top().unwrap();
        if top.suit != suit {
            return Err(Error::SuitMismatch);
        }

        let foundation = self.foundation(suit);
        match foundation.top() {
            None if top.rank != Rank::Ace => return Err(Error::IllegalPlacement),
            Some(target) if target.rank.value() + 1 != top.rank.value() => {
                return Err(Error::IllegalPlacement)
            }
            _ => {}
        }

        let mut next = self.clone();
        let card = next.tableau[from].take_suffix(1).remove(0);
        next.foundation_mut(suit).push(card);
        next.tableau[from].reveal_top();
        next.freeze_if_won();
        Ok(next)
    }

    /// Moves the top card of the talon onto the foundation of the given
    /// `suit` (spec.md §4.3.3).
    pub fn move_talon_to_foundation(&self, suit: FrenchSuit) -> Result<Game> {
        self.guard_not_frozen()?;

        let top = *self.talon.top().ok_or(Error::EmptyTalon)?;
        if top.suit != suit {
            return Err(Error::SuitMismatch);
        }

        let foundation = self.foundation(suit);
        match foundation.top() {
            None if top.rank != Rank::Ace => return Err(Error::IllegalPlacement),
            Some(target) if target.rank.value() + 1 != top.rank.value() => {
                return Err(Error::IllegalPlacement)
            }
            _ => {}
        }

        let mut next = self.clone();
        let card = next.talon.pop_top().unwrap();
        next.foundation_mut(suit).push(card);
        next.freeze_if_won();
        Ok(next)
    }

    /// Moves the top card of the talon onto tableau column `to`
    /// (spec.md §4.3.4).
    pub fn move_talon_to_tableau(&self, to: usize) -> Result<Game> {
        self.guard_not_frozen()?;

        let moving_bottom = *self.talon.top().ok_or(Error::EmptyTalon)?;

        let dest = self.tableau.get(to).ok_or(Error::IllegalPlacement)?;
        match dest.top() {
            None if moving_bottom.rank != Rank::King => {
                return Err(Error::IllegalPlacement)
            }
            Some(target)
                if target.rank.value() != moving_bottom.rank.value() + 1
                    || target.color() == moving_bottom.color() =>
            {
                return Err(Error::IllegalPlacement)
            }
            _ => {}
        }

        let mut next = self.clone();
        let card = next.talon.pop_top().unwrap();
        next.tableau[to].push_face_up(card);
        Ok(next)
    }

    /// Moves up to three cards from the top of the stock onto the talon,
    /// each becoming face-up (spec.md §4.3.5).
    pub fn draw_stock(&self) -> Result<Game> {
        if self.stock.is_empty() {
            return Err(Error::EmptyStock);
        }

        let mut next = self.clone();
        for _ in 0..3 {
            match next.stock.pop_top() {
                Some(card) => next.talon.push(card),
                None => break,
            }
        }
        Ok(next)
    }

    /// Moves every card from the talon back to the stock, emptying the
    /// talon (spec.md §4.3.6).
    pub fn reset_stock(&self) -> Result<Game> {
        if self.talon.is_empty() {
            return Err(Error::EmptyTalon);
        }
        if !self.stock.is_empty() {
            return Err(Error::StockNotEmpty);
        }

        let mut next = self.clone();
        while let Some(card) = next.talon.pop_top() {
            next.stock.push(card);
        }
        Ok(next)
    }
}
