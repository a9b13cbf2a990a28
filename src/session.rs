//! The session registry: a process-local mapping from session id to
//! [Game] (spec.md §4.5).
//!
//! Concurrent requests against *different* sessions must not block each
//! other, while requests against the *same* session must be serialised
//! because moves are stateful (spec.md §5). This is a [RwLock] over the
//! map (many concurrent readers looking up different sessions) combined
//! with a per-session [Mutex] (one writer at a time per game) — the
//! "per-session lock" option spec.md §9 calls out as the scaling path
//! beyond a single coarse lock.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::game::Game;

/// A process-local registry of running games, keyed by an opaque session
/// id. No eviction policy: sessions persist for the process lifetime
/// until explicitly removed (spec.md §4.5).
#[derive(Default)]
pub struct SessionRegistry {
    games: RwLock<HashMap<String, Mutex<Game>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry {
            games: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a freshly-dealt game under a new session id and returns
    /// that id.
    pub fn create(&self, game: Game) -> String {
        let id = Uuid::new_v4().to_string();
        self.games
            .write()
            .expect("session registry lock poisoned")
            .insert(id.clone(), Mutex::new(game));
        id
    }

    /// Returns a snapshot of the game registered under `id`.
    pub fn snapshot(&self, id: &str) -> Result<Game> {
        let map = self.games.read().expect("session registry lock poisoned");
        let game = map.get(id).ok_or(Error::UnknownSession)?;
        Ok(game
            .lock()
            .expect("per-session lock poisoned")
            .snapshot())
    }

    /// Applies `f` to the game registered under `id`, committing its
    /// result as the game's new state on success. `f` itself is
    /// responsible for every rule check; this only provides the mutual
    /// exclusion the mutation needs (spec.md §5 "mutations happen in the
    /// arrival order of requests at that game").
    pub fn apply<F>(&self, id: &str, f: F) -> Result<Game>
    where
        F: FnOnce(&Game) -> Result<Game>,
    {
        let map = self.games.read().expect("session registry lock poisoned");
        let slot = map.get(id).ok_or(Error::UnknownSession)?;
        let mut guard = slot.lock().expect("per-session lock poisoned");
        let next = f(&guard)?;
        *guard = next.clone();
        Ok(next)
    }

    /// Removes the session, destroying its game (spec.md §3 "Lifecycle").
    pub fn remove(&self, id: &str) -> Result<()> {
        self.games
            .write()
            .expect("session registry lock poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or(Error::UnknownSession)
    }
}
