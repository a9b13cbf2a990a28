//! The leaderboard contract the façade consumes (spec.md §6): records
//! game starts and wins per user, and can be read back as standings.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct LeaderboardRow {
    pub user_id: String,
    pub played: u64,
    pub won: u64,
}

pub trait Leaderboard: Send + Sync {
    /// Records that `user_id` started a new game.
    fn game_started(&self, user_id: &str) -> Result<()>;

    /// Records that `user_id` won a previously started game.
    fn game_won(&self, user_id: &str) -> Result<()>;

    /// Returns standings for every user with at least one recorded game.
    fn read(&self) -> Result<Vec<LeaderboardRow>>;
}

/// A leaderboard backed by an in-process table, standing in for the
/// networked leaderboard service spec.md §6 describes as a consumed
/// interface.
#[derive(Default)]
pub struct InMemoryLeaderboard {
    rows: Mutex<HashMap<String, (u64, u64)>>,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        InMemoryLeaderboard {
            rows: Mutex::new(HashMap::new()),
        }
    }
}

impl Leaderboard for InMemoryLeaderboard {
    fn game_started(&self, user_id: &str) -> Result<()> {
        let mut rows = self.rows.lock().map_err(|_| Error::LeaderboardUnavailable)?;
        rows.entry(user_id.to_string()).or_insert((0, 0)).0 += 1;
        Ok(())
    }

    fn game_won(&self, user_id: &str) -> Result<()> {
        let mut rows = self.rows.lock().map_err(|_| Error::LeaderboardUnavailable)?;
        let entry = rows.get_mut(user_id).ok_or(Error::UnknownUser)?;
        entry.1 += 1;
        Ok(())
    }

    fn read(&self) -> Result<Vec<LeaderboardRow>> {
        let rows = self.rows.lock().map_err(|_| Error::LeaderboardUnavailable)?;
        let mut out: Vec<LeaderboardRow> = rows
            .iter()
            .map(|(user_id, (played, won))| LeaderboardRow {
                user_id: user_id.clone(),
                played: *played,
                won: *won,
            })
            .collect();
        out.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(out)
    }
}
