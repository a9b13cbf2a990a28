//! The façade layer: the network-facing seam of spec.md §6, built on
//! top of the pure rules kernel in [crate::game] and
//! [crate::variant::klondike]. Everything here is ambient plumbing —
//! authentication, session storage, and two consumed external
//! services — rather than game logic.

pub mod auth;
pub mod deck_source;
pub mod leaderboard;
pub mod service;

pub use auth::{Authenticator, JwtAuthenticator, UserId};
pub use deck_source::{DeckSource, InMemoryDeckSource};
pub use leaderboard::{InMemoryLeaderboard, Leaderboard, LeaderboardRow};
pub use service::{Facade, GameStatus, GameView, Move};
