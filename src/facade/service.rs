//! The façade: the five operations spec.md §6 exposes to callers,
//! wiring authentication, session storage and the two external
//! collaborators around the rules kernel in [crate::game] and
//! [crate::variant::klondike].

use serde::Serialize;
use tracing::{info, warn};

use crate::common::FrenchSuit;
use crate::error::Result;
use crate::game::Game;
use crate::session::SessionRegistry;
use crate::variant::klondike;

use super::auth::Authenticator;
use super::deck_source::DeckSource;
use super::leaderboard::{Leaderboard, LeaderboardRow};

/// Whether a game is still playable or has been won (spec.md §4.3.7).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Won,
}

impl GameStatus {
    fn of(game: &Game) -> GameStatus {
        if game.is_frozen() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}

/// The state returned to a caller after any operation: the session id,
/// the resulting game snapshot and its status.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub session_id: String,
    pub game: Game,
    pub status: GameStatus,
}

fn view(session_id: String, game: Game) -> GameView {
    let status = GameStatus::of(&game);
    GameView {
        session_id,
        game,
        status,
    }
}

/// The move a caller is requesting, covering all six kinds spec.md
/// §4.3 defines (reset-stock has no parameters of its own and is its
/// own façade operation, see [Facade::reset_stock]).
#[derive(Debug, Clone)]
pub enum Move {
    TableauToTableau {
        from: usize,
        to: usize,
        count: usize,
    },
    TableauToFoundation {
        from: usize,
        suit: FrenchSuit,
    },
    TalonToFoundation {
        suit: FrenchSuit,
    },
    TalonToTableau {
        to: usize,
    },
}

/// The façade itself: the seam between network-facing request handling
/// and the pure rules kernel. Generic over its three consumed
/// interfaces so tests can swap in-memory implementations for whatever
/// the deployed façade would use over the network (spec.md §6).
pub struct Facade<A, D, L> {
    auth: A,
    deck_source: D,
    leaderboard: L,
    sessions: SessionRegistry,
}

impl<A, D, L> Facade<A, D, L>
where
    A: Authenticator,
    D: DeckSource,
    L: Leaderboard,
{
    pub fn new(auth: A, deck_source: D, leaderboard: L) -> Self {
        Facade {
            auth,
            deck_source,
            leaderboard,
            sessions: SessionRegistry::new(),
        }
    }

    /// Deals a fresh game from a newly minted deck and registers it
    /// under a new session (spec.md §6 "create-game").
    ///
    /// A deck-source failure aborts the create. A leaderboard failure
    /// is logged and does not: the game has already been dealt and is
    /// returned to the caller regardless (spec.md §7).
    pub fn create_game(&self, bearer_header: &str) -> Result<GameView> {
        let user = self.auth.authenticate(bearer_header)?;
        let (deck_id, cards) = self.deck_source.new_deck()?;
        let game = klondike::deal(cards, deck_id)?;
        let session_id = self.sessions.create(game.clone());

        if let Err(err) = self.leaderboard.game_started(&user.0) {
            warn!(user = %user.0, %err, "leaderboard game-started notification failed");
        }

        info!(session_id = %session_id, user = %user.0, "created game");
        Ok(view(session_id, game))
    }

    /// Draws up to three cards from the stock onto the talon
    /// (spec.md §6 "draw").
    pub fn draw(&self, bearer_header: &str, session_id: &str) -> Result<GameView> {
        self.auth.authenticate(bearer_header)?;
        let game = self.sessions.apply(session_id, |g| g.draw_stock())?;
        Ok(view(session_id.to_string(), game))
    }

    /// Moves every card from the talon back to the stock
    /// (spec.md §6 "reset-stock").
    pub fn reset_stock(&self, bearer_header: &str, session_id: &str) -> Result<GameView> {
        self.auth.authenticate(bearer_header)?;
        let game = self.sessions.apply(session_id, |g| g.reset_stock())?;
        Ok(view(session_id.to_string(), game))
    }

    /// Applies one of the four card-moving operations and, on a
    /// winning move, notifies the leaderboard — logging and continuing
    /// if that notification fails, since the game state is already
    /// authoritative (spec.md §6 "move", §7).
    pub fn mv(&self, bearer_header: &str, session_id: &str, request: Move) -> Result<GameView> {
        let user = self.auth.authenticate(bearer_header)?;

        let game = self.sessions.apply(session_id, |g| match request {
            Move::TableauToTableau { from, to, count } => {
                g.move_tableau_to_tableau(from, to, count)
            }
            Move::TableauToFoundation { from, suit } => g.move_tableau_to_foundation(from, suit),
            Move::TalonToFoundation { suit } => g.move_talon_to_foundation(suit),
            Move::TalonToTableau { to } => g.move_talon_to_tableau(to),
        })?;

        if game.is_frozen() {
            if let Err(err) = self.leaderboard.game_won(&user.0) {
                warn!(user = %user.0, %err, "leaderboard game-won notification failed");
            }
            info!(session_id = %session_id, user = %user.0, "game won");
        }

        Ok(view(session_id.to_string(), game))
    }

    /// Reads the current leaderboard standings (spec.md §6 "leaderboard").
    pub fn leaderboard(&self, bearer_header: &str) -> Result<Vec<LeaderboardRow>> {
        self.auth.authenticate(bearer_header)?;
        self.leaderboard.read()
    }
}
