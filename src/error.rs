use thiserror::Error;

/// The flat error taxonomy for the engine and its façade (spec.md §7).
///
/// Every variant here is caller-visible and never retried internally by
/// the engine; recovery would mask a programming or input fault.
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum Error {
    // -- Rule violations --
    #[error("source pile is empty")]
    EmptySource,
    #[error("talon is empty")]
    EmptyTalon,
    #[error("stock is empty")]
    EmptyStock,
    #[error("stock is not empty")]
    StockNotEmpty,
    #[error("source pile has fewer than the requested number of cards")]
    InvalidCount,
    #[error("cannot move a face-down card")]
    FaceDownMove,
    #[error("destination does not accept this card")]
    IllegalPlacement,
    #[error("card suit does not match the target foundation's suit")]
    SuitMismatch,
    #[error("the game has already been won")]
    GameOver,

    // -- Session errors --
    #[error("no game is registered under this session id")]
    UnknownSession,

    // -- Authentication errors --
    #[error("missing, malformed, or expired bearer token")]
    Unauthenticated,

    // -- External-collaborator errors --
    #[error("the deck source is unavailable")]
    DeckSourceUnavailable,
    #[error("the leaderboard service is unavailable")]
    LeaderboardUnavailable,
    #[error("the leaderboard has no row for this user")]
    UnknownUser,

    // -- Integrity errors --
    #[error("the supplied deck is not a complete, duplicate-free 52-card deck")]
    InvalidDeck,
    #[error("the supplied snapshot violates a pile invariant or card-conservation rule")]
    CorruptSnapshot,
}

/// [`std::result::Result`] type for [Error].
pub type Result<T> = std::result::Result<T, Error>;
