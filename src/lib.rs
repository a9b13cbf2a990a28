//! A deterministic Klondike Solitaire rules engine and the session
//! façade built on top of it.
//!
//! [card] and [common] hold the generic card/pile vocabulary shared by
//! any French-suited patience game; [game] and [variant::klondike] are
//! Klondike's concrete state and rules kernel; [session], [config] and
//! [facade] are the ambient plumbing that turns the kernel into a
//! multi-session service.

pub mod card;

pub mod error;
pub use error::{Error, Result};

pub mod common;

pub mod game;
pub use game::Game;

pub mod variant;

pub mod session;
pub use session::SessionRegistry;

pub mod config;
pub use config::Config;

pub mod facade;
