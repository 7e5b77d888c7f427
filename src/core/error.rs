//! Error types.
//!
//! Setup failures (`Config`, `Io`, `Json`) abort before any round runs.
//! `EmptyDeck` is returned by checked draws. The two contract variants are
//! only produced by the `try_*` forms of job placement and payment; the
//! panicking forms treat them as programming defects.

use thiserror::Error;

use super::player::PlayerId;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Draw attempted on an empty deck")]
    EmptyDeck,

    #[error("Invalid placement: {player} has no vacancy on {job}")]
    InvalidPlacement { player: PlayerId, job: String },

    #[error("Insufficient funds: {player} has {budget}, needs {amount}")]
    InsufficientFunds {
        player: PlayerId,
        budget: i64,
        amount: i64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed card or config source: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError {
    /// True for errors that must abort setup.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, GameError::Config(_) | GameError::Io(_) | GameError::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
