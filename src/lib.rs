//! # rust-wpg
//!
//! A deterministic, headless worker-placement board game simulator.
//!
//! Players own a pool of workers and a budget. Each round they place
//! workers on capacity-limited jobs (buy a venue, sign a talent, run a
//! marketing push, hire staff, or fall back to a safe investment), then
//! recollect them, pay upkeep, and the season turns.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: One seeded `GameRng` per game drives every random
//!    decision. Same config and decks, same game.
//!
//! 2. **No Ambient State**: The season, turn order and RNG live in a
//!    `GameContext` passed to the scheduler, never in globals.
//!
//! 3. **Closed Job Set**: Job variants are a sum type with their exchange
//!    rules matched in one place. The board is configured, not subclassed.
//!
//! 4. **Host-Driven**: The simulation never sleeps or prints. Hosts observe
//!    round boundaries through `GameObserver` and choose their own pacing.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, seasons, configuration, errors
//! - `cards`: Venue and talent cards, decks
//! - `jobs`: Quotas, job variants, occupancy, the job board
//! - `schedule`: Placement policies and the round scheduler
//! - `sim`: Simulation loop, reports, observers

pub mod cards;
pub mod core;
pub mod jobs;
pub mod schedule;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Calendar, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, Result,
    Season, SEASON_COUNT,
};

pub use crate::cards::{Card, CardId, Deck, Decks, Talent, Venue};

pub use crate::jobs::{Job, JobBoard, JobCategory, JobId, JobKind, JobPhase, Quotas};

pub use crate::schedule::{GameContext, PlacementPolicy, RoundStart, RoundSummary, Scheduler};

pub use crate::sim::{
    run_batch, GameObserver, LoggingObserver, NullObserver, RecordingObserver, SimEvent,
    Simulation, SimulationReport,
};
