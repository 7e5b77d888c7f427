//! Round scheduling: turn order, placement search, recollection, seasons.
//!
//! ## Key Types
//!
//! - `PlacementPolicy`: How a player's workers find jobs
//! - `GameContext`: Mutable state of one game
//! - `Scheduler`: Plays one round against a context
//! - `RoundStart`, `RoundSummary`: What observers see of a round

pub mod placement;
pub mod round;

pub use placement::{place_workers, shuffled_jobs, PlacementPolicy};
pub use round::{GameContext, RoundStart, RoundSummary, Scheduler};
