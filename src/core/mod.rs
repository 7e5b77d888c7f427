//! Core types: players and their ledger, RNG, seasons, configuration, errors.
//!
//! These are shared by every other module. Game rules live in `jobs` and
//! `schedule`; this module only holds the building blocks.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod season;

pub use config::{
    GameConfig, HumanResourcesConfig, MarketingConfig, TalentCategoryConfig, VenueJobConfig,
};
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use season::{Calendar, Season, SEASON_COUNT};
