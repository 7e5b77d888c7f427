//! Game configuration.
//!
//! Everything the core does not compute itself: player-count bounds,
//! worker pools, job slot counts and quotas, per-variant costs and
//! paybacks, the year cap, the RNG seed, and the placement policy.
//! The season count is fixed at [`SEASON_COUNT`](super::SEASON_COUNT).
//!
//! Configs deserialize from JSON with every field optional; missing fields
//! take the defaults below.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::jobs::Quotas;
use crate::schedule::PlacementPolicy;

/// Venue acquisition job settings.
///
/// The players and places quotas equal the configured venue slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueJobConfig {
    pub places_per_player_quota: u32,
}

impl Default for VenueJobConfig {
    fn default() -> Self {
        Self {
            places_per_player_quota: 1,
        }
    }
}

/// One talent category: how many acquisition jobs it has and their quotas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentCategoryConfig {
    pub slots: u32,
    pub quotas: Quotas,
}

impl TalentCategoryConfig {
    #[must_use]
    pub fn new(slots: u32) -> Self {
        Self {
            slots,
            quotas: Quotas::new(1, 1, 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingConfig {
    pub quotas: Quotas,
    /// Price of one marketing placement.
    pub cost: i64,
    /// Views granted per placement.
    pub payback: u32,
}

impl Default for MarketingConfig {
    fn default() -> Self {
        Self {
            quotas: Quotas::new(2, 4, 2),
            cost: 2,
            payback: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanResourcesConfig {
    pub quotas: Quotas,
    pub hiring_cost: i64,
    /// A player cannot hire beyond this many staff.
    pub max_staff: u32,
}

impl Default for HumanResourcesConfig {
    fn default() -> Self {
        Self {
            quotas: Quotas::new(1, 1, 1),
            hiring_cost: 3,
            max_staff: 3,
        }
    }
}

/// Complete simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lower bound (inclusive) for the randomly drawn player count.
    pub min_players: usize,
    /// Upper bound (inclusive) for the randomly drawn player count.
    pub max_players: usize,
    pub workers_per_player: u32,
    pub starting_budget: i64,
    /// View capacity a player has before owning any venue.
    pub base_view_capacity: u32,
    /// Charged per worker used, at the end of each round.
    pub worker_upkeep: i64,
    /// Size of the venue market.
    pub venue_slots: u32,
    pub venue: VenueJobConfig,
    pub talent_categories: Vec<TalentCategoryConfig>,
    pub marketing: MarketingConfig,
    pub human_resources: HumanResourcesConfig,
    /// Credited per worker placed on the investment fallback.
    pub investment_return: i64,
    /// The game stops once this many years have started.
    pub year_cap: u32,
    pub seed: u64,
    pub placement: PlacementPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 4,
            workers_per_player: 3,
            starting_budget: 10,
            base_view_capacity: 2,
            worker_upkeep: 1,
            venue_slots: 3,
            venue: VenueJobConfig::default(),
            talent_categories: vec![
                TalentCategoryConfig::new(2),
                TalentCategoryConfig::new(1),
                TalentCategoryConfig::new(1),
            ],
            marketing: MarketingConfig::default(),
            human_resources: HumanResourcesConfig::default(),
            investment_return: 2,
            year_cap: 5,
            seed: 42,
            placement: PlacementPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check bounds and quotas. Any failure aborts setup.
    pub fn validate(&self) -> Result<()> {
        if self.min_players < 1 {
            return Err(GameError::Config("min_players must be at least 1".into()));
        }
        if self.min_players > self.max_players {
            return Err(GameError::Config(format!(
                "min_players {} exceeds max_players {}",
                self.min_players, self.max_players
            )));
        }
        if self.max_players > 255 {
            return Err(GameError::Config("At most 255 players supported".into()));
        }
        if self.workers_per_player == 0 {
            return Err(GameError::Config("workers_per_player must be positive".into()));
        }
        if self.year_cap == 0 {
            return Err(GameError::Config("year_cap must be positive".into()));
        }
        if self.venue_slots == 0 || self.venue.places_per_player_quota == 0 {
            return Err(GameError::Config("venue job quotas must be positive".into()));
        }
        for (category, talent) in self.talent_categories.iter().enumerate() {
            talent
                .quotas
                .validate()
                .map_err(|e| GameError::Config(format!("talent category {category}: {e}")))?;
        }
        self.marketing
            .quotas
            .validate()
            .map_err(|e| GameError::Config(format!("marketing: {e}")))?;
        self.human_resources
            .quotas
            .validate()
            .map_err(|e| GameError::Config(format!("human resources: {e}")))?;
        if self.placement == (PlacementPolicy::BoundedRetry { attempts: 0 }) {
            return Err(GameError::Config("placement attempts must be positive".into()));
        }
        if self.marketing.cost < 0 || self.human_resources.hiring_cost < 0 {
            return Err(GameError::Config("job costs must not be negative".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_players(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: u32) -> Self {
        self.workers_per_player = workers;
        self
    }

    #[must_use]
    pub fn with_starting_budget(mut self, budget: i64) -> Self {
        self.starting_budget = budget;
        self
    }

    #[must_use]
    pub fn with_venue_slots(mut self, slots: u32) -> Self {
        self.venue_slots = slots;
        self
    }

    #[must_use]
    pub fn with_talent_categories(mut self, categories: Vec<TalentCategoryConfig>) -> Self {
        self.talent_categories = categories;
        self
    }

    #[must_use]
    pub fn with_marketing(mut self, marketing: MarketingConfig) -> Self {
        self.marketing = marketing;
        self
    }

    #[must_use]
    pub fn with_human_resources(mut self, human_resources: HumanResourcesConfig) -> Self {
        self.human_resources = human_resources;
        self
    }

    #[must_use]
    pub fn with_year_cap(mut self, years: u32) -> Self {
        self.year_cap = years;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }
}
