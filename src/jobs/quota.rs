//! Job capacity quotas.

use serde::{Deserialize, Serialize};

/// The three independent capacity ceilings on a job, per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quotas {
    /// Max distinct players on the job.
    pub players: u32,
    /// Max total placements on the job.
    pub places: u32,
    /// Max placements by a single player.
    pub places_per_player: u32,
}

impl Quotas {
    /// Marker for an unconstrained ceiling.
    pub const UNLIMITED: u32 = u32::MAX;

    #[must_use]
    pub const fn new(players: u32, places: u32, places_per_player: u32) -> Self {
        Self {
            players,
            places,
            places_per_player,
        }
    }

    /// No ceiling at all. Used by the fallback job.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self::new(Self::UNLIMITED, Self::UNLIMITED, Self::UNLIMITED)
    }

    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        *self == Self::unlimited()
    }

    /// A zero ceiling makes a job permanently unreachable.
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.players == 0 || self.places == 0 || self.places_per_player == 0 {
            return Err("quotas must be positive");
        }
        Ok(())
    }
}
