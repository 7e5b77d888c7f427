//! A job: one capacity-constrained placement slot and its per-round state.
//!
//! ## Lifecycle (per round)
//!
//! ```text
//! Idle --place_worker--> Occupied --recollect_workers--> Recollected --...--> Idle
//!   ^                                                                          |
//!   +------------------------------- prepare ----------------------------------+
//! ```
//!
//! `prepare` clears the round-scoped occupancy. Placement is gated by
//! `has_vacancy`; calling `place_worker` without it is a contract violation.

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::{JobCategory, JobKind};
use super::quota::Quotas;
use crate::cards::Decks;
use crate::core::error::{GameError, Result};
use crate::core::{Player, PlayerId};

/// Index of a job on its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub usize);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Job({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobPhase {
    /// No workers placed since the last preparation or full recollection.
    #[default]
    Idle,
    /// At least one worker placed this round.
    Occupied,
    /// Some, but not all, occupants have been recollected.
    Recollected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    id: JobId,
    kind: JobKind,
    quotas: Quotas,
    phase: JobPhase,
    /// Distinct players placed this round, in arrival order.
    occupants: SmallVec<[PlayerId; 4]>,
    placements: FxHashMap<PlayerId, u32>,
    total_placements: u32,
}

impl Job {
    #[must_use]
    pub fn new(id: JobId, kind: JobKind, quotas: Quotas) -> Self {
        Self {
            id,
            kind,
            quotas,
            phase: JobPhase::Idle,
            occupants: SmallVec::new(),
            placements: FxHashMap::default(),
            total_placements: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> JobId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> &JobKind {
        &self.kind
    }

    #[must_use]
    pub fn category(&self) -> JobCategory {
        self.kind.category()
    }

    #[must_use]
    pub fn quotas(&self) -> Quotas {
        self.quotas
    }

    #[must_use]
    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    #[must_use]
    pub fn occupants(&self) -> &[PlayerId] {
        &self.occupants
    }

    #[must_use]
    pub fn is_occupant(&self, player: PlayerId) -> bool {
        self.occupants.contains(&player)
    }

    /// Workers `player` has on this job this round.
    #[must_use]
    pub fn placements_of(&self, player: PlayerId) -> u32 {
        self.placements.get(&player).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_placements(&self) -> u32 {
        self.total_placements
    }

    /// True iff every quota ceiling holds.
    #[must_use]
    pub fn within_quotas(&self) -> bool {
        self.total_placements <= self.quotas.places
            && self.occupants.len() as u64 <= u64::from(self.quotas.players)
            && self
                .placements
                .values()
                .all(|&n| n <= self.quotas.places_per_player)
    }

    /// Reset round-scoped state and refresh drafted offers.
    pub fn prepare(&mut self, decks: &mut Decks) {
        self.occupants.clear();
        self.placements.clear();
        self.total_placements = 0;
        self.phase = JobPhase::Idle;
        self.kind.refresh_offers(decks);
    }

    /// Whether `player` may place one more worker here.
    #[must_use]
    pub fn has_vacancy(&self, player: &Player) -> bool {
        let id = player.id();
        let occupant = self.is_occupant(id);

        (occupant || (self.occupants.len() as u64) < u64::from(self.quotas.players))
            && self.total_placements < self.quotas.places
            && self.placements_of(id) < self.quotas.places_per_player
            && self.kind.can_exchange_per_worker(player)
            && (occupant || self.kind.can_exchange_per_player(player))
    }

    /// Place one worker, or report the contract violation without
    /// changing any state.
    pub fn try_place_worker(&mut self, player: &mut Player) -> Result<()> {
        if !self.has_vacancy(player) {
            return Err(GameError::InvalidPlacement {
                player: player.id(),
                job: self.kind.to_string(),
            });
        }

        let id = player.id();
        if !self.is_occupant(id) {
            self.kind.exchange_per_player(player);
            self.occupants.push(id);
        }
        self.kind.exchange_per_worker(player);
        player.take_worker();

        *self.placements.entry(id).or_insert(0) += 1;
        self.total_placements += 1;
        self.phase = JobPhase::Occupied;

        debug!("{} placed on {}", id, self.kind);
        Ok(())
    }

    /// Place one worker. The caller must have checked `has_vacancy`.
    pub fn place_worker(&mut self, player: &mut Player) {
        if let Err(err) = self.try_place_worker(player) {
            panic!("{err}");
        }
    }

    /// Release `player`'s workers from this job.
    ///
    /// Returns how many were placed; the caller restores them to the
    /// player's pool.
    pub fn recollect_workers(&mut self, player: PlayerId) -> u32 {
        let returned = self.placements.remove(&player).unwrap_or(0);
        self.occupants.retain(|p| *p != player);
        self.total_placements -= returned;

        if self.phase != JobPhase::Idle {
            self.phase = if self.occupants.is_empty() {
                JobPhase::Idle
            } else {
                JobPhase::Recollected
            };
        }
        returned
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
