//! Observation hooks.
//!
//! The scheduler reports what happens to a [`GameObserver`]. Every method
//! has an empty default, so observers implement only what they need.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::simulation::SimulationReport;
use crate::core::{PlayerId, Season};
use crate::jobs::{Job, JobId};
use crate::schedule::{RoundStart, RoundSummary};

pub trait GameObserver {
    fn on_round_start(&mut self, _start: &RoundStart) {}

    /// Called once per worker, after the job accepted it.
    fn on_worker_placed(&mut self, _player: PlayerId, _job: &Job) {}

    fn on_round_end(&mut self, _summary: &RoundSummary) {}

    fn on_game_end(&mut self, _report: &SimulationReport) {}
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Forwards every hook to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingObserver;

impl GameObserver for LoggingObserver {
    fn on_round_start(&mut self, start: &RoundStart) {
        info!(
            "Round {} begins: {} of year {}, {} workers, {} venues and {} talent left",
            start.round,
            start.season,
            start.year,
            start.workers,
            start.venue_deck_count,
            start.talent_deck_count
        );
    }

    fn on_worker_placed(&mut self, player: PlayerId, job: &Job) {
        debug!("{} -> {} ({})", player, job, job.id());
    }

    fn on_round_end(&mut self, summary: &RoundSummary) {
        for (player, budget) in summary.budgets.iter() {
            debug!("{player} ends round {} with {budget}", summary.round);
        }
    }

    fn on_game_end(&mut self, report: &SimulationReport) {
        info!(
            "Game over after {} rounds ({} years), max money in a round {}",
            report.total_rounds, report.years, report.max_money
        );
    }
}

/// One recorded hook call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    RoundStarted {
        round: u32,
        season: Season,
        year: u32,
    },
    WorkerPlaced {
        round: u32,
        player: PlayerId,
        job: JobId,
        job_name: String,
    },
    RoundEnded {
        round: u32,
        money_in_round: i64,
    },
    GameEnded {
        total_rounds: u32,
        max_money: i64,
    },
}

/// Keeps every event in order, for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Vec<SimEvent>,
    round: u32,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<SimEvent> {
        self.events
    }

    /// Placements made by `player` across the whole game.
    #[must_use]
    pub fn placements_by(&self, player: PlayerId) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::WorkerPlaced { player: p, .. } if *p == player))
            .count()
    }
}

impl GameObserver for RecordingObserver {
    fn on_round_start(&mut self, start: &RoundStart) {
        self.round = start.round;
        self.events.push(SimEvent::RoundStarted {
            round: start.round,
            season: start.season,
            year: start.year,
        });
    }

    fn on_worker_placed(&mut self, player: PlayerId, job: &Job) {
        self.events.push(SimEvent::WorkerPlaced {
            round: self.round,
            player,
            job: job.id(),
            job_name: job.to_string(),
        });
    }

    fn on_round_end(&mut self, summary: &RoundSummary) {
        self.events.push(SimEvent::RoundEnded {
            round: summary.round,
            money_in_round: summary.money_in_round,
        });
    }

    fn on_game_end(&mut self, report: &SimulationReport) {
        self.events.push(SimEvent::GameEnded {
            total_rounds: report.total_rounds,
            max_money: report.max_money,
        });
    }
}
