//! Worker placement search for one player's turn.
//!
//! Jobs are visited in a random order: categories shuffled, then the jobs
//! inside each category shuffled. Two policies decide what happens next.
//!
//! - [`PlacementPolicy::Eligible`] enumerates the non-fallback jobs that
//!   currently have a vacancy for the player and uses the first one. The
//!   fallback is used only when that enumeration is empty, so a vacancy
//!   anywhere on the board is never skipped.
//! - [`PlacementPolicy::BoundedRetry`] scans every job, fallback included,
//!   for a fixed number of attempts. The last attempt dumps any remaining
//!   workers on the fallback, even if real vacancies exist elsewhere.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player};
use crate::jobs::{JobBoard, JobId};
use crate::sim::GameObserver;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementPolicy {
    #[default]
    Eligible,
    BoundedRetry { attempts: u32 },
}

impl PlacementPolicy {
    /// Attempt budget for [`PlacementPolicy::bounded_retry`].
    pub const DEFAULT_ATTEMPTS: u32 = 1000;

    #[must_use]
    pub const fn bounded_retry() -> Self {
        PlacementPolicy::BoundedRetry {
            attempts: Self::DEFAULT_ATTEMPTS,
        }
    }
}

/// Board order for one scan: categories shuffled, then jobs within each.
pub fn shuffled_jobs(board: &JobBoard, rng: &mut GameRng) -> Vec<JobId> {
    let mut categories: Vec<usize> = (0..board.categories().len()).collect();
    rng.shuffle(&mut categories);

    let mut order = Vec::with_capacity(board.len());
    for category in categories {
        let mut jobs = board.categories()[category].clone();
        rng.shuffle(&mut jobs);
        order.extend(jobs);
    }
    order
}

/// Place all of `player`'s available workers.
pub fn place_workers(
    policy: PlacementPolicy,
    board: &mut JobBoard,
    player: &mut Player,
    rng: &mut GameRng,
    observer: &mut dyn GameObserver,
) {
    match policy {
        PlacementPolicy::Eligible => place_eligible(board, player, rng, observer),
        PlacementPolicy::BoundedRetry { attempts } => {
            place_bounded_retry(attempts, board, player, rng, observer)
        }
    }
}

fn place_eligible(
    board: &mut JobBoard,
    player: &mut Player,
    rng: &mut GameRng,
    observer: &mut dyn GameObserver,
) {
    let fallback = board.fallback();

    while player.available_workers() > 0 {
        let candidate = shuffled_jobs(board, rng)
            .into_iter()
            .filter(|&id| id != fallback)
            .find(|&id| board.job(id).has_vacancy(player));

        match candidate {
            Some(id) => place_batch(board, id, player, rng, observer),
            None => fill_fallback(board, player, observer),
        }
    }
}

fn place_bounded_retry(
    attempts: u32,
    board: &mut JobBoard,
    player: &mut Player,
    rng: &mut GameRng,
    observer: &mut dyn GameObserver,
) {
    // The last attempt is the forced fallback, so a budget of 0 or 1 scans nothing
    let scans = attempts.saturating_sub(1);

    for _ in 0..scans {
        if player.available_workers() == 0 {
            return;
        }
        for id in shuffled_jobs(board, rng) {
            if player.available_workers() == 0 {
                break;
            }
            if board.job(id).has_vacancy(player) {
                place_batch(board, id, player, rng, observer);
            }
        }
    }

    if player.available_workers() > 0 {
        warn!(
            "{} ran out of placement attempts, moving {} workers to the fallback",
            player.id(),
            player.available_workers()
        );
        fill_fallback(board, player, observer);
    }
}

/// Place a uniform count in `[1, places_per_player]` on one job, capped by
/// the player's available workers. Stops early if the vacancy closes.
fn place_batch(
    board: &mut JobBoard,
    id: JobId,
    player: &mut Player,
    rng: &mut GameRng,
    observer: &mut dyn GameObserver,
) {
    let quota = board.job(id).quotas().places_per_player;
    let count = rng.gen_range_u32(1..=quota).min(player.available_workers());

    for _ in 0..count {
        let job = board.job_mut(id);
        if !job.has_vacancy(player) {
            break;
        }
        job.place_worker(player);
        observer.on_worker_placed(player.id(), job);
    }
}

fn fill_fallback(board: &mut JobBoard, player: &mut Player, observer: &mut dyn GameObserver) {
    let fallback = board.fallback();
    let job = board.job_mut(fallback);
    while player.available_workers() > 0 {
        job.place_worker(player);
        observer.on_worker_placed(player.id(), job);
    }
}
