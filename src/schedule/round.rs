//! One round of play.
//!
//! 1. Year check
//! 2. Prepare every job
//! 3. Placement, players in turn order starting at the first player
//! 4. Recollection and upkeep, same order; track the richest round
//! 5. First player moves back one seat
//! 6. Season advances

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::placement::{place_workers, PlacementPolicy};
use crate::cards::Decks;
use crate::core::{Calendar, GameConfig, GameRng, Player, PlayerId, PlayerMap, Season};
use crate::jobs::JobBoard;
use crate::sim::GameObserver;

/// Everything a round reads and mutates.
///
/// One context per game: nothing here is shared between simulations.
#[derive(Clone, Debug)]
pub struct GameContext {
    pub players: PlayerMap<Player>,
    pub board: JobBoard,
    pub decks: Decks,
    pub rng: GameRng,
    pub calendar: Calendar,
    /// Seat that places first this round.
    pub first_player: PlayerId,
    /// Highest sum of budgets seen at the end of any round.
    pub max_money_in_round: i64,
    pub rounds_played: u32,
}

impl GameContext {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Current budget of every player.
    #[must_use]
    pub fn budgets(&self) -> PlayerMap<i64> {
        PlayerMap::new(self.player_count(), |p| self.players[p].budget())
    }
}

/// Reported to observers before placement begins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStart {
    pub round: u32,
    pub season: Season,
    pub year: u32,
    pub venue_deck_count: usize,
    pub talent_deck_count: usize,
    /// Workers all players will place this round.
    pub workers: u32,
}

/// Outcome of a round, after upkeep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub season: Season,
    pub year: u32,
    pub budgets: PlayerMap<i64>,
    /// Sum of all budgets at the end of the round.
    pub money_in_round: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduler {
    policy: PlacementPolicy,
    worker_upkeep: i64,
}

impl Scheduler {
    #[must_use]
    pub fn new(policy: PlacementPolicy, worker_upkeep: i64) -> Self {
        Self {
            policy,
            worker_upkeep,
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.placement, config.worker_upkeep)
    }

    #[must_use]
    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// Play one full round.
    pub fn play_round(&self, ctx: &mut GameContext, observer: &mut dyn GameObserver) -> RoundSummary {
        let round = ctx.rounds_played;
        let player_count = ctx.player_count();

        ctx.calendar.begin_round();
        let season = ctx.calendar.current();
        let year = ctx.calendar.year_count();
        observer.on_round_start(&RoundStart {
            round,
            season,
            year,
            venue_deck_count: ctx.decks.venues.count(),
            talent_deck_count: ctx.decks.talent.count(),
            workers: ctx.players.iter().map(|(_, p)| p.total_workers()).sum(),
        });

        ctx.board.prepare_all(&mut ctx.decks);

        for player in PlayerId::cycle_from(ctx.first_player, player_count) {
            let player = &mut ctx.players[player];
            player.reset_for_round();
            place_workers(self.policy, &mut ctx.board, player, &mut ctx.rng, observer);
        }

        let mut money_in_round = 0;
        for id in PlayerId::cycle_from(ctx.first_player, player_count) {
            let returned = ctx.board.recollect_all(id);
            let player = &mut ctx.players[id];
            player.restore_workers(returned);
            player.pay_workers_upkeep(self.worker_upkeep);
            debug!("{player}");
            money_in_round += player.budget();
        }
        if money_in_round > ctx.max_money_in_round {
            ctx.max_money_in_round = money_in_round;
        }

        let summary = RoundSummary {
            round,
            season,
            year,
            budgets: ctx.budgets(),
            money_in_round,
        };

        ctx.first_player = ctx.first_player.previous(player_count);
        ctx.calendar.advance();
        ctx.rounds_played += 1;

        info!(
            "Round {} ({} of year {}) closed with {} in play",
            round, season, year, money_in_round
        );
        observer.on_round_end(&summary);
        summary
    }
}
