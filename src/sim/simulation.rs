//! Game setup and the outer loop.
//!
//! Setup draws, in this order from the game's RNG: the first season, a
//! talent deck shuffle, the player count in `[min_players, max_players]`,
//! and the first player. The loop then plays rounds while the venue deck
//! has cards and fewer than `year_cap` years have started.

use log::info;
use serde::{Deserialize, Serialize};

use super::observer::{GameObserver, NullObserver};
use crate::cards::{Deck, Decks, Talent, Venue};
use crate::core::{
    Calendar, GameConfig, GameRng, Player, PlayerId, PlayerMap, Result, Season, SEASON_COUNT,
};
use crate::jobs::JobBoard;
use crate::schedule::{GameContext, RoundSummary, Scheduler};

/// Final outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub player_count: usize,
    pub first_season: Season,
    pub total_rounds: u32,
    pub years: u32,
    /// Largest sum of budgets at the end of any round, 0 if none was positive.
    pub max_money: i64,
    pub final_budgets: PlayerMap<i64>,
}

#[derive(Clone, Debug)]
pub struct Simulation {
    config: GameConfig,
    scheduler: Scheduler,
    ctx: GameContext,
}

impl Simulation {
    /// Set up a game on the standard board built from `config`.
    pub fn new(config: GameConfig, venues: Deck<Venue>, talent: Deck<Talent>) -> Result<Self> {
        config.validate()?;
        let board = JobBoard::from_config(&config);
        Self::with_board(config, board, Decks::new(venues, talent))
    }

    /// Set up a game on a caller-built board.
    pub fn with_board(config: GameConfig, board: JobBoard, mut decks: Decks) -> Result<Self> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let first_season = Season::from_index(rng.gen_range_usize(0..SEASON_COUNT));
        decks.talent.shuffle(&mut rng);
        let player_count = rng.gen_range_usize(config.min_players..config.max_players + 1);
        let first_player = PlayerId::new(rng.gen_range_usize(0..player_count) as u8);

        let players = PlayerMap::new(player_count, |id| {
            Player::new(
                id,
                config.workers_per_player,
                config.starting_budget,
                config.base_view_capacity,
            )
        });

        info!(
            "New game (seed {}): {} players, {} starts, starting in {}",
            config.seed, player_count, first_player, first_season
        );

        Ok(Self {
            scheduler: Scheduler::from_config(&config),
            ctx: GameContext {
                players,
                board,
                decks,
                rng,
                calendar: Calendar::new(first_season),
                first_player,
                max_money_in_round: 0,
                rounds_played: 0,
            },
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.ctx.players
    }

    #[must_use]
    pub fn board(&self) -> &JobBoard {
        &self.ctx.board
    }

    #[must_use]
    pub fn decks(&self) -> &Decks {
        &self.ctx.decks
    }

    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.ctx.calendar
    }

    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.ctx.first_player
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.ctx.rounds_played
    }

    #[must_use]
    pub fn max_money_in_round(&self) -> i64 {
        self.ctx.max_money_in_round
    }

    /// True once the venue deck is empty or the year cap is reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.ctx.decks.venues.is_empty() || self.ctx.calendar.year_count() >= self.config.year_cap
    }

    /// Play one round, or nothing if the game is over.
    pub fn step(&mut self, observer: &mut dyn GameObserver) -> Option<RoundSummary> {
        if self.is_finished() {
            return None;
        }
        Some(self.scheduler.play_round(&mut self.ctx, observer))
    }

    /// Play to the end and report.
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> SimulationReport {
        while self.step(observer).is_some() {}

        let report = self.report();
        info!(
            "Finished after {} rounds, max money in a round {}",
            report.total_rounds, report.max_money
        );
        observer.on_game_end(&report);
        report
    }

    #[must_use]
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            seed: self.config.seed,
            player_count: self.ctx.player_count(),
            first_season: self.ctx.calendar.first_season(),
            total_rounds: self.ctx.rounds_played,
            years: self.ctx.calendar.year_count(),
            max_money: self.ctx.max_money_in_round,
            final_budgets: self.ctx.budgets(),
        }
    }
}

/// Run `runs` independent games. Each gets its own seed forked from
/// `config.seed`, so the batch as a whole is reproducible.
pub fn run_batch(
    config: &GameConfig,
    venues: &Deck<Venue>,
    talent: &Deck<Talent>,
    runs: usize,
) -> Result<Vec<SimulationReport>> {
    config.validate()?;
    let mut seeds = GameRng::new(config.seed);
    (0..runs)
        .map(|_| {
            let seed = seeds.fork().seed();
            let mut sim = Simulation::new(config.clone().with_seed(seed), venues.clone(), talent.clone())?;
            Ok(sim.run(&mut NullObserver))
        })
        .collect()
}
