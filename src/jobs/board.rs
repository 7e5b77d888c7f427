//! The job board: every job in the game, grouped by category.
//!
//! Exactly one job is the fallback. It must accept any player at any time,
//! since the placement search relies on it to finish every turn.

use super::job::{Job, JobId};
use super::kind::JobKind;
use super::quota::Quotas;
use crate::cards::Decks;
use crate::core::{GameConfig, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobBoard {
    jobs: Vec<Job>,
    /// Job ids per category, in board order.
    categories: Vec<Vec<JobId>>,
    fallback: JobId,
}

impl JobBoard {
    /// Start a board whose fallback is an investment job crediting
    /// `investment_return` per worker.
    ///
    /// The fallback gets a category of its own, added last.
    #[must_use]
    pub fn builder(investment_return: i64) -> JobBoardBuilder {
        JobBoardBuilder {
            jobs: Vec::new(),
            categories: Vec::new(),
            investment_return,
        }
    }

    /// The standard board: venue market, talent slots per category,
    /// marketing, human resources, and the investment fallback.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let venue_quotas = Quotas::new(
            config.venue_slots,
            config.venue_slots,
            config.venue.places_per_player_quota,
        );

        let mut builder = Self::builder(config.investment_return)
            .category(vec![(JobKind::venue_acquisition(config.venue_slots), venue_quotas)]);

        let talent_jobs: Vec<_> = config
            .talent_categories
            .iter()
            .enumerate()
            .flat_map(|(category, talent)| {
                (0..talent.slots).map(move |_| (JobKind::talent_acquisition(category), talent.quotas))
            })
            .collect();
        if !talent_jobs.is_empty() {
            builder = builder.category(talent_jobs);
        }

        builder
            .category(vec![(
                JobKind::Marketing {
                    cost: config.marketing.cost,
                    payback: config.marketing.payback,
                },
                config.marketing.quotas,
            )])
            .category(vec![(
                JobKind::HumanResources {
                    hiring_cost: config.human_resources.hiring_cost,
                    max_staff: config.human_resources.max_staff,
                },
                config.human_resources.quotas,
            )])
            .build()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    #[must_use]
    pub fn job(&self, id: JobId) -> &Job {
        &self.jobs[id.0]
    }

    pub fn job_mut(&mut self, id: JobId) -> &mut Job {
        &mut self.jobs[id.0]
    }

    #[must_use]
    pub fn categories(&self) -> &[Vec<JobId>] {
        &self.categories
    }

    #[must_use]
    pub fn fallback(&self) -> JobId {
        self.fallback
    }

    /// Prepare every job for a new round.
    pub fn prepare_all(&mut self, decks: &mut Decks) {
        for job in &mut self.jobs {
            job.prepare(decks);
        }
    }

    /// Recollect `player` from every job. Returns the workers released.
    pub fn recollect_all(&mut self, player: PlayerId) -> u32 {
        self.jobs
            .iter_mut()
            .map(|job| job.recollect_workers(player))
            .sum()
    }

    /// Whether every job is within its quotas.
    #[must_use]
    pub fn within_quotas(&self) -> bool {
        self.jobs.iter().all(Job::within_quotas)
    }
}

/// Builds a board category by category.
///
/// ```
/// use rust_wpg::jobs::{JobBoard, JobKind, Quotas};
///
/// let board = JobBoard::builder(2)
///     .category(vec![(JobKind::Marketing { cost: 2, payback: 1 }, Quotas::new(2, 4, 2))])
///     .build();
///
/// assert_eq!(board.len(), 2);
/// assert_eq!(board.categories().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct JobBoardBuilder {
    jobs: Vec<Job>,
    categories: Vec<Vec<JobId>>,
    investment_return: i64,
}

impl JobBoardBuilder {
    /// Add a category holding the given jobs.
    #[must_use]
    pub fn category(mut self, jobs: Vec<(JobKind, Quotas)>) -> Self {
        let mut ids = Vec::with_capacity(jobs.len());
        for (kind, quotas) in jobs {
            let id = JobId(self.jobs.len());
            self.jobs.push(Job::new(id, kind, quotas));
            ids.push(id);
        }
        self.categories.push(ids);
        self
    }

    #[must_use]
    pub fn build(mut self) -> JobBoard {
        let fallback = JobId(self.jobs.len());
        self.jobs.push(Job::new(
            fallback,
            JobKind::InvestmentAcquisition {
                return_per_worker: self.investment_return,
            },
            Quotas::unlimited(),
        ));
        self.categories.push(vec![fallback]);

        JobBoard {
            jobs: self.jobs,
            categories: self.categories,
            fallback,
        }
    }
}
