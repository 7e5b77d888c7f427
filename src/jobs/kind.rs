//! Job variants and their exchange logic.
//!
//! The set of variants is closed. Each carries its own constants (costs,
//! paybacks) and, for the acquisition jobs, the offers drafted from the
//! decks during preparation.

use serde::{Deserialize, Serialize};

use crate::cards::{Decks, Talent, Venue};
use crate::core::Player;

/// Category a job is grouped under for the placement search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobCategory {
    Venue,
    Talent,
    Marketing,
    HumanResources,
    Investment,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobKind {
    /// Buys venues from a market of up to `market_size` offers.
    VenueAcquisition {
        market_size: u32,
        offers: Vec<Venue>,
    },
    /// Hires the single drafted talent of `category`.
    TalentAcquisition {
        category: usize,
        offer: Option<Talent>,
    },
    /// Trades money for views, bounded by view capacity.
    Marketing { cost: i64, payback: u32 },
    /// Hires staff up to a per-player cap. Each hire adds a worker.
    HumanResources { hiring_cost: i64, max_staff: u32 },
    /// The fallback. Always accepts workers.
    InvestmentAcquisition { return_per_worker: i64 },
}

impl JobKind {
    #[must_use]
    pub fn venue_acquisition(market_size: u32) -> Self {
        JobKind::VenueAcquisition {
            market_size,
            offers: Vec::new(),
        }
    }

    #[must_use]
    pub fn talent_acquisition(category: usize) -> Self {
        JobKind::TalentAcquisition {
            category,
            offer: None,
        }
    }

    #[must_use]
    pub fn category(&self) -> JobCategory {
        match self {
            JobKind::VenueAcquisition { .. } => JobCategory::Venue,
            JobKind::TalentAcquisition { .. } => JobCategory::Talent,
            JobKind::Marketing { .. } => JobCategory::Marketing,
            JobKind::HumanResources { .. } => JobCategory::HumanResources,
            JobKind::InvestmentAcquisition { .. } => JobCategory::Investment,
        }
    }

    /// Refill drafted offers from the decks.
    ///
    /// Offers already on display stay; only empty slots are drafted, so
    /// refreshing twice in a row draws nothing the second time.
    pub fn refresh_offers(&mut self, decks: &mut Decks) {
        match self {
            JobKind::VenueAcquisition {
                market_size,
                offers,
            } => {
                while offers.len() < *market_size as usize {
                    match decks.venues.draw_next() {
                        Ok(venue) => offers.push(venue),
                        Err(_) => break,
                    }
                }
            }
            JobKind::TalentAcquisition { category, offer } => {
                if offer.is_none() {
                    let wanted = *category;
                    *offer = decks.talent.draw_where(|t| t.category == wanted);
                }
            }
            JobKind::Marketing { .. }
            | JobKind::HumanResources { .. }
            | JobKind::InvestmentAcquisition { .. } => {}
        }
    }

    /// Whether a player not yet on the job may join it this round.
    ///
    /// No variant currently restricts or charges first-time occupants.
    #[must_use]
    pub fn can_exchange_per_player(&self, _player: &Player) -> bool {
        true
    }

    /// Effect applied once when a player first joins the job in a round.
    pub fn exchange_per_player(&mut self, _player: &mut Player) {}

    /// Whether one more worker from `player` can be exchanged.
    #[must_use]
    pub fn can_exchange_per_worker(&self, player: &Player) -> bool {
        match self {
            JobKind::VenueAcquisition { offers, .. } => {
                offers.iter().any(|v| player.can_afford(v.price))
            }
            JobKind::TalentAcquisition { offer, .. } => offer
                .as_ref()
                .is_some_and(|t| player.can_afford(t.price)),
            JobKind::Marketing { cost, payback } => {
                player.can_afford(*cost) && player.can_acquire_views(*payback)
            }
            JobKind::HumanResources {
                hiring_cost,
                max_staff,
            } => player.can_afford(*hiring_cost) && player.staff() < *max_staff,
            JobKind::InvestmentAcquisition { .. } => true,
        }
    }

    /// Effect applied for every worker placed.
    ///
    /// Only called after `can_exchange_per_worker` held for this player.
    pub fn exchange_per_worker(&mut self, player: &mut Player) {
        match self {
            JobKind::VenueAcquisition { offers, .. } => {
                // Offers are in level order; buy the smallest affordable one
                if let Some(index) = offers.iter().position(|v| player.can_afford(v.price)) {
                    let venue = offers.remove(index);
                    player.pay(venue.price);
                    player.acquire_venue(venue);
                }
            }
            JobKind::TalentAcquisition { offer, .. } => {
                if let Some(talent) = offer.take() {
                    player.pay(talent.price);
                    player.acquire_talent(talent);
                }
            }
            JobKind::Marketing { cost, payback } => {
                player.pay(*cost);
                player.add_views(*payback);
            }
            JobKind::HumanResources { hiring_cost, .. } => {
                player.pay(*hiring_cost);
                player.hire_staff();
            }
            JobKind::InvestmentAcquisition { return_per_worker } => {
                player.credit(*return_per_worker);
            }
        }
    }
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobKind::VenueAcquisition { .. } => write!(f, "Venue Acquisition"),
            JobKind::TalentAcquisition { category, .. } => {
                write!(f, "Talent Acquisition ({category})")
            }
            JobKind::Marketing { .. } => write!(f, "Marketing"),
            JobKind::HumanResources { .. } => write!(f, "Human Resources"),
            JobKind::InvestmentAcquisition { .. } => write!(f, "Investment Acquisition"),
        }
    }
}
