//! Player identification, per-player storage, and the player ledger.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! The ledger of one company: budget, worker pool, and the secondary
//! resources acquired through jobs. Only job exchanges and end-of-round
//! upkeep mutate it.

use log::warn;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{GameError, Result};
use crate::cards::{Talent, Venue};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_wpg::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Iterate `player_count` players starting at `first`, moving forward
    /// and wrapping around.
    ///
    /// ```
    /// use rust_wpg::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::cycle_from(PlayerId::new(2), 3).collect();
    /// assert_eq!(order, vec![PlayerId::new(2), PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn cycle_from(first: PlayerId, player_count: usize) -> impl Iterator<Item = PlayerId> {
        let start = first.index();
        (0..player_count).map(move |offset| PlayerId(((start + offset) % player_count) as u8))
    }

    /// The player before this one, wrapping to the last player.
    #[must_use]
    pub fn previous(self, player_count: usize) -> PlayerId {
        if self.index() == 0 {
            PlayerId((player_count - 1) as u8)
        } else {
            PlayerId(self.0 - 1)
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`. Serializes as a plain array
/// in seat order, which is how reports print final budgets.
///
/// ```
/// use rust_wpg::core::{PlayerId, PlayerMap};
///
/// let mut budget: PlayerMap<i64> = PlayerMap::new(4, |_| 10);
/// budget[PlayerId::new(1)] -= 3;
/// assert_eq!(budget[PlayerId::new(1)], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// One entry per seat, built by `factory`.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Entries in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.data.len()).zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's ledger.
///
/// `available_workers` never exceeds `total_workers`. `budget` is signed:
/// upkeep is charged unconditionally and can push it below zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    total_workers: u32,
    available_workers: u32,
    /// Workers placed since the last upkeep.
    workers_used: u32,
    budget: i64,
    views: u32,
    base_view_capacity: u32,
    staff: u32,
    fame: u32,
    venues: Vec<Venue>,
    talents: Vec<Talent>,
}

impl Player {
    /// Create a player with a full worker pool.
    #[must_use]
    pub fn new(id: PlayerId, total_workers: u32, budget: i64, base_view_capacity: u32) -> Self {
        Self {
            id,
            total_workers,
            available_workers: total_workers,
            workers_used: 0,
            budget,
            views: 0,
            base_view_capacity,
            staff: 0,
            fame: 0,
            venues: Vec::new(),
            talents: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn total_workers(&self) -> u32 {
        self.total_workers
    }

    #[must_use]
    pub fn available_workers(&self) -> u32 {
        self.available_workers
    }

    #[must_use]
    pub fn workers_used(&self) -> u32 {
        self.workers_used
    }

    #[must_use]
    pub fn budget(&self) -> i64 {
        self.budget
    }

    #[must_use]
    pub fn views(&self) -> u32 {
        self.views
    }

    #[must_use]
    pub fn staff(&self) -> u32 {
        self.staff
    }

    #[must_use]
    pub fn fame(&self) -> u32 {
        self.fame
    }

    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    #[must_use]
    pub fn talents(&self) -> &[Talent] {
        &self.talents
    }

    /// Base capacity plus the capacity of every owned venue.
    ///
    /// Saturates at `u32::MAX`; card data is not range-checked.
    #[must_use]
    pub fn view_capacity(&self) -> u32 {
        self.venues
            .iter()
            .fold(self.base_view_capacity, |cap, v| cap.saturating_add(v.capacity))
    }

    /// Whether `amount` more views fit under the current capacity.
    #[must_use]
    pub fn can_acquire_views(&self, amount: u32) -> bool {
        self.views.saturating_add(amount) <= self.view_capacity()
    }

    #[must_use]
    pub fn can_afford(&self, amount: i64) -> bool {
        self.budget >= amount
    }

    /// Refill the worker pool at round start.
    pub fn reset_for_round(&mut self) {
        self.available_workers = self.total_workers;
    }

    /// Take one worker from the pool for a placement.
    pub(crate) fn take_worker(&mut self) {
        assert!(self.available_workers > 0, "{} has no available workers", self.id);
        self.available_workers -= 1;
        self.workers_used += 1;
    }

    /// Return recollected workers to the pool.
    ///
    /// Panics if more workers come back than the player owns.
    pub fn restore_workers(&mut self, count: u32) {
        let restored = self.available_workers + count;
        assert!(
            restored <= self.total_workers,
            "{} recollected {} workers but owns {}",
            self.id,
            restored,
            self.total_workers
        );
        self.available_workers = restored;
    }

    /// Deduct `amount` from the budget, refusing if it would not be covered.
    pub fn try_pay(&mut self, amount: i64) -> Result<()> {
        if !self.can_afford(amount) {
            return Err(GameError::InsufficientFunds {
                player: self.id,
                budget: self.budget,
                amount,
            });
        }
        self.budget -= amount;
        Ok(())
    }

    /// Deduct `amount` from the budget.
    ///
    /// Callers gate every payment behind a job's eligibility check, so an
    /// uncovered payment is a logic defect and panics.
    pub fn pay(&mut self, amount: i64) {
        if let Err(err) = self.try_pay(amount) {
            panic!("{err}");
        }
    }

    pub fn credit(&mut self, amount: i64) {
        self.budget += amount;
    }

    pub fn add_views(&mut self, amount: u32) {
        self.views = self.views.saturating_add(amount);
    }

    /// One more staff member, who joins the worker pool from the next round.
    pub fn hire_staff(&mut self) {
        self.staff += 1;
        self.total_workers += 1;
    }

    pub fn acquire_venue(&mut self, venue: Venue) {
        self.venues.push(venue);
    }

    pub fn acquire_talent(&mut self, talent: Talent) {
        self.fame = self.fame.saturating_add(talent.fame);
        self.talents.push(talent);
    }

    /// Charge `upkeep_per_worker` for every worker used this round.
    ///
    /// Returns the amount charged. The charge is not gated on the budget.
    pub fn pay_workers_upkeep(&mut self, upkeep_per_worker: i64) -> i64 {
        let cost = i64::from(self.workers_used) * upkeep_per_worker;
        self.budget -= cost;
        self.workers_used = 0;
        if self.budget < 0 {
            warn!("{} is in debt after upkeep: budget {}", self.id, self.budget);
        }
        cost
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: budget {}, workers {}/{}, views {}/{}, staff {}, fame {}, venues {}, talents {}",
            self.id,
            self.budget,
            self.available_workers,
            self.total_workers,
            self.views,
            self.view_capacity(),
            self.staff,
            self.fame,
            self.venues.len(),
            self.talents.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn venue(capacity: u32) -> Venue {
        Venue {
            id: CardId::new(1),
            name: "Club".to_string(),
            level: 1,
            price: 3,
            capacity,
        }
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_cycle_from_wraps() {
        let order: Vec<_> = PlayerId::cycle_from(PlayerId::new(1), 4).collect();
        assert_eq!(
            order,
            vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3), PlayerId::new(0)]
        );
    }

    #[test]
    fn test_previous_wraps() {
        assert_eq!(PlayerId::new(0).previous(3), PlayerId::new(2));
        assert_eq!(PlayerId::new(2).previous(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(0).previous(1), PlayerId::new(0));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(2, 0);
        map[PlayerId::new(0)] = 10;
        assert_eq!(map[PlayerId::new(0)], 10);
        assert_eq!(map[PlayerId::new(1)], 0);
        assert_eq!(map.player_count(), 2);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_worker_pool_round_trip() {
        let mut player = Player::new(PlayerId::new(0), 3, 10, 0);
        player.take_worker();
        player.take_worker();
        assert_eq!(player.available_workers(), 1);
        assert_eq!(player.workers_used(), 2);

        player.restore_workers(2);
        assert_eq!(player.available_workers(), 3);

        player.take_worker();
        player.reset_for_round();
        assert_eq!(player.available_workers(), player.total_workers());
    }

    #[test]
    #[should_panic(expected = "recollected 3 workers but owns 2")]
    fn test_restore_more_than_owned_panics() {
        let mut player = Player::new(PlayerId::new(0), 2, 10, 0);
        player.take_worker();
        player.restore_workers(2);
    }

    #[test]
    fn test_staff_join_pool_next_round() {
        let mut player = Player::new(PlayerId::new(0), 2, 10, 0);
        player.take_worker();
        player.hire_staff();
        assert_eq!(player.staff(), 1);
        assert_eq!(player.total_workers(), 3);
        assert_eq!(player.available_workers(), 1);

        player.restore_workers(1);
        assert_eq!(player.available_workers(), 2);
        player.reset_for_round();
        assert_eq!(player.available_workers(), 3);
    }

    #[test]
    fn test_huge_venue_capacity_saturates() {
        let mut player = Player::new(PlayerId::new(0), 2, 10, 2);
        player.acquire_venue(venue(u32::MAX));
        player.acquire_venue(venue(u32::MAX));
        assert_eq!(player.view_capacity(), u32::MAX);
        assert!(player.can_acquire_views(u32::MAX));

        player.add_views(u32::MAX);
        player.add_views(1);
        assert_eq!(player.views(), u32::MAX);
    }

    #[test]
    fn test_try_pay_refuses_overdraft() {
        let mut player = Player::new(PlayerId::new(2), 1, 4, 0);
        assert!(player.try_pay(3).is_ok());
        assert_eq!(player.budget(), 1);

        let err = player.try_pay(2).unwrap_err();
        assert!(matches!(err, GameError::InsufficientFunds { amount: 2, budget: 1, .. }));
        assert_eq!(player.budget(), 1);
    }

    #[test]
    #[should_panic(expected = "Insufficient funds")]
    fn test_pay_panics_on_overdraft() {
        let mut player = Player::new(PlayerId::new(0), 1, 0, 0);
        player.pay(1);
    }

    #[test]
    fn test_upkeep_can_go_negative() {
        let mut player = Player::new(PlayerId::new(0), 2, 1, 0);
        player.take_worker();
        player.take_worker();

        assert_eq!(player.pay_workers_upkeep(1), 2);
        assert_eq!(player.budget(), -1);
        assert_eq!(player.workers_used(), 0);
    }

    #[test]
    fn test_view_capacity_grows_with_venues() {
        let mut player = Player::new(PlayerId::new(0), 2, 10, 2);
        assert!(player.can_acquire_views(2));
        assert!(!player.can_acquire_views(3));

        player.acquire_venue(venue(5));
        assert_eq!(player.view_capacity(), 7);
        player.add_views(6);
        assert!(player.can_acquire_views(1));
        assert!(!player.can_acquire_views(2));
    }

    #[test]
    fn test_display() {
        let player = Player::new(PlayerId::new(1), 2, 7, 4);
        assert_eq!(
            player.to_string(),
            "Player 1: budget 7, workers 2/2, views 0/4, staff 0, fame 0, venues 0, talents 0"
        );
    }
}
