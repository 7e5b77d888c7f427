//! Decks: ordered collections of drafted cards.
//!
//! A deck either keeps insertion order or stays sorted ascending by a
//! comparison function supplied at construction. Cards are only added by
//! loading and only removed by drawing from the front.

use log::debug;
use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::path::Path;

use super::definition::{Card, CardId, Talent, Venue};
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// Ordering function for sorted decks.
pub type CardOrder<C> = fn(&C, &C) -> Ordering;

/// Ordered, mutable sequence of cards with unique identifiers.
///
/// ```
/// use rust_wpg::cards::{Deck, Venue};
///
/// let mut deck: Deck<Venue> = Deck::sorted_by(Venue::by_level);
/// deck.load(r#"[
///     { "id": 1, "name": "Hall", "level": 3, "price": 8, "capacity": 8 },
///     { "id": 2, "name": "Bar", "level": 1, "price": 2, "capacity": 2 }
/// ]"#).unwrap();
///
/// assert_eq!(deck.count(), 2);
/// assert_eq!(deck.draw_next().unwrap().name, "Bar");
/// ```
#[derive(Clone, Debug)]
pub struct Deck<C: Card> {
    cards: VecDeque<C>,
    ids: FxHashSet<CardId>,
    order: Option<CardOrder<C>>,
}

impl<C: Card> Default for Deck<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Card> Deck<C> {
    /// Create an empty deck that keeps insertion order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: VecDeque::new(),
            ids: FxHashSet::default(),
            order: None,
        }
    }

    /// Create an empty deck kept sorted ascending by `order`.
    #[must_use]
    pub fn sorted_by(order: CardOrder<C>) -> Self {
        Self {
            order: Some(order),
            ..Self::new()
        }
    }

    /// Whether a comparison key is configured.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.order.is_some()
    }

    /// Append cards in the given order, then re-sort if the deck is sorted.
    ///
    /// Fails without modifying the deck if any identifier is already
    /// present or repeated within `cards`.
    pub fn add_cards(&mut self, cards: Vec<C>) -> Result<()> {
        let mut incoming = FxHashSet::default();
        for card in &cards {
            if self.ids.contains(&card.id()) || !incoming.insert(card.id()) {
                return Err(GameError::Config(format!("duplicate card identifier {}", card.id())));
            }
        }

        self.ids.extend(incoming);
        self.cards.extend(cards);

        if let Some(order) = self.order {
            // Stable: equal keys keep source order
            self.cards.make_contiguous().sort_by(order);
        }
        Ok(())
    }

    /// Parse a JSON array of card records and add them.
    ///
    /// Returns the number of cards loaded.
    pub fn load(&mut self, source: &str) -> Result<usize>
    where
        C: DeserializeOwned,
    {
        let cards: Vec<C> = serde_json::from_str(source)?;
        let loaded = cards.len();
        self.add_cards(cards)?;
        debug!("Loaded {} cards, deck now holds {}", loaded, self.count());
        Ok(loaded)
    }

    /// Read and load a JSON card file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize>
    where
        C: DeserializeOwned,
    {
        let source = std::fs::read_to_string(path)?;
        self.load(&source)
    }

    /// Add `count` generated cards. The factory receives the index.
    pub fn extend_from_factory(&mut self, count: u32, factory: impl FnMut(u32) -> C) -> Result<()> {
        let cards = (0..count).map(factory).collect();
        self.add_cards(cards)
    }

    /// Remaining cards.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }

    /// The card `draw_next` would return.
    #[must_use]
    pub fn peek(&self) -> Option<&C> {
        self.cards.front()
    }

    /// Remove the front card.
    pub fn draw_next(&mut self) -> Result<C> {
        let card = self.cards.pop_front().ok_or(GameError::EmptyDeck)?;
        self.ids.remove(&card.id());
        Ok(card)
    }

    /// Remove `k` cards from the front, in order.
    ///
    /// Fails without drawing anything if fewer than `k` remain.
    pub fn draw_n(&mut self, k: usize) -> Result<Vec<C>> {
        if k > self.count() {
            return Err(GameError::EmptyDeck);
        }
        (0..k).map(|_| self.draw_next()).collect()
    }

    /// Remove the first card, in draw order, matching `predicate`.
    pub fn draw_where(&mut self, predicate: impl Fn(&C) -> bool) -> Option<C> {
        let index = self.cards.iter().position(predicate)?;
        let card = self.cards.remove(index)?;
        self.ids.remove(&card.id());
        Some(card)
    }

    /// Randomly permute the draw order.
    ///
    /// Sorted decks keep their order; shuffling only applies to
    /// insertion-ordered decks.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        if self.order.is_none() {
            rng.shuffle(self.cards.make_contiguous());
        }
    }
}

/// The two decks feeding job offers.
#[derive(Clone, Debug)]
pub struct Decks {
    pub venues: Deck<Venue>,
    pub talent: Deck<Talent>,
}

impl Decks {
    #[must_use]
    pub fn new(venues: Deck<Venue>, talent: Deck<Talent>) -> Self {
        Self { venues, talent }
    }
}

impl Default for Decks {
    fn default() -> Self {
        Self::new(Deck::sorted_by(Venue::by_level), Deck::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: u32, level: u32) -> Venue {
        Venue {
            id: CardId::new(id),
            name: format!("Venue {id}"),
            level,
            price: i64::from(level) * 2,
            capacity: level * 2,
        }
    }

    fn talent(id: u32, category: usize) -> Talent {
        Talent {
            id: CardId::new(id),
            name: format!("Talent {id}"),
            category,
            price: 2,
            fame: 1,
        }
    }

    fn ids<C: Card>(deck: &Deck<C>) -> Vec<u32> {
        deck.iter().map(|c| c.id().raw()).collect()
    }

    #[test]
    fn test_insertion_order() {
        let mut deck = Deck::new();
        deck.add_cards(vec![talent(3, 0), talent(1, 0), talent(2, 1)]).unwrap();
        assert_eq!(ids(&deck), vec![3, 1, 2]);
        assert!(!deck.is_sorted());
    }

    #[test]
    fn test_sorted_by_key_is_stable() {
        let mut deck = Deck::sorted_by(Venue::by_level);
        deck.add_cards(vec![venue(1, 3), venue(2, 1), venue(3, 3), venue(4, 2)]).unwrap();
        assert_eq!(ids(&deck), vec![2, 4, 1, 3]);

        // Later loads are merged into the sorted order
        deck.add_cards(vec![venue(5, 1)]).unwrap();
        assert_eq!(ids(&deck), vec![2, 5, 4, 1, 3]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut deck = Deck::new();
        deck.add_cards(vec![talent(1, 0)]).unwrap();

        let err = deck.add_cards(vec![talent(2, 0), talent(1, 0)]).unwrap_err();
        assert!(err.is_config());
        assert_eq!(deck.count(), 1);

        assert!(deck.add_cards(vec![talent(5, 0), talent(5, 1)]).is_err());
        assert_eq!(deck.count(), 1);
    }

    #[test]
    fn test_draw_next_and_empty() {
        let mut deck = Deck::new();
        deck.add_cards(vec![talent(1, 0), talent(2, 0)]).unwrap();

        assert_eq!(deck.draw_next().unwrap().id, CardId::new(1));
        assert_eq!(deck.draw_next().unwrap().id, CardId::new(2));
        assert!(matches!(deck.draw_next(), Err(GameError::EmptyDeck)));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_draw_n_is_all_or_nothing() {
        let mut deck = Deck::sorted_by(Venue::by_level);
        deck.add_cards(vec![venue(1, 2), venue(2, 1), venue(3, 3)]).unwrap();

        assert!(matches!(deck.draw_n(4), Err(GameError::EmptyDeck)));
        assert_eq!(deck.count(), 3);

        let drawn = deck.draw_n(2).unwrap();
        assert_eq!(drawn.iter().map(|v| v.level).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(deck.count(), 1);
    }

    #[test]
    fn test_draw_where() {
        let mut deck = Deck::new();
        deck.add_cards(vec![talent(1, 0), talent(2, 1), talent(3, 1)]).unwrap();

        assert_eq!(deck.draw_where(|t| t.category == 1).unwrap().id, CardId::new(2));
        assert!(deck.draw_where(|t| t.category == 7).is_none());
        assert_eq!(ids(&deck), vec![1, 3]);
    }

    #[test]
    fn test_drawn_id_can_be_reloaded() {
        let mut deck = Deck::new();
        deck.add_cards(vec![talent(1, 0)]).unwrap();
        let card = deck.draw_next().unwrap();
        assert!(deck.add_cards(vec![card]).is_ok());
    }

    #[test]
    fn test_load_json() {
        let mut deck: Deck<Talent> = Deck::new();
        let loaded = deck
            .load(r#"[{ "id": 1, "name": "Singer", "category": 0, "price": 3, "fame": 2 }]"#)
            .unwrap();
        assert_eq!(loaded, 1);
        assert_eq!(deck.peek().map(|t| t.name.as_str()), Some("Singer"));
    }

    #[test]
    fn test_load_malformed_is_config_error() {
        let mut deck: Deck<Talent> = Deck::new();
        let err = deck.load(r#"[{ "id": 1 }]"#).unwrap_err();
        assert!(err.is_config());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let mut deck: Deck<Venue> = Deck::new();
        let err = deck.load_file("/nonexistent/venues.json").unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }

    #[test]
    fn test_factory() {
        let mut deck = Deck::new();
        deck.extend_from_factory(4, |i| talent(i + 10, (i % 2) as usize)).unwrap();
        assert_eq!(ids(&deck), vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_shuffle_unsorted_only() {
        let mut rng = GameRng::new(42);

        let mut deck = Deck::new();
        deck.extend_from_factory(20, |i| talent(i, 0)).unwrap();
        let before = ids(&deck);
        deck.shuffle(&mut rng);
        let mut after = ids(&deck);
        assert_ne!(before, after);
        after.sort();
        assert_eq!(before, after);

        let mut sorted = Deck::sorted_by(Venue::by_level);
        sorted.extend_from_factory(10, |i| venue(i, i)).unwrap();
        let before = ids(&sorted);
        sorted.shuffle(&mut rng);
        assert_eq!(before, ids(&sorted));
    }
}
