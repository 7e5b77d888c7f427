//! Card records.
//!
//! Cards are immutable drafted items. A deck owns them until a job drafts
//! one into its offer, and a player owns it once acquired.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Unique identifier for a card within its deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Anything a [`Deck`](super::Deck) can hold.
pub trait Card: Clone + std::fmt::Debug {
    fn id(&self) -> CardId;

    fn name(&self) -> &str;
}

/// A venue for sale on the venue market.
///
/// Venue decks are ordered by ascending `level`, so cheaper, smaller venues
/// come up first.
///
/// ```
/// use rust_wpg::cards::{Card, CardId, Venue};
///
/// let venue: Venue = serde_json::from_str(
///     r#"{ "id": 3, "name": "Basement", "level": 1, "price": 4, "capacity": 3 }"#,
/// ).unwrap();
/// assert_eq!(venue.id(), CardId::new(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: CardId,
    pub name: String,
    pub level: u32,
    pub price: i64,
    /// View capacity granted to the owner.
    pub capacity: u32,
}

impl Venue {
    /// Comparison key for venue decks.
    pub fn by_level(a: &Venue, b: &Venue) -> Ordering {
        a.level.cmp(&b.level)
    }
}

impl Card for Venue {
    fn id(&self) -> CardId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A talent for hire. Each talent belongs to one category, and only that
/// category's acquisition jobs can draft it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub id: CardId,
    pub name: String,
    pub category: usize,
    pub price: i64,
    pub fame: u32,
}

impl Card for Talent {
    fn id(&self) -> CardId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
