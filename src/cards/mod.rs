//! Card system: card records and decks.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier unique within a deck
//! - `Card`: Trait for anything a deck can hold
//! - `Venue`, `Talent`: The two drafted card kinds
//! - `Deck`: Ordered collection with load/draw/shuffle
//! - `Decks`: The venue and talent decks a game draws offers from

pub mod deck;
pub mod definition;

pub use deck::{CardOrder, Deck, Decks};
pub use definition::{Card, CardId, Talent, Venue};
