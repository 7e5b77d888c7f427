//! Simulation driver and host hooks.
//!
//! ## Key Types
//!
//! - `Simulation`: Setup plus the outer round loop
//! - `SimulationReport`: Totals for one finished game
//! - `GameObserver`: Round-boundary and placement callbacks
//! - `NullObserver`, `LoggingObserver`, `RecordingObserver`: Stock observers
//!
//! ## Example
//!
//! ```
//! use rust_wpg::cards::{CardId, Deck, Venue};
//! use rust_wpg::core::GameConfig;
//! use rust_wpg::sim::{RecordingObserver, Simulation};
//!
//! let mut venues = Deck::sorted_by(Venue::by_level);
//! venues
//!     .extend_from_factory(30, |i| Venue {
//!         id: CardId::new(i),
//!         name: format!("Club {i}"),
//!         level: 1 + i % 3,
//!         price: 6,
//!         capacity: 3,
//!     })
//!     .unwrap();
//!
//! let config = GameConfig::default().with_seed(7);
//! let mut sim = Simulation::new(config, venues, Deck::new()).unwrap();
//! let mut recorder = RecordingObserver::new();
//! let report = sim.run(&mut recorder);
//!
//! assert!(report.total_rounds > 0);
//! assert!(report.years <= 5);
//! ```

pub mod observer;
pub mod simulation;

pub use observer::{GameObserver, LoggingObserver, NullObserver, RecordingObserver, SimEvent};
pub use simulation::{run_batch, Simulation, SimulationReport};
