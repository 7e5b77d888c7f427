//! Jobs: capacity-constrained worker placement slots.
//!
//! ## Key Types
//!
//! - `Quotas`: players / places / places-per-player ceilings
//! - `JobKind`: The closed set of variants and their exchanges
//! - `Job`: Round-scoped occupancy state machine around a `JobKind`
//! - `JobBoard`: All jobs of a game, grouped into categories, with the
//!   investment fallback

pub mod board;
pub mod job;
pub mod kind;
pub mod quota;

pub use board::{JobBoard, JobBoardBuilder};
pub use job::{Job, JobId, JobPhase};
pub use kind::{JobCategory, JobKind};
pub use quota::Quotas;
