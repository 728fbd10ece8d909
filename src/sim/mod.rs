//! Deterministic simulation module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick deltas only (no wall-clock time)
//! - Seeded RNG only
//! - Stable stepping order (balls in collection order, then the player)
//! - No rendering or platform dependencies

pub mod body;
pub mod state;
pub mod tick;
pub mod topology;
pub mod transform;

pub use body::Body;
pub use state::{Ball, Player, Universe};
pub use tick::{TickInput, tick};
pub use topology::Topology;
pub use transform::Transform;
