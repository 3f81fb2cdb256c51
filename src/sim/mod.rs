//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - One synchronous update per host-driven tick

pub mod asteroid;
pub mod ship;
pub mod surge;
pub mod tick;

pub use asteroid::{Asteroid, ShapeVertex};
pub use ship::Ship;
pub use surge::SurgeController;
pub use tick::{RunState, TickResult, drift, tick};
