//! Rockstorm - an asteroid-dodging arcade survival game
//!
//! This crate is the simulation core only. Rendering, keyboard wiring and
//! visual effects live in the host; they read the per-frame [`game::Snapshot`]
//! and feed back an [`input::InputState`].
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, asteroids, surge timer, tick loop)
//! - `game`: Title/Playing/GameOver lifecycle, commands, score commit
//! - `scores`: Ranked survival-time leaderboard
//! - `storage`: Key/value persistence abstraction
//! - `config`: Immutable tunables

pub mod config;
pub mod game;
pub mod input;
pub mod scores;
pub mod sim;
pub mod storage;

pub use config::Config;
pub use game::{Command, Game, GamePhase, Snapshot};
pub use input::InputState;
pub use scores::ScoreStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
