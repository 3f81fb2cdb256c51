//! Per-frame simulation step
//!
//! One externally driven tick advances the whole update phase synchronously:
//! ship, surge timer, spawn cadence, asteroid motion and culling, then the
//! collision scan. All state for one run lives in [`RunState`]; the run's RNG
//! is seeded once so a run is reproducible from its seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroid::Asteroid;
use super::ship::Ship;
use super::surge::SurgeController;
use crate::config::Config;
use crate::input::InputState;

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Run continues
    Continue,
    /// The ship hit an asteroid; the run is over
    Collided,
}

/// All mutable state for one run, discarded wholesale when the run ends.
#[derive(Debug, Clone)]
pub struct RunState {
    pub seed: u64,
    pub rng: Pcg32,
    /// Survival time so far (seconds); becomes the score
    pub elapsed_secs: f64,
    /// Accumulator for the spawn cadence (ms)
    pub spawn_timer_ms: f32,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub surge: SurgeController,
}

impl RunState {
    /// Fresh run: ship at center, no asteroids, surge idle on a random delay.
    pub fn new(seed: u64, config: &Config) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let surge = SurgeController::new(&mut rng, config);
        Self {
            seed,
            rng,
            elapsed_secs: 0.0,
            spawn_timer_ms: 0.0,
            ship: Ship::new(config),
            asteroids: Vec::new(),
            surge,
        }
    }
}

/// Advance active gameplay by one tick.
///
/// `dt` is elapsed seconds, assumed non-negative and already clamped by the
/// caller (see `Game::tick`). Returns `Collided` on the first asteroid found
/// within the forgiving hitbox; the scan stops there, so the asteroid order
/// decides which rock gets the credit but not the outcome.
pub fn tick(run: &mut RunState, input: &InputState, dt: f32, config: &Config) -> TickResult {
    run.elapsed_secs += dt as f64;

    run.ship.update(dt, input, config);
    run.surge.update(dt * 1000.0, &mut run.rng, config);

    // Spawn cadence: subtract the interval rather than resetting to zero so
    // the remainder carries over and the long-run rate stays stable.
    run.spawn_timer_ms += dt * 1000.0;
    while run.spawn_timer_ms >= config.spawn_interval_ms {
        run.spawn_timer_ms -= config.spawn_interval_ms;
        for _ in 0..config.spawn_batch {
            let asteroid = Asteroid::spawn(&mut run.rng, config);
            run.asteroids.push(asteroid);
        }
    }

    let multiplier = run.surge.multiplier();
    for asteroid in &mut run.asteroids {
        asteroid.update(dt, multiplier);
    }
    run.asteroids.retain(|a| !a.is_off_screen(config));

    for asteroid in &run.asteroids {
        let dist = run.ship.pos.distance(asteroid.pos);
        if dist < config.collision_forgiveness * (run.ship.radius + asteroid.radius) {
            return TickResult::Collided;
        }
    }

    TickResult::Continue
}

/// Keep already-spawned asteroids drifting after the run has ended.
///
/// Multiplier is forced to 1.0 (surges no longer matter), culling works as
/// during play, and nothing collides or spawns. Purely for continued visual
/// motion behind the game-over screen.
pub fn drift(run: &mut RunState, dt: f32, config: &Config) {
    for asteroid in &mut run.asteroids {
        asteroid.update(dt, 1.0);
    }
    run.asteroids.retain(|a| !a.is_off_screen(config));
}
