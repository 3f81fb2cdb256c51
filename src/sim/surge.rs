//! Surge timer state machine
//!
//! A surge is a temporary global multiplier on asteroid speed. The controller
//! alternates between `Idle` (counting down to the next surge) and `Active`
//! (counting down to the surge's end), both on randomized schedules.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurgePhase {
    Idle,
    Active,
}

/// Two-state countdown machine. Invariants: the multiplier is 1.0 exactly
/// when idle, and at most one transition fires per update call no matter how
/// much time elapsed (fixed-timestep-per-frame rule).
#[derive(Debug, Clone)]
pub struct SurgeController {
    phase: SurgePhase,
    countdown_ms: f32,
    multiplier: f32,
}

impl SurgeController {
    /// Start idle, with a randomized delay before the first surge.
    pub fn new(rng: &mut Pcg32, config: &Config) -> Self {
        Self {
            phase: SurgePhase::Idle,
            countdown_ms: rng.random_range(config.surge_idle_min_ms..=config.surge_idle_max_ms),
            multiplier: 1.0,
        }
    }

    /// Current global speed multiplier.
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn is_active(&self) -> bool {
        self.phase == SurgePhase::Active
    }

    /// Milliseconds until the next transition. A presentation layer can read
    /// this to flash a warning as a surge approaches.
    pub fn remaining_ms(&self) -> f32 {
        self.countdown_ms.max(0.0)
    }

    /// Advance the current countdown; toggle state when it runs out.
    ///
    /// The countdown is not re-checked after a transition, so a single call
    /// fires at most one toggle even if `dt_ms` vastly exceeds it.
    pub fn update(&mut self, dt_ms: f32, rng: &mut Pcg32, config: &Config) {
        self.countdown_ms -= dt_ms;
        if self.countdown_ms > 0.0 {
            return;
        }
        match self.phase {
            SurgePhase::Idle => {
                self.phase = SurgePhase::Active;
                self.multiplier = config.surge_multiplier;
                self.countdown_ms =
                    rng.random_range(config.surge_active_min_ms..=config.surge_active_max_ms);
                log::debug!("surge started (x{})", self.multiplier);
            }
            SurgePhase::Active => {
                self.phase = SurgePhase::Idle;
                self.multiplier = 1.0;
                self.countdown_ms =
                    rng.random_range(config.surge_idle_min_ms..=config.surge_idle_max_ms);
                log::debug!("surge ended");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn controller(countdown_ms: f32) -> (SurgeController, Pcg32, Config) {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut surge = SurgeController::new(&mut rng, &config);
        surge.countdown_ms = countdown_ms;
        (surge, rng, config)
    }

    #[test]
    fn test_initial_state() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let surge = SurgeController::new(&mut rng, &config);
        assert!(!surge.is_active());
        assert_eq!(surge.multiplier(), 1.0);
        assert!(surge.remaining_ms() >= config.surge_idle_min_ms);
        assert!(surge.remaining_ms() <= config.surge_idle_max_ms);
    }

    #[test]
    fn test_activates_after_exact_countdown() {
        let (mut surge, mut rng, config) = controller(500.0);

        surge.update(499.0, &mut rng, &config);
        assert!(!surge.is_active());

        surge.update(1.0, &mut rng, &config);
        assert!(surge.is_active());
        assert_eq!(surge.multiplier(), config.surge_multiplier);
        assert!(surge.remaining_ms() >= config.surge_active_min_ms);
    }

    #[test]
    fn test_activates_across_many_small_steps() {
        let (mut surge, mut rng, config) = controller(500.0);
        for _ in 0..5 {
            assert!(!surge.is_active());
            surge.update(100.0, &mut rng, &config);
        }
        assert!(surge.is_active());
    }

    #[test]
    fn test_full_cycle_returns_to_idle() {
        let (mut surge, mut rng, config) = controller(100.0);
        surge.update(100.0, &mut rng, &config);
        assert!(surge.is_active());

        let duration = surge.remaining_ms();
        surge.update(duration, &mut rng, &config);
        assert!(!surge.is_active());
        assert_eq!(surge.multiplier(), 1.0);
    }

    #[test]
    fn test_at_most_one_transition_per_update() {
        // An enormous dt must not toggle twice within one call
        let (mut surge, mut rng, config) = controller(100.0);
        surge.update(10_000_000.0, &mut rng, &config);
        assert!(surge.is_active());
        assert_eq!(surge.multiplier(), config.surge_multiplier);
    }

    #[test]
    fn test_remaining_never_negative() {
        let (mut surge, mut rng, config) = controller(100.0);
        surge.update(50_000.0, &mut rng, &config);
        assert!(surge.remaining_ms() >= 0.0);
    }
}
