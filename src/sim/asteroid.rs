//! Asteroid entity and its randomized construction
//!
//! Variety comes from parameterized randomness at spawn time, not subtypes:
//! size, polygon outline, spawn edge, aim point, heading and speed are all
//! drawn once, after which the asteroid is pure data with a fixed base
//! velocity. The live velocity is base velocity times the current surge
//! multiplier, recomputed every frame rather than integrated, so multiplier
//! changes take effect with no inertia.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::config::Config;
use crate::normalize_angle;

/// One point of an asteroid's polygon outline, in polar offsets from its
/// center. Generated once at spawn; purely cosmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShapeVertex {
    pub angle: f32,
    pub radius: f32,
}

/// A drifting rock. Collision treats it as a circle of `radius`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Velocity at multiplier 1.0, fixed for the asteroid's lifetime
    pub base_vel: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub spin: f32,
    pub shape: Vec<ShapeVertex>,
}

/// Field edges an asteroid can spawn on.
const EDGE_TOP: u32 = 0;
const EDGE_RIGHT: u32 = 1;
const EDGE_BOTTOM: u32 = 2;
const EDGE_LEFT: u32 = 3;

impl Asteroid {
    /// Spawn a new asteroid just outside a random field edge, aimed across
    /// the play area.
    ///
    /// The aim point's cross-edge coordinate is drawn from the fraction of
    /// the field away from the spawn edge (`aim_interior_bias`), so a rock
    /// spawned on the right edge aims somewhere in the left 70% of the field
    /// rather than skimming its own edge. The final heading gets a uniform
    /// perturbation within `heading_spread`.
    pub fn spawn(rng: &mut Pcg32, config: &Config) -> Self {
        let size = rng.random_range(config.asteroid_min_size..=config.asteroid_max_size);

        let vertex_count =
            rng.random_range(config.shape_min_vertices..=config.shape_max_vertices);
        let shape = (0..vertex_count)
            .map(|i| ShapeVertex {
                angle: i as f32 / vertex_count as f32 * TAU,
                radius: size
                    * rng.random_range(
                        config.shape_min_radius_frac..=config.shape_max_radius_frac,
                    ),
            })
            .collect();

        let w = config.field_width;
        let h = config.field_height;
        let bias = config.aim_interior_bias;
        let margin = size + config.spawn_edge_margin;

        let (pos, aim) = match rng.random_range(0..4u32) {
            EDGE_TOP => (
                Vec2::new(rng.random_range(0.0..w), -margin),
                Vec2::new(
                    rng.random_range(0.0..w),
                    rng.random_range(h * (1.0 - bias)..h),
                ),
            ),
            EDGE_RIGHT => (
                Vec2::new(w + margin, rng.random_range(0.0..h)),
                Vec2::new(rng.random_range(0.0..w * bias), rng.random_range(0.0..h)),
            ),
            EDGE_BOTTOM => (
                Vec2::new(rng.random_range(0.0..w), h + margin),
                Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h * bias)),
            ),
            EDGE_LEFT => (
                Vec2::new(-margin, rng.random_range(0.0..h)),
                Vec2::new(
                    rng.random_range(w * (1.0 - bias)..w),
                    rng.random_range(0.0..h),
                ),
            ),
            _ => unreachable!(),
        };

        let half_spread = config.heading_spread / 2.0;
        let heading = (aim - pos).to_angle() + rng.random_range(-half_spread..=half_spread);
        let speed = config.asteroid_base_speed
            + rng.random_range(-config.asteroid_speed_variance..=config.asteroid_speed_variance);

        Self {
            pos,
            base_vel: Vec2::from_angle(heading) * speed,
            radius: size,
            rotation: rng.random_range(0.0..TAU),
            spin: rng.random_range(-config.asteroid_max_spin..=config.asteroid_max_spin),
            shape,
        }
    }

    /// Advance position and rotation by one tick.
    pub fn update(&mut self, dt: f32, speed_multiplier: f32) {
        self.pos += self.base_vel * speed_multiplier * dt;
        self.rotation = normalize_angle(self.rotation + self.spin * dt);
    }

    /// True once the asteroid has left the field by more than its size plus
    /// the cull margin, in any direction.
    pub fn is_off_screen(&self, config: &Config) -> bool {
        let m = self.radius + config.cull_margin;
        self.pos.x < -m
            || self.pos.x > config.field_width + m
            || self.pos.y < -m
            || self.pos.y > config.field_height + m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn still(pos: Vec2, radius: f32) -> Asteroid {
        Asteroid {
            pos,
            base_vel: Vec2::ZERO,
            radius,
            rotation: 0.0,
            spin: 0.0,
            shape: Vec::new(),
        }
    }

    #[test]
    fn test_spawn_geometry() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let a = Asteroid::spawn(&mut rng, &config);

            // Size and outline honor the configured ranges
            assert!(a.radius >= config.asteroid_min_size && a.radius <= config.asteroid_max_size);
            let n = a.shape.len() as u32;
            assert!(n >= config.shape_min_vertices && n <= config.shape_max_vertices);
            for v in &a.shape {
                assert!(v.radius >= a.radius * config.shape_min_radius_frac - 1e-3);
                assert!(v.radius <= a.radius * config.shape_max_radius_frac + 1e-3);
            }

            // Spawns outside the field, never already cullable
            let outside = a.pos.x < 0.0
                || a.pos.x > config.field_width
                || a.pos.y < 0.0
                || a.pos.y > config.field_height;
            assert!(outside);
            assert!(!a.is_off_screen(&config));

            // Speed within base +/- variance
            let speed = a.base_vel.length();
            assert!(speed >= config.asteroid_base_speed - config.asteroid_speed_variance - 1e-3);
            assert!(speed <= config.asteroid_base_speed + config.asteroid_speed_variance + 1e-3);
        }
    }

    #[test]
    fn test_spawned_asteroids_cross_the_field() {
        // With no heading spread, every asteroid must enter the field
        // eventually; the aim bias guarantees an interior target.
        let config = Config {
            heading_spread: 0.0,
            ..Config::default()
        };
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let mut a = Asteroid::spawn(&mut rng, &config);
            let mut entered = false;
            for _ in 0..1800 {
                a.update(1.0 / 60.0, 1.0);
                if a.pos.x >= 0.0
                    && a.pos.x <= config.field_width
                    && a.pos.y >= 0.0
                    && a.pos.y <= config.field_height
                {
                    entered = true;
                    break;
                }
            }
            assert!(entered, "asteroid never entered the field: {a:?}");
        }
    }

    #[test]
    fn test_off_screen_margin_is_strict() {
        let config = Config::default();
        let m = 20.0 + config.cull_margin;

        let edge = still(Vec2::new(-m, 300.0), 20.0);
        assert!(!edge.is_off_screen(&config));

        let past = still(Vec2::new(-m - 0.1, 300.0), 20.0);
        assert!(past.is_off_screen(&config));

        let below = still(Vec2::new(400.0, config.field_height + m + 0.1), 20.0);
        assert!(below.is_off_screen(&config));
    }

    proptest! {
        #[test]
        fn prop_speed_scales_multiplicatively(m in 0.0f32..8.0, dt in 0.001f32..0.05) {
            let mut base = still(Vec2::new(100.0, 100.0), 20.0);
            base.base_vel = Vec2::new(80.0, -35.0);
            let mut scaled = base.clone();

            base.update(dt, 1.0);
            scaled.update(dt, m);

            let base_step = (base.pos - Vec2::new(100.0, 100.0)).length();
            let scaled_step = (scaled.pos - Vec2::new(100.0, 100.0)).length();
            prop_assert!((scaled_step - base_step * m).abs() < 1e-2);
        }
    }
}
