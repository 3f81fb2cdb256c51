//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::input::InputState;

/// Player entity: a point with a collision radius, clamped to the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub radius: f32,
}

impl Ship {
    /// Create a ship at the field center.
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.center(),
            radius: config.ship_radius,
        }
    }

    /// Advance one tick: move along the sampled input direction, then clamp
    /// into `[radius, field - radius]` on both axes. Total; never fails.
    pub fn update(&mut self, dt: f32, input: &InputState, config: &Config) {
        self.pos += input.direction() * config.ship_speed * dt;
        self.pos.x = self
            .pos
            .x
            .clamp(self.radius, config.field_width - self.radius);
        self.pos.y = self
            .pos
            .y
            .clamp(self.radius, config.field_height - self.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn in_bounds(ship: &Ship, config: &Config) -> bool {
        ship.pos.x >= ship.radius
            && ship.pos.x <= config.field_width - ship.radius
            && ship.pos.y >= ship.radius
            && ship.pos.y <= config.field_height - ship.radius
    }

    #[test]
    fn test_starts_at_center() {
        let config = Config::default();
        let ship = Ship::new(&config);
        assert_eq!(ship.pos, config.center());
    }

    #[test]
    fn test_clamps_at_edge() {
        let config = Config::default();
        let mut ship = Ship::new(&config);
        let input = InputState {
            right: true,
            ..Default::default()
        };
        // Far longer than needed to cross the whole field
        for _ in 0..3600 {
            ship.update(1.0 / 60.0, &input, &config);
        }
        assert_eq!(ship.pos.x, config.field_width - ship.radius);
        assert_eq!(ship.pos.y, config.center().y);
    }

    #[test]
    fn test_diagonal_speed_equals_axis_speed() {
        let config = Config::default();
        let dt = 0.25;

        let mut straight = Ship::new(&config);
        straight.update(
            dt,
            &InputState {
                right: true,
                ..Default::default()
            },
            &config,
        );
        let straight_dist = straight.pos.distance(config.center());

        let mut diagonal = Ship::new(&config);
        diagonal.update(
            dt,
            &InputState {
                right: true,
                down: true,
                ..Default::default()
            },
            &config,
        );
        let diagonal_dist = diagonal.pos.distance(config.center());

        assert!((straight_dist - diagonal_dist).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(
            dt in 0.0f32..10.0,
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            up: bool,
            down: bool,
            left: bool,
            right: bool,
        ) {
            let config = Config::default();
            let mut ship = Ship::new(&config);
            ship.pos = Vec2::new(x, y);
            let input = InputState { up, down, left, right };
            ship.update(dt, &input, &config);
            prop_assert!(in_bounds(&ship, &config));
        }
    }
}
