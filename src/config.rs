//! Game balance tunables
//!
//! One immutable `Config` is built at startup and passed by reference into
//! every constructor. Nothing mutates it at runtime; out-of-range values are a
//! deployment concern, not validated here.

/// All numeric game parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Play field dimensions (world units, origin top-left, y down)
    pub field_width: f32,
    pub field_height: f32,

    /// Ship movement speed (units/sec)
    pub ship_speed: f32,
    /// Ship collision radius
    pub ship_radius: f32,

    /// Asteroid size (= collision radius) range
    pub asteroid_min_size: f32,
    pub asteroid_max_size: f32,
    /// Polygon vertex count range (inclusive)
    pub shape_min_vertices: u32,
    pub shape_max_vertices: u32,
    /// Each vertex radius as a fraction of asteroid size
    pub shape_min_radius_frac: f32,
    pub shape_max_radius_frac: f32,
    /// Extra distance past the edge where asteroids materialize
    /// (total spawn offset = size + this)
    pub spawn_edge_margin: f32,
    /// Fraction of the field, measured from the side opposite the spawn
    /// edge, that aim points land in. Keeps asteroids crossing the play
    /// area instead of skimming their own edge.
    pub aim_interior_bias: f32,
    /// Total angular spread applied to the heading (radians)
    pub heading_spread: f32,
    /// Asteroid base speed and uniform +/- variance (units/sec)
    pub asteroid_base_speed: f32,
    pub asteroid_speed_variance: f32,
    /// Maximum spin rate magnitude (radians/sec, cosmetic)
    pub asteroid_max_spin: f32,
    /// Asteroids are culled once past the field bounds by size + this
    pub cull_margin: f32,

    /// Spawn cadence: one batch every interval
    pub spawn_interval_ms: f32,
    pub spawn_batch: u32,

    /// Surge: global asteroid speed multiplier while active
    pub surge_multiplier: f32,
    /// Time between surges (uniform in [min, max], ms)
    pub surge_idle_min_ms: f32,
    pub surge_idle_max_ms: f32,
    /// Surge duration (uniform in [min, max], ms)
    pub surge_active_min_ms: f32,
    pub surge_active_max_ms: f32,

    /// Collision distance is scaled by this (< 1.0 = forgiving hitbox)
    pub collision_forgiveness: f32,
    /// Upper clamp on per-frame elapsed time (seconds); bounds worst-case
    /// displacement so asteroids cannot tunnel through the ship on a hitch
    pub max_frame_secs: f32,

    /// Leaderboard capacity
    pub max_scores: usize,
    /// Delay before a restart command is accepted after game over (ms)
    pub restart_lockout_ms: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,

            ship_speed: 260.0,
            ship_radius: 12.0,

            asteroid_min_size: 15.0,
            asteroid_max_size: 40.0,
            shape_min_vertices: 5,
            shape_max_vertices: 8,
            shape_min_radius_frac: 0.7,
            shape_max_radius_frac: 1.0,
            spawn_edge_margin: 10.0,
            aim_interior_bias: 0.7,
            heading_spread: 0.5,
            asteroid_base_speed: 140.0,
            asteroid_speed_variance: 60.0,
            asteroid_max_spin: 2.0,
            cull_margin: 60.0,

            spawn_interval_ms: 900.0,
            spawn_batch: 2,

            surge_multiplier: 1.8,
            surge_idle_min_ms: 12_000.0,
            surge_idle_max_ms: 20_000.0,
            surge_active_min_ms: 3_000.0,
            surge_active_max_ms: 6_000.0,

            collision_forgiveness: 0.8,
            max_frame_secs: 0.05,

            max_scores: 10,
            restart_lockout_ms: 1_000.0,
        }
    }
}

impl Config {
    /// Field center point
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
