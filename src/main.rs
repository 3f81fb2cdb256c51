//! Headless demo driver
//!
//! Runs one game with a naive dodge AI at a fixed 60 Hz cadence and prints
//! the outcome. Useful for smoke-testing balance changes without a renderer:
//!
//! ```text
//! RUST_LOG=info cargo run -- [seed]
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use rockstorm::{Command, Config, FileStore, Game, GamePhase, InputState, Snapshot};

const DT: f32 = 1.0 / 60.0;

/// Steer away from the nearest threatening asteroid; otherwise head back
/// toward the field center.
fn pilot(snapshot: &Snapshot, config: &Config) -> InputState {
    let Some(ship) = snapshot.ship else {
        return InputState::default();
    };

    let threat = snapshot
        .asteroids
        .iter()
        .map(|a| (a.pos, ship.pos.distance(a.pos) - a.radius))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|(_, gap)| *gap < 120.0);

    let desired = match threat {
        Some((pos, _)) => ship.pos - pos,
        None => config.center() - ship.pos,
    };

    let dir = desired.normalize_or_zero();
    InputState {
        up: dir.y < -0.3,
        down: dir.y > 0.3,
        left: dir.x < -0.3,
        right: dir.x > 0.3,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let config = Config::default();
    let store = FileStore::new(".rockstorm");
    let mut game = Game::new(config.clone(), store, seed);

    game.handle(Command::Start);
    let mut surges = 0u32;
    let mut was_surging = false;

    while game.phase() == GamePhase::Playing {
        let input = {
            let snapshot = game.snapshot();
            if snapshot.surge_active && !was_surging {
                surges += 1;
            }
            was_surging = snapshot.surge_active;
            pilot(&snapshot, &config)
        };
        game.tick(DT, &input);
    }

    let snapshot = game.snapshot();
    println!(
        "survived {:.1}s through {} surge(s){}",
        snapshot.final_score.unwrap_or(0.0),
        surges,
        if snapshot.new_best { " - NEW BEST!" } else { "" }
    );
    println!("best: {:.1}s", snapshot.best_score.unwrap_or(0.0));
    for (i, score) in snapshot.scores.iter().enumerate() {
        println!("{:>2}. {score:.1}s", i + 1);
    }
}
