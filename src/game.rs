//! Game lifecycle: Title → Playing → GameOver → Title
//!
//! `Game` wraps one run's simulation, turns its terminal collision into a
//! score commit, and gates the `start`/`restart` commands. A restart lockout
//! keeps the key mash that got the player killed from skipping straight past
//! the game-over screen.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::input::InputState;
use crate::scores::ScoreStore;
use crate::sim::{Asteroid, RunState, Ship, TickResult, drift, tick};
use crate::storage::KeyValueStore;

/// Current lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Title,
    Playing,
    GameOver,
}

/// Commands the host can issue. Anything sent in the wrong phase is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a run (Title only)
    Start,
    /// Back to the title screen (GameOver only, after the lockout)
    Restart,
}

/// Read-only view of one frame, handed to the presentation layer.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    /// Present while a run's world exists (Playing and GameOver)
    pub ship: Option<&'a Ship>,
    pub asteroids: &'a [Asteroid],
    pub surge_active: bool,
    /// Survival time of the current (or just-ended) run, seconds
    pub elapsed_secs: f64,
    pub best_score: Option<f64>,
    /// Ranked past durations, best first
    pub scores: &'a [f64],
    /// The ended run's score (GameOver only)
    pub final_score: Option<f64>,
    /// Whether the ended run matched or beat the previous best
    pub new_best: bool,
    /// Whether a restart command would be accepted right now
    pub lockout_elapsed: bool,
}

/// The whole game: lifecycle machine, current run, leaderboard, storage.
pub struct Game<S: KeyValueStore> {
    config: Config,
    store: S,
    phase: GamePhase,
    run: Option<RunState>,
    scores: ScoreStore,
    final_score: f64,
    new_best: bool,
    /// Time spent on the game-over screen so far (ms)
    lockout_ms: f32,
    next_seed: u64,
}

impl<S: KeyValueStore> Game<S> {
    /// Build a game on the title screen with scores loaded from `store`.
    pub fn new(config: Config, store: S, seed: u64) -> Self {
        let scores = ScoreStore::load(&store, &config);
        Self {
            config,
            store,
            phase: GamePhase::Title,
            run: None,
            scores,
            final_score: 0.0,
            new_best: false,
            lockout_ms: 0.0,
            next_seed: seed,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Handle a host command; invalid phase/command pairs do nothing.
    pub fn handle(&mut self, command: Command) {
        match (command, self.phase) {
            (Command::Start, GamePhase::Title) => self.start_run(),
            (Command::Restart, GamePhase::GameOver) => {
                if self.lockout_ms >= self.config.restart_lockout_ms {
                    self.run = None;
                    self.phase = GamePhase::Title;
                }
            }
            _ => {}
        }
    }

    /// Advance one frame.
    ///
    /// `dt` is clamped to the configured maximum here, before any component
    /// sees it; an unbounded frame hitch could otherwise step an asteroid
    /// clean through the ship.
    pub fn tick(&mut self, dt: f32, input: &InputState) {
        let dt = dt.min(self.config.max_frame_secs);
        match self.phase {
            GamePhase::Title => {}
            GamePhase::Playing => {
                if let Some(run) = &mut self.run
                    && tick(run, input, dt, &self.config) == TickResult::Collided
                {
                    self.end_run();
                }
            }
            GamePhase::GameOver => {
                self.lockout_ms += dt * 1000.0;
                if let Some(run) = &mut self.run {
                    drift(run, dt, &self.config);
                }
            }
        }
    }

    fn start_run(&mut self) {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        self.run = Some(RunState::new(seed, &self.config));
        self.phase = GamePhase::Playing;
        log::info!("run started (seed {seed})");
    }

    fn end_run(&mut self) {
        let elapsed = self
            .run
            .as_ref()
            .map(|run| run.elapsed_secs)
            .unwrap_or(0.0);

        self.scores.add(elapsed);
        self.scores.save(&mut self.store);

        self.final_score = elapsed;
        // Best already includes the committed score, so a tie with the old
        // best still counts as a new best (source behavior, kept on purpose).
        self.new_best = self.scores.best().is_some_and(|best| elapsed >= best);
        self.lockout_ms = 0.0;
        self.phase = GamePhase::GameOver;
        log::info!("run over after {elapsed:.1}s (best {:?})", self.scores.best());
    }

    /// The per-frame read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let run = self.run.as_ref();
        Snapshot {
            phase: self.phase,
            ship: run.map(|r| &r.ship),
            asteroids: run.map(|r| r.asteroids.as_slice()).unwrap_or(&[]),
            surge_active: run.is_some_and(|r| r.surge.is_active()),
            elapsed_secs: run.map(|r| r.elapsed_secs).unwrap_or(0.0),
            best_score: self.scores.best(),
            scores: self.scores.entries(),
            final_score: (self.phase == GamePhase::GameOver).then_some(self.final_score),
            new_best: self.phase == GamePhase::GameOver && self.new_best,
            lockout_elapsed: self.phase == GamePhase::GameOver
                && self.lockout_ms >= self.config.restart_lockout_ms,
        }
    }
}
