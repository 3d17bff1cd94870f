use std::time::Duration;

use crate::log;
use crate::snake::{Direction, GameOver, GridSimulationEngine, GridSnapshot, Mode};

pub const DEFAULT_STEP_TIME: Duration = Duration::from_millis(500);
pub const MIN_STEP_SPEED: u32 = 1;
pub const MAX_STEP_SPEED: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Initial,
    Playing,
    Paused,
    Ended,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    pub snapshot: GridSnapshot,
    pub score: u32,
    pub ticks: u64,
    pub elapsed: Duration,
    pub points_per_second: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    Advanced(StepReport),
    GameOver(GameOver),
}

/// Owns an engine and the play/pause lifecycle around it. Time here is
/// simulated: every successful step adds one step time to `elapsed`.
pub struct GameController {
    engine: GridSimulationEngine,
    state: GameState,
    step_speed: u32,
    ticks: u64,
    elapsed: Duration,
}

impl GameController {
    pub fn new(engine: GridSimulationEngine) -> Self {
        Self {
            engine,
            state: GameState::Initial,
            step_speed: MIN_STEP_SPEED,
            ticks: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn start(&mut self) {
        if matches!(self.state, GameState::Initial | GameState::Paused) {
            self.state = GameState::Playing;
            log!("Start simulation");
        }
    }

    pub fn pause(&mut self) {
        if self.state == GameState::Playing {
            self.state = GameState::Paused;
            log!("Pause simulation");
        }
    }

    pub fn reset(&mut self) {
        self.pause();
        self.engine.reset();
        self.state = GameState::Initial;
        self.ticks = 0;
        self.elapsed = Duration::ZERO;
        log!("Reset simulation");
    }

    pub fn turn(&mut self, direction: Direction) {
        self.engine.set_direction(direction);
    }

    pub fn toggle_wraparound(&mut self) -> Mode {
        let mode = self.engine.toggle_mode();
        log!("Wraparound {}", if mode == Mode::Wraparound { "on" } else { "off" });
        mode
    }

    /// Speeds outside `1..=10` are clamped.
    pub fn set_step_speed(&mut self, speed: u32) {
        self.step_speed = speed.clamp(MIN_STEP_SPEED, MAX_STEP_SPEED);
        log!(
            "Step speed: {} ({} ms per step)",
            self.step_speed,
            self.step_time().as_millis()
        );
    }

    pub fn step_time(&self) -> Duration {
        DEFAULT_STEP_TIME / self.step_speed
    }

    /// Runs one engine tick. Does nothing unless the game is playing.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.state != GameState::Playing {
            return None;
        }

        match self.engine.advance() {
            Ok(snapshot) => {
                self.ticks += 1;
                self.elapsed += self.step_time();
                Some(StepOutcome::Advanced(StepReport {
                    score: snapshot.score(),
                    snapshot,
                    ticks: self.ticks,
                    elapsed: self.elapsed,
                    points_per_second: self.points_per_second(),
                }))
            }
            Err(game_over) => {
                self.state = GameState::Ended;
                Some(StepOutcome::GameOver(game_over))
            }
        }
    }

    pub fn points_per_second(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds == 0.0 {
            0.0
        } else {
            f64::from(self.engine.score()) / seconds
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn step_speed(&self) -> u32 {
        self.step_speed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn engine(&self) -> &GridSimulationEngine {
        &self.engine
    }
}
