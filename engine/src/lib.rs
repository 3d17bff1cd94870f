pub mod config;
pub mod controller;
pub mod logger;
pub mod session_rng;
pub mod snake;

pub use controller::{GameController, GameState, StepOutcome, StepReport};
pub use session_rng::SessionRng;
pub use snake::{
    Cell, DeathReason, Direction, GameOver, GameSettings, GridSimulationEngine, GridSnapshot,
    Mode, Position,
};
