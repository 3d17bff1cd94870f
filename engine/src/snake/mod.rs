mod body;
mod engine;
mod grid;
mod open_cells;
mod settings;
mod types;

pub use body::Snake;
pub use engine::GridSimulationEngine;
pub use grid::GridSnapshot;
pub use settings::{GameSettings, MAX_DIMENSION, MIN_DIMENSION};
pub use types::{Cell, DeathReason, Direction, GameOver, Mode, Position};
