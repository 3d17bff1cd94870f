use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::SessionRng;
use super::engine::GridSimulationEngine;
use super::types::Mode;

pub const MIN_DIMENSION: usize = 2;
pub const MAX_DIMENSION: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub mode: Mode,
}

impl GameSettings {
    pub fn create_engine(&self, rng: SessionRng) -> GridSimulationEngine {
        let mut engine = GridSimulationEngine::new(self.rows, self.cols, rng);
        engine.set_mode(self.mode);
        engine
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.rows) {
            return Err(format!(
                "rows must be between {} and {}",
                MIN_DIMENSION, MAX_DIMENSION
            ));
        }
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.cols) {
            return Err(format!(
                "cols must be between {} and {}",
                MIN_DIMENSION, MAX_DIMENSION
            ));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 30,
            mode: Mode::Bounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_dimension_limits() {
        let too_small = GameSettings {
            rows: 1,
            ..GameSettings::default()
        };
        assert!(too_small.validate().is_err());

        let too_wide = GameSettings {
            cols: 101,
            ..GameSettings::default()
        };
        assert!(too_wide.validate().is_err());
    }

    #[test]
    fn test_mode_defaults_to_bounded_when_missing() {
        let serializer = YamlConfigSerializer::new();
        let settings: GameSettings = serializer.deserialize("rows: 5\ncols: 6\n").unwrap();
        assert_eq!(settings.mode, Mode::Bounded);
        assert_eq!((settings.rows, settings.cols), (5, 6));
    }

    #[test]
    fn test_create_engine_applies_mode() {
        let settings = GameSettings {
            rows: 5,
            cols: 5,
            mode: Mode::Wraparound,
        };
        let engine = settings.create_engine(SessionRng::new(42));
        assert_eq!(engine.mode(), Mode::Wraparound);
        assert_eq!((engine.rows(), engine.cols()), (5, 5));
    }
}
