use serde::{Deserialize, Serialize};
use snake_engine::GameSettings;
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_engine::controller::{MAX_STEP_SPEED, MIN_STEP_SPEED};

pub const DEFAULT_CONFIG_FILE: &str = "snake_runner_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub game: GameSettings,
    pub step_speed: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
}

fn default_show_grid() -> bool {
    true
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if !(MIN_STEP_SPEED..=MAX_STEP_SPEED).contains(&self.step_speed) {
            return Err(format!(
                "step_speed must be between {} and {}",
                MIN_STEP_SPEED, MAX_STEP_SPEED
            ));
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            step_speed: MIN_STEP_SPEED,
            seed: None,
            show_grid: true,
        }
    }
}
