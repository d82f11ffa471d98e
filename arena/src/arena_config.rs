use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe_engine::Difficulty;
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

pub const CONFIG_FILE_NAME: &str = "tictactoe_arena.yaml";
pub const MAX_ROUNDS: u32 = 100_000;

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, ArenaConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(CONFIG_FILE_NAME),
    }
}

/// Bot-vs-bot settings. `bot_a` plays X unless `swap_sides` alternates the
/// seats every round.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ArenaConfig {
    pub rounds: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    pub bot_a: Difficulty,
    pub bot_b: Difficulty,
    #[serde(default)]
    pub swap_sides: bool,
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 || self.rounds > MAX_ROUNDS {
            return Err(format!(
                "rounds must be between 1 and {}, got {}",
                MAX_ROUNDS, self.rounds
            ));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            seed: None,
            bot_a: Difficulty::Hard,
            bot_b: Difficulty::Medium,
            swap_sides: true,
        }
    }
}
