use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config value. A provider with no stored
/// content yields `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer,
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized)?;

        let mut current = self.config.lock().unwrap_or_else(|e| e.into_inner());
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;
    use crate::config::MemoryContentConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct BotConfig {
        difficulty: Difficulty,
        rounds: u32,
    }

    impl Default for BotConfig {
        fn default() -> Self {
            Self {
                difficulty: Difficulty::Hard,
                rounds: 10,
            }
        }
    }

    impl Validate for BotConfig {
        fn validate(&self) -> Result<(), String> {
            if self.rounds == 0 {
                return Err("rounds must be positive".to_string());
            }
            Ok(())
        }
    }

    fn manager(
        content: Option<&str>,
    ) -> ConfigManager<MemoryContentConfigProvider, BotConfig> {
        ConfigManager::new(
            MemoryContentConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer,
        )
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager = manager(None);

        assert_eq!(manager.get_config().unwrap(), BotConfig::default());
    }

    #[test]
    fn test_reads_yaml_content() {
        let manager = manager(Some("difficulty: medium\nrounds: 3\n"));

        let config = manager.get_config().unwrap();

        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.rounds, 3);
    }

    #[test]
    fn test_invalid_content_rejected() {
        let manager = manager(Some("difficulty: medium\nrounds: 0\n"));

        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let manager = manager(Some("difficulty: [\n"));

        assert!(matches!(
            manager.get_config(),
            Err(ConfigError::Deserialize(_))
        ));
    }

    #[test]
    fn test_set_config_round_trips_through_provider() {
        let manager = manager(None);
        let config = BotConfig {
            difficulty: Difficulty::Easy,
            rounds: 7,
        };

        manager.set_config(&config).unwrap();

        let stored = manager
            .config_content_provider
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(stored.contains("difficulty: easy"));
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_set_config_validates_first() {
        let manager = manager(None);
        let config = BotConfig {
            difficulty: Difficulty::Easy,
            rounds: 0,
        };

        assert!(manager.set_config(&config).is_err());
        assert!(
            manager
                .config_content_provider
                .get_config_content()
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_missing_file_gives_default() {
        let mut path = std::env::temp_dir();
        path.push(format!("tictactoe_missing_{}.yaml", std::process::id()));
        let manager: ConfigManager<_, BotConfig> = ConfigManager::from_yaml_file(path);

        assert_eq!(manager.get_config().unwrap(), BotConfig::default());
    }
}
