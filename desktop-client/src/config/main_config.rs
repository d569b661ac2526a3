use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_common::config::{
    ConfigError, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

use super::{GameConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_default_config_path()),
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::Difficulty;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game.difficulty, Difficulty::Medium);
        assert_eq!(config.game.bot_delay_ms, 350);
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("game:\n  difficulty: Hard\n  bot_delay_ms: 0\n")
            .unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.game.bot_delay_ms, 0);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_too_long_delay_is_invalid() {
        let config = Config {
            game: GameConfig {
                bot_delay_ms: 60_000,
                ..GameConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_difficulty_change_is_persisted() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));

        manager
            .update_config(|config| config.game.difficulty = Difficulty::Easy)
            .unwrap();

        let content = FileContentConfigProvider::new(&file_path)
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(content.contains("difficulty: Easy"));

        let reloaded = get_config_manager(Some(file_path.as_path())).get_config().unwrap();
        assert_eq!(reloaded.game.difficulty, Difficulty::Easy);

        let _ = std::fs::remove_file(&file_path);
    }
}
