use common::config::Validate;
use common::games::snake::SnakeSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{AudioConfig, ConfigManager, FileContentConfigProvider, InputConfig, YamlConfigSerializer};

const CONFIG_FILE: &str = "kids_snake_config.yaml";

/// Config file next to the executable, falling back to the working directory.
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

pub fn get_config_manager(path: &Path) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub game: SnakeSettings,
    pub audio: AudioConfig,
    pub input: InputConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.audio.validate()?;
        self.input.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer, MemoryContentConfigProvider};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_kids_snake_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let path = get_temp_file_path();
        let manager = get_config_manager(&path);
        let config = Config {
            audio: AudioConfig {
                background_muted: true,
                ..AudioConfig::default()
            },
            ..Config::default()
        };

        manager.set_config(&config).unwrap();
        let reloaded = get_config_manager(&path).get_config().unwrap();
        assert_eq!(config, reloaded);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager = get_config_manager(Path::new("this_kids_snake_config_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let provider = MemoryContentConfigProvider::with_content("game:\n  base_tick_interval_ms: 300\n");
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(provider, YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();
        assert_eq!(config.game.base_tick_interval_ms, 300);
        assert_eq!(config.game.cell_size, 20);
        assert_eq!(config.audio, AudioConfig::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let provider = MemoryContentConfigProvider::default();
        provider
            .set_config_content("audio:\n  effects_volume: 3.5\n")
            .unwrap();
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_serialized_config_mentions_every_section() {
        let text = YamlConfigSerializer::new().serialize(&Config::default()).unwrap();
        assert!(text.contains("game:"));
        assert!(text.contains("audio:"));
        assert!(text.contains("input:"));
    }
}
