mod audio_config;
mod input_config;
mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use audio_config::AudioConfig;
pub use input_config::InputConfig;
pub use main_config::{default_config_path, get_config_manager};
