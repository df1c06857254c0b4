use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    pub effects_muted: bool,
    pub background_muted: bool,
    pub effects_volume: f32,
    pub background_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            effects_muted: false,
            background_muted: false,
            effects_volume: 0.6,
            background_volume: 0.25,
        }
    }
}

impl Validate for AudioConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.effects_volume) {
            return Err("effects_volume must be between 0 and 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.background_volume) {
            return Err("background_volume must be between 0 and 1".to_string());
        }
        Ok(())
    }
}
