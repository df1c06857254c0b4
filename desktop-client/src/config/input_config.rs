use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    /// Plays at the faster touch tick and shows the on-screen arrows.
    pub touch_surface: bool,
    pub swipe_threshold: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            touch_surface: false,
            swipe_threshold: 30.0,
        }
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> Result<(), String> {
        if !(5.0..=200.0).contains(&self.swipe_threshold) {
            return Err("swipe_threshold must be between 5 and 200 pixels".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(InputConfig::default().validate().is_ok());
    }

    #[test]
    fn test_threshold_outside_range_is_rejected() {
        for swipe_threshold in [4.9, 200.5, f32::NAN] {
            let config = InputConfig {
                swipe_threshold,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{swipe_threshold} should be rejected");
        }
    }
}
