use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Validate;
use super::geometry::grid_dimensions;
use super::types::GridSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSurface {
    Desktop,
    Touch,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub cell_size: u32,
    pub canvas_size: u32,
    pub base_tick_interval_ms: u32,
    pub touch_tick_reduction_ms: u32,
    pub min_touch_tick_interval_ms: u32,
    pub score_increment: u32,
    pub food_placement_attempts: usize,
    pub game_over_banner_delay_ms: u32,
    pub direction_starts_game: bool,
}

impl SnakeSettings {
    pub fn grid(&self) -> GridSize {
        grid_dimensions(self.canvas_size as f32, self.canvas_size as f32, self.cell_size as f32)
    }

    /// Touch surfaces play faster, but never below the touch minimum.
    pub fn tick_interval(&self, surface: InputSurface) -> Duration {
        let ms = match surface {
            InputSurface::Desktop => self.base_tick_interval_ms,
            InputSurface::Touch => self
                .base_tick_interval_ms
                .saturating_sub(self.touch_tick_reduction_ms)
                .max(self.min_touch_tick_interval_ms),
        };
        Duration::from_millis(ms as u64)
    }

    pub fn game_over_banner_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_banner_delay_ms as u64)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            cell_size: 20,
            canvas_size: 320,
            base_tick_interval_ms: 500,
            touch_tick_reduction_ms: 100,
            min_touch_tick_interval_ms: 150,
            score_increment: 10,
            food_placement_attempts: 100,
            game_over_banner_delay_ms: 1500,
            direction_starts_game: true,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be greater than 0".to_string());
        }
        let grid = self.grid();
        if grid.cols < 8 || grid.rows < 8 {
            return Err(format!(
                "canvas_size {} with cell_size {} gives a {}x{} grid, at least 8x8 is required",
                self.canvas_size, self.cell_size, grid.cols, grid.rows
            ));
        }
        if !(50..=5000).contains(&self.base_tick_interval_ms) {
            return Err("base_tick_interval_ms must be between 50 and 5000".to_string());
        }
        if !(150..=400).contains(&self.min_touch_tick_interval_ms) {
            return Err("min_touch_tick_interval_ms must be between 150 and 400".to_string());
        }
        if self.score_increment == 0 {
            return Err("score_increment must be at least 1".to_string());
        }
        if self.food_placement_attempts == 0 {
            return Err("food_placement_attempts must be at least 1".to_string());
        }
        if self.game_over_banner_delay_ms > 10_000 {
            return Err("game_over_banner_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}
