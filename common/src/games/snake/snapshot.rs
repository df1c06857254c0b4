use super::food::Food;
use super::types::{Cell, Direction, GamePhase, GridSize};

/// Read-only copy of the game handed to renderers after a tick completes.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub grid: GridSize,
    pub snake: Vec<Cell>,
    pub food: Option<Food>,
    pub score: u32,
    pub direction: Direction,
    pub collision_point: Option<Cell>,
    pub show_game_over_banner: bool,
    pub tick: u64,
    pub round: u32,
}

impl GameSnapshot {
    pub fn idle(grid: GridSize) -> Self {
        Self {
            phase: GamePhase::Idle,
            grid,
            snake: Vec::new(),
            food: None,
            score: 0,
            direction: Direction::Right,
            collision_point: None,
            show_game_over_banner: false,
            tick: 0,
            round: 0,
        }
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
