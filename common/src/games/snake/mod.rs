mod collision;
mod food;
mod game_state;
mod geometry;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use collision::{evaluate_tick, is_out_of_bounds, TickDecision};
pub use food::{place_food, Food};
pub use game_state::{GameOverInfo, SnakeGameState, TickOutcome};
pub use geometry::{cell_center, fit_canvas_side, grid_dimensions, to_cell, PixelPoint};
pub use settings::{InputSurface, SnakeSettings};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use types::{Cell, CollisionKind, Direction, FoodKind, GamePhase, GridSize};
