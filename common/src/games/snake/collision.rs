use super::snake::Snake;
use super::types::{Cell, CollisionKind, Direction, GridSize};

/// Outcome of one tick, computed without touching the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickDecision {
    pub new_head: Cell,
    pub ate_food: bool,
    pub collision: Option<CollisionKind>,
}

impl TickDecision {
    pub fn collided(&self) -> bool {
        self.collision.is_some()
    }
}

pub fn is_out_of_bounds(cell: Cell, grid: GridSize) -> bool {
    cell.x < 0 || cell.x >= grid.cols || cell.y < 0 || cell.y >= grid.rows
}

pub fn evaluate_tick(snake: &Snake, food: Option<Cell>, direction: Direction, grid: GridSize) -> TickDecision {
    let new_head = snake.advance_head(direction);
    let ate_food = food == Some(new_head);

    let collision = if is_out_of_bounds(new_head, grid) {
        Some(CollisionKind::Wall)
    } else if hits_body(snake, new_head, ate_food) {
        Some(CollisionKind::SelfCollision)
    } else {
        None
    };

    TickDecision {
        new_head,
        ate_food,
        collision,
    }
}

fn hits_body(snake: &Snake, new_head: Cell, ate_food: bool) -> bool {
    // A snake that does not grow vacates its tail this tick, so that cell is free.
    let checked = if ate_food { snake.len() } else { snake.len() - 1 };
    snake.segments().take(checked).any(|segment| *segment == new_head)
}
