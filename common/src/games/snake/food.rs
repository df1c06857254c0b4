use crate::games::SessionRng;
use crate::log;
use super::snake::Snake;
use super::types::{Cell, FoodKind, GridSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
}

/// Uniform random free cell. After `max_attempts` misses, falls back to the
/// first free cell in row-major order. `None` only when the snake covers the
/// whole grid.
pub fn place_food(snake: &Snake, grid: GridSize, max_attempts: usize, rng: &mut SessionRng) -> Option<Cell> {
    if grid.cols <= 0 || grid.rows <= 0 {
        return None;
    }

    for _ in 0..max_attempts {
        let cell = Cell::new(rng.random_range(0..grid.cols), rng.random_range(0..grid.rows));
        if !snake.occupies(cell) {
            return Some(cell);
        }
    }

    let fallback = grid.cells().find(|cell| !snake.occupies(*cell));
    log!(
        "Food placement missed {} times (snake length {}), scan picked {:?}",
        max_attempts,
        snake.len(),
        fallback
    );
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::Direction;

    #[test]
    fn test_food_never_lands_on_snake() {
        let snake = Snake::new(Cell::new(5, 10), Direction::Right, 3);
        let grid = GridSize::new(16, 16);
        let mut rng = SessionRng::new(3);
        for _ in 0..500 {
            let cell = place_food(&snake, grid, 100, &mut rng).unwrap();
            assert!(grid.contains(cell));
            assert!(!snake.occupies(cell));
        }
    }

    #[test]
    fn test_fallback_scan_finds_the_only_free_cell() {
        let grid = GridSize::new(3, 3);
        let free = Cell::new(2, 2);
        let snake = Snake::from_cells(grid.cells().filter(|c| *c != free)).unwrap();
        let mut rng = SessionRng::new(11);
        assert_eq!(place_food(&snake, grid, 0, &mut rng), Some(free));
        assert_eq!(place_food(&snake, grid, 5, &mut rng), Some(free));
    }

    #[test]
    fn test_saturated_grid_has_no_food() {
        let grid = GridSize::new(2, 2);
        let snake = Snake::from_cells(grid.cells()).unwrap();
        let mut rng = SessionRng::new(5);
        assert_eq!(place_food(&snake, grid, 10, &mut rng), None);
    }
}
