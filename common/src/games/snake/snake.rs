use std::collections::VecDeque;

use super::types::{Cell, Direction};

/// Body segments, head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A straight snake of `length` cells whose head is `head`, trailing
    /// away from `direction`.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| Cell::new(head.x - dx * i, head.y - dy * i))
            .collect();
        Self { body }
    }

    /// Builds a snake from explicit cells, head first. Empty input yields `None`.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn advance_head(&self, direction: Direction) -> Cell {
        self.head().step(direction)
    }

    /// The only way the snake's shape changes.
    pub fn grow_or_slide(&mut self, new_head: Cell, ate_food: bool) {
        self.body.push_front(new_head);
        if !ate_food {
            self.body.pop_back();
        }
    }

    pub fn to_vec(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
        raw.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_new_trails_behind_head() {
        let snake = Snake::new(Cell::new(5, 10), Direction::Right, 3);
        assert_eq!(snake.to_vec(), cells(&[(5, 10), (4, 10), (3, 10)]));
        assert_eq!(snake.head(), Cell::new(5, 10));
        assert_eq!(snake.tail(), Cell::new(3, 10));
    }

    #[test]
    fn test_from_cells_rejects_empty() {
        assert!(Snake::from_cells(Vec::new()).is_none());
    }

    #[test]
    fn test_advance_head_does_not_mutate() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Up, 3);
        let before = snake.clone();
        assert_eq!(snake.advance_head(Direction::Left), Cell::new(4, 5));
        assert_eq!(snake, before);
    }

    #[test]
    fn test_slide_keeps_length() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        snake.grow_or_slide(Cell::new(6, 5), false);
        assert_eq!(snake.to_vec(), cells(&[(6, 5), (5, 5), (4, 5)]));
    }

    #[test]
    fn test_grow_adds_one_segment() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        snake.grow_or_slide(Cell::new(6, 5), true);
        assert_eq!(snake.to_vec(), cells(&[(6, 5), (5, 5), (4, 5), (3, 5)]));
    }
}
