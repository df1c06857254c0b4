use crate::games::SessionRng;
use crate::log;
use super::collision::evaluate_tick;
use super::food::{place_food, Food};
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::snapshot::GameSnapshot;
use super::types::{Cell, CollisionKind, Direction, FoodKind, GamePhase, GridSize};

const INITIAL_HEAD: Cell = Cell::new(5, 10);
const INITIAL_LENGTH: usize = 3;
const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverInfo {
    pub collision_point: Cell,
    pub reason: CollisionKind,
    pub final_score: u32,
    /// Tick on which the round ended.
    pub tick: u64,
    pub banner_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NotRunning,
    Moved,
    AteFood { at: Cell, score: u32 },
    GameOver(GameOverInfo),
}

pub struct SnakeGameState {
    phase: GamePhase,
    grid: GridSize,
    snake: Option<Snake>,
    food: Option<Food>,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
    tick: u64,
    round: u32,
    game_over: Option<GameOverInfo>,
    score_increment: u32,
    food_placement_attempts: usize,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings) -> Self {
        Self {
            phase: GamePhase::Idle,
            grid: settings.grid(),
            snake: None,
            food: None,
            direction: INITIAL_DIRECTION,
            pending_direction: INITIAL_DIRECTION,
            score: 0,
            tick: 0,
            round: 0,
            game_over: None,
            score_increment: settings.score_increment,
            food_placement_attempts: settings.food_placement_attempts,
        }
    }

    /// Idle/GameOver -> Running. Ignored while a round is already running.
    pub fn start(&mut self, rng: &mut SessionRng) -> bool {
        if self.phase == GamePhase::Running {
            return false;
        }

        let snake = Snake::new(self.initial_head(), INITIAL_DIRECTION, INITIAL_LENGTH);
        self.food = Self::spawn_food(&snake, self.grid, self.food_placement_attempts, rng);
        self.snake = Some(snake);
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = INITIAL_DIRECTION;
        self.score = 0;
        self.tick = 0;
        self.game_over = None;
        self.round += 1;
        self.phase = GamePhase::Running;

        log!(
            "Round {} started on a {}x{} grid, food at {:?}",
            self.round,
            self.grid.cols,
            self.grid.rows,
            self.food.map(|f| f.cell)
        );
        true
    }

    /// Buffers a turn for the next tick. A 180° turn against the committed
    /// direction is dropped silently.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Running || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::NotRunning;
        }

        self.direction = self.pending_direction;

        let Some(snake) = self.snake.as_mut() else {
            return TickOutcome::NotRunning;
        };

        let decision = evaluate_tick(snake, self.food.map(|f| f.cell), self.direction, self.grid);
        self.tick += 1;

        if let Some(reason) = decision.collision {
            let info = GameOverInfo {
                collision_point: decision.new_head,
                reason,
                final_score: self.score,
                tick: self.tick,
                banner_visible: false,
            };
            self.phase = GamePhase::GameOver;
            self.game_over = Some(info);
            log!(
                "Round {} over: {:?} at ({}, {}), score {}",
                self.round,
                reason,
                decision.new_head.x,
                decision.new_head.y,
                self.score
            );
            return TickOutcome::GameOver(info);
        }

        snake.grow_or_slide(decision.new_head, decision.ate_food);

        if !decision.ate_food {
            return TickOutcome::Moved;
        }

        self.score += self.score_increment;
        self.food = Self::spawn_food(snake, self.grid, self.food_placement_attempts, rng);
        log!(
            "Ate food at ({}, {}). Score: {}",
            decision.new_head.x,
            decision.new_head.y,
            self.score
        );
        TickOutcome::AteFood {
            at: decision.new_head,
            score: self.score,
        }
    }

    /// Marks the game-over banner as due. Only meaningful once per round.
    pub fn reveal_game_over_banner(&mut self) -> bool {
        match self.game_over.as_mut() {
            Some(info) if self.phase == GamePhase::GameOver && !info.banner_visible => {
                info.banner_visible = true;
                true
            }
            _ => false,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            grid: self.grid,
            snake: self.snake.as_ref().map(Snake::to_vec).unwrap_or_default(),
            food: self.food,
            score: self.score,
            direction: self.direction,
            collision_point: self.game_over.map(|info| info.collision_point),
            show_game_over_banner: self.game_over.is_some_and(|info| info.banner_visible),
            tick: self.tick,
            round: self.round,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn snake(&self) -> Option<&Snake> {
        self.snake.as_ref()
    }

    pub fn food(&self) -> Option<Food> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn game_over(&self) -> Option<GameOverInfo> {
        self.game_over
    }

    fn initial_head(&self) -> Cell {
        Cell::new(
            INITIAL_HEAD.x.min(self.grid.cols - 1),
            INITIAL_HEAD.y.min(self.grid.rows - 1),
        )
    }

    fn spawn_food(snake: &Snake, grid: GridSize, attempts: usize, rng: &mut SessionRng) -> Option<Food> {
        let cell = place_food(snake, grid, attempts, rng)?;
        let kind = *rng.pick(&FoodKind::ALL)?;
        Some(Food { cell, kind })
    }

    #[cfg(test)]
    fn place_snake(&mut self, snake: Snake, direction: Direction) {
        self.snake = Some(snake);
        self.direction = direction;
        self.pending_direction = direction;
    }

    #[cfg(test)]
    fn place_food_at(&mut self, cell: Cell) {
        self.food = Some(Food {
            cell,
            kind: FoodKind::Apple,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn create_state() -> (SnakeGameState, SessionRng) {
        (SnakeGameState::new(&SnakeSettings::default()), SessionRng::new(42))
    }

    fn running_state() -> (SnakeGameState, SessionRng) {
        let (mut state, mut rng) = create_state();
        assert!(state.start(&mut rng));
        (state, rng)
    }

    fn snake(raw: &[(i32, i32)]) -> Snake {
        Snake::from_cells(raw.iter().map(|&(x, y)| Cell::new(x, y))).unwrap()
    }

    #[test]
    fn test_new_state_is_idle() {
        let (mut state, mut rng) = create_state();
        assert_eq!(state.phase(), GamePhase::Idle);
        assert!(state.snake().is_none());
        assert!(state.food().is_none());
        assert_eq!(state.tick(&mut rng), TickOutcome::NotRunning);
        assert!(!state.request_direction(Direction::Up));
    }

    #[test]
    fn test_start_builds_initial_round() {
        let (state, _) = running_state();
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(
            state.snake().unwrap().to_vec(),
            vec![Cell::new(5, 10), Cell::new(4, 10), Cell::new(3, 10)]
        );
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.pending_direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.round(), 1);
        let food = state.food().unwrap();
        assert!(!state.snake().unwrap().occupies(food.cell));
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let (mut state, mut rng) = running_state();
        state.tick(&mut rng);
        let tick_before = state.tick_count();
        assert!(!state.start(&mut rng));
        assert_eq!(state.tick_count(), tick_before);
        assert_eq!(state.round(), 1);
    }

    #[test]
    fn test_reversal_leaves_pending_unchanged() {
        let (mut state, _) = running_state();
        assert!(!state.request_direction(Direction::Left));
        assert_eq!(state.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_direction_commits_at_tick_boundary() {
        let (mut state, mut rng) = running_state();
        state.place_food_at(Cell::new(0, 0));
        assert!(state.request_direction(Direction::Up));
        assert_eq!(state.direction(), Direction::Right);
        state.tick(&mut rng);
        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.snake().unwrap().head(), Cell::new(5, 9));
    }

    #[test]
    fn test_two_turns_in_one_tick_cannot_reverse() {
        let (mut state, mut rng) = running_state();
        state.place_food_at(Cell::new(0, 0));
        // Up is accepted, Left is checked against the committed Right and dropped.
        assert!(state.request_direction(Direction::Up));
        assert!(!state.request_direction(Direction::Left));
        assert_eq!(state.tick(&mut rng), TickOutcome::Moved);
        assert_eq!(state.snake().unwrap().head(), Cell::new(5, 9));
    }

    #[test]
    fn test_slide_keeps_length_and_eating_grows() {
        let (mut state, mut rng) = running_state();
        state.place_food_at(Cell::new(0, 0));
        assert_eq!(state.tick(&mut rng), TickOutcome::Moved);
        assert_eq!(state.snake().unwrap().len(), 3);

        state.place_food_at(Cell::new(7, 10));
        let outcome = state.tick(&mut rng);
        assert_eq!(outcome, TickOutcome::AteFood { at: Cell::new(7, 10), score: 10 });
        assert_eq!(state.snake().unwrap().len(), 4);
        assert_eq!(state.score(), 10);
        assert_eq!(state.snapshot().score, 10);
        let food = state.food().unwrap();
        assert!(!state.snake().unwrap().occupies(food.cell));
    }

    #[test]
    fn test_wall_collision_ends_round() {
        let (mut state, mut rng) = running_state();
        state.place_snake(snake(&[(15, 5), (14, 5), (13, 5)]), Direction::Right);
        state.place_food_at(Cell::new(0, 0));
        let before = state.snake().unwrap().clone();

        let outcome = state.tick(&mut rng);
        let TickOutcome::GameOver(info) = outcome else {
            panic!("expected game over, got {:?}", outcome);
        };
        assert_eq!(info.collision_point, Cell::new(16, 5));
        assert_eq!(info.reason, CollisionKind::Wall);
        assert!(!info.banner_visible);
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.snake().unwrap(), &before);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.collision_point, Some(Cell::new(16, 5)));
        assert!(!snapshot.show_game_over_banner);
        assert_eq!(state.tick(&mut rng), TickOutcome::NotRunning);
    }

    #[test]
    fn test_self_collision_ends_round() {
        let (mut state, mut rng) = running_state();
        state.place_snake(snake(&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]), Direction::Left);
        state.place_food_at(Cell::new(0, 0));
        assert!(state.request_direction(Direction::Down));
        let outcome = state.tick(&mut rng);
        assert!(matches!(
            outcome,
            TickOutcome::GameOver(GameOverInfo { reason: CollisionKind::SelfCollision, .. })
        ));
    }

    #[test]
    fn test_banner_is_revealed_once() {
        let (mut state, mut rng) = running_state();
        assert!(!state.reveal_game_over_banner());
        state.place_snake(snake(&[(15, 5), (14, 5)]), Direction::Right);
        state.tick(&mut rng);
        assert!(state.reveal_game_over_banner());
        assert!(!state.reveal_game_over_banner());
        assert!(state.snapshot().show_game_over_banner);
    }

    #[test]
    fn test_restart_after_game_over_rebuilds_everything() {
        let (mut state, mut rng) = running_state();
        state.place_snake(snake(&[(15, 5), (14, 5)]), Direction::Right);
        state.place_food_at(Cell::new(0, 0));
        state.tick(&mut rng);
        assert_eq!(state.phase(), GamePhase::GameOver);

        assert!(state.start(&mut rng));
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.snake().unwrap().head(), Cell::new(5, 10));
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_count(), 0);
        assert!(state.game_over().is_none());
        assert_eq!(state.snapshot().collision_point, None);
        assert_eq!(state.round(), 2);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut state = SnakeGameState::new(&SnakeSettings::default());
        let mut rng = SessionRng::new(2024);
        let mut inputs = SessionRng::new(99);

        for _ in 0..20 {
            state.start(&mut rng);
            while state.is_running() {
                let direction = Direction::ALL[inputs.random_range(0..4)];
                let pending_before = state.pending_direction();
                let accepted = state.request_direction(direction);
                if direction.is_opposite(&state.direction()) {
                    assert!(!accepted);
                    assert_eq!(state.pending_direction(), pending_before);
                }

                let len_before = state.snake().unwrap().len();
                let outcome = state.tick(&mut rng);
                let snake = state.snake().unwrap();
                match outcome {
                    TickOutcome::AteFood { .. } => assert_eq!(snake.len(), len_before + 1),
                    TickOutcome::Moved => assert_eq!(snake.len(), len_before),
                    TickOutcome::GameOver(_) => break,
                    TickOutcome::NotRunning => unreachable!(),
                }

                let distinct: HashSet<Cell> = snake.segments().copied().collect();
                assert_eq!(distinct.len(), snake.len());
                if let Some(food) = state.food() {
                    assert!(!snake.occupies(food.cell));
                }
                assert!(snake.segments().all(|c| state.grid().contains(*c)));
            }
        }
    }
}
