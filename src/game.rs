use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{FOOD_REWARD, GameConfig};
use crate::food::spawn_position;
use crate::input::{Direction, direction_change_is_valid};
use crate::score::HighScoreStore;
use crate::snake::{Position, Snake};

const INITIAL_DIRECTION: Direction = Direction::Right;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Playing,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one call to [`Game::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Not playing; nothing happened.
    Skipped,
    Moved,
    Ate,
    Died(DeathReason),
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub snake: &'a Snake,
    pub food: Position,
    pub grid_size: u16,
    pub cell_size: u16,
    pub status: GameStatus,
    pub direction: Direction,
}

/// Game state machine for one process lifetime.
///
/// Owns the board and the score. The high score is loaded once from `store`
/// at construction and written back through it on every increase.
#[derive(Debug)]
pub struct Game<S> {
    config: GameConfig,
    snake: Snake,
    food: Position,
    direction: Direction,
    pending_direction: Direction,
    status: GameStatus,
    score: u32,
    high_score: u32,
    death_reason: Option<DeathReason>,
    tick_count: u64,
    rng: StdRng,
    store: S,
}

impl<S: HighScoreStore> Game<S> {
    /// Creates an idle game with an entropy-seeded food generator.
    #[must_use]
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, store: S, seed: u64) -> Self {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut store: S, mut rng: StdRng) -> Self {
        let high_score = store.load();
        let snake = Snake::initial(config.grid_size);
        let food = spawn_position(&mut rng, config.grid_size, &snake);

        Self {
            config,
            snake,
            food,
            direction: INITIAL_DIRECTION,
            pending_direction: INITIAL_DIRECTION,
            status: GameStatus::Idle,
            score: 0,
            high_score,
            death_reason: None,
            tick_count: 0,
            rng,
            store,
        }
    }

    /// Begins a new round from `Idle` or `GameOver`. Ignored while playing.
    pub fn start(&mut self) {
        if self.status == GameStatus::Playing {
            return;
        }

        self.snake = Snake::initial(self.config.grid_size);
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = INITIAL_DIRECTION;
        self.score = 0;
        self.death_reason = None;
        self.tick_count = 0;
        self.food = spawn_position(&mut self.rng, self.config.grid_size, &self.snake);
        self.status = GameStatus::Playing;

        log::info!("game started on a {0}x{0} grid", self.config.grid_size);
    }

    /// Play-again action; same as [`Game::start`].
    pub fn reset(&mut self) {
        self.start();
    }

    /// Requests a new heading for the next tick.
    ///
    /// Returns `false` and leaves the heading alone when `direction` reverses
    /// the pending one. Between two ticks the last accepted request wins.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.pending_direction, direction) {
            return false;
        }

        self.pending_direction = direction;
        true
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Skipped;
        }

        self.tick_count += 1;
        let candidate = self.snake.head().step(self.pending_direction);

        if !candidate.is_within_bounds(self.config.grid_size) {
            return self.end(DeathReason::WallCollision);
        }

        if self.snake.would_collide(candidate) {
            return self.end(DeathReason::SelfCollision);
        }

        self.direction = self.pending_direction;

        if candidate == self.food {
            self.snake.grow(candidate);
            self.score += FOOD_REWARD;
            if self.score > self.high_score {
                self.high_score = self.score;
                self.store.save(self.high_score);
                log::info!("new high score {}", self.high_score);
            }
            self.food = spawn_position(&mut self.rng, self.config.grid_size, &self.snake);
            return TickOutcome::Ate;
        }

        self.snake.advance(candidate);
        TickOutcome::Moved
    }

    fn end(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        log::info!(
            "game over after {} ticks: {reason:?}, score {}",
            self.tick_count,
            self.score
        );
        TickOutcome::Died(reason)
    }

    /// Replaces the board and resumes play from it.
    ///
    /// For scripted scenarios; score and high score are kept.
    ///
    /// # Panics
    ///
    /// Panics when `food` lies on the snake.
    pub fn set_board(&mut self, snake: Snake, direction: Direction, food: Position) {
        assert!(!snake.occupies(food), "food must not be placed on the snake");
        self.snake = snake;
        self.direction = direction;
        self.pending_direction = direction;
        self.food = food;
        self.death_reason = None;
        self.status = GameStatus::Playing;
    }
}

impl<S> Game<S> {
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.food
    }

    /// Direction used by the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next tick will use.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// True on the game-over screen when this round set the record.
    #[must_use]
    pub fn is_new_high_score(&self) -> bool {
        self.score > 0 && self.score == self.high_score
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            snake: &self.snake,
            food: self.food,
            grid_size: self.config.grid_size,
            cell_size: self.config.cell_size,
            status: self.status,
            direction: self.direction,
        }
    }
}
