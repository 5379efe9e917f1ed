use crate::config::MIN_SWIPE_DISTANCE;
use crate::game::{Game, GameStatus};
use crate::score::HighScoreStore;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Pointer coordinates in pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Raw input events from every control surface.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    /// One of the four arrow keys.
    Key(Direction),
    /// Pointer pressed; a swipe may follow.
    SwipeStart(Point),
    /// Pointer released; completes a swipe.
    SwipeEnd(Point),
    /// On-screen directional pad button.
    Pad(Direction),
    /// Start / play-again button.
    Confirm,
    Quit,
}

/// What the arbiter did with one input event.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Arbitration {
    Started,
    Steered(Direction),
    Rejected(Direction),
    Ignored,
}

/// Whether direction widgets should forward input for `status`.
#[must_use]
pub fn controls_enabled(status: GameStatus) -> bool {
    status == GameStatus::Playing
}

/// Resolves a drag into a direction.
///
/// Returns `None` when neither axis reaches `min_distance`. The axis with the
/// larger absolute delta wins; equal deltas count as vertical.
#[must_use]
pub fn swipe_direction(start: Point, end: Point, min_distance: i32) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() < min_distance && dy.abs() < min_distance {
        return None;
    }

    if dx.abs() > dy.abs() {
        Some(if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

/// Funnels keyboard, swipe and pad input into the engine.
#[derive(Debug, Clone)]
pub struct InputArbiter {
    swipe_start: Option<Point>,
    min_swipe_distance: i32,
}

impl Default for InputArbiter {
    fn default() -> Self {
        Self::new(MIN_SWIPE_DISTANCE)
    }
}

impl InputArbiter {
    #[must_use]
    pub fn new(min_swipe_distance: i32) -> Self {
        Self {
            swipe_start: None,
            min_swipe_distance,
        }
    }

    /// Applies one input event to `game`.
    pub fn apply<S: HighScoreStore>(&mut self, game: &mut Game<S>, input: GameInput) -> Arbitration {
        match input {
            GameInput::Key(direction) => self.key(game, direction),
            GameInput::SwipeStart(point) => {
                if controls_enabled(game.status()) {
                    self.swipe_start = Some(point);
                }
                Arbitration::Ignored
            }
            GameInput::SwipeEnd(point) => self.swipe_end(game, point),
            GameInput::Pad(direction) => {
                if controls_enabled(game.status()) {
                    steer(game, direction)
                } else {
                    Arbitration::Ignored
                }
            }
            GameInput::Confirm => match game.status() {
                GameStatus::Idle => {
                    game.start();
                    Arbitration::Started
                }
                GameStatus::GameOver => {
                    game.reset();
                    Arbitration::Started
                }
                GameStatus::Playing => Arbitration::Ignored,
            },
            GameInput::Quit => Arbitration::Ignored,
        }
    }

    fn key<S: HighScoreStore>(&mut self, game: &mut Game<S>, direction: Direction) -> Arbitration {
        match game.status() {
            GameStatus::Idle => {
                game.start();
                Arbitration::Started
            }
            GameStatus::Playing => steer(game, direction),
            GameStatus::GameOver => Arbitration::Ignored,
        }
    }

    fn swipe_end<S: HighScoreStore>(&mut self, game: &mut Game<S>, end: Point) -> Arbitration {
        let Some(start) = self.swipe_start.take() else {
            return Arbitration::Ignored;
        };
        if !controls_enabled(game.status()) {
            return Arbitration::Ignored;
        }

        match swipe_direction(start, end, self.min_swipe_distance) {
            Some(direction) => steer(game, direction),
            None => Arbitration::Ignored,
        }
    }
}

fn steer<S: HighScoreStore>(game: &mut Game<S>, direction: Direction) -> Arbitration {
    if game.set_direction(direction) {
        Arbitration::Steered(direction)
    } else {
        Arbitration::Rejected(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Arbitration, Direction, GameInput, InputArbiter, Point, direction_change_is_valid,
        swipe_direction,
    };
    use crate::config::GameConfig;
    use crate::game::{Game, GameStatus};
    use crate::score::MemoryStore;

    fn idle_game() -> Game<MemoryStore> {
        Game::new_with_seed(GameConfig::default(), MemoryStore::default(), 9)
    }

    fn point(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_is_not_a_valid_change() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Right, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn swipe_below_threshold_is_discarded() {
        assert_eq!(swipe_direction(point(0, 0), point(29, -29), 30), None);
        assert_eq!(swipe_direction(point(0, 0), point(30, 0), 30), Some(Direction::Right));
    }

    #[test]
    fn swipe_uses_dominant_axis_and_sign() {
        assert_eq!(swipe_direction(point(100, 100), point(40, 80), 30), Some(Direction::Left));
        assert_eq!(swipe_direction(point(100, 100), point(90, 160), 30), Some(Direction::Down));
        assert_eq!(swipe_direction(point(100, 100), point(110, 20), 30), Some(Direction::Up));
        assert_eq!(swipe_direction(point(0, 0), point(40, 40), 30), Some(Direction::Down));
    }

    #[test]
    fn arrow_key_while_idle_starts_without_steering() {
        let mut game = idle_game();
        let mut arbiter = InputArbiter::default();

        let outcome = arbiter.apply(&mut game, GameInput::Key(Direction::Up));

        assert_eq!(outcome, Arbitration::Started);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.pending_direction(), Direction::Right);
    }

    #[test]
    fn arrow_key_while_playing_steers() {
        let mut game = idle_game();
        let mut arbiter = InputArbiter::default();
        game.start();

        assert_eq!(
            arbiter.apply(&mut game, GameInput::Key(Direction::Up)),
            Arbitration::Steered(Direction::Up)
        );
        assert_eq!(
            arbiter.apply(&mut game, GameInput::Key(Direction::Down)),
            Arbitration::Rejected(Direction::Down)
        );
        assert_eq!(game.pending_direction(), Direction::Up);
    }

    #[test]
    fn keys_are_ignored_after_game_over() {
        let mut game = idle_game();
        let mut arbiter = InputArbiter::default();
        game.start();
        while game.status() == GameStatus::Playing {
            game.tick();
        }

        assert_eq!(
            arbiter.apply(&mut game, GameInput::Key(Direction::Up)),
            Arbitration::Ignored
        );
        assert_eq!(game.status(), GameStatus::GameOver);

        assert_eq!(arbiter.apply(&mut game, GameInput::Confirm), Arbitration::Started);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn pad_is_disabled_unless_playing() {
        let mut game = idle_game();
        let mut arbiter = InputArbiter::default();

        assert_eq!(
            arbiter.apply(&mut game, GameInput::Pad(Direction::Up)),
            Arbitration::Ignored
        );
        assert_eq!(game.status(), GameStatus::Idle);

        game.start();
        assert_eq!(
            arbiter.apply(&mut game, GameInput::Pad(Direction::Down)),
            Arbitration::Steered(Direction::Down)
        );
        assert_eq!(
            arbiter.apply(&mut game, GameInput::Pad(Direction::Up)),
            Arbitration::Rejected(Direction::Up)
        );
    }

    #[test]
    fn swipe_steers_only_while_playing() {
        let mut game = idle_game();
        let mut arbiter = InputArbiter::default();

        arbiter.apply(&mut game, GameInput::SwipeStart(point(0, 0)));
        assert_eq!(
            arbiter.apply(&mut game, GameInput::SwipeEnd(point(0, -80))),
            Arbitration::Ignored
        );
        assert_eq!(game.status(), GameStatus::Idle);

        game.start();
        arbiter.apply(&mut game, GameInput::SwipeStart(point(0, 0)));
        assert_eq!(
            arbiter.apply(&mut game, GameInput::SwipeEnd(point(5, -80))),
            Arbitration::Steered(Direction::Up)
        );

        arbiter.apply(&mut game, GameInput::SwipeStart(point(0, 0)));
        assert_eq!(
            arbiter.apply(&mut game, GameInput::SwipeEnd(point(10, 10))),
            Arbitration::Ignored
        );
        assert_eq!(game.pending_direction(), Direction::Up);
    }

    #[test]
    fn swipe_end_without_start_is_ignored() {
        let mut game = idle_game();
        let mut arbiter = InputArbiter::default();
        game.start();

        assert_eq!(
            arbiter.apply(&mut game, GameInput::SwipeEnd(point(0, -80))),
            Arbitration::Ignored
        );
    }

    #[test]
    fn confirm_is_ignored_while_playing() {
        let mut game = idle_game();
        let mut arbiter = InputArbiter::default();
        game.start();
        game.tick();
        let snake_before = game.snake().clone();

        assert_eq!(arbiter.apply(&mut game, GameInput::Confirm), Arbitration::Ignored);
        assert_eq!(game.snake(), &snake_before);
    }
}
