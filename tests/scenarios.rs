use grid_snake::config::GameConfig;
use grid_snake::game::{Game, GameStatus, TickOutcome};
use grid_snake::input::{Arbitration, Direction, GameInput, InputArbiter, Point};
use grid_snake::score::MemoryStore;
use grid_snake::snake::{Position, Snake};

fn game(store: MemoryStore) -> Game<MemoryStore> {
    Game::new_with_seed(GameConfig::default(), store, 42)
}

fn snake(cells: &[(i32, i32)]) -> Snake {
    Snake::from_segments(cells.iter().map(|&(x, y)| Position::new(x, y)).collect())
}

#[test]
fn straight_move_right() {
    let mut game = game(MemoryStore::default());
    game.set_board(
        snake(&[(10, 10), (9, 10), (8, 10)]),
        Direction::Right,
        Position::new(3, 3),
    );

    game.tick();

    assert_eq!(
        game.snake().to_vec(),
        vec![
            Position::new(11, 10),
            Position::new(10, 10),
            Position::new(9, 10)
        ]
    );
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn left_wall_ends_the_game_without_moving() {
    let mut game = game(MemoryStore::default());
    let before = snake(&[(0, 10), (1, 10), (2, 10)]);
    game.set_board(before.clone(), Direction::Left, Position::new(3, 3));

    game.tick();

    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(game.snake(), &before);
}

#[test]
fn eating_food_grows_and_scores() {
    let mut game = game(MemoryStore::default());
    game.set_board(
        snake(&[(5, 5), (5, 6), (5, 7)]),
        Direction::Up,
        Position::new(5, 4),
    );

    assert_eq!(game.tick(), TickOutcome::Ate);

    assert_eq!(game.snake().len(), 4);
    assert_eq!(game.snake().head(), Position::new(5, 4));
    assert_eq!(game.score(), 10);
    assert!(!game.snake().occupies(game.food()));
    assert!(game.food().is_within_bounds(20));
}

#[test]
fn reaching_thirty_over_twenty_saves_once() {
    let mut game = game(MemoryStore::with_high_score(20));
    game.start();

    for _ in 0..3 {
        let head = game.snake().head();
        let body = game.snake().clone();
        game.set_board(body, Direction::Up, head.step(Direction::Up));
        assert_eq!(game.tick(), TickOutcome::Ate);
    }

    assert_eq!(game.score(), 30);
    assert_eq!(game.high_score(), 30);
    assert_eq!(game.store().saves(), &[30]);
}

#[test]
fn reversal_is_checked_against_the_pending_direction() {
    let mut game = game(MemoryStore::default());
    game.set_board(
        snake(&[(10, 10), (10, 11), (10, 12)]),
        Direction::Up,
        Position::new(0, 0),
    );

    assert!(!game.set_direction(Direction::Down));
    assert!(game.set_direction(Direction::Left));
    // Right reverses the pending Left even though the snake still faces Up.
    assert!(!game.set_direction(Direction::Right));
    assert_eq!(game.pending_direction(), Direction::Left);

    game.tick();
    assert_eq!(game.snake().head(), Position::new(9, 10));
    assert_eq!(game.direction(), Direction::Left);
}

#[test]
fn last_accepted_direction_wins_the_tick() {
    let mut game = game(MemoryStore::default());
    game.set_board(
        snake(&[(10, 10), (10, 11), (10, 12)]),
        Direction::Up,
        Position::new(0, 0),
    );

    assert!(game.set_direction(Direction::Left));
    assert!(game.set_direction(Direction::Up));

    game.tick();
    assert_eq!(game.snake().head(), Position::new(10, 9));
}

#[test]
fn start_twice_matches_start_once() {
    let mut once = game(MemoryStore::default());
    once.start();

    let mut twice = game(MemoryStore::default());
    twice.start();
    twice.start();

    assert_eq!(once.snake(), twice.snake());
    assert_eq!(once.pending_direction(), twice.pending_direction());
    assert_eq!(once.score(), twice.score());
    assert_eq!(once.status(), twice.status());
}

#[test]
fn every_input_source_respects_the_reversal_rule() {
    let mut game = game(MemoryStore::default());
    let mut arbiter = InputArbiter::default();
    game.start();

    let reversals = [
        GameInput::Key(Direction::Left),
        GameInput::Pad(Direction::Left),
    ];
    for input in reversals {
        assert_eq!(
            arbiter.apply(&mut game, input),
            Arbitration::Rejected(Direction::Left)
        );
    }

    arbiter.apply(&mut game, GameInput::SwipeStart(Point { x: 200, y: 100 }));
    assert_eq!(
        arbiter.apply(&mut game, GameInput::SwipeEnd(Point { x: 100, y: 110 })),
        Arbitration::Rejected(Direction::Left)
    );
    assert_eq!(game.pending_direction(), Direction::Right);
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let config = GameConfig {
        grid_size: 6,
        ..GameConfig::default()
    };
    let mut game = Game::new_with_seed(config, MemoryStore::default(), 7);
    game.set_board(
        snake(&[(2, 1), (1, 1), (0, 1)]),
        Direction::Right,
        Position::new(3, 1),
    );

    assert_eq!(game.tick(), TickOutcome::Ate);
    assert_eq!(game.snake().len(), 4);

    assert!(game.set_direction(Direction::Up));
    game.tick();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.snake().head(), Position::new(3, 0));

    game.tick();
    assert_eq!(game.status(), GameStatus::GameOver);
}
