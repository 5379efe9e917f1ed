use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS, GameConfig,
};
use grid_snake::controls;
use grid_snake::game::{Game, GameStatus};
use grid_snake::input::GameInput;
use grid_snake::renderer;
use grid_snake::scheduler::IntervalScheduler;
use grid_snake::score::{JsonFileStore, scores_path};
use grid_snake::session::Session;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::ui::hud::HudInfo;
use grid_snake::ui::layout::ScreenLayout;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const LOG_FILE_NAME: &str = "grid-snake.log";

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Cells per side of the square board.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u16,

    /// Pixel size of one cell; sets the on-screen cell width and swipe scale.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u16,

    /// Milliseconds between snake moves.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_interval_ms: u64,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// High score file [default: per-user data directory].
    #[arg(long)]
    scores_file: Option<PathBuf>,

    /// Log file [default: next to the high score file].
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            grid_size: self.grid_size,
            cell_size: self.cell_size,
            tick_interval_ms: self.tick_interval_ms,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = cli.game_config();
    if let Err(error) = config.validate() {
        eprintln!("grid-snake: {error}");
        process::exit(2);
    }

    let scores_file = cli.scores_file.clone().unwrap_or_else(scores_path);
    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| scores_file.with_file_name(LOG_FILE_NAME));
    if let Err(error) = init_logging(&log_file) {
        eprintln!(
            "grid-snake: logging disabled, cannot open {}: {error}",
            log_file.display()
        );
    }

    let store = JsonFileStore::new(scores_file);
    let game = match cli.seed {
        Some(seed) => Game::new_with_seed(config, store, seed),
        None => Game::new(config, store),
    };
    log::info!(
        "loaded high score {} from {}",
        game.high_score(),
        game.store().path().display()
    );

    install_panic_hook();
    let mut terminal = TerminalSession::enter()?;
    run(&mut terminal, Session::new(game, IntervalScheduler::new()))
}

fn run(
    terminal: &mut TerminalSession,
    mut session: Session<JsonFileStore, IntervalScheduler>,
) -> io::Result<()> {
    let config = *session.game().config();
    let mut layout = ScreenLayout::compute(terminal.terminal_mut().get_frame().area(), &config);

    loop {
        let now = Instant::now();
        session.advance(now);

        let game = session.game();
        let hud = HudInfo::from_game(game);
        terminal.terminal_mut().draw(|frame| {
            layout = ScreenLayout::compute(frame.area(), &config);
            renderer::render(frame, &game.view(), &hud, &layout);
        })?;

        let timeout = session
            .scheduler()
            .time_until_next(now)
            .map_or(FRAME_INTERVAL, |until_tick| until_tick.min(FRAME_INTERVAL));
        let overlay_visible = session.game().status() != GameStatus::Playing;

        if let Some(input) = controls::poll_input(timeout, &layout, overlay_visible)? {
            if input == GameInput::Quit {
                log::info!("quit requested");
                break;
            }
            session.handle_input(input, Instant::now());
        }
    }

    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
