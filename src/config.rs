use ratatui::style::Color;
use ratatui::symbols::border;
use serde::Deserialize;
use thiserror::Error;

/// Default number of cells along each side of the square grid.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Default pixel size of one grid cell.
pub const DEFAULT_CELL_SIZE: u16 = 25;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Smallest accepted grid; the initial snake needs room to move.
pub const MIN_GRID_SIZE: u16 = 5;

/// Largest accepted grid.
pub const MAX_GRID_SIZE: u16 = 100;

/// Score granted for each food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Minimum swipe length (pixels) before a drag counts as a direction.
pub const MIN_SWIPE_DISTANCE: i32 = 30;

/// Segment count of a freshly started snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Pixel width approximated by one terminal column.
pub const PIXELS_PER_COLUMN: u16 = 12;

/// Maximum number of terminal columns used to draw one grid cell.
pub const MAX_CELL_COLUMNS: u16 = 4;

/// Tunable game parameters.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side; the grid is `grid_size` x `grid_size`.
    pub grid_size: u16,
    /// Pixels per cell. Presentation only.
    pub cell_size: u16,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::CellSize);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::TickInterval);
        }
        Ok(())
    }

    /// Terminal columns used to draw one cell.
    #[must_use]
    pub fn cell_columns(&self) -> u16 {
        (self.cell_size / PIXELS_PER_COLUMN).clamp(1, MAX_CELL_COLUMNS)
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be between {min} and {max}, got {0}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    GridSize(u16),
    #[error("cell size must be positive")]
    CellSize,
    #[error("tick interval must be positive")]
    TickInterval,
}

/// Colors applied by the terminal front end.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub board_bg: Color,
    pub border_fg: Color,
    pub score_label: Color,
    pub score_value: Color,
    pub accent: Color,
    pub muted: Color,
    pub button_fg: Color,
    pub button_bg: Color,
}

/// Green snake on a dark board with red food.
pub const THEME: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    board_bg: Color::Black,
    border_fg: Color::Green,
    score_label: Color::Gray,
    score_value: Color::White,
    accent: Color::Yellow,
    muted: Color::DarkGray,
    button_fg: Color::Black,
    button_bg: Color::Green,
};

/// Half-block border set: solid side faces the board.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE: &str = "█";
pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_ARROW_UP: &str = "▲";
pub const GLYPH_ARROW_DOWN: &str = "▼";
pub const GLYPH_ARROW_LEFT: &str = "◀";
pub const GLYPH_ARROW_RIGHT: &str = "▶";
