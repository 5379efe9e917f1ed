use ratatui::layout::{Constraint, Flex, Layout, Position as ScreenPosition, Rect};

use crate::config::GameConfig;
use crate::input::{Direction, Point};
use crate::snake::Position;

/// Width of one d-pad button in terminal cells.
pub const DPAD_BUTTON_WIDTH: u16 = 5;
/// Height of one d-pad button in terminal cells.
pub const DPAD_BUTTON_HEIGHT: u16 = 3;

const DPAD_GAP_X: u16 = 3;
const OVERLAY_BUTTON_WIDTH: u16 = 16;

/// Screen rectangles for one frame. Shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub score_row: Rect,
    /// Board including its border.
    pub board: Rect,
    /// Drawable cells inside the border.
    pub board_inner: Rect,
    pub popup: Rect,
    pub overlay_button: Rect,
    pub dpad: DpadLayout,
    pub instructions: Rect,
    pub cell_columns: u16,
    pub cell_size: u16,
}

/// Button rectangles of the on-screen directional pad.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DpadLayout {
    pub up: Rect,
    pub down: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl DpadLayout {
    fn at(origin: Rect) -> Self {
        let button = |column: u16, row: u16| Rect {
            x: origin.x + column * DPAD_BUTTON_WIDTH,
            y: origin.y + row * DPAD_BUTTON_HEIGHT,
            width: DPAD_BUTTON_WIDTH,
            height: DPAD_BUTTON_HEIGHT,
        };

        Self {
            up: button(1, 0),
            down: button(1, 2),
            left: button(0, 1),
            right: button(2, 1),
        }
    }

    /// Button for `direction`.
    #[must_use]
    pub fn button(&self, direction: Direction) -> Rect {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Direction of the button under `column`/`row`, if any.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| contains(self.button(*direction), column, row))
    }
}

impl ScreenLayout {
    /// Splits `area` into title, score row, board, d-pad and instructions.
    #[must_use]
    pub fn compute(area: Rect, config: &GameConfig) -> Self {
        let cell_columns = config.cell_columns();
        let board_width = config.grid_size.saturating_mul(cell_columns).saturating_add(2);
        let board_height = config.grid_size.saturating_add(2);
        let dpad_width = DPAD_BUTTON_WIDTH * 3;
        let dpad_height = DPAD_BUTTON_HEIGHT * 3;

        let [title, score_row, body, instructions] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(board_height),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [board, _, dpad_column] = Layout::horizontal([
            Constraint::Length(board_width),
            Constraint::Length(DPAD_GAP_X),
            Constraint::Length(dpad_width),
        ])
        .flex(Flex::Center)
        .areas(body);

        let [dpad_area] = Layout::vertical([Constraint::Length(dpad_height)])
            .flex(Flex::Center)
            .areas(dpad_column);

        let board_inner = Rect {
            x: board.x.saturating_add(1),
            y: board.y.saturating_add(1),
            width: board.width.saturating_sub(2),
            height: board.height.saturating_sub(2),
        };

        let popup = centered_popup(board, 80, 60);
        let [_, button_row, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(popup);
        let [overlay_button] = Layout::horizontal([Constraint::Length(OVERLAY_BUTTON_WIDTH)])
            .flex(Flex::Center)
            .areas(button_row);

        Self {
            title,
            score_row,
            board,
            board_inner,
            popup,
            overlay_button,
            dpad: DpadLayout::at(dpad_area),
            instructions,
            cell_columns,
            cell_size: config.cell_size,
        }
    }

    /// Top-left terminal cell of a board position, if it is on screen.
    #[must_use]
    pub fn cell_origin(&self, position: Position) -> Option<(u16, u16)> {
        let column = u16::try_from(position.x).ok()?;
        let row = u16::try_from(position.y).ok()?;

        let x = self
            .board_inner
            .x
            .saturating_add(column.saturating_mul(self.cell_columns));
        let y = self.board_inner.y.saturating_add(row);
        if x >= self.board_inner.right() || y >= self.board_inner.bottom() {
            return None;
        }

        Some((x, y))
    }

    /// Converts a terminal cell to pixel-equivalent coordinates.
    ///
    /// One board cell spans `cell_size` pixels on both axes.
    #[must_use]
    pub fn to_pixels(&self, column: u16, row: u16) -> Point {
        let cell_size = i32::from(self.cell_size);
        Point {
            x: i32::from(column) * cell_size / i32::from(self.cell_columns),
            y: i32::from(row) * cell_size,
        }
    }

    #[must_use]
    pub fn on_overlay_button(&self, column: u16, row: u16) -> bool {
        contains(self.overlay_button, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(ScreenPosition::new(column, row))
}

/// Centres a rectangle covering the given percentages of `area`.
#[must_use]
pub fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
