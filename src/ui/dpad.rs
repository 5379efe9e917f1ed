use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::config::{GLYPH_ARROW_DOWN, GLYPH_ARROW_LEFT, GLYPH_ARROW_RIGHT, GLYPH_ARROW_UP, THEME};
use crate::input::Direction;
use crate::ui::layout::DpadLayout;

/// Draws the four pad buttons, dimmed while `enabled` is false.
pub fn render_dpad(frame: &mut Frame<'_>, dpad: &DpadLayout, enabled: bool) {
    let style = if enabled {
        Style::default()
            .fg(THEME.snake_head)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(THEME.muted)
    };

    for direction in Direction::ALL {
        frame.render_widget(
            Paragraph::new(arrow(direction))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_style(style)),
            dpad.button(direction),
        );
    }
}

fn arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_ARROW_UP,
        Direction::Down => GLYPH_ARROW_DOWN,
        Direction::Left => GLYPH_ARROW_LEFT,
        Direction::Right => GLYPH_ARROW_RIGHT,
    }
}
