use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::config::{BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE, THEME};
use crate::game::{BoardView, GameStatus};
use crate::input::controls_enabled;
use crate::ui::dpad::render_dpad;
use crate::ui::hud::{HudInfo, render_hud, render_instructions, render_title};
use crate::ui::layout::ScreenLayout;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, view: &BoardView<'_>, hud: &HudInfo, layout: &ScreenLayout) {
    render_title(frame, layout.title);
    render_hud(frame, layout.score_row, hud);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(THEME.border_fg));
    frame.render_widget(block, layout.board);
    frame.render_widget(
        Paragraph::new("").style(Style::new().bg(THEME.board_bg)),
        layout.board_inner,
    );

    render_food(frame, view, layout);
    render_snake(frame, view, layout);

    render_dpad(frame, &layout.dpad, controls_enabled(view.status));
    render_instructions(frame, layout.instructions);

    match view.status {
        GameStatus::Idle => render_start_menu(frame, layout, hud.high_score),
        GameStatus::GameOver => render_game_over_menu(frame, layout, hud),
        GameStatus::Playing => {}
    }
}

fn render_food(frame: &mut Frame<'_>, view: &BoardView<'_>, layout: &ScreenLayout) {
    let Some((x, y)) = layout.cell_origin(view.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(THEME.food).bg(THEME.board_bg));
}

fn render_snake(frame: &mut Frame<'_>, view: &BoardView<'_>, layout: &ScreenLayout) {
    let head = view.snake.head();
    let width = usize::from(layout.cell_columns);
    let cell = GLYPH_SNAKE.repeat(width);

    let buffer = frame.buffer_mut();
    for segment in view.snake.segments() {
        let Some((x, y)) = layout.cell_origin(*segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(THEME.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(THEME.snake_body)
        };
        buffer.set_stringn(x, y, &cell, width, style);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::render;
    use crate::config::{GLYPH_FOOD, GLYPH_SNAKE, GameConfig};
    use crate::game::Game;
    use crate::score::MemoryStore;
    use crate::ui::hud::HudInfo;
    use crate::ui::layout::ScreenLayout;

    fn draw(game: &Game<MemoryStore>) -> (Buffer, ScreenLayout) {
        let mut terminal =
            Terminal::new(TestBackend::new(100, 32)).expect("test terminal should build");
        let mut layout = None;
        terminal
            .draw(|frame| {
                let screen = ScreenLayout::compute(frame.area(), game.config());
                render(frame, &game.view(), &HudInfo::from_game(game), &screen);
                layout = Some(screen);
            })
            .expect("draw should succeed");

        let layout = layout.expect("draw closure should run");
        (terminal.backend().buffer().clone(), layout)
    }

    fn text_of(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn idle_frame_shows_start_overlay() {
        let game = Game::new_with_seed(GameConfig::default(), MemoryStore::with_high_score(40), 2);

        let (buffer, _) = draw(&game);
        let text = text_of(&buffer);

        assert!(text.contains("Start Game"));
        assert!(text.contains("High Score: 40"));
    }

    #[test]
    fn playing_frame_draws_snake_and_food() {
        let mut game = Game::new_with_seed(GameConfig::default(), MemoryStore::default(), 2);
        game.start();

        let (buffer, layout) = draw(&game);
        let (head_x, head_y) = layout
            .cell_origin(game.snake().head())
            .expect("head should be on screen");
        let (food_x, food_y) = layout
            .cell_origin(game.food())
            .expect("food should be on screen");

        assert_eq!(buffer[(head_x, head_y)].symbol(), GLYPH_SNAKE);
        assert_eq!(buffer[(head_x + 1, head_y)].symbol(), GLYPH_SNAKE);
        assert_eq!(buffer[(food_x, food_y)].symbol(), GLYPH_FOOD);
        assert!(!text_of(&buffer).contains("Start Game"));
    }
}
