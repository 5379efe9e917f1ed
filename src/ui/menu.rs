use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::THEME;
use crate::game::DeathReason;
use crate::ui::hud::HudInfo;
use crate::ui::layout::ScreenLayout;

/// Draws the welcome popup with its Start Game button.
pub fn render_start_menu(frame: &mut Frame<'_>, layout: &ScreenLayout, high_score: u32) {
    let lines = vec![
        Line::from("Welcome to Snake!").style(
            Style::default()
                .fg(THEME.snake_head)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Press any arrow key to start"),
        Line::from(format!("High Score: {high_score}")),
    ];

    render_popup(frame, layout.popup, " start ", lines);
    render_button(frame, layout.overlay_button, "Start Game");
}

/// Draws the game-over popup with its Play Again button.
pub fn render_game_over_menu(frame: &mut Frame<'_>, layout: &ScreenLayout, hud: &HudInfo) {
    let mut lines = vec![
        Line::from("Game Over!").style(
            Style::default()
                .fg(THEME.food)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final Score: {}", hud.score)),
        Line::from(match hud.death_reason {
            Some(DeathReason::WallCollision) => "You hit the wall",
            Some(DeathReason::SelfCollision) => "You hit yourself",
            None => "",
        }),
    ];
    if hud.new_high_score {
        lines.push(Line::from("New High Score!").style(Style::default().fg(THEME.accent)));
    }

    render_popup(frame, layout.popup, " game over ", lines);
    render_button(frame, layout.overlay_button, "Play Again");
}

fn render_popup(frame: &mut Frame<'_>, popup: Rect, title: &str, lines: Vec<Line<'static>>) {
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn render_button(frame: &mut Frame<'_>, area: Rect, label: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(format!("[ {label} ]")))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(THEME.button_fg)
                    .bg(THEME.button_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        area,
    );
}
