use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::THEME;
use crate::game::{DeathReason, Game};

const SCORE_SEPARATOR: &str = "   ";

/// Score values displayed around the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HudInfo {
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub death_reason: Option<DeathReason>,
}

impl HudInfo {
    #[must_use]
    pub fn from_game<S>(game: &Game<S>) -> Self {
        Self {
            score: game.score(),
            high_score: game.high_score(),
            new_high_score: game.is_new_high_score(),
            death_reason: game.death_reason(),
        }
    }
}

pub fn render_title(frame: &mut Frame<'_>, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from("S N A K E"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(THEME.snake_head)
                    .add_modifier(Modifier::BOLD),
            ),
        area,
    );
}

/// Draws `Score: N   High Score: M`, shortening labels on narrow screens.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, info: &HudInfo) {
    frame.render_widget(
        Paragraph::new(score_line(info, usize::from(area.width))).alignment(Alignment::Center),
        area,
    );
}

pub fn render_instructions(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("Arrow keys, swipe with the mouse, or click the pad to steer"),
        Line::from("Eat the food to grow and score points!  [Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(THEME.muted)),
        area,
    );
}

fn score_line(info: &HudInfo, available_width: usize) -> Line<'static> {
    let compact = score_line_width(info, false) > available_width;
    let (score_label, high_label) = if compact {
        ("S", "H")
    } else {
        ("Score", "High Score")
    };
    let label = Style::default().fg(THEME.score_label);
    let value = Style::default()
        .fg(THEME.score_value)
        .add_modifier(Modifier::BOLD);
    let high = if info.new_high_score {
        Style::default().fg(THEME.accent).add_modifier(Modifier::BOLD)
    } else {
        value
    };

    Line::from(vec![
        Span::styled(format!("{score_label}: "), label),
        Span::styled(info.score.to_string(), value),
        Span::raw(SCORE_SEPARATOR),
        Span::styled(format!("{high_label}: "), label),
        Span::styled(info.high_score.to_string(), high),
    ])
}

fn score_line_width(info: &HudInfo, compact: bool) -> usize {
    let (score_label, high_label) = if compact {
        ("S", "H")
    } else {
        ("Score", "High Score")
    };

    format!("{score_label}: {}", info.score).width()
        + SCORE_SEPARATOR.width()
        + format!("{high_label}: {}", info.high_score).width()
}
