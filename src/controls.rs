use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::input::{Direction, GameInput};
use crate::ui::layout::ScreenLayout;

/// Waits up to `timeout` for one terminal event and translates it.
pub fn poll_input(
    timeout: Duration,
    layout: &ScreenLayout,
    overlay_visible: bool,
) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    Ok(translate(&event::read()?, layout, overlay_visible))
}

/// Maps a crossterm event onto a game input.
///
/// Left-button presses hit the d-pad first, then the overlay button when an
/// overlay is shown; anywhere else they begin a swipe. Releasing the button
/// ends the swipe.
#[must_use]
pub fn translate(event: &Event, layout: &ScreenLayout, overlay_visible: bool) -> Option<GameInput> {
    match event {
        Event::Key(key) => translate_key(*key),
        Event::Mouse(mouse) => translate_mouse(*mouse, layout, overlay_visible),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Key(Direction::Up)),
        KeyCode::Down => Some(GameInput::Key(Direction::Down)),
        KeyCode::Left => Some(GameInput::Key(Direction::Left)),
        KeyCode::Right => Some(GameInput::Key(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

fn translate_mouse(
    mouse: MouseEvent,
    layout: &ScreenLayout,
    overlay_visible: bool,
) -> Option<GameInput> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(direction) = layout.dpad.hit(column, row) {
                return Some(GameInput::Pad(direction));
            }
            if overlay_visible && layout.on_overlay_button(column, row) {
                return Some(GameInput::Confirm);
            }
            Some(GameInput::SwipeStart(layout.to_pixels(column, row)))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            Some(GameInput::SwipeEnd(layout.to_pixels(column, row)))
        }
        _ => None,
    }
}
