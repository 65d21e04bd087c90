//! Maps crossterm events onto presenter input events.

use crate::terminal_view::Regions;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use slidedeck_core::{InputEvent, NavButton, NavKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Input(InputEvent),
    Quit,
    Ignore,
}

/// Pixel size of one terminal cell, used to turn drags into swipe distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width_px: f64,
    pub height_px: f64,
}

impl CellMetrics {
    /// Terminal cells are roughly twice as tall as they are wide.
    pub fn from_width(width_px: f64) -> Self {
        Self {
            width_px,
            height_px: width_px * 2.0,
        }
    }
}

pub fn map_event(event: &Event, regions: &Regions, cells: CellMetrics) -> Action {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, regions, cells),
        _ => Action::Ignore,
    }
}

pub fn map_key(key: &KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }
    let nav = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Action::Quit
        }
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::PageDown => {
            NavKey::MoveRight
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => NavKey::MoveLeft,
        KeyCode::Home | KeyCode::Char('g') => NavKey::GoToStart,
        KeyCode::End | KeyCode::Char('G') => NavKey::GoToEnd,
        _ => return Action::Ignore,
    };
    Action::Input(InputEvent::Key(nav))
}

pub fn map_mouse(mouse: &MouseEvent, regions: &Regions, cells: CellMetrics) -> Action {
    let x = f64::from(mouse.column) * cells.width_px;
    let y = f64::from(mouse.row) * cells.height_px;
    let at = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if regions.previous.contains(at) {
                Action::Input(InputEvent::Click(NavButton::Previous))
            } else if regions.next.contains(at) {
                Action::Input(InputEvent::Click(NavButton::Next))
            } else {
                Action::Input(InputEvent::TouchStart { x, y })
            }
        }
        MouseEventKind::Up(MouseButton::Left) => Action::Input(InputEvent::TouchEnd { x, y }),
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn navigation_keys() {
        let press = |code| map_key(&KeyEvent::new(code, KeyModifiers::NONE));
        assert_eq!(
            press(KeyCode::Right),
            Action::Input(InputEvent::Key(NavKey::MoveRight))
        );
        assert_eq!(
            press(KeyCode::Left),
            Action::Input(InputEvent::Key(NavKey::MoveLeft))
        );
        assert_eq!(
            press(KeyCode::Home),
            Action::Input(InputEvent::Key(NavKey::GoToStart))
        );
        assert_eq!(
            press(KeyCode::End),
            Action::Input(InputEvent::Key(NavKey::GoToEnd))
        );
        assert_eq!(press(KeyCode::Char('q')), Action::Quit);
        assert_eq!(press(KeyCode::Char('x')), Action::Ignore);
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&key), Action::Ignore);
    }

    #[test]
    fn clicks_on_buttons_and_drags_elsewhere() {
        let regions = Regions::split(Rect::new(0, 0, 80, 24));
        let cells = CellMetrics::from_width(8.0);
        let down = MouseEventKind::Down(MouseButton::Left);

        let prev = mouse(down, regions.previous.x + 1, regions.previous.y + 1);
        assert_eq!(
            map_mouse(&prev, &regions, cells),
            Action::Input(InputEvent::Click(NavButton::Previous))
        );
        let next = mouse(down, regions.next.x + 1, regions.next.y + 1);
        assert_eq!(
            map_mouse(&next, &regions, cells),
            Action::Input(InputEvent::Click(NavButton::Next))
        );

        let start = mouse(down, 30, 5);
        assert_eq!(
            map_mouse(&start, &regions, cells),
            Action::Input(InputEvent::TouchStart { x: 240.0, y: 80.0 })
        );
        let end = mouse(MouseEventKind::Up(MouseButton::Left), 20, 5);
        assert_eq!(
            map_mouse(&end, &regions, cells),
            Action::Input(InputEvent::TouchEnd { x: 160.0, y: 80.0 })
        );
    }
}
