use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::{state::page::PageState, ui::draw};

use super::{Action, Screen};

pub fn handle_key(state: &mut PageState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('r') => return Action::Transition(Screen::open(state.config().clone())),
        KeyCode::Char('d') => state.toggle_dataset(),
        KeyCode::Char('l') => state.toggle_line(),
        KeyCode::Up | KeyCode::Char('+') => state.input.step_up(),
        KeyCode::Down | KeyCode::Char('-') => state.input.step_down(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => state.input.push(c),
        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Enter => {
            state.predict();
        }
        KeyCode::PageDown => state.scroll_down(),
        KeyCode::PageUp => state.scroll_up(),
        _ => {}
    }
    Action::None
}

pub fn draw(f: &mut Frame, state: &PageState) {
    draw::page(f, state);
}
