pub mod failed;
pub mod page;

use crossterm::event::KeyCode;
use log::error;
use ml_core::AppConfig;
use ratatui::Frame;

use crate::state::page::PageState;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Page(PageState),
    Failed(failed::FailedState),
}

impl Screen {
    /// Loads the dataset and model, falling back to the error screen.
    pub fn open(config: AppConfig) -> Self {
        match PageState::load(config) {
            Ok(state) => Screen::Page(state),
            Err(e) => {
                error!("load failed: {e}");
                Screen::Failed(failed::FailedState::new(e))
            }
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Page(s) => page::draw(f, s),
            Screen::Failed(s) => failed::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Page(s) => page::handle_key(s, key),
            Screen::Failed(_) => failed::handle_key(key),
        }
    }
}
