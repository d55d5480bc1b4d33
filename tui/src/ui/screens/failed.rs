use crossterm::event::KeyCode;
use ml_core::MlError;
use ratatui::{widgets::Block, Frame};

use crate::ui::{layout, theme::Theme, widgets};

use super::Action;

/// Terminal state after a load failure: the message is shown and nothing
/// else is rendered.
pub struct FailedState {
    pub error: MlError,
}

impl FailedState {
    pub fn new(error: MlError) -> Self {
        Self { error }
    }

    /// What the user can do about the failure, by error kind.
    pub fn remedy(&self) -> &'static str {
        match self.error {
            MlError::NotFound { .. } => {
                "place the file in the working directory or set MARKS_DATASET / MARKS_MODEL"
            }
            MlError::Schema { .. } => "rename the columns to study_hours and student_marks",
            MlError::Load { .. } => "fix the dataset file and restart",
            MlError::ArtifactLoad { .. } => "re-export the model artifact and restart",
        }
    }
}

/// Only quitting leaves the error screen.
pub fn handle_key(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &FailedState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);
    f.render_widget(
        widgets::failure(&state.error, state.remedy()),
        layout::centered(70, 40, area),
    );
}
