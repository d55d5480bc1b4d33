use ratatui::style::{Color, Modifier, Style};

/// Chalkboard theme.
///
/// Off-white text on a dark slate background; the scatter points and the
/// regression line get their own accents so the overlay reads at a glance.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(24, 32, 30);
    pub const FG: Color = Color::Rgb(230, 232, 225);
    pub const FG_DIM: Color = Color::Rgb(150, 160, 150);

    pub const POINTS: Color = Color::Rgb(90, 160, 255);
    pub const LINE: Color = Color::Rgb(255, 90, 90);
    pub const SUCCESS: Color = Color::Rgb(120, 220, 120);
    pub const FAILURE: Color = Color::Rgb(255, 70, 70);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn points() -> Style {
        Style::default().fg(Self::POINTS)
    }

    pub fn line() -> Style {
        Style::default().fg(Self::LINE)
    }

    /// Input box while the user is typing.
    pub fn editing() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::FAILURE)
            .add_modifier(Modifier::BOLD)
    }
}
