use ratatui::{widgets::Block, Frame};

use crate::state::page::PageState;

use super::{layout, theme::Theme, widgets};

/// Draws the whole prediction page.
pub fn page(f: &mut Frame, state: &PageState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, controls_area, hint_area) = layout::page(area);
    let (table_area, chart_area) = layout::body(body_area, state.show_dataset);

    f.render_widget(widgets::header(state.summary()), header_area);

    if let Some(table) = table_area {
        f.render_widget(
            widgets::dataset_table(state.dataset(), state.table_offset()),
            table,
        );
    }

    let scatter = state.dataset().points();
    let line = state.visible_line().map(|l| l.points());
    let x_bounds = x_bounds(&scatter);
    let y_bounds = y_bounds(scatter.iter().chain(line.iter().flatten()).map(|p| p.1));

    f.render_widget(
        widgets::chart(&scatter, line.as_deref(), x_bounds, y_bounds),
        chart_area,
    );

    f.render_widget(widgets::controls(state), controls_area);
    f.render_widget(widgets::hint(), hint_area);
}

/// Observed study-hours domain, widened when it collapses to a point.
fn x_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.0), hi.max(p.0))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 24.0];
    }
    if lo == hi {
        return [lo - 1.0, hi + 1.0];
    }
    [lo, hi]
}

/// Marks axis: always covers `[0, 100]`, stretched for out-of-range values.
fn y_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    values
        .filter(|v| v.is_finite())
        .fold([0.0, 100.0], |[lo, hi], v| [lo.min(v), hi.max(v)])
}
