use ml_core::{DatasetSummary, MlError, StudyDataset};
use ratatui::{
    layout::{Alignment, Constraint},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, Wrap},
};

use crate::state::page::PageState;

use super::theme::Theme;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()))
}

pub fn header<'a>(summary: &DatasetSummary) -> Paragraph<'a> {
    let line1 = Line::from(vec![
        Span::styled("Student Marks Prediction", Theme::title()),
        Span::styled("  |  ", Theme::dim()),
        Span::styled("Predict student marks based on study hours.", Theme::text()),
    ]);
    let line2 = Line::from(Span::styled(summary.to_string(), Theme::dim()));

    Paragraph::new(vec![line1, line2])
        .block(panel("Overview"))
        .wrap(Wrap { trim: true })
}

pub fn dataset_table(dataset: &StudyDataset, offset: usize) -> Table<'_> {
    let header = Row::new(vec!["#", "study_hours", "student_marks"]).style(Theme::title());

    let rows = (offset..dataset.len()).filter_map(|i| {
        let s = dataset.sample(i)?;
        Some(Row::new(vec![
            Cell::from(i.to_string()),
            Cell::from(format!("{:.2}", s.hours)),
            Cell::from(format!("{:.2}", s.marks)),
        ]))
    });

    let [hours_filled, marks_filled] = dataset.imputed();
    let title = format!(
        "Dataset ({} rows, {} imputed)",
        dataset.len(),
        hours_filled + marks_filled
    );

    Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(12),
            Constraint::Min(13),
        ],
    )
    .header(header)
    .style(Theme::text())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(Span::styled(title, Theme::title())),
    )
}

/// Scatter of the observed rows, with the regression line overlaid when given.
pub fn chart<'a>(
    scatter: &'a [(f64, f64)],
    line: Option<&'a [(f64, f64)]>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) -> Chart<'a> {
    let mut datasets = vec![Dataset::default()
        .name("Actual")
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Theme::points())
        .data(scatter)];

    let title = match line {
        Some(line) => {
            datasets.push(
                Dataset::default()
                    .name("Regression Line")
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Theme::line())
                    .data(line),
            );
            "Regression Line vs Actual Data"
        }
        None => "Study Hours vs Student Marks",
    };

    Chart::new(datasets)
        .block(panel(title))
        .x_axis(
            Axis::default()
                .title("Study Hours")
                .style(Theme::dim())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("Student Marks")
                .style(Theme::dim())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        )
}

pub fn controls(state: &PageState) -> Paragraph<'_> {
    let input = &state.input;
    let (min, max, step) = input.bounds();
    let box_style = if input.is_editing() {
        Theme::editing()
    } else {
        Theme::title()
    };

    let line1 = Line::from(vec![
        Span::styled("Enter study hours: ", Theme::text()),
        Span::styled(format!("[ {} ]", input.display()), box_style),
        Span::styled(format!("  range {min}-{max}, step {step}"), Theme::dim()),
    ]);

    let line2 = match state.prediction() {
        Some(p) => Line::from(vec![
            Span::styled(format!("Predicted Marks: {:.2}", p.marks), Theme::success()),
            Span::styled(format!("  for {:.2} study hours", p.hours), Theme::dim()),
        ]),
        None => Line::from(Span::styled("press enter to predict", Theme::dim())),
    };

    let model = state.model();
    let line3 = Line::from(Span::styled(
        format!(
            "model: marks = {:.4} * hours + {:.4}",
            model.coef, model.intercept
        ),
        Theme::dim(),
    ));

    Paragraph::new(vec![line1, line2, line3]).block(panel("Predict Marks"))
}

pub fn hint<'a>() -> Paragraph<'a> {
    let keys: [(&str, &str); 7] = [
        ("↑↓ / + -", "hours"),
        ("0-9 .", "type"),
        ("enter", "predict"),
        ("d", "dataset"),
        ("l", "regression line"),
        ("r", "reload"),
        ("q", "quit"),
    ];

    let spans = keys
        .iter()
        .flat_map(|(key, what)| {
            [
                Span::styled(*key, Theme::text()),
                Span::styled(format!(" {what}   "), Theme::dim()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

pub fn failure<'a>(err: &MlError, remedy: &'a str) -> Paragraph<'a> {
    let lines = vec![
        Line::from(Span::styled(err.to_string(), Theme::error())),
        Line::from(""),
        Line::from(Span::styled(remedy, Theme::text())),
        Line::from(Span::styled("press q to quit", Theme::dim())),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::error())
                .title(Span::styled(format!(" error: {} ", err.kind()), Theme::error())),
        )
        .wrap(Wrap { trim: true })
}

fn axis_labels<'a>(bounds: [f64; 2]) -> Vec<Span<'a>> {
    let [lo, hi] = bounds;
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| Span::styled(format!("{v:.1}"), Theme::dim()))
        .collect()
}
