use log::info;
use ml_core::{
    load_dataset, AppConfig, DatasetSummary, LinearModel, Predictor, RegressionLine, StudyDataset,
};

use super::input::HoursInput;

/// Rows moved by a single page-up/page-down in the dataset table.
const TABLE_PAGE: usize = 10;

/// The last prediction shown under the input box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub hours: f64,
    pub marks: f64,
}

/// Everything the prediction page renders.
///
/// Built once per load; the dataset and model are immutable afterwards.
pub struct PageState {
    config: AppConfig,
    dataset: StudyDataset,
    summary: DatasetSummary,
    predictor: Predictor<LinearModel>,
    line: Option<RegressionLine>,
    pub input: HoursInput,
    pub show_dataset: bool,
    pub show_line: bool,
    prediction: Option<Prediction>,
    table_offset: usize,
}

impl PageState {
    /// Loads the dataset, then the model, from the configured paths.
    ///
    /// # Errors
    /// Returns the first `MlError` raised; nothing is rendered past it.
    pub fn load(config: AppConfig) -> ml_core::Result<Self> {
        let dataset = load_dataset(&config.dataset_path)?;
        let predictor = Predictor::load(&config.model_path)?;
        Ok(Self::new(config, dataset, predictor))
    }

    pub fn new(config: AppConfig, dataset: StudyDataset, predictor: Predictor<LinearModel>) -> Self {
        let summary = DatasetSummary::of(&dataset);
        let line = RegressionLine::sweep(&dataset, &predictor, config.line_points);
        let input = HoursInput::new(&config);

        Self {
            config,
            dataset,
            summary,
            predictor,
            line,
            input,
            show_dataset: false,
            show_line: false,
            prediction: None,
            table_offset: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn dataset(&self) -> &StudyDataset {
        &self.dataset
    }

    #[inline]
    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    #[inline]
    pub fn model(&self) -> &LinearModel {
        self.predictor.model()
    }

    /// The regression line, only while the overlay is toggled on.
    pub fn visible_line(&self) -> Option<&RegressionLine> {
        self.line.as_ref().filter(|_| self.show_line)
    }

    #[inline]
    pub fn prediction(&self) -> Option<Prediction> {
        self.prediction
    }

    #[inline]
    pub fn table_offset(&self) -> usize {
        self.table_offset
    }

    /// Commits the input box and predicts the marks for its value.
    pub fn predict(&mut self) -> Prediction {
        self.input.commit();
        let hours = self.input.value();
        let marks = self.predictor.predict_one(hours);
        info!("predicted {marks:.2} marks for {hours} study hours");

        let prediction = Prediction { hours, marks };
        self.prediction = Some(prediction);
        prediction
    }

    pub fn toggle_dataset(&mut self) {
        self.show_dataset = !self.show_dataset;
        self.table_offset = 0;
    }

    pub fn toggle_line(&mut self) {
        self.show_line = !self.show_line;
    }

    pub fn scroll_down(&mut self) {
        let last = self.dataset.len().saturating_sub(1);
        self.table_offset = (self.table_offset + TABLE_PAGE).min(last);
    }

    pub fn scroll_up(&mut self) {
        self.table_offset = self.table_offset.saturating_sub(TABLE_PAGE);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn page() -> PageState {
        let hours = (0..25).map(|i| i as f64).collect::<Vec<_>>();
        let marks = hours.iter().map(|h| 4.0 * h + 2.0).collect();
        PageState::new(
            AppConfig::default(),
            StudyDataset::new(hours, marks),
            Predictor::new(LinearModel::new(10.0, -5.0)),
        )
    }

    #[test]
    fn predict_uses_committed_input_and_clamps() {
        let mut p = page();
        for c in "4.5".chars() {
            p.input.push(c);
        }
        assert_eq!(p.predict(), Prediction { hours: 4.5, marks: 40.0 });

        for c in "23".chars() {
            p.input.push(c);
        }
        assert_eq!(p.predict().marks, 100.0);

        for _ in 0..60 {
            p.input.step_down();
        }
        assert_eq!(p.predict(), Prediction { hours: 0.0, marks: 0.0 });
    }

    #[test]
    fn line_is_hidden_until_toggled() {
        let mut p = page();
        assert!(p.visible_line().is_none());
        p.toggle_line();
        let line = p.visible_line().unwrap();
        assert_eq!(line.len(), 100);
        assert_eq!(line.ys[99], 235.0);
    }

    #[test]
    fn table_scroll_stays_in_range() {
        let mut p = page();
        p.toggle_dataset();
        p.scroll_up();
        assert_eq!(p.table_offset(), 0);
        for _ in 0..5 {
            p.scroll_down();
        }
        assert_eq!(p.table_offset(), 24);
        p.toggle_dataset();
        assert_eq!(p.table_offset(), 0);
    }
}
