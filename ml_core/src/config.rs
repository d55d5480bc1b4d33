use std::{env, path::PathBuf};

use crate::line::LINE_POINTS;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "Dataset.csv";

/// Default model artifact location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "Students_marks_prediction_model.json";

/// Overrides `dataset_path` when set.
pub const DATASET_ENV: &str = "MARKS_DATASET";

/// Overrides `model_path` when set.
pub const MODEL_ENV: &str = "MARKS_MODEL";

/// Runtime configuration shared by every front end.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
    /// Smallest study-hours value accepted by the input box.
    pub hours_min: f64,
    /// Largest study-hours value accepted by the input box.
    pub hours_max: f64,
    /// Increment applied by the input box step keys.
    pub hours_step: f64,
    /// Number of points in the regression-line sweep.
    pub line_points: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            hours_min: 0.0,
            hours_max: 24.0,
            hours_step: 0.5,
            line_points: LINE_POINTS,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from the defaults, applying the
    /// `MARKS_DATASET` and `MARKS_MODEL` overrides when present.
    pub fn from_env() -> Self {
        Self::default().with_overrides(env::var(DATASET_ENV).ok(), env::var(MODEL_ENV).ok())
    }

    fn with_overrides(mut self, dataset: Option<String>, model: Option<String>) -> Self {
        if let Some(path) = dataset.filter(|p| !p.trim().is_empty()) {
            self.dataset_path = PathBuf::from(path);
        }
        if let Some(path) = model.filter(|p| !p.trim().is_empty()) {
            self.model_path = PathBuf::from(path);
        }
        self
    }

    /// Bounds `hours` to `[hours_min, hours_max]`.
    pub fn clamp_hours(&self, hours: f64) -> f64 {
        hours.clamp(self.hours_min, self.hours_max)
    }
}
