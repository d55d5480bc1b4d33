pub mod config;
pub mod data;
mod error;
pub mod line;
pub mod model;
mod stats;

pub use config::AppConfig;
pub use data::{load_dataset, parse_dataset, Sample, StudyDataset};
pub use error::{MlError, Result};
pub use line::{linspace, RegressionLine, LINE_POINTS};
pub use model::{LinearModel, ModelArtifact, Predictor, Regressor};
pub use stats::{ColumnSummary, DatasetSummary};
