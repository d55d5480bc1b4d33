pub mod dataset;
pub mod loader;
mod record;

pub use dataset::{Sample, StudyDataset, MARKS_COLUMN, HOURS_COLUMN, REQUIRED_COLUMNS};
pub use loader::{load_dataset, normalize_column, parse_dataset};
