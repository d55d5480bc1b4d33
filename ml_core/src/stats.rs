use ndarray::Array1;

use crate::data::{dataset::min_max, StudyDataset};

/// Minimum, mean and maximum of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarizes `column`.
    ///
    /// # Args
    /// * `column` - Cleaned column values.
    ///
    /// # Returns
    /// `None` if the column is empty.
    pub fn of(column: &Array1<f64>) -> Option<Self> {
        let (min, max) = min_max(column.iter().copied())?;
        let mean = column.mean()?;
        Some(Self { min, mean, max })
    }
}

/// Descriptive statistics shown alongside the dataset.
///
/// Column summaries are `None` when the dataset has no rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetSummary {
    rows: usize,
    hours: Option<ColumnSummary>,
    marks: Option<ColumnSummary>,
}

impl DatasetSummary {
    /// Computes the summary of a cleaned dataset.
    ///
    /// # Args
    /// * `dataset` - The dataset to describe.
    ///
    /// # Returns
    /// A `DatasetSummary` with the row count and per-column summaries.
    pub fn of(dataset: &StudyDataset) -> Self {
        Self {
            rows: dataset.len(),
            hours: ColumnSummary::of(dataset.hours()),
            marks: ColumnSummary::of(dataset.marks()),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn hours(&self) -> Option<ColumnSummary> {
        self.hours
    }

    pub fn marks(&self) -> Option<ColumnSummary> {
        self.marks
    }
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rows: {}", self.rows)?;
        for (name, col) in [("study_hours", self.hours), ("student_marks", self.marks)] {
            if let Some(c) = col {
                write!(
                    f,
                    "  |  {name}: min {:.2}, mean {:.2}, max {:.2}",
                    c.min, c.mean, c.max
                )?;
            }
        }
        Ok(())
    }
}
