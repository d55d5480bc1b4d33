use ndarray::Array1;

/// Normalized name of the feature column.
pub const HOURS_COLUMN: &str = "study_hours";

/// Normalized name of the target column.
pub const MARKS_COLUMN: &str = "student_marks";

/// Columns every dataset must provide, in header-check order.
pub const REQUIRED_COLUMNS: [&str; 2] = [HOURS_COLUMN, MARKS_COLUMN];

/// A single row of the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub hours: f64,
    pub marks: f64,
}

/// The cleaned study-hours/marks table.
///
/// Both columns are fully numeric and have the same length; missing cells
/// were already replaced by the column mean when the dataset was loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyDataset {
    hours: Array1<f64>,
    marks: Array1<f64>,
    imputed: [usize; 2],
}

impl StudyDataset {
    /// Creates a new dataset from clean columns.
    ///
    /// # Panics
    /// - if `hours.len() != marks.len()`
    pub fn new(hours: Vec<f64>, marks: Vec<f64>) -> Self {
        Self::with_imputed(hours, marks, [0, 0])
    }

    pub(crate) fn with_imputed(hours: Vec<f64>, marks: Vec<f64>, imputed: [usize; 2]) -> Self {
        assert_eq!(hours.len(), marks.len(), "hours and marks must have same length");
        Self {
            hours: Array1::from(hours),
            marks: Array1::from(marks),
            imputed,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Returns the row at `idx`, or `None` if out of bounds.
    pub fn sample(&self, idx: usize) -> Option<Sample> {
        Some(Sample {
            hours: *self.hours.get(idx)?,
            marks: *self.marks.get(idx)?,
        })
    }

    #[inline]
    pub fn hours(&self) -> &Array1<f64> {
        &self.hours
    }

    #[inline]
    pub fn marks(&self) -> &Array1<f64> {
        &self.marks
    }

    /// Number of cells filled by mean imputation, as `[hours, marks]`.
    #[inline]
    pub fn imputed(&self) -> [usize; 2] {
        self.imputed
    }

    /// Smallest and largest study-hours value, `None` for an empty dataset.
    pub fn hours_range(&self) -> Option<(f64, f64)> {
        min_max(self.hours.iter().copied())
    }

    /// `(hours, marks)` pairs in row order, as consumed by scatter charts.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.hours
            .iter()
            .zip(self.marks.iter())
            .map(|(&h, &m)| (h, m))
            .collect()
    }
}

pub(crate) fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
