use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use ndarray::Array1;

use super::{
    dataset::{StudyDataset, HOURS_COLUMN, MARKS_COLUMN, REQUIRED_COLUMNS},
    record::split_record,
};
use crate::error::{MlError, Result};

const INLINE_ORIGIN: &str = "<inline>";

/// Loads and cleans the dataset stored at `path`.
///
/// # Errors
/// - `MlError::NotFound` if the file does not exist.
/// - `MlError::Schema` if a required column is missing.
/// - `MlError::Load` for any other read or parse failure.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<StudyDataset> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| MlError::from_io(path, e, MlError::load))?;

    let dataset = parse(&content, path)?;
    info!(
        "loaded {} rows from '{}' (imputed hours={}, marks={})",
        dataset.len(),
        path.display(),
        dataset.imputed()[0],
        dataset.imputed()[1]
    );
    Ok(dataset)
}

/// Cleans an in-memory CSV document.
///
/// # Errors
/// Same as [`load_dataset`], minus `NotFound`.
pub fn parse_dataset(content: &str) -> Result<StudyDataset> {
    parse(content, Path::new(INLINE_ORIGIN))
}

/// Normalizes a header name: trims it, lowercases it, and turns every space
/// into an underscore.
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

fn parse(content: &str, path: &Path) -> Result<StudyDataset> {
    let fail = |reason: String| MlError::load(PathBuf::from(path), reason);

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_idx, header) = lines
        .next()
        .ok_or_else(|| fail("no columns to parse from file".into()))?;

    let columns = split_record(header)
        .map_err(|e| fail(format!("line {}: {e}", header_idx + 1)))?
        .iter()
        .map(|c| normalize_column(c))
        .collect::<Vec<_>>();

    let position = |name: &str| columns.iter().position(|c| c == name);
    let (Some(hours_idx), Some(marks_idx)) = (position(HOURS_COLUMN), position(MARKS_COLUMN))
    else {
        let missing = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| position(*name).is_none())
            .collect();
        return Err(MlError::Schema { missing, found: columns });
    };

    let mut hours = Vec::new();
    let mut marks = Vec::new();

    for (idx, line) in lines {
        let fields = split_record(line).map_err(|e| fail(format!("line {}: {e}", idx + 1)))?;

        if fields.len() > columns.len() {
            return Err(fail(format!(
                "line {}: expected {} fields, saw {}",
                idx + 1,
                columns.len(),
                fields.len()
            )));
        }

        hours.push(fields.get(hours_idx).and_then(|v| coerce(v)));
        marks.push(fields.get(marks_idx).and_then(|v| coerce(v)));
    }

    let (hours, hours_filled) = impute(HOURS_COLUMN, hours).map_err(fail)?;
    let (marks, marks_filled) = impute(MARKS_COLUMN, marks).map_err(fail)?;

    Ok(StudyDataset::with_imputed(
        hours,
        marks,
        [hours_filled, marks_filled],
    ))
}

/// Parses a raw field, treating blanks, garbage and non-finite values
/// (NaN, infinities, overflowing literals) as missing.
fn coerce(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Replaces missing cells with the mean of the present cells of the same
/// column. Returns the filled column and how many cells were filled.
fn impute(column: &str, values: Vec<Option<f64>>) -> std::result::Result<(Vec<f64>, usize), String> {
    if values.is_empty() {
        return Ok((Vec::new(), 0));
    }

    let present = values.iter().flatten().copied().collect::<Array1<f64>>();
    let missing = values.len() - present.len();
    if missing == 0 {
        return Ok((values.into_iter().flatten().collect(), 0));
    }

    let mean = present
        .mean()
        .ok_or_else(|| format!("column '{column}' has no numeric values to impute from"))?;
    if !mean.is_finite() {
        return Err(format!("column '{column}' mean overflows, cannot impute"));
    }
    debug!("imputing {missing} missing '{column}' value(s) with mean {mean}");

    let filled = values.into_iter().map(|v| v.unwrap_or(mean)).collect();
    Ok((filled, missing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_header_variants() {
        assert_eq!(normalize_column("  Study Hours "), "study_hours");
        assert_eq!(normalize_column("Student_Marks"), "student_marks");
        assert_eq!(normalize_column("STUDY HOURS"), "study_hours");
    }

    #[test]
    fn imputes_missing_marks_with_column_mean() {
        let ds = parse_dataset("study_hours,student_marks\n1,10\n2,20\n3,NaN\n").unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.marks()[2], 15.0);
        assert_eq!(ds.hours()[2], 3.0);
        assert_eq!(ds.imputed(), [0, 1]);
    }

    #[test]
    fn imputation_never_crosses_columns() {
        let csv = "Study Hours,Student Marks\nabc,40\n4,\n6,80\n";
        let ds = parse_dataset(csv).unwrap();
        assert_eq!(ds.hours().to_vec(), vec![5.0, 4.0, 6.0]);
        assert_eq!(ds.marks().to_vec(), vec![40.0, 60.0, 80.0]);
        assert_eq!(ds.imputed(), [1, 1]);
    }

    #[test]
    fn short_rows_are_padded_as_missing() {
        let ds = parse_dataset("study_hours,student_marks\n2,30\n4\n").unwrap();
        assert_eq!(ds.marks().to_vec(), vec![30.0, 30.0]);
    }

    #[test]
    fn long_rows_are_rejected() {
        let err = parse_dataset("study_hours,student_marks\n1,2,3\n").unwrap_err();
        match err {
            MlError::Load { reason, .. } => assert!(reason.contains("line 2")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_is_schema_error() {
        let err = parse_dataset("hours,student_marks\n1,2\n").unwrap_err();
        match err {
            MlError::Schema { missing, found } => {
                assert_eq!(missing, vec!["study_hours"]);
                assert_eq!(found, vec!["hours", "student_marks"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_columns_and_order_are_ignored() {
        let csv = "\u{feff}name, Student Marks ,Study_Hours\nana,55.5,3.5\n\nbob,70,5\n";
        let ds = parse_dataset(csv).unwrap();
        assert_eq!(ds.hours().to_vec(), vec![3.5, 5.0]);
        assert_eq!(ds.marks().to_vec(), vec![55.5, 70.0]);
    }

    #[test]
    fn header_only_gives_empty_dataset() {
        let ds = parse_dataset("study_hours,student_marks\n").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn empty_input_is_load_error() {
        assert!(matches!(parse_dataset("\n  \n"), Err(MlError::Load { .. })));
    }

    #[test]
    fn column_without_numbers_is_load_error() {
        let err = parse_dataset("study_hours,student_marks\n1,x\n2,y\n").unwrap_err();
        assert!(matches!(err, MlError::Load { .. }));
    }

    #[test]
    fn infinities_count_as_missing() {
        let err = parse_dataset("study_hours,student_marks\ninf,10\n-inf,20\n,30\n").unwrap_err();
        assert!(matches!(err, MlError::Load { .. }));

        let ds = parse_dataset("study_hours,student_marks\n1,10\n1e400,20\n3,-infinity\n").unwrap();
        assert_eq!(ds.hours().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(ds.marks().to_vec(), vec![10.0, 20.0, 15.0]);
        assert_eq!(ds.imputed(), [1, 1]);
    }

    #[test]
    fn overflowing_mean_is_load_error() {
        let err = parse_dataset("study_hours,student_marks\n1e308,10\n1.7e308,20\n,30\n").unwrap_err();
        match err {
            MlError::Load { reason, .. } => assert!(reason.contains("study_hours")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cleaned_columns_are_always_finite() {
        let csv = "study_hours,student_marks\nNaN,inf\n2,\n1e999,40\nx,-1e999\n4,60\n";
        let ds = parse_dataset(csv).unwrap();
        assert!(ds.hours().iter().chain(ds.marks().iter()).all(|v| v.is_finite()));
        assert_eq!(ds.hours().to_vec(), vec![3.0, 2.0, 3.0, 3.0, 4.0]);
        assert_eq!(ds.marks().to_vec(), vec![50.0, 50.0, 40.0, 50.0, 60.0]);
    }
}
