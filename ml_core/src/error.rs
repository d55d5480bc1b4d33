use std::{error::Error, fmt, io, path::PathBuf};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, MlError>;

/// Failures while loading the dataset or the model artifact.
///
/// Every variant is terminal for the current render: callers surface the
/// message and stop, there is no partial result.
#[derive(Debug)]
pub enum MlError {
    /// The dataset or model file does not exist.
    NotFound { path: PathBuf },

    /// The dataset lacks one or more required columns.
    Schema {
        /// Required column names that were not found after normalization.
        missing: Vec<&'static str>,
        /// Normalized column names present in the header.
        found: Vec<String>,
    },

    /// The dataset could not be read or parsed.
    Load { path: PathBuf, reason: String },

    /// The model artifact could not be read or is not a valid model.
    ArtifactLoad { path: PathBuf, reason: String },
}

impl MlError {
    /// Maps an I/O error into `NotFound` or the given fallback.
    pub(crate) fn from_io(
        path: impl Into<PathBuf>,
        e: io::Error,
        fallback: fn(PathBuf, String) -> MlError,
    ) -> Self {
        let path = path.into();
        match e.kind() {
            io::ErrorKind::NotFound => MlError::NotFound { path },
            _ => fallback(path, e.to_string()),
        }
    }

    pub(crate) fn load(path: PathBuf, reason: String) -> Self {
        MlError::Load { path, reason }
    }

    pub(crate) fn artifact(path: PathBuf, reason: String) -> Self {
        MlError::ArtifactLoad { path, reason }
    }

    /// Stable identifier for the error kind, used in UI banners.
    pub fn kind(&self) -> &'static str {
        match self {
            MlError::NotFound { .. } => "not_found",
            MlError::Schema { .. } => "schema",
            MlError::Load { .. } => "load",
            MlError::ArtifactLoad { .. } => "artifact_load",
        }
    }
}

impl fmt::Display for MlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlError::NotFound { path } => {
                write!(f, "{} not found, make sure the file is in place", path.display())
            }
            MlError::Schema { missing, found } => write!(
                f,
                "dataset must contain columns [study_hours, student_marks]: missing [{}], found [{}]",
                missing.join(", "),
                found.join(", ")
            ),
            MlError::Load { path, reason } => {
                write!(f, "cannot load dataset '{}': {reason}", path.display())
            }
            MlError::ArtifactLoad { path, reason } => {
                write!(f, "cannot load model '{}': {reason}", path.display())
            }
        }
    }
}

impl Error for MlError {}
