use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use super::Regressor;
use crate::{
    data::{HOURS_COLUMN, MARKS_COLUMN},
    error::{MlError, Result},
};

/// On-disk description of a fitted model.
///
/// Stored as JSON, e.g.
/// `{"kind":"linear_regression","coef":9.7,"intercept":2.1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// marks = coef * hours + intercept
    LinearRegression {
        coef: f64,
        intercept: f64,
        #[serde(default = "default_feature")]
        feature: String,
        #[serde(default = "default_target")]
        target: String,
    },
}

fn default_feature() -> String {
    HOURS_COLUMN.to_string()
}

fn default_target() -> String {
    MARKS_COLUMN.to_string()
}

impl ModelArtifact {
    /// Reads and validates an artifact from `path`.
    ///
    /// # Errors
    /// - `MlError::NotFound` if the file does not exist.
    /// - `MlError::ArtifactLoad` if it cannot be read, is not valid JSON for a
    ///   known model kind, or carries non-finite parameters.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| MlError::from_io(path, e, MlError::artifact))?;

        let artifact: ModelArtifact = serde_json::from_str(&content)
            .map_err(|e| MlError::artifact(path.to_path_buf(), format!("invalid model: {e}")))?;

        artifact
            .validate()
            .map_err(|reason| MlError::artifact(path.to_path_buf(), reason))?;

        info!("loaded model from '{}': {}", path.display(), artifact.describe());
        Ok(artifact)
    }

    /// Returns a stable identifier for the model kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::LinearRegression { .. } => "linear_regression",
        }
    }

    /// One-line human-readable description of the fitted function.
    pub fn describe(&self) -> String {
        match self {
            ModelArtifact::LinearRegression {
                coef,
                intercept,
                feature,
                target,
            } => format!("{target} = {coef:.4} * {feature} + {intercept:.4}"),
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        match self {
            ModelArtifact::LinearRegression { coef, intercept, .. } => {
                if !coef.is_finite() || !intercept.is_finite() {
                    return Err(format!(
                        "parameters must be finite, got coef={coef}, intercept={intercept}"
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Ordinary least-squares line fitted elsewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub coef: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(coef: f64, intercept: f64) -> Self {
        Self { coef, intercept }
    }
}

impl From<&ModelArtifact> for LinearModel {
    fn from(artifact: &ModelArtifact) -> Self {
        match artifact {
            ModelArtifact::LinearRegression { coef, intercept, .. } => Self::new(*coef, *intercept),
        }
    }
}

impl Regressor for LinearModel {
    /// y = coef*x + intercept
    #[inline]
    fn predict(&self, hours: f64) -> f64 {
        self.coef * hours + self.intercept
    }
}
