mod artifact;
mod predictor;

pub use artifact::{LinearModel, ModelArtifact};
pub use predictor::{Predictor, CLAMP_MAX, CLAMP_MIN};

/// A pre-fitted single-feature regression function.
///
/// A `Regressor` only evaluates `f(hours) -> marks`. It does not:
/// - train or update its parameters,
/// - bound its input or its output,
/// - know anything about the dataset.
pub trait Regressor {
    /// Returns the raw model output for a single study-hours value.
    fn predict(&self, hours: f64) -> f64;
}

impl<F> Regressor for F
where
    F: Fn(f64) -> f64,
{
    fn predict(&self, hours: f64) -> f64 {
        self(hours)
    }
}
