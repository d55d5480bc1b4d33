use std::path::Path;

use ndarray::{Array1, ArrayView1};

use super::{artifact::ModelArtifact, LinearModel, Regressor};
use crate::error::Result;

/// Lower bound of a single prediction.
pub const CLAMP_MIN: f64 = 0.0;

/// Upper bound of a single prediction.
pub const CLAMP_MAX: f64 = 100.0;

/// Adapter between the UI and a pre-fitted [`Regressor`].
///
/// The input is never bounded here; the caller is responsible for keeping
/// study hours within the input box range.
#[derive(Debug, Clone)]
pub struct Predictor<M> {
    model: M,
}

impl Predictor<LinearModel> {
    /// Loads the model artifact stored at `path`.
    ///
    /// # Errors
    /// - `MlError::NotFound` if the file does not exist.
    /// - `MlError::ArtifactLoad` if the artifact is unreadable or invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let artifact = ModelArtifact::load(path)?;
        Ok(Self::new(LinearModel::from(&artifact)))
    }
}

impl<M: Regressor> Predictor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Predicts the marks for `hours`, saturated to `[CLAMP_MIN, CLAMP_MAX]`.
    pub fn predict_one(&self, hours: f64) -> f64 {
        self.model.predict(hours).clamp(CLAMP_MIN, CLAMP_MAX)
    }

    /// Predicts the marks for every value in `hours`, in order.
    ///
    /// Outputs are raw model values and are not clamped.
    pub fn predict_many(&self, hours: ArrayView1<'_, f64>) -> Array1<f64> {
        hours.mapv(|h| self.model.predict(h))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn clamps_high_raw_output() {
        let predictor = Predictor::new(|_h: f64| 137.5);
        assert_eq!(predictor.predict_one(23.0), 100.0);
    }

    #[test]
    fn clamps_negative_raw_output() {
        let predictor = Predictor::new(|_h: f64| -4.2);
        assert_eq!(predictor.predict_one(0.0), 0.0);
    }

    #[test]
    fn keeps_in_range_output_exact() {
        let predictor = Predictor::new(LinearModel::new(3.25, 10.125));
        assert_eq!(predictor.predict_one(4.0), 23.125);
    }

    #[test]
    fn input_is_not_bounded() {
        let predictor = Predictor::new(|h: f64| h);
        assert_eq!(predictor.predict_one(-50.0), 0.0);
        assert_eq!(predictor.predict_many(array![-50.0, 500.0].view()), array![-50.0, 500.0]);
    }

    #[test]
    fn predict_many_is_unclamped_and_ordered() {
        let predictor = Predictor::new(LinearModel::new(10.0, -5.0));
        let out = predictor.predict_many(array![0.0, 5.0, 12.0].view());
        assert_eq!(out, array![-5.0, 45.0, 115.0]);
    }

    #[test]
    fn predict_one_stays_in_bounds_for_finite_inputs() {
        let predictor = Predictor::new(LinearModel::new(9.75, 2.5));
        for h in [-1e300, -24.0, 0.0, 0.5, 7.3, 24.0, 1e300] {
            let y = predictor.predict_one(h);
            assert!((CLAMP_MIN..=CLAMP_MAX).contains(&y), "{h} -> {y}");
        }
    }
}
