use ndarray::Array1;

use crate::{
    data::StudyDataset,
    model::{Predictor, Regressor},
};

/// Number of points in the regression-line sweep.
pub const LINE_POINTS: usize = 100;

/// Returns `n` evenly spaced values over `[start, end]`.
///
/// - `n == 0` yields an empty array.
/// - `n == 1` yields `[start]`.
/// - Otherwise both endpoints are included exactly.
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let last = (n - 1) as f64;
            let step = (end - start) / last;
            let mut xs = if step.is_finite() {
                Array1::from_shape_fn(n, |i| start + step * i as f64)
            } else {
                // `end - start` overflows; interpolate without forming the span.
                Array1::from_shape_fn(n, |i| {
                    let t = i as f64 / last;
                    start * (1.0 - t) + end * t
                })
            };
            xs[n - 1] = end;
            xs
        }
    }
}

/// The fitted curve evaluated over the dataset's study-hours domain.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionLine {
    pub xs: Array1<f64>,
    pub ys: Array1<f64>,
}

impl RegressionLine {
    /// Sweeps `points` values from the smallest to the largest study hours
    /// in `dataset` through [`Predictor::predict_many`].
    ///
    /// # Returns
    /// `None` if the dataset is empty.
    pub fn sweep<M: Regressor>(
        dataset: &StudyDataset,
        predictor: &Predictor<M>,
        points: usize,
    ) -> Option<Self> {
        let (lo, hi) = dataset.hours_range()?;
        let xs = linspace(lo, hi, points);
        let ys = predictor.predict_many(xs.view());
        Some(Self { xs, ys })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// `(x, y)` pairs in sweep order, as consumed by line charts.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }
}
