//! Regression metric math: MAE, MSE, and running aggregation.

/// Mean Absolute Error over paired predictions and targets.
///
/// MAE = mean(|y_pred - y|)
///
/// Returns 0.0 for empty input.
///
/// # Example
///
/// ```
/// use evaluar::metrics::mean_absolute_error;
///
/// let mae = mean_absolute_error(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]);
/// assert!((mae - 0.5).abs() < 1e-12);
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn mean_absolute_error(predictions: &[f64], targets: &[f64]) -> f64 {
    assert_eq!(predictions.len(), targets.len());

    if predictions.is_empty() {
        return 0.0;
    }

    let sum: f64 = predictions.iter().zip(targets).map(|(&p, &t)| (p - t).abs()).sum();
    sum / predictions.len() as f64
}

/// Mean Squared Error over paired predictions and targets.
///
/// MSE = mean((y_pred - y)²)
///
/// Returns 0.0 for empty input.
///
/// # Example
///
/// ```
/// use evaluar::metrics::mean_squared_error;
///
/// let mse = mean_squared_error(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]);
/// assert!((mse - 1.0 / 3.0).abs() < 1e-12);
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn mean_squared_error(predictions: &[f64], targets: &[f64]) -> f64 {
    assert_eq!(predictions.len(), targets.len());

    if predictions.is_empty() {
        return 0.0;
    }

    let sum: f64 = predictions.iter().zip(targets).map(|(&p, &t)| (p - t).powi(2)).sum();
    sum / predictions.len() as f64
}

/// Running error sums for dataset-wide metric aggregation.
///
/// Batches feed their prediction/target pairs in via [`RunningErrors::extend`];
/// [`RunningErrors::mae`] and [`RunningErrors::mse`] read off the aggregate at
/// any point. This is what backs dataset-aggregate metric semantics, where
/// every sample weighs equally regardless of which batch it landed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningErrors {
    abs_sum: f64,
    sq_sum: f64,
    count: usize,
}

impl RunningErrors {
    /// Fold a batch of prediction/target pairs into the running sums.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    pub fn extend(&mut self, predictions: &[f64], targets: &[f64]) {
        assert_eq!(predictions.len(), targets.len());

        for (&p, &t) in predictions.iter().zip(targets) {
            self.abs_sum += (p - t).abs();
            self.sq_sum += (p - t).powi(2);
        }
        self.count += predictions.len();
    }

    /// Number of pairs folded in so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Aggregate MAE; 0.0 before any pairs are folded in.
    pub fn mae(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.abs_sum / self.count as f64
    }

    /// Aggregate MSE; 0.0 before any pairs are folded in.
    pub fn mse(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sq_sum / self.count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perfect_prediction_is_zero_error() {
        let values = [5.0];
        assert_eq!(mean_absolute_error(&values, &values), 0.0);
        assert_eq!(mean_squared_error(&values, &values), 0.0);
    }

    #[test]
    fn one_unit_miss_on_three_samples() {
        let preds = [1.0, 2.0, 3.0];
        let truths = [1.0, 2.0, 4.0];
        assert_relative_eq!(mean_absolute_error(&preds, &truths), 1.0 / 3.0);
        assert_relative_eq!(mean_squared_error(&preds, &truths), 1.0 / 3.0);
    }

    #[test]
    fn squared_error_amplifies_large_misses() {
        let preds = [0.0, 0.0];
        let truths = [1.0, 3.0];
        assert_relative_eq!(mean_absolute_error(&preds, &truths), 2.0);
        assert_relative_eq!(mean_squared_error(&preds, &truths), 5.0);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(mean_absolute_error(&[], &[]), 0.0);
        assert_eq!(mean_squared_error(&[], &[]), 0.0);
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths_panic() {
        mean_squared_error(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn running_errors_match_single_pass() {
        let preds = [1.0, 2.0, 3.0, 4.0, 5.0];
        let truths = [1.5, 2.0, 2.0, 4.5, 5.0];

        let mut running = RunningErrors::default();
        running.extend(&preds[..2], &truths[..2]);
        running.extend(&preds[2..], &truths[2..]);

        assert_eq!(running.count(), 5);
        assert_relative_eq!(running.mae(), mean_absolute_error(&preds, &truths));
        assert_relative_eq!(running.mse(), mean_squared_error(&preds, &truths));
    }

    #[test]
    fn running_errors_empty_is_zero() {
        let running = RunningErrors::default();
        assert_eq!(running.mae(), 0.0);
        assert_eq!(running.mse(), 0.0);
    }
}
