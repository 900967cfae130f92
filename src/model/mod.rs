//! Model capability required by the evaluator.
//!
//! The evaluator owns no architecture, optimizer, or serialization format.
//! Everything it needs from a model is captured by [`RegressionModel`]:
//! score a batch, switch to evaluation mode, and deserialize a replacement
//! instance from a checkpoint file.

use std::path::Path;

use crate::data::{Sample, Score};
use crate::error::Result;

/// A model that produces `(scores, loss)` for a batch of samples.
///
/// The forward pass receives the batch mutably so the model can cache the
/// embeddings it computes on the samples; the evaluator releases those
/// caches per batch unless configured otherwise.
pub trait RegressionModel {
    /// Score a batch, returning one [`Score`] per sample plus the scalar
    /// batch loss.
    ///
    /// Implementations must return exactly `batch.len()` scores, in batch
    /// order; the evaluator rejects anything else.
    fn forward_labels_and_loss(&mut self, batch: &mut [Sample]) -> Result<(Vec<Score>, f64)>;

    /// Switch the model to evaluation mode (dropout off, no gradient
    /// bookkeeping). Stateless models need not override this.
    fn set_eval_mode(&mut self) {}

    /// Deserialize a model instance from a checkpoint file.
    ///
    /// The checkpoint format is owned by the implementation; the evaluator
    /// only decides *when* to load (see
    /// [`RegressionEvaluator::final_test`](crate::eval::RegressionEvaluator::final_test)).
    fn load_from_file(path: &Path) -> Result<Self>
    where
        Self: Sized;
}
