//! evaluar: regression evaluation for text regression models.
//!
//! Evaluates a model's scalar predictions against ground-truth numeric
//! labels using MAE and MSE, and drives a final-test routine that reloads
//! the best checkpoint and reports aggregate error metrics. The crate does
//! not train: architecture, embeddings, optimizers, and checkpoint formats
//! are owned by collaborators behind the [`RegressionModel`] trait.
//!
//! ## Architecture
//!
//! - `data`: samples, labels, and prediction scores
//! - `metrics`: MAE/MSE math and the metric result map
//! - `model`: the capability a model must offer the evaluator
//! - `eval`: configuration, injected logging, and [`RegressionEvaluator`]
//!
//! ## Example
//!
//! ```
//! use std::path::Path;
//! use evaluar::{EvalConfig, RegressionEvaluator, RegressionModel, Result, Sample, Score};
//!
//! /// Predicts the same value for every sample.
//! struct MeanModel(f64);
//!
//! impl RegressionModel for MeanModel {
//!     fn forward_labels_and_loss(&mut self, batch: &mut [Sample]) -> Result<(Vec<Score>, f64)> {
//!         Ok((batch.iter().map(|_| Score::Raw(self.0)).collect(), 0.0))
//!     }
//!
//!     fn load_from_file(_path: &Path) -> Result<Self> {
//!         unreachable!("no checkpoints in this example")
//!     }
//! }
//!
//! # fn main() -> evaluar::Result<()> {
//! let evaluator = RegressionEvaluator::new(EvalConfig::default());
//! let mut model = MeanModel(3.0);
//! let mut samples = vec![
//!     Sample::labeled("solid but slow", "2.0"),
//!     Sample::labeled("instant favorite", "4.0"),
//! ];
//!
//! let summary = evaluator.evaluate_dataset("dev", &mut model, &mut samples)?;
//! assert_eq!(summary.mse(), 1.0);
//! assert_eq!(summary.mae(), 1.0);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod eval;
pub mod metrics;
pub mod model;

pub use data::{Label, Sample, Score};
pub use error::{EvaluarError, Result};
pub use eval::{
    DatasetEval, EvalConfig, EvalLog, FinalTest, LogFacade, MemoryLog, MetricMode,
    RegressionEvaluator, BEST_MODEL_FILE,
};
pub use metrics::{mean_absolute_error, mean_squared_error, Metric, MetricMap};
pub use model::RegressionModel;
