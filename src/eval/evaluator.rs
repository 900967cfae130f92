//! Batched regression evaluation and the final-test driver.

use std::path::Path;

use crate::data::{Sample, Score};
use crate::error::{EvaluarError, Result};
use crate::eval::config::{EvalConfig, MetricMode};
use crate::eval::logger::{EvalLog, LogFacade};
use crate::metrics::{mean_absolute_error, mean_squared_error, Metric, MetricMap, RunningErrors};
use crate::model::RegressionModel;

/// Conventional file name of the best checkpoint under a training base path.
pub const BEST_MODEL_FILE: &str = "best-model.pt";

/// Summary of one dataset evaluation.
#[derive(Debug, Clone)]
pub struct DatasetEval {
    /// Computed metric values.
    pub metrics: MetricMap,
    /// Sum of per-batch losses divided by total sample count.
    pub loss: f64,
}

impl DatasetEval {
    /// MAE of the run; NaN when no batch was evaluated.
    pub fn mae(&self) -> f64 {
        self.metrics.get(&Metric::Mae).copied().unwrap_or(f64::NAN)
    }

    /// MSE of the run; NaN when no batch was evaluated.
    pub fn mse(&self) -> f64 {
        self.metrics.get(&Metric::Mse).copied().unwrap_or(f64::NAN)
    }
}

/// Outcome of a final test: the scalar objective plus the model that
/// produced it, which is the checkpoint-loaded instance when a best
/// checkpoint existed.
#[derive(Debug)]
pub struct FinalTest<M> {
    /// The evaluated model, handed back to the caller to substitute for the
    /// one it passed in.
    pub model: M,
    /// Test-set MSE, the objective value for downstream reporting.
    pub mse: f64,
}

/// Evaluates a regression model's scalar predictions against ground-truth
/// numeric labels.
///
/// The evaluator owns only configuration and a logging sink; model, data,
/// and checkpoint format all arrive through its method parameters.
///
/// # Example
///
/// ```ignore
/// use evaluar::{EvalConfig, RegressionEvaluator};
///
/// let evaluator = RegressionEvaluator::new(EvalConfig::default().mini_batch_size(16));
/// let (metrics, loss) = evaluator.evaluate_batch_scores(&mut model, &mut dev_samples)?;
/// ```
pub struct RegressionEvaluator<L: EvalLog = LogFacade> {
    config: EvalConfig,
    log: L,
}

impl RegressionEvaluator<LogFacade> {
    /// Create an evaluator logging through the `log` facade.
    pub fn new(config: EvalConfig) -> Self {
        Self { config, log: LogFacade }
    }
}

impl<L: EvalLog> RegressionEvaluator<L> {
    /// Create an evaluator with an injected logging sink.
    pub fn with_logger(config: EvalConfig, log: L) -> Self {
        Self { config, log }
    }

    /// Evaluation configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Run the batched evaluation loop over `samples`.
    ///
    /// Samples are partitioned into consecutive batches of at most
    /// `mini_batch_size`. Each batch is scored by the model, ground truth
    /// is read from each sample's first label, and batch MAE/MSE land in
    /// the metric map according to the configured [`MetricMode`]. Cached
    /// embeddings are released per batch unless `embeddings_in_memory` is
    /// set.
    ///
    /// Returns the metric map and the summed batch loss normalized by total
    /// sample count. An empty `samples` slice yields an empty map and a NaN
    /// loss; this mirrors the unguarded divide in the historical evaluator
    /// and is left to callers to reject.
    ///
    /// # Errors
    ///
    /// Propagates model failures, samples without a numeric first label,
    /// and score lists that do not line up with the batch.
    pub fn evaluate_batch_scores<M: RegressionModel>(
        &self,
        model: &mut M,
        samples: &mut [Sample],
    ) -> Result<(MetricMap, f64)> {
        let total = samples.len();
        let batch_size = self.config.mini_batch_size.max(1);

        let mut metrics = MetricMap::new();
        let mut running = RunningErrors::default();
        let mut loss_sum = 0.0;

        for batch in samples.chunks_mut(batch_size) {
            let (scores, loss) = model.forward_labels_and_loss(batch)?;

            if scores.len() != batch.len() {
                return Err(EvaluarError::ScoreCountMismatch {
                    expected: batch.len(),
                    actual: scores.len(),
                });
            }

            let mut truths = Vec::with_capacity(batch.len());
            for sample in batch.iter() {
                truths.push(sample.target_value()?);
            }
            let preds: Vec<f64> = scores.iter().map(Score::value).collect();

            if !self.config.embeddings_in_memory {
                for sample in batch.iter_mut() {
                    sample.clear_embedding();
                }
            }

            loss_sum += loss;

            let (mae, mse) = match self.config.metric_mode {
                MetricMode::LastBatch => (
                    mean_absolute_error(&preds, &truths),
                    mean_squared_error(&preds, &truths),
                ),
                MetricMode::Aggregate => {
                    running.extend(&preds, &truths);
                    (running.mae(), running.mse())
                }
            };
            metrics.insert(Metric::Mae, mae);
            metrics.insert(Metric::Mse, mse);
            metrics.insert(Metric::Rmse, mse.sqrt());
        }

        Ok((metrics, loss_sum / total as f64))
    }

    /// Evaluate a named dataset and log its one-line summary.
    ///
    /// The logged line is part of the observable contract:
    /// `"{name:<5}: loss {loss:.8} - mse {mse:.4} - mae {mae:.4}"`
    /// (fixed-point, 8 and 4 decimal places).
    pub fn evaluate_dataset<M: RegressionModel>(
        &self,
        name: &str,
        model: &mut M,
        samples: &mut [Sample],
    ) -> Result<DatasetEval> {
        let (metrics, loss) = self.evaluate_batch_scores(model, samples)?;
        let result = DatasetEval { metrics, loss };

        let (mae, mse) = (result.mae(), result.mse());
        self.log.info(&format!("{name:<5}: loss {loss:.8} - mse {mse:.4} - mae {mae:.4}"));

        Ok(result)
    }

    /// Run the final test: reload the best checkpoint when one exists,
    /// evaluate the held-out test set, and report aggregate MAE/MSE.
    ///
    /// The model is taken by value and handed back in the returned
    /// [`FinalTest`]; when `<base_path>/best-model.pt` exists, the returned
    /// handle is the checkpoint-loaded instance and the one passed in is
    /// dropped. A missing checkpoint is not an error: evaluation proceeds
    /// with the model passed in.
    ///
    /// Returns the test-set MSE as the objective value, e.g. for
    /// hyperparameter search. The `AVG` line renders metrics with default
    /// `f64` formatting, so whole numbers print without a trailing `.0`
    /// (`AVG: mse 1 - mae 1`).
    ///
    /// # Errors
    ///
    /// Propagates checkpoint deserialization failures and everything
    /// [`Self::evaluate_batch_scores`] can fail with.
    pub fn final_test<M: RegressionModel>(
        &self,
        model: M,
        test: &mut [Sample],
        base_path: &Path,
    ) -> Result<FinalTest<M>> {
        self.log.separator();
        self.log.info("Testing using best model ...");

        let mut model = model;
        model.set_eval_mode();

        let checkpoint = base_path.join(BEST_MODEL_FILE);
        if checkpoint.exists() {
            model = M::load_from_file(&checkpoint)?;
            model.set_eval_mode();
        }

        let (metrics, _loss) = self.evaluate_batch_scores(&mut model, test)?;

        let mae = metrics.get(&Metric::Mae).copied().unwrap_or(f64::NAN);
        let mse = metrics.get(&Metric::Mse).copied().unwrap_or(f64::NAN);
        self.log.info(&format!("AVG: mse {mse} - mae {mae}"));
        self.log.separator();

        Ok(FinalTest { model, mse })
    }
}
