//! Evaluation configuration.

/// How per-batch metrics combine into the reported dataset result.
///
/// The dataset evaluator historically overwrote its metric map on every
/// batch, so a multi-batch run reported the *last batch's* MAE/MSE rather
/// than the dataset-wide values. Both semantics are kept selectable: pick
/// [`MetricMode::LastBatch`] to reproduce existing runs, or
/// [`MetricMode::Aggregate`] for metrics in which every sample weighs
/// equally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MetricMode {
    /// Report the metrics of the final batch only.
    #[default]
    LastBatch,
    /// Report metrics aggregated over every sample in the dataset.
    Aggregate,
}

/// Configuration for a regression evaluation run.
#[derive(Clone, Debug)]
pub struct EvalConfig {
    /// Maximum samples per evaluation batch. Must be at least 1.
    pub mini_batch_size: usize,
    /// Keep computed embeddings on the samples after each batch instead of
    /// releasing them.
    pub embeddings_in_memory: bool,
    /// Metric aggregation semantics.
    pub metric_mode: MetricMode,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            mini_batch_size: 32,
            embeddings_in_memory: false,
            metric_mode: MetricMode::default(),
        }
    }
}

impl EvalConfig {
    /// Set the mini-batch size.
    pub fn mini_batch_size(mut self, size: usize) -> Self {
        self.mini_batch_size = size;
        self
    }

    /// Keep embeddings on the samples after evaluation.
    pub fn embeddings_in_memory(mut self, keep: bool) -> Self {
        self.embeddings_in_memory = keep;
        self
    }

    /// Select metric aggregation semantics.
    pub fn metric_mode(mut self, mode: MetricMode) -> Self {
        self.metric_mode = mode;
        self
    }
}
