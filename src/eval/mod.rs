//! Regression evaluation driver.
//!
//! - `config`: evaluation configuration (batch size, embedding retention,
//!   metric aggregation semantics)
//! - `logger`: injected logging capability and its sinks
//! - `evaluator`: [`RegressionEvaluator`] with the batched evaluation loop,
//!   the per-dataset summary, and the final-test checkpoint driver
//!
//! # Example
//!
//! ```ignore
//! use evaluar::{EvalConfig, RegressionEvaluator};
//!
//! let evaluator = RegressionEvaluator::new(EvalConfig::default());
//! let summary = evaluator.evaluate_dataset("dev", &mut model, &mut samples)?;
//! println!("dev mse: {:.4}", summary.mse());
//! ```

mod config;
mod evaluator;
mod logger;

pub use config::{EvalConfig, MetricMode};
pub use evaluator::{DatasetEval, FinalTest, RegressionEvaluator, BEST_MODEL_FILE};
pub use logger::{EvalLog, LogFacade, MemoryLog};
