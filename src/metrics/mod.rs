//! Regression evaluation metrics.
//!
//! - `regression`: MAE/MSE math over prediction/target slices
//! - [`Metric`]: metric identity, used as the key of a [`MetricMap`]
//!
//! # Example
//!
//! ```
//! use evaluar::metrics::{mean_squared_error, Metric};
//!
//! let mse = mean_squared_error(&[1.0, 2.0], &[1.0, 3.0]);
//! assert_eq!(mse, 0.5);
//! assert!(!Metric::Mse.higher_is_better());
//! ```

mod regression;

pub use regression::{mean_absolute_error, mean_squared_error, RunningErrors};

use std::collections::HashMap;
use std::fmt;

/// Available regression metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Mean Absolute Error
    Mae,
    /// Mean Squared Error
    Mse,
    /// Root Mean Squared Error
    Rmse,
}

impl Metric {
    /// Metric name as it appears in logs and result maps.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Mae => "mae",
            Metric::Mse => "mse",
            Metric::Rmse => "rmse",
        }
    }

    /// Whether higher values are better for this metric.
    ///
    /// All error metrics rank lower-is-better; callers ordering runs by MSE
    /// must sort ascending.
    pub fn higher_is_better(&self) -> bool {
        false
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Computed metric values keyed by metric identity.
pub type MetricMap = HashMap<Metric, f64>;
