//! Error types with actionable diagnostics.
//!
//! Evaluation failures carry enough context to fix the offending input
//! without re-running under a debugger.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for evaluation operations.
pub type Result<T> = std::result::Result<T, EvaluarError>;

/// Errors that can occur while evaluating a regression model.
#[derive(Error, Debug)]
pub enum EvaluarError {
    /// A sample carries no label to score predictions against.
    #[error("sample \"{text}\" has no labels\n  → attach a numeric label before evaluation")]
    MissingLabel {
        /// Text of the offending sample.
        text: String,
    },

    /// A label value could not be parsed as a number.
    #[error("label value \"{value}\" is not numeric\n  → regression labels must parse as floating-point")]
    InvalidLabel {
        /// The raw label value.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },

    /// The model produced a score list that does not line up with the batch.
    #[error("model returned {actual} scores for a batch of {expected} samples")]
    ScoreCountMismatch {
        /// Number of samples in the batch.
        expected: usize,
        /// Number of scores the model returned.
        actual: usize,
    },

    /// A checkpoint file existed but could not be deserialized into a model.
    #[error("failed to load checkpoint {path}: {message}")]
    CheckpointLoad {
        /// Path of the checkpoint file.
        path: PathBuf,
        /// Deserialization failure detail.
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
