//! Data units flowing through an evaluation run.
//!
//! - [`Label`]: ground-truth value attached to a sample
//! - [`Score`]: model prediction, raw or confidence-wrapped
//! - [`Sample`]: one input text with its labels and cached embedding
//!
//! Samples are transient: they are constructed for an evaluation call and
//! discarded afterwards. The only state the evaluator touches is the cached
//! embedding, which the model fills in during a forward pass and the
//! evaluator releases per batch unless configured to keep embeddings in
//! memory.

use serde::{Deserialize, Serialize};

use crate::error::{EvaluarError, Result};

/// Ground-truth label carried by a sample.
///
/// Labels are stored as strings, matching how annotation pipelines emit
/// them; regression evaluation parses them to `f64` on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    value: String,
}

impl Label {
    /// Create a label from its raw value.
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    /// Raw label value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parse the label as a regression target.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluarError::InvalidLabel`] when the value is not numeric.
    pub fn numeric(&self) -> Result<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .map_err(|source| EvaluarError::InvalidLabel { value: self.value.clone(), source })
    }
}

/// A model's prediction for one sample.
///
/// Scoring heads differ in what they emit: a plain regression head produces
/// a bare number, while heads that also estimate their own certainty wrap
/// the number with a confidence. Both resolve to the same numeric value for
/// metric purposes via [`Score::value`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Score {
    /// Bare predicted value.
    Raw(f64),
    /// Predicted value with an attached confidence.
    Confident {
        /// Predicted value.
        value: f64,
        /// Model confidence in the prediction.
        confidence: f64,
    },
}

impl Score {
    /// Numeric prediction, regardless of variant.
    pub fn value(&self) -> f64 {
        match *self {
            Score::Raw(value) => value,
            Score::Confident { value, .. } => value,
        }
    }

    /// Confidence of the prediction, if the scoring head produced one.
    pub fn confidence(&self) -> Option<f64> {
        match *self {
            Score::Raw(_) => None,
            Score::Confident { confidence, .. } => Some(confidence),
        }
    }
}

/// One input unit: a text, its ground-truth labels, and the embedding a
/// model computed for it (if any).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    text: String,
    labels: Vec<Label>,
    embedding: Option<Vec<f32>>,
}

impl Sample {
    /// Create an unlabeled sample.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), labels: Vec::new(), embedding: None }
    }

    /// Create a sample with a single label.
    ///
    /// # Example
    ///
    /// ```
    /// use evaluar::Sample;
    ///
    /// let sample = Sample::labeled("great movie", "4.5");
    /// assert_eq!(sample.labels().len(), 1);
    /// ```
    pub fn labeled(text: impl Into<String>, label: impl Into<String>) -> Self {
        let mut sample = Self::new(text);
        sample.add_label(Label::new(label));
        sample
    }

    /// Sample text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attach a label.
    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// All labels on this sample.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Ground-truth regression target: the numeric value of the first label.
    ///
    /// # Errors
    ///
    /// [`EvaluarError::MissingLabel`] when the sample has no labels,
    /// [`EvaluarError::InvalidLabel`] when the first label is not numeric.
    pub fn target_value(&self) -> Result<f64> {
        let label = self
            .labels
            .first()
            .ok_or_else(|| EvaluarError::MissingLabel { text: self.text.clone() })?;
        label.numeric()
    }

    /// Store the embedding a model computed for this sample.
    pub fn set_embedding(&mut self, embedding: Vec<f32>) {
        self.embedding = Some(embedding);
    }

    /// Cached embedding, if one is stored.
    pub fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref()
    }

    /// Release the cached embedding.
    pub fn clear_embedding(&mut self) {
        self.embedding = None;
    }
}
