use std::fmt;

use serde::Serialize;
use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{IdsError, Result};

/// Trained model used by this crate: a SmartCore random forest over f64
/// feature rows with usize class labels, matching the artifact the
/// training process serializes with bincode.
pub type Forest = RandomForestClassifier<f64, usize, DenseMatrix<f64>, Vec<usize>>;

/// Single-row prediction entry point. The production implementation wraps
/// the deserialized random forest; tests substitute fixed-output stand-ins.
pub trait Classifier {
    fn predict_row(&self, row: &[f64]) -> Result<usize>;
}

pub struct ForestClassifier {
    forest: Forest,
}

impl ForestClassifier {
    pub fn new(forest: Forest) -> Self {
        ForestClassifier { forest }
    }
}

impl Classifier for ForestClassifier {
    fn predict_row(&self, row: &[f64]) -> Result<usize> {
        let instance = DenseMatrix::new(1, row.len(), row.to_vec(), false);
        let pred = self
            .forest
            .predict(&instance)
            .map_err(|e| IdsError::ModelError(format!("prediction failed: {:?}", e)))?;
        pred.first()
            .copied()
            .ok_or_else(|| IdsError::ModelError("model returned no prediction".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    High,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => f.write_str("HIGH"),
            Severity::Low => f.write_str("LOW"),
        }
    }
}

/// Two-class outcome of one inference call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Attack,
    Normal,
}

impl Verdict {
    /// Class 1 is an attack. Anything else, including classes the model
    /// was never trained to emit, reads as normal traffic.
    pub fn from_class(class: usize) -> Self {
        if class == 1 {
            Verdict::Attack
        } else {
            Verdict::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Attack => "ATTACK",
            Verdict::Normal => "NORMAL",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Verdict::Attack => Severity::High,
            Verdict::Normal => Severity::Low,
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Verdict::Attack)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
