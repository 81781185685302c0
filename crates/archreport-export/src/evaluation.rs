//! The rule evaluation contract consumed by the exporter.
//!
//! An evaluation pushes its violations to the caller one batch at a time,
//! once per violation category, together with the diagnostic message the
//! rule produced for that batch.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::violation::{CallViolation, FieldAccessViolation};

/// Outcome of checking one rule, enumerable by violation category.
pub trait EvaluationResult {
    /// Invoke `handler` once per batch of call violations.
    fn handle_calls(&self, handler: &mut dyn FnMut(&[CallViolation], &str));

    /// Invoke `handler` once per batch of field-access violations.
    fn handle_field_accesses(&self, handler: &mut dyn FnMut(&[FieldAccessViolation], &str));
}

/// One batch of violations with the message reported alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationBatch<T> {
    #[serde(default)]
    pub message: String,
    #[serde(default = "Vec::new")]
    pub violations: Vec<T>,
}

impl<T> ViolationBatch<T> {
    pub fn new(message: impl Into<String>, violations: Vec<T>) -> Self {
        Self {
            message: message.into(),
            violations,
        }
    }
}

/// An evaluation captured as data, typically written by an external analyzer
/// as `{"calls": [batch..], "field_accesses": [batch..]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvaluation {
    #[serde(default)]
    pub calls: Vec<ViolationBatch<CallViolation>>,
    #[serde(default)]
    pub field_accesses: Vec<ViolationBatch<FieldAccessViolation>>,
}

/// Errors loading a recorded evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("failed to read evaluation {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed evaluation {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RecordedEvaluation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calls(mut self, message: impl Into<String>, calls: Vec<CallViolation>) -> Self {
        self.calls.push(ViolationBatch::new(message, calls));
        self
    }

    pub fn with_field_accesses(
        mut self,
        message: impl Into<String>,
        accesses: Vec<FieldAccessViolation>,
    ) -> Self {
        self.field_accesses.push(ViolationBatch::new(message, accesses));
        self
    }

    /// Load an evaluation from a JSON file.
    pub fn load(path: &Path) -> Result<Self, EvaluationError> {
        let content = std::fs::read_to_string(path).map_err(|source| EvaluationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| EvaluationError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

impl EvaluationResult for RecordedEvaluation {
    fn handle_calls(&self, handler: &mut dyn FnMut(&[CallViolation], &str)) {
        for batch in &self.calls {
            handler(&batch.violations, &batch.message);
        }
    }

    fn handle_field_accesses(&self, handler: &mut dyn FnMut(&[FieldAccessViolation], &str)) {
        for batch in &self.field_accesses {
            handler(&batch.violations, &batch.message);
        }
    }
}
