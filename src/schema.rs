use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{IdsError, Result};

/// Ordered list of feature columns the classifier was trained on, plus a
/// name -> index map built once at load time. Column order must match the
/// training order exactly, so the schema is immutable after construction.
pub struct FeatureSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(IdsError::SchemaError(format!(
                    "duplicate feature column '{}'",
                    name
                )));
            }
        }
        Ok(FeatureSchema { names, index })
    }

    /// Loads the feature-column sidecar: a JSON array written by the
    /// training process. Every element is coerced to a string so that
    /// numeric column labels survive the round trip.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let raw: Vec<Value> = serde_json::from_str(&contents)?;
        let names = raw
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();
        FeatureSchema::new(names)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a column, or None when the training data never had it.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}
