use std::fs::File;
use std::path::Path;

use log::info;

use crate::error::{IdsError, Result};
use crate::features::{build_feature_row, EventInput};
use crate::predictor::{Classifier, Forest, ForestClassifier, Verdict};
use crate::schema::FeatureSchema;

/// Immutable detection context: the deserialized classifier plus the
/// feature schema it was trained against. Loaded once at startup and
/// passed by reference; if loading fails there is no engine value and the
/// prediction path stays unreachable.
pub struct DetectionEngine {
    schema: FeatureSchema,
    classifier: Box<dyn Classifier>,
}

impl DetectionEngine {
    /// Loads the two training artifacts from disk: the bincode-serialized
    /// random forest and the JSON feature-column sidecar.
    pub fn load(model_path: &Path, schema_path: &Path) -> Result<Self> {
        if !model_path.exists() {
            return Err(IdsError::ResourceUnavailable(format!(
                "model file '{}' not found",
                model_path.display()
            )));
        }
        if !schema_path.exists() {
            return Err(IdsError::ResourceUnavailable(format!(
                "feature column file '{}' not found",
                schema_path.display()
            )));
        }

        let mut f = File::open(model_path)?;
        let forest: Forest = bincode::deserialize_from(&mut f)
            .map_err(|e| IdsError::ModelError(format!("deserializing model: {}", e)))?;

        let schema = FeatureSchema::from_json_file(schema_path)?;
        info!(
            "loaded model '{}' with {} feature columns",
            model_path.display(),
            schema.len()
        );

        Ok(DetectionEngine {
            schema,
            classifier: Box::new(ForestClassifier::new(forest)),
        })
    }

    pub fn from_parts(schema: FeatureSchema, classifier: Box<dyn Classifier>) -> Self {
        DetectionEngine { schema, classifier }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Runs one inference: builds the feature row for the event and maps
    /// the predicted class to a verdict.
    pub fn predict(&self, input: &EventInput) -> Result<Verdict> {
        let row = build_feature_row(&self.schema, input);
        let class = self.classifier.predict_row(&row)?;
        Ok(Verdict::from_class(class))
    }
}
