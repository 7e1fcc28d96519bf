pub mod capture;
pub mod engine;
pub mod error;
pub mod features;
pub mod predictor;
pub mod schema;


pub use engine::DetectionEngine;
pub use error::{IdsError, Result};
pub use features::{build_feature_row, EventInput, Protocol, Service};
pub use predictor::{Classifier, Severity, Verdict};
pub use schema::FeatureSchema;
