use std::fmt;

#[derive(Debug)]
pub enum IdsError {
    ResourceUnavailable(String),
    ModelError(String),
    SchemaError(String),
    InputError(String),
    CaptureError(String),
    IoError(String),
}

impl fmt::Display for IdsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdsError::ResourceUnavailable(msg) => write!(f, "Resource unavailable: {}", msg),
            IdsError::ModelError(msg) => write!(f, "Model error: {}", msg),
            IdsError::SchemaError(msg) => write!(f, "Schema error: {}", msg),
            IdsError::InputError(msg) => write!(f, "Input error: {}", msg),
            IdsError::CaptureError(msg) => write!(f, "Capture error: {}", msg),
            IdsError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for IdsError {}

impl From<std::io::Error> for IdsError {
    fn from(err: std::io::Error) -> Self {
        IdsError::IoError(err.to_string())
    }
}

impl From<csv::Error> for IdsError {
    fn from(err: csv::Error) -> Self {
        IdsError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for IdsError {
    fn from(err: serde_json::Error) -> Self {
        IdsError::SchemaError(err.to_string())
    }
}

impl From<ctrlc::Error> for IdsError {
    fn from(err: ctrlc::Error) -> Self {
        IdsError::CaptureError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IdsError>;
