use thiserror::Error;

/// Main error type for the prediction engine
#[derive(Error, Debug)]
pub enum MedPredictError {
    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors (config, catalog files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Analysis requested without any symptom
    #[error("At least one symptom is required")]
    NoSymptoms,

    /// Storage backend errors
    #[error("Store error: {0}")]
    Store(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_yaml::Error> for MedPredictError {
    fn from(e: serde_yaml::Error) -> Self {
        MedPredictError::Config(e.to_string())
    }
}

impl From<String> for MedPredictError {
    fn from(s: String) -> Self {
        MedPredictError::Other(s)
    }
}

impl From<&str> for MedPredictError {
    fn from(s: &str) -> Self {
        MedPredictError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MedPredictError>;
