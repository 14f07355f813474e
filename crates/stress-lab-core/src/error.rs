use thiserror::Error;

#[derive(Debug, Error)]
pub enum StressLabError {
    #[error("Unknown scenario: '{0}'")]
    UnknownScenarioKind(String),

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StressLabError {
    fn from(e: serde_json::Error) -> Self {
        StressLabError::SerializationError(e.to_string())
    }
}
