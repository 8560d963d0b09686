use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SiteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid event data: {0}")]
    DataShape(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Element not found: {0}")]
    MissingElement(String),
}

impl SiteError {
    /// Failures that should put the catalog into its error phase.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            SiteError::Network(_) | SiteError::Parse(_) | SiteError::DataShape(_)
        )
    }
}

impl From<ValidationErrors> for SiteError {
    fn from(errors: ValidationErrors) -> Self {
        Self::DataShape(errors.to_string())
    }
}

impl From<JsonError> for SiteError {
    fn from(error: JsonError) -> Self {
        Self::Parse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_parse_errors() {
        let err: SiteError = serde_json::from_str::<Vec<u8>>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, SiteError::Parse(_)));
        assert!(err.is_load_failure());
    }

    #[test]
    fn cache_errors_are_not_load_failures() {
        assert!(!SiteError::Cache("quota".into()).is_load_failure());
        assert!(!SiteError::MissingElement("#eventsGrid".into()).is_load_failure());
    }
}
