//! Error types for the phenology dashboard.

use thiserror::Error;

/// Result type alias using PhenoError.
pub type PhenoResult<T> = Result<T, PhenoError>;

/// Primary error type for dataset loading and selection.
#[derive(Debug, Error)]
pub enum PhenoError {
    // === Startup Errors ===
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Malformed dataset at line {line}: {message}")]
    MalformedDataset { line: u64, message: String },

    #[error("Dataset contains no rows: {0}")]
    EmptyDataset(String),

    #[error("Reference dates do not fit the DOY calendar: {0}")]
    CalendarMismatch(String),

    #[error("Map access token not configured: {0}")]
    MissingMapCredential(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    // === Selection Errors ===
    #[error("Invalid selection for '{param}': {message}")]
    InvalidSelection { param: String, message: String },

    // === Infrastructure Errors ===
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl PhenoError {
    /// Shorthand for an out-of-domain filter value.
    pub fn invalid_selection(param: impl Into<String>, message: impl Into<String>) -> Self {
        PhenoError::InvalidSelection {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable code used in API exception bodies.
    pub fn exception_code(&self) -> &'static str {
        match self {
            PhenoError::InvalidSelection { .. } => "InvalidSelection",
            PhenoError::MissingMapCredential(_) => "MapUnavailable",
            PhenoError::DatasetNotFound(_)
            | PhenoError::MalformedDataset { .. }
            | PhenoError::EmptyDataset(_)
            | PhenoError::CalendarMismatch(_)
            | PhenoError::ConfigError(_) => "StartupFailure",
            PhenoError::InternalError(_) => "NoApplicableCode",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            PhenoError::InvalidSelection { .. } => 400,
            PhenoError::MissingMapCredential(_) => 503,
            _ => 500,
        }
    }
}

impl From<std::io::Error> for PhenoError {
    fn from(err: std::io::Error) -> Self {
        PhenoError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for PhenoError {
    fn from(err: serde_json::Error) -> Self {
        PhenoError::InternalError(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_is_client_error() {
        let err = PhenoError::invalid_selection("doy", "not a canonical day of year: 17");
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.exception_code(), "InvalidSelection");
        assert!(err.to_string().contains("doy"));
    }

    #[test]
    fn test_startup_failures_are_server_errors() {
        let err = PhenoError::MalformedDataset {
            line: 3,
            message: "bad ndvi".into(),
        };
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.exception_code(), "StartupFailure");
        assert_eq!(
            PhenoError::InternalError("boom".into()).exception_code(),
            "NoApplicableCode"
        );
    }

    #[test]
    fn test_missing_credential_is_unavailable() {
        let err = PhenoError::MissingMapCredential("MAPBOX_TOKEN".into());
        assert_eq!(err.http_status_code(), 503);
        assert_eq!(err.exception_code(), "MapUnavailable");
    }
}
