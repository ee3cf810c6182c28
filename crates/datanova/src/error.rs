//! Error types for profiling, charting and loading.
//!
//! Errors are serializable so the CLI can emit them as JSON alongside
//! `--json` output.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for the explorer.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The input dataset or file is invalid or missing.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A numeric-only operation was requested on a non-numeric column.
    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ExplorerError>,
    },
}

impl ExplorerError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ExplorerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code, preserved through any added context.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::NotNumeric(_) => "NOT_NUMERIC",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error is caused by the caller's request rather than
    /// by a failure reading or computing the data.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::InvalidInput(_)
            | Self::ColumnNotFound(_)
            | Self::NotNumeric(_)
            | Self::InvalidConfig(_) => true,
            Self::WithContext { source, .. } => source.is_user_error(),
            _ => false,
        }
    }
}

impl From<crate::config::ConfigValidationError> for ExplorerError {
    fn from(err: crate::config::ConfigValidationError) -> Self {
        ExplorerError::InvalidConfig(err.to_string())
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for ExplorerError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ExplorerError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ExplorerError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            ExplorerError::InvalidInput("empty".to_string()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            ExplorerError::ColumnNotFound("price".to_string()).error_code(),
            "COLUMN_NOT_FOUND"
        );
        assert_eq!(
            ExplorerError::NotNumeric("country".to_string()).error_code(),
            "NOT_NUMERIC"
        );
    }

    #[test]
    fn test_column_not_found_message() {
        let error = ExplorerError::ColumnNotFound("price".to_string());
        assert_eq!(error.to_string(), "Column 'price' not found in dataset");
    }

    #[test]
    fn test_is_user_error() {
        assert!(ExplorerError::ColumnNotFound("x".to_string()).is_user_error());
        assert!(
            ExplorerError::NotNumeric("x".to_string())
                .with_context("Building histogram")
                .is_user_error()
        );
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(!ExplorerError::Io(io).is_user_error());
    }

    #[test]
    fn test_error_serialization() {
        let error = ExplorerError::ColumnNotFound("points".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("COLUMN_NOT_FOUND"));
        assert!(json.contains("points"));
    }

    #[test]
    fn test_with_context() {
        let error =
            ExplorerError::ColumnNotFound("test".to_string()).with_context("During profiling");
        assert!(error.to_string().contains("During profiling"));
        assert_eq!(error.error_code(), "COLUMN_NOT_FOUND");
    }

    #[test]
    fn test_polars_result_context() {
        let res: std::result::Result<(), polars::error::PolarsError> = Err(
            polars::error::PolarsError::ComputeError("boom".into()),
        );
        let err = res.context("Reading parquet").unwrap_err();
        assert_eq!(err.error_code(), "POLARS_ERROR");
        assert!(err.to_string().starts_with("Reading parquet"));
    }
}
