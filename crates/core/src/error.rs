//! Error handling with codes, context and recovery suggestions
//!
//! Every failure the locator can report carries:
//! - An error code for programmatic handling
//! - A human-readable message
//! - Optional context and a recovery suggestion
//! - A serializable report form for `--format json`

use nursery_geo::{GeoError, GeoErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // General errors (1xxx)
    Unknown = 1000,
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    InvalidConfigValue = 3003,

    // Dataset errors (4xxx)
    DatasetError = 4000,
    MissingColumns = 4001,
    InvalidRecord = 4002,
    EmptyDataset = 4003,

    // Geo errors (5xxx)
    GeoError = 5000,
    InvalidCoordinate = 5001,
    InvalidBoundary = 5002,

    // Render errors (6xxx)
    RenderError = 6000,
    TemplateError = 6001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            4 => "Dataset",
            5 => "Geo",
            6 => "Render",
            _ => "Unknown",
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.code() / 1000 {
            3 => exit_codes::CONFIG_ERROR,
            4 => exit_codes::DATASET_ERROR,
            5 => exit_codes::GEO_ERROR,
            6 => exit_codes::RENDER_ERROR,
            _ => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
        }
    }

    // Convenience constructors

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check that the file exists and you have read permissions")
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a nursery-locator.toml file or use --config to specify a path")
    }

    pub fn missing_columns(required: &[&str], missing: &[&str]) -> Self {
        Self::new(
            ErrorCode::MissingColumns,
            format!("Dataset must include: {}", required.join(", ")),
        )
        .with_context(format!("Missing columns: {}", missing.join(", ")))
        .with_suggestion("Add the missing columns to the header row of the dataset")
    }

    pub fn invalid_record(row: usize, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidRecord,
            format!("Invalid nursery record at row {}: {}", row, message.into()),
        )
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RenderError, message)
    }

    /// Re-map IO errors from opening `path` so the message names the file
    pub fn from_io_at(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::file_not_found(path).with_source(err)
        } else {
            let message = format!("Failed to read {}: {}", path.as_ref().display(), err);
            Self::from(err).with_context(message)
        }
    }
}

/// Serializable error report for logging and JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const USAGE_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DATASET_ERROR: i32 = 4;
    pub const GEO_ERROR: i32 = 5;
    pub const RENDER_ERROR: i32 = 6;
}

// Implement From for common error types

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::new(ErrorCode::DatasetError, format!("CSV error: {}", err)).with_source(err)
    }
}

impl From<GeoError> for Error {
    fn from(err: GeoError) -> Self {
        let code = match err.code() {
            GeoErrorCode::InvalidCoordinate => ErrorCode::InvalidCoordinate,
            GeoErrorCode::EmptyDataset => ErrorCode::EmptyDataset,
            GeoErrorCode::InvalidBoundary
            | GeoErrorCode::GeoJsonParsing
            | GeoErrorCode::JsonParsing => ErrorCode::InvalidBoundary,
        };
        let suggestion = match code {
            ErrorCode::EmptyDataset => Some("Add at least one nursery row to the dataset"),
            ErrorCode::InvalidCoordinate => {
                Some("Latitude must be within [-90, 90] and longitude within [-180, 180]")
            }
            _ => None,
        };
        let error = Error::new(code, err.to_string()).with_source(err);
        match suggestion {
            Some(s) => error.with_suggestion(s),
            None => error,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}
