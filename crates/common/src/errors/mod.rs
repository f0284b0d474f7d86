//! Error types for ScholarRec
//!
//! Provides a comprehensive error handling system with:
//! - Distinct error types for different failure modes
//! - Error codes for machine-readable identification
//! - Precondition vs. fault classification for callers

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Error codes for machine-readable error identification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (1xxx)
    ValidationError,
    MissingInput,
    InsufficientPredictions,
    EmptyInput,

    // Catalog errors (5xxx)
    DuplicateArticle,

    // Collaborator errors (8xxx)
    ClassifierError,

    // Internal errors (9xxx)
    DataLoadError,
    ConfigurationError,
    SerializationError,
    InternalError,
}

impl ErrorCode {
    /// Get the numeric code for this error
    pub fn as_code(&self) -> u16 {
        match self {
            // Validation (1xxx)
            ErrorCode::ValidationError => 1001,
            ErrorCode::MissingInput => 1002,
            ErrorCode::InsufficientPredictions => 1003,
            ErrorCode::EmptyInput => 1004,

            // Catalog (5xxx)
            ErrorCode::DuplicateArticle => 5001,

            // Collaborators (8xxx)
            ErrorCode::ClassifierError => 8001,

            // Internal (9xxx)
            ErrorCode::DataLoadError => 9001,
            ErrorCode::ConfigurationError => 9002,
            ErrorCode::SerializationError => 9003,
            ErrorCode::InternalError => 9999,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>
    },

    #[error("Recommendation requires text, an author, or both")]
    MissingInput,

    #[error("y_pred must contain at least top_k={top_k} elements, got {len}")]
    InsufficientPredictions { top_k: usize, len: usize },

    #[error("Empty input: {argument} must contain at least one element")]
    EmptyInput { argument: String },

    // Catalog errors
    #[error("Duplicate article id in catalog: {id}")]
    DuplicateArticle { id: String },

    // Collaborator errors
    #[error("Topic classifier error: {message}")]
    Classifier { message: String },

    // Internal errors
    #[error("Failed to load {path}: {message}")]
    DataLoad { path: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::MissingInput => ErrorCode::MissingInput,
            AppError::InsufficientPredictions { .. } => ErrorCode::InsufficientPredictions,
            AppError::EmptyInput { .. } => ErrorCode::EmptyInput,
            AppError::DuplicateArticle { .. } => ErrorCode::DuplicateArticle,
            AppError::Classifier { .. } => ErrorCode::ClassifierError,
            AppError::DataLoad { .. } => ErrorCode::DataLoadError,
            AppError::Configuration { .. } => ErrorCode::ConfigurationError,
            AppError::Serialization(_) => ErrorCode::SerializationError,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Caller supplied arguments that violate an operation's precondition
    pub fn is_precondition(&self) -> bool {
        self.code().as_code() < 2000
    }

    /// Shorthand for a classifier failure
    pub fn classifier(message: impl Into<String>) -> Self {
        AppError::Classifier { message: message.into() }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal {
            message: err.to_string()
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration {
            message: err.to_string()
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let field = err.field_errors().keys().next().map(|f| f.to_string());
        AppError::Validation {
            message: err.to_string(),
            field,
        }
    }
}
