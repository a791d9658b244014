//! Error handling for hn.
//!
//! This module provides:
//! - [`HnError`]: The main error enum for all hn operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Serializable error with code, suggestion and context

mod codes;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for hn operations.
#[derive(Error, Debug)]
pub enum HnError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote store answered with an error envelope.
    #[error("Remote store error {status} ({code}): {message}")]
    Remote {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl HnError {
    /// Get the error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Http(err) if err.is_timeout() => ErrorCode::NetworkTimeout,
            Self::Http(err) if err.is_decode() => ErrorCode::RemoteMalformedResponse,
            Self::Http(_) => ErrorCode::NetworkUnreachable,
            Self::Remote { status, .. } => match status {
                401 | 403 => ErrorCode::RemoteAuthFailed,
                429 => ErrorCode::RemoteRateLimited,
                500.. => ErrorCode::RemoteUnavailable,
                _ => ErrorCode::RemoteRejected,
            },
            Self::InvalidQuery(_) => ErrorCode::QueryInvalid,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Server(_) => ErrorCode::InternalError,
        }
    }

    /// HTTP status used when this error terminates an inbound request.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self.code() {
            ErrorCode::QueryInvalid => 400,
            ErrorCode::NetworkUnreachable
            | ErrorCode::NetworkTimeout
            | ErrorCode::RemoteAuthFailed
            | ErrorCode::RemoteRateLimited
            | ErrorCode::RemoteRejected
            | ErrorCode::RemoteUnavailable
            | ErrorCode::RemoteMalformedResponse => 502,
            _ => 500,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Remote { status, code, .. } => {
                Some(serde_json::json!({ "remote_status": status, "remote_code": code }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_hn_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "QUERY_INVALID")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 401)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "config", "network")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn from_hn_error(err: &HnError) -> Self {
        let mut structured = Self::new(err.code(), err.to_string());
        structured.context = err.context();
        structured
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&HnError> for StructuredError {
    fn from(err: &HnError) -> Self {
        Self::from_hn_error(err)
    }
}

/// Result type alias using HnError.
pub type Result<T> = std::result::Result<T, HnError>;
