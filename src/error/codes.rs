//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 3xx: Config errors
//! - 4xx: Query errors
//! - 5xx: Network and remote store errors
//! - 6xx: Serialization errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode and HTTP error bodies.
///
/// Each variant maps to a numeric code (e.g., `QueryInvalid` -> E401).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Query errors (4xx)
    // ========================================
    /// E401: Search request body is not a valid query
    QueryInvalid,

    // ========================================
    // Network / remote store errors (5xx)
    // ========================================
    /// E501: Cannot reach the remote store
    NetworkUnreachable,
    /// E502: Request to the remote store timed out
    NetworkTimeout,
    /// E503: Remote store rejected the API key
    RemoteAuthFailed,
    /// E504: Remote store is rate limiting us
    RemoteRateLimited,
    /// E505: Remote store rejected the request (bad filter, unknown database)
    RemoteRejected,
    /// E506: Remote store failed internally
    RemoteUnavailable,
    /// E507: Remote store answered with a body that is not a query page
    RemoteMalformedResponse,

    // ========================================
    // Serialization errors (6xx)
    // ========================================
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected internal error
    InternalError,
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `QueryInvalid` -> 401).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,

            Self::QueryInvalid => 401,

            Self::NetworkUnreachable => 501,
            Self::NetworkTimeout => 502,
            Self::RemoteAuthFailed => 503,
            Self::RemoteRateLimited => 504,
            Self::RemoteRejected => 505,
            Self::RemoteUnavailable => 506,
            Self::RemoteMalformedResponse => 507,

            Self::SerializationError => 605,

            Self::InternalError => 901,
            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E401").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::ConfigInvalid => "Run `hn config` to see current values. Check TOML syntax in config file",
            Self::ConfigMissingRequired => "Set the value in [notion] of your config.toml or export the matching HN_* variable",

            Self::QueryInvalid => "Send a JSON object with optional name, programs, languages and hardSkills fields",

            Self::NetworkUnreachable => "Check your network connection and the configured notion.base_url",
            Self::NetworkTimeout => "The remote store is slow or unreachable. Retry, or raise notion.timeout_secs",
            Self::RemoteAuthFailed => "Verify notion.api_key and that the integration is shared with all three databases",
            Self::RemoteRateLimited => "The remote store is rate limiting requests. Wait a moment and retry",
            Self::RemoteRejected => "Check the database ids and that the property names match the roster schema",
            Self::RemoteUnavailable => "The remote store reported an internal failure. Retry later",
            Self::RemoteMalformedResponse => "Check that notion.base_url points at the Notion API and not a proxy or login page",

            Self::SerializationError => "The data format may be corrupted. Check input data for validity",

            Self::InternalError => "An unexpected error occurred. Please report this issue with full error output",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::QueryInvalid
            | Self::NetworkUnreachable
            | Self::NetworkTimeout
            | Self::RemoteAuthFailed
            | Self::RemoteRateLimited
            | Self::RemoteRejected
            | Self::RemoteUnavailable
            | Self::RemoteMalformedResponse
            | Self::IoError => true,

            Self::SerializationError | Self::InternalError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            3 => "config",
            4 => "query",
            5 => "network",
            6 => "serialization",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::QueryInvalid,
            Self::NetworkUnreachable,
            Self::NetworkTimeout,
            Self::RemoteAuthFailed,
            Self::RemoteRateLimited,
            Self::RemoteRejected,
            Self::RemoteUnavailable,
            Self::RemoteMalformedResponse,
            Self::SerializationError,
            Self::InternalError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
