//! Error types for query option composition and execution.
//!
//! Error codes follow a pattern: P{category}{number}
//! - 1xxx: Query errors (invalid pagination, not found)
//! - 2xxx: Execution errors (query failed)
//! - 3xxx: Connection errors
//!
//! The only error this crate synthesizes itself is
//! [`ErrorCode::InvalidPagination`]; every other code exists so that
//! handle implementations can surface their failures through the same
//! type, and those failures pass through unmodified.
//!
//! ```rust
//! use pagewise::{ErrorCode, QueryError};
//!
//! let err = QueryError::invalid_pagination(0, 1);
//! assert_eq!(err.code, ErrorCode::InvalidPagination);
//! assert!(err.to_string().contains("per: 0"));
//! ```

use std::fmt;
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Query errors (1xxx)
    /// Page size or page number is zero (P1001).
    InvalidPagination = 1001,
    /// Record not found (P1002).
    RecordNotFound = 1002,

    // Execution errors (2xxx)
    /// Query execution failed (P2001).
    QueryFailed = 2001,

    // Connection errors (3xxx)
    /// Database connection failed (P3001).
    ConnectionFailed = 3001,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidPagination => "P1001",
            Self::RecordNotFound => "P1002",
            Self::QueryFailed => "P2001",
            Self::ConnectionFailed => "P3001",
        }
    }

    /// Get a human-readable name for this error code.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidPagination => "InvalidPagination",
            Self::RecordNotFound => "RecordNotFound",
            Self::QueryFailed => "QueryFailed",
            Self::ConnectionFailed => "ConnectionFailed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur while composing or executing a query.
#[derive(Error, Debug)]
pub struct QueryError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source error (if any).
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl QueryError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Set the source error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // ============== Constructor Functions ==============

    /// Create an invalid pagination error naming both offending values.
    pub fn invalid_pagination(per: u64, page: u64) -> Self {
        Self::new(
            ErrorCode::InvalidPagination,
            format!("Invalid pagination, per: {}, page: {}", per, page),
        )
    }

    /// Create a not found error.
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::RecordNotFound,
            format!("No {} record found matching the query", entity.into()),
        )
    }

    /// Create a query execution error.
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::QueryFailed, message)
    }

    /// Create a connection error.
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConnectionFailed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::InvalidPagination.code(), "P1001");
        assert_eq!(ErrorCode::RecordNotFound.code(), "P1002");
        assert_eq!(ErrorCode::QueryFailed.code(), "P2001");
        assert_eq!(ErrorCode::ConnectionFailed.code(), "P3001");
        assert_eq!(ErrorCode::InvalidPagination.name(), "InvalidPagination");
    }

    #[test]
    fn test_invalid_pagination_names_both_values() {
        let err = QueryError::invalid_pagination(10, 0);
        assert_eq!(err.code, ErrorCode::InvalidPagination);
        assert!(err.message.contains("per: 10"));
        assert!(err.message.contains("page: 0"));
    }

    #[test]
    fn test_display_includes_code() {
        let err = QueryError::not_found("User");
        assert_eq!(
            err.to_string(),
            "[P1002] No User record found matching the query"
        );
    }

    #[test]
    fn test_with_source_preserves_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = QueryError::connection_failed("lost connection").with_source(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
