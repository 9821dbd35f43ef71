//! Centralized error handling for autoindent
//! Defines the crate error type, severity levels, and error codes
//!
//! Precondition failures inside the enter handler (missing session, wrong
//! language, read-only buffer, caret at offset 0) are not errors: they
//! surface as `Outcome::Continue`. Errors exist for collaborator failures
//! only, such as a rejected buffer mutation or caret move.

use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Warning - something might be wrong but operation can continue
    Warning,
    /// Standard error - operation failed but the host can continue
    Error,
    /// Critical error - an invariant of the engine was violated
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Buffer mutation or access errors
    Buffer,
    /// Caret placement errors
    Caret,
    /// Language registration errors
    Language,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer => write!(f, "Buffer"),
            Self::Caret => write!(f, "Caret"),
            Self::Language => write!(f, "Language"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// Error codes used across the crate
pub mod codes {
    pub const CARET_OUT_OF_BOUNDS: &str = "CARET_OUT_OF_BOUNDS";
    pub const READ_ONLY: &str = "READ_ONLY";
    pub const EMPTY_COMMENT_PREFIX: &str = "EMPTY_COMMENT_PREFIX";
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";
}

/// A structured error in autoindent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoindentError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g., "READ_ONLY")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl AutoindentError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new critical error (Severity: Critical)
    pub fn critical(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for AutoindentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for AutoindentError {}

impl From<String> for AutoindentError {
    fn from(msg: String) -> Self {
        Self::new(ErrorKind::Internal, codes::GENERIC_ERROR, msg)
    }
}

impl From<&str> for AutoindentError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorKind::Internal, codes::GENERIC_ERROR, msg)
    }
}

/// Result alias for autoindent operations
pub type Result<T> = std::result::Result<T, AutoindentError>;
