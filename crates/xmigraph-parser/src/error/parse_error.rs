//! The ParseError type returned by [`parse`](crate::parse).

use std::fmt;

use crate::error::{Diagnostic, ErrorCode, ErrorKind};

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Error type for the parsing lifecycle.
///
/// Wraps the diagnostic that aborted the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    diagnostic: Diagnostic,
}

impl ParseError {
    /// Borrow the diagnostic describing the failure.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Shorthand for `self.diagnostic().code()`.
    pub fn code(&self) -> ErrorCode {
        self.diagnostic.code()
    }

    /// Shorthand for `self.diagnostic().kind()`.
    pub fn kind(&self) -> ErrorKind {
        self.diagnostic.kind()
    }

    /// Unwrap into the diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diagnostic, f)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.diagnostic)
    }
}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }
}
