//! Error types for xmigraph operations.
//!
//! This module provides the main error type [`XmiGraphError`] which wraps
//! the error conditions that can occur while processing a document.

use std::io;

use thiserror::Error;

use xmigraph_parser::error::ParseError;

use crate::report;

/// The main error type for xmigraph operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the document text next to the parse error, so
/// the diagnostic spans can be rendered as source snippets.
#[derive(Debug, Error)]
pub enum XmiGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Report error: {0}")]
    Report(#[from] report::Error),
}

impl XmiGraphError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
