//! Report rendering for resolved models.
//!
//! This module provides the [`Reporter`] trait that turns a model and its
//! graph into text. It is the final stage in the xmigraph pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Document Text
//!     ↓ parse
//! Model
//!     ↓ structure
//! ModelGraph
//!     ↓ report (this module)
//! Output Text
//! ```
//!
//! # Available Backends
//!
//! - [`SummaryReporter`]: indented plain text for people
//! - [`JsonReporter`]: the model, wiring and gaps as JSON

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use std::fmt;

use xmigraph_core::model::Model;

use crate::{
    config::{ReportConfig, ReportFormat},
    structure::ModelGraph,
};

/// Abstraction for report backends.
pub trait Reporter {
    /// Render `model` and its `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] or [`Error::Format`] if the backend fails to
    /// encode the model.
    fn render(&self, model: &Model, graph: &ModelGraph) -> Result<String, Error>;
}

/// Pick the backend selected by `config`.
pub fn reporter(config: &ReportConfig) -> Box<dyn Reporter> {
    match config.format() {
        ReportFormat::Summary => Box::new(SummaryReporter::new(
            config.include_operations(),
            config.include_wiring(),
        )),
        ReportFormat::Json => Box::new(JsonReporter::new(config.include_wiring())),
    }
}

/// Errors that can occur while rendering a report.
///
/// Converted into [`XmiGraphError::Report`](crate::XmiGraphError::Report) at
/// the crate boundary.
#[derive(Debug)]
pub enum Error {
    /// Encoding the report failed.
    Serialize(serde_json::Error),
    /// Writing the report text failed.
    Format(fmt::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "serialization failed: {err}"),
            Self::Format(err) => write!(f, "formatting failed: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Self::Format(err)
    }
}
