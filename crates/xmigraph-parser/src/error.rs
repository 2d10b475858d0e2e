//! Error and diagnostic system for the xmigraph parser.
//!
//! Parsing is fail-fast: the first problem found aborts the whole document
//! and is reported as a single [`Diagnostic`] wrapped in a [`ParseError`].
//! A diagnostic carries:
//! - An [`ErrorCode`] (and through it an [`ErrorKind`]) for searchability
//! - A message suitable for showing to the user verbatim
//! - Labeled source spans
//! - Optional help text
//!
//! # Example
//!
//! ```
//! # use xmigraph_parser::error::{Diagnostic, ErrorCode, ErrorKind};
//! # use xmigraph_parser::Span;
//!
//! let diag = Diagnostic::new(ErrorCode::E401, "could not find source or target for usage: C1 -> I9")
//!     .with_label(Span::new(120..128), "no interface `I9`")
//!     .with_secondary_label(Span::new(90..140), "usage declared here");
//!
//! assert_eq!(diag.kind(), ErrorKind::UnresolvedReference);
//! ```

mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::{ErrorCode, ErrorKind};
pub use parse_error::ParseError;
