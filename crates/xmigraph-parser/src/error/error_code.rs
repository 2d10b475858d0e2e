//! Error codes for the xmigraph diagnostic system.
//!
//! Error codes are grouped by kind:
//! - `E1xx` - Unexpected token
//! - `E2xx` - Malformed element
//! - `E3xx` - Unknown element type
//! - `E4xx` - Unresolved reference

use std::fmt;

/// The failure categories a document can be rejected with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The token stream does not match the element grammar.
    UnexpectedToken,
    /// An element has too many attributes or lacks a required one.
    MalformedElement,
    /// A top-level element has an unsupported `xmi:type`.
    UnknownType,
    /// A relationship names an identifier that was never declared.
    UnresolvedReference,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::MalformedElement => "malformed element",
            ErrorKind::UnknownType => "unknown type",
            ErrorKind::UnresolvedReference => "unresolved reference",
        };
        f.write_str(name)
    }
}

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Unexpected token (E1xx)
    // =========================================================================
    /// Unexpected token inside an element body.
    ///
    /// Only `ownedOperation`, `interfaceRealization` and nested
    /// `packagedElement` children are allowed.
    E100,

    /// Unexpected end of document.
    ///
    /// The document ended before an open `packagedElement` was closed.
    E101,

    /// Unexpected top-level token.
    ///
    /// Every top-level token must open a `packagedElement`.
    E102,

    // =========================================================================
    // Malformed element (E2xx)
    // =========================================================================
    /// Too many attributes for the element kind.
    E200,

    /// Missing required attribute.
    E201,

    /// Duplicate operation identifier within one interface.
    E202,

    // =========================================================================
    // Unknown type (E3xx)
    // =========================================================================
    /// Unknown element type.
    ///
    /// `xmi:type` must be `uml:Interface` or `uml:Component`.
    E300,

    // =========================================================================
    // Unresolved reference (E4xx)
    // =========================================================================
    /// Interface realization names an unknown component or interface.
    E400,

    /// Usage names an unknown component or interface.
    E401,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E300 => "E300",
            ErrorCode::E400 => "E400",
            ErrorCode::E401 => "E401",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "unexpected end of document",
            ErrorCode::E102 => "unexpected top-level token",
            ErrorCode::E200 => "too many attributes",
            ErrorCode::E201 => "missing required attribute",
            ErrorCode::E202 => "duplicate operation identifier",
            ErrorCode::E300 => "unknown element type",
            ErrorCode::E400 => "unresolved realization",
            ErrorCode::E401 => "unresolved usage",
        }
    }

    /// Returns the failure category of this code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::E100 | ErrorCode::E101 | ErrorCode::E102 => ErrorKind::UnexpectedToken,
            ErrorCode::E200 | ErrorCode::E201 | ErrorCode::E202 => ErrorKind::MalformedElement,
            ErrorCode::E300 => ErrorKind::UnknownType,
            ErrorCode::E400 | ErrorCode::E401 => ErrorKind::UnresolvedReference,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
