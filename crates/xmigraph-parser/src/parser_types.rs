//! Intermediate records produced by the structural parser.
//!
//! Records borrow from the source text and only live until resolution.

use xmigraph_core::model::ModelBuilder;

use crate::span::{Span, Spanned};

/// An `ownedOperation` declared inside an interface body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OperationRecord<'src> {
    pub id: Spanned<&'src str>,
    pub name: Spanned<&'src str>,
}

/// A component-to-interface reference awaiting resolution.
///
/// Used for both `interfaceRealization` (`client` realizes `supplier`) and
/// nested `packagedElement` usages (`client` uses `supplier`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RelationRecord<'src> {
    pub id: Spanned<&'src str>,
    /// The `client` attribute.
    pub component: Spanned<&'src str>,
    /// The `supplier` attribute.
    pub interface: Spanned<&'src str>,
    /// The whole element, from its open token to its last attribute.
    pub span: Span,
}

/// The entity kind selected by a top-level element's `xmi:type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntityKind {
    Interface,
    Component,
}

impl EntityKind {
    pub(crate) fn from_xmi_type(value: &str) -> Option<Self> {
        match value {
            "uml:Interface" => Some(Self::Interface),
            "uml:Component" => Some(Self::Component),
            _ => None,
        }
    }
}

/// Everything the structural pass produced, ready for resolution.
#[derive(Debug, Default)]
pub(crate) struct ParsedDocument<'src> {
    /// Declared entities, not yet linked.
    pub builder: ModelBuilder,
    /// Realizations in document order.
    pub realizations: Vec<RelationRecord<'src>>,
    /// Usages in document order.
    pub usages: Vec<RelationRecord<'src>>,
}
