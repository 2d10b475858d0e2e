//! Structural parser for model-interchange token streams.
//!
//! The grammar has two nesting levels:
//!
//! ```text
//! document      := packaged*
//! packaged      := "<packagedElement" attribute* body
//! body          := child* close
//! child         := "<ownedOperation" attribute*
//!                | "<interfaceRealization" attribute*
//!                | "<packagedElement" attribute*          (usage)
//! ```
//!
//! Every loop consumes at least one token per iteration or fails, so the
//! parser always terminates.

use indexmap::IndexMap;
use log::{trace, warn};
use xmigraph_core::{
    identifier::Id,
    model::{Component, Interface, Operation},
};

use crate::{
    attributes::{AttributeMap, collect_attributes},
    cursor::Cursor,
    elements,
    error::{Diagnostic, ErrorCode, Result},
    parser_types::{EntityKind, OperationRecord, ParsedDocument},
    span::Span,
    tokens::{ElementTag, PositionedToken, Token},
};

/// Run the structural pass over `tokens`.
///
/// Declared entities land in the returned builder; realization and usage
/// records are buffered in document order for the resolver.
pub(crate) fn build_document<'src>(
    tokens: &'src [PositionedToken<'src>],
) -> Result<ParsedDocument<'src>> {
    let mut cursor = Cursor::new(tokens);
    let mut document = ParsedDocument::default();

    loop {
        let index = cursor.index();
        let Some(token) = cursor.advance() else {
            break;
        };

        match token.token {
            Token::Open(text) if ElementTag::from_open(text) == Some(ElementTag::PackagedElement) => {
                packaged_element(&mut cursor, token, &mut document)?;
            }
            _ => {
                return Err(Diagnostic::new(
                    ErrorCode::E102,
                    format!("unexpected top-level token: {} at index {index}", token.token),
                )
                .with_label(token.span, "expected `<packagedElement`")
                .with_help("only packaged elements may appear at the top level"));
            }
        }
    }

    Ok(document)
}

/// Parse one top-level packaged element, its open token already consumed.
fn packaged_element<'src>(
    cursor: &mut Cursor<'src>,
    open: &PositionedToken<'src>,
    document: &mut ParsedDocument<'src>,
) -> Result<()> {
    let header = collect_attributes(cursor, open);
    let mut operations = Vec::new();

    loop {
        let index = cursor.index();
        let Some(token) = cursor.advance() else {
            return Err(Diagnostic::new(ErrorCode::E101, "unexpected end of document")
                .with_label(cursor.end_span(), "document ends here")
                .with_secondary_label(header.span(), "element opened here")
                .with_help("close the element with `</packagedElement>`"));
        };

        let tag = match token.token {
            Token::Close(_) => break,
            Token::Open(text) => ElementTag::from_open(text),
            Token::Attribute(_) => None,
        };

        match tag {
            Some(ElementTag::OwnedOperation) => {
                operations.push(elements::owned_operation(cursor, token)?);
            }
            Some(ElementTag::InterfaceRealization) => {
                let record = elements::interface_realization(cursor, token)?;
                document.realizations.push(record);
            }
            Some(ElementTag::PackagedElement) => {
                let record = elements::usage(cursor, token)?;
                document.usages.push(record);
            }
            None => {
                return Err(Diagnostic::new(
                    ErrorCode::E100,
                    format!("unexpected token: {} at index {index}", token.token),
                )
                .with_label(token.span, "not allowed in a packaged element body")
                .with_secondary_label(header.span(), "inside this element")
                .with_help(
                    "expected `<ownedOperation`, `<interfaceRealization`, a nested `<packagedElement` or a close tag",
                ));
            }
        }
    }

    declare_entity(document, &header, &operations)
}

/// Turn a finished packaged element into an entity.
///
/// Elements without a non-empty `xmi:id` and `name` are skipped.
fn declare_entity(
    document: &mut ParsedDocument<'_>,
    header: &AttributeMap<'_>,
    operations: &[OperationRecord<'_>],
) -> Result<()> {
    let present = |key: &str| header.present(key).map(|value| *value.inner());
    let (Some(id), Some(name)) = (present("xmi:id"), present("name")) else {
        warn!(
            span:% = header.span(),
            id:? = header.get("xmi:id"),
            name:? = header.get("name");
            "Skipping packaged element without xmi:id or name"
        );
        return Ok(());
    };

    match entity_kind(header, id)? {
        EntityKind::Interface => {
            let operations = interface_operations(name, operations)?;
            let interface = Interface::new(Id::new(id), name, operations);
            trace!(id, name, operations = interface.operations().len(); "Declared interface");
            if document.builder.add_interface(interface).is_some() {
                warn!(id; "Replacing interface with a duplicate identifier");
            }
        }
        EntityKind::Component => {
            trace!(id, name; "Declared component");
            if document.builder.add_component(Component::new(Id::new(id), name)).is_some() {
                warn!(id; "Replacing component with a duplicate identifier");
            }
        }
    }

    Ok(())
}

fn entity_kind(header: &AttributeMap<'_>, id: &str) -> Result<EntityKind> {
    let Some(xmi_type) = header.get_spanned("xmi:type") else {
        return Err(Diagnostic::new(
            ErrorCode::E300,
            format!("missing xmi:type for packaged element `{id}`"),
        )
        .with_label(header.span(), "no xmi:type")
        .with_help("set xmi:type to `uml:Interface` or `uml:Component`"));
    };

    EntityKind::from_xmi_type(xmi_type.inner()).ok_or_else(|| {
        Diagnostic::new(
            ErrorCode::E300,
            format!("unexpected type: {}", xmi_type.inner()),
        )
        .with_label(xmi_type.span(), "unsupported type")
        .with_secondary_label(header.span(), format!("packaged element `{id}`"))
        .with_help("expected `uml:Interface` or `uml:Component`")
    })
}

/// Convert operation records, rejecting repeated identifiers.
fn interface_operations(
    interface: &str,
    records: &[OperationRecord<'_>],
) -> Result<Vec<Operation>> {
    let mut seen: IndexMap<&str, Span> = IndexMap::with_capacity(records.len());

    for record in records {
        let id = *record.id.inner();
        if let Some(first) = seen.insert(id, record.id.span()) {
            return Err(Diagnostic::new(
                ErrorCode::E202,
                format!("duplicate operation identifier `{id}` in interface `{interface}`"),
            )
            .with_label(record.id.span(), "declared again here")
            .with_secondary_label(first, "first declared here")
            .with_help("operation identifiers must be unique within an interface"));
        }
    }

    Ok(records
        .iter()
        .map(|record| Operation::new(Id::new(record.id.inner()), *record.name.inner()))
        .collect())
}
