//! Parsers for the leaf elements found inside a `packagedElement` body.
//!
//! Each parser collects the element's attributes, checks them against the
//! element's [`ElementShape`] and produces a record. The cursor is left on the
//! token following the attribute run.

use log::trace;

use crate::{
    attributes::{AttributeMap, collect_attributes},
    cursor::Cursor,
    error::{Diagnostic, ErrorCode, Result},
    parser_types::{OperationRecord, RelationRecord},
    span::Spanned,
    tokens::PositionedToken,
};

/// Attribute constraints of one leaf element kind.
#[derive(Debug)]
struct ElementShape {
    name: &'static str,
    max_attributes: usize,
    required: &'static [&'static str],
}

const OPERATION: ElementShape = ElementShape {
    name: "operation",
    max_attributes: 2,
    required: &["xmi:id", "name"],
};

const INTERFACE_REALIZATION: ElementShape = ElementShape {
    name: "interface realization",
    max_attributes: 4,
    required: &["xmi:id", "client", "supplier", "contract"],
};

const USAGE: ElementShape = ElementShape {
    name: "usage",
    max_attributes: 4,
    required: &["xmi:id", "client", "supplier"],
};

impl ElementShape {
    /// Check the attribute count, then the required keys.
    fn check(&self, attributes: &AttributeMap<'_>) -> Result<()> {
        let count = attributes.len();
        if count > self.max_attributes {
            let found = attributes.keys().collect::<Vec<_>>().join(", ");
            return Err(Diagnostic::new(
                ErrorCode::E200,
                format!("unexpected number of attributes for {}: {count}", self.name),
            )
            .with_label(attributes.span(), format!("{count} attributes: {found}"))
            .with_help(format!(
                "{} elements take at most {} attributes",
                self.name, self.max_attributes
            )));
        }

        let missing: Vec<&str> = self
            .required
            .iter()
            .copied()
            .filter(|key| !attributes.has_value(key))
            .collect();
        if !missing.is_empty() {
            return Err(Diagnostic::new(
                ErrorCode::E201,
                format!(
                    "missing at least one of {} attribute for {}",
                    self.key_list(),
                    self.name
                ),
            )
            .with_label(attributes.span(), format!("missing {}", missing.join(", ")))
            .with_help(format!("add {} to the element", missing.join(", "))));
        }

        Ok(())
    }

    /// Fetch a required attribute.
    fn require<'src>(
        &self,
        attributes: &AttributeMap<'src>,
        key: &str,
    ) -> Result<Spanned<&'src str>> {
        attributes.present(key).ok_or_else(|| {
            Diagnostic::new(
                ErrorCode::E201,
                format!("missing `{key}` attribute for {}", self.name),
            )
            .with_label(attributes.span(), format!("missing {key}"))
        })
    }

    /// Required keys as prose, e.g. `xmi:id, client or supplier`.
    fn key_list(&self) -> String {
        match self.required.split_last() {
            Some((last, [])) => (*last).to_string(),
            Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
            None => String::new(),
        }
    }

    fn relation<'src>(&self, attributes: &AttributeMap<'src>) -> Result<RelationRecord<'src>> {
        self.check(attributes)?;
        Ok(RelationRecord {
            id: self.require(attributes, "xmi:id")?,
            component: self.require(attributes, "client")?,
            interface: self.require(attributes, "supplier")?,
            span: attributes.span(),
        })
    }
}

/// Parse an `ownedOperation` whose open token was just consumed.
pub(crate) fn owned_operation<'src>(
    cursor: &mut Cursor<'src>,
    open: &PositionedToken<'src>,
) -> Result<OperationRecord<'src>> {
    let attributes = collect_attributes(cursor, open);
    OPERATION.check(&attributes)?;

    let record = OperationRecord {
        id: OPERATION.require(&attributes, "xmi:id")?,
        name: OPERATION.require(&attributes, "name")?,
    };
    trace!(id = *record.id.inner(), name = *record.name.inner(); "Parsed operation");
    Ok(record)
}

/// Parse an `interfaceRealization` whose open token was just consumed.
pub(crate) fn interface_realization<'src>(
    cursor: &mut Cursor<'src>,
    open: &PositionedToken<'src>,
) -> Result<RelationRecord<'src>> {
    let attributes = collect_attributes(cursor, open);
    let record = INTERFACE_REALIZATION.relation(&attributes)?;
    trace!(
        id = *record.id.inner(),
        client = *record.component.inner(),
        supplier = *record.interface.inner();
        "Parsed interface realization"
    );
    Ok(record)
}

/// Parse a nested `packagedElement` usage whose open token was just consumed.
pub(crate) fn usage<'src>(
    cursor: &mut Cursor<'src>,
    open: &PositionedToken<'src>,
) -> Result<RelationRecord<'src>> {
    let attributes = collect_attributes(cursor, open);
    let record = USAGE.relation(&attributes)?;
    trace!(
        id = *record.id.inner(),
        client = *record.component.inner(),
        supplier = *record.interface.inner();
        "Parsed usage"
    );
    Ok(record)
}
