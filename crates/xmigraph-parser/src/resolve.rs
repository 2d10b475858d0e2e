//! Second pass: link buffered relationship records into the model.

use log::debug;
use xmigraph_core::{
    identifier::Id,
    model::{LinkError, Model},
};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    parser_types::{ParsedDocument, RelationRecord},
};

/// Link every realization, then every usage, and build the model.
///
/// The first record naming an unknown endpoint aborts resolution.
pub(crate) fn resolve(document: ParsedDocument<'_>) -> Result<Model> {
    let ParsedDocument {
        mut builder,
        realizations,
        usages,
    } = document;

    for record in &realizations {
        builder
            .link_realization(
                Id::new(record.component.inner()),
                Id::new(record.interface.inner()),
            )
            .map_err(|err| unresolved(ErrorCode::E400, &err, record, "interface realization"))?;
    }

    for record in &usages {
        builder
            .link_usage(
                Id::new(record.component.inner()),
                Id::new(record.interface.inner()),
            )
            .map_err(|err| unresolved(ErrorCode::E401, &err, record, "usage"))?;
    }

    debug!(realizations = realizations.len(), usages = usages.len(); "Resolved relationships");
    Ok(builder.build())
}

fn unresolved(code: ErrorCode, err: &LinkError, record: &RelationRecord<'_>, kind: &str) -> Diagnostic {
    let missing = err.missing();
    let mut diagnostic = Diagnostic::new(code, err.to_string());

    if missing.component() {
        diagnostic = diagnostic.with_label(
            record.component.span(),
            format!("no component `{}`", record.component.inner()),
        );
    }
    if missing.interface() {
        diagnostic = diagnostic.with_label(
            record.interface.span(),
            format!("no interface `{}`", record.interface.inner()),
        );
    }

    let help = if missing.component() && missing.interface() {
        "declare both endpoints as packaged elements".to_string()
    } else if missing.component() {
        format!(
            "declare a `uml:Component` packaged element with `xmi:id=\"{}\"`",
            record.component.inner()
        )
    } else {
        format!(
            "declare a `uml:Interface` packaged element with `xmi:id=\"{}\"`",
            record.interface.inner()
        )
    };

    diagnostic
        .with_secondary_label(record.span, format!("{kind} `{}`", record.id.inner()))
        .with_help(help)
}
