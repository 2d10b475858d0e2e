//! # xmigraph Parser
//!
//! Parser for UML model-interchange (XMI) documents. This crate turns the
//! document text into a resolved [`Model`] of components and interfaces,
//! without a general-purpose markup library.
//!
//! ## Usage
//!
//! ```
//! # use xmigraph_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <uml:Model xmi:version="20131001" name="model">
//!   <packagedElement xmi:type="uml:Interface" xmi:id="I1" name="Greeter">
//!     <ownedOperation xmi:id="O1" name="greet"/>
//!   </packagedElement>
//!   <packagedElement xmi:type="uml:Component" xmi:id="C1" name="GreeterImpl">
//!     <interfaceRealization xmi:id="R1" client="C1" supplier="I1" contract="I1"/>
//!   </packagedElement>
//! </uml:Model>
//! "#;
//!
//!     let model = parse(source)?;
//!     assert_eq!(model.components_count(), 1);
//!     assert_eq!(model.interfaces_count(), 1);
//!     Ok(())
//! }
//! ```

mod attributes;
mod cursor;
mod document;
mod elements;
pub mod error;
mod lexer;
mod parser;
mod parser_types;
mod resolve;
mod span;
mod tokens;

pub use error::ParseError;
pub use lexer::tokenize;
pub use span::{Span, Spanned};
pub use tokens::{PositionedToken, Token};

use log::debug;
use xmigraph_core::model::Model;

use document::Content;

/// Parse a model-interchange document into a resolved [`Model`].
///
/// The pipeline runs to completion or fails on the first problem:
///
/// 1. **Trim** - Keep the text from the first `<p` up to the last `</`
/// 2. **Tokenize** - Split the content into open, close and attribute tokens
/// 3. **Parse** - Collect entities and buffer relationship records
/// 4. **Resolve** - Link realizations, then usages
///
/// A document without content yields an empty model.
///
/// # Errors
///
/// Returns a [`ParseError`] whose diagnostic spans are byte offsets into
/// `source`.
pub fn parse(source: &str) -> Result<Model, ParseError> {
    // Step 1: Trim
    let content = Content::locate(source);

    // Step 2: Tokenize
    let tokens = lexer::tokenize(content.text(), content.offset());
    debug!(tokens = tokens.len(), offset = content.offset(); "Tokenized document");

    // Step 3: Parse
    let document = parser::build_document(&tokens)?;
    debug!(
        realizations = document.realizations.len(),
        usages = document.usages.len();
        "Parsed packaged elements"
    );

    // Step 4: Resolve
    let model = resolve::resolve(document)?;
    debug!(
        components = model.components_count(),
        interfaces = model.interfaces_count();
        "Built model"
    );

    Ok(model)
}
