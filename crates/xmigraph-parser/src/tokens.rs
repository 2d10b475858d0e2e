//! Token types produced by the [`lexer`](super::lexer).

use std::fmt;

use crate::span::Span;

/// A whitespace-delimited fragment of the document, classified by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// A fragment starting with `<` but not `</`, e.g. `<packagedElement`.
    Open(&'src str),
    /// A fragment starting with `</`, e.g. `</packagedElement>`.
    Close(&'src str),
    /// A `key=value` fragment with any trailing `>` or `/>` removed.
    Attribute(&'src str),
}

impl<'src> Token<'src> {
    /// The literal text of the token.
    pub fn text(&self) -> &'src str {
        match self {
            Token::Open(text) | Token::Close(text) | Token::Attribute(text) => text,
        }
    }

    /// Human readable name of the token kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Open(_) => "element-open",
            Token::Close(_) => "element-close",
            Token::Attribute(_) => "attribute",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind(), self.text())
    }
}

/// A token with its position in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}

impl<'src> std::ops::Deref for PositionedToken<'src> {
    type Target = Token<'src>;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

/// Element tags the structural parser understands, matched by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementTag {
    PackagedElement,
    OwnedOperation,
    InterfaceRealization,
}

impl ElementTag {
    const ALL: [ElementTag; 3] = [
        ElementTag::PackagedElement,
        ElementTag::OwnedOperation,
        ElementTag::InterfaceRealization,
    ];

    /// The open-token prefix identifying this element.
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            ElementTag::PackagedElement => "<packagedElement",
            ElementTag::OwnedOperation => "<ownedOperation",
            ElementTag::InterfaceRealization => "<interfaceRealization",
        }
    }

    /// Match an open token's text against the known prefixes (case-sensitive).
    pub(crate) fn from_open(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| text.starts_with(tag.prefix()))
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix()[1..])
    }
}
