//! Attribute collection for element headers and leaf elements.

use indexmap::IndexMap;
use log::trace;

use crate::{
    cursor::Cursor,
    span::{Span, Spanned},
    tokens::{PositionedToken, Token},
};

/// Attributes of one element, in declaration order.
///
/// Keys are unique; a repeated key keeps its first position and takes the
/// last value.
#[derive(Debug, Clone, Default)]
pub(crate) struct AttributeMap<'src> {
    entries: IndexMap<&'src str, Spanned<&'src str>>,
    span: Span,
}

impl<'src> AttributeMap<'src> {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up a value by key.
    pub(crate) fn get(&self, key: &str) -> Option<&'src str> {
        self.entries.get(key).map(|value| *value.inner())
    }

    /// Look up a value together with the span of the value text.
    pub(crate) fn get_spanned(&self, key: &str) -> Option<Spanned<&'src str>> {
        self.entries.get(key).copied()
    }

    /// Look up a non-empty value. `name=""` counts as absent.
    pub(crate) fn present(&self, key: &str) -> Option<Spanned<&'src str>> {
        self.get_spanned(key).filter(|value| !value.inner().is_empty())
    }

    pub(crate) fn has_value(&self, key: &str) -> bool {
        self.present(key).is_some()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &'src str> + '_ {
        self.entries.keys().copied()
    }

    /// Span from the element's open token to its last attribute.
    pub(crate) fn span(&self) -> Span {
        self.span
    }
}

/// Collect the run of attribute tokens following `open`.
///
/// Stops at the first open or close token, which is left unconsumed, or at
/// the end of the document.
pub(crate) fn collect_attributes<'src>(
    cursor: &mut Cursor<'src>,
    open: &PositionedToken<'src>,
) -> AttributeMap<'src> {
    let mut attributes = AttributeMap {
        entries: IndexMap::new(),
        span: open.span,
    };

    while let Some(token) = cursor.peek() {
        let Token::Attribute(_) = token.token else {
            break;
        };
        cursor.advance();
        attributes.span = attributes.span.union(token.span);

        if let Some((key, value)) = split_attribute(token) {
            trace!(key = key, value = *value.inner(); "Collected attribute");
            attributes.entries.insert(key, value);
        }
    }

    attributes
}

/// Split an attribute token on its first `=`.
///
/// A trailing `>` is dropped from the value, then surrounding double quotes.
fn split_attribute<'src>(token: &PositionedToken<'src>) -> Option<(&'src str, Spanned<&'src str>)> {
    let (key, raw) = token.text().split_once('=')?;
    if key.is_empty() {
        return None;
    }

    let raw = raw.strip_suffix('>').unwrap_or(raw);
    let mut start = token.span.start() + key.len() + 1;
    let value = match unquote(raw) {
        Some(inner) => {
            start += 1;
            inner
        }
        None => raw,
    };

    Some((key, Spanned::new(value, Span::new(start..start + value.len()))))
}

fn unquote(raw: &str) -> Option<&str> {
    if raw.len() >= 2 {
        raw.strip_prefix('"')?.strip_suffix('"')
    } else {
        None
    }
}
