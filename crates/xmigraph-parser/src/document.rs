//! Locating the element content inside a model-interchange document.
//!
//! Documents look like
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <uml:Model xmi:version="20131001" ...>
//!   <packagedElement ...> ... </packagedElement>
//! </uml:Model>
//! ```
//!
//! The content handed to the lexer starts at the first `<p` and stops right
//! before the last `</`, which drops the XML declaration, the root element's
//! opening tag and its closing tag. This is a narrow heuristic for exactly
//! that document shape, not a general markup trimmer.

/// The slice of a document holding its packaged elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Content<'src> {
    text: &'src str,
    offset: usize,
}

impl<'src> Content<'src> {
    /// Locate the content of `source`.
    ///
    /// If either marker is missing, or the last `</` comes before the first
    /// `<p`, the content is empty.
    pub(crate) fn locate(source: &'src str) -> Self {
        let start = source.find("<p");
        let end = source.rfind("</");

        match (start, end) {
            (Some(start), Some(end)) if start <= end => Self {
                text: &source[start..end],
                offset: start,
            },
            _ => Self {
                text: "",
                offset: 0,
            },
        }
    }

    /// The content text.
    pub(crate) fn text(&self) -> &'src str {
        self.text
    }

    /// Byte offset of the content within the full document.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }
}
