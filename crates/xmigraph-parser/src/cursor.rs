//! Token cursor threaded through the structural parser.
//!
//! The cursor is the only parser state: every parsing step borrows it
//! mutably, consumes what it recognizes and leaves the cursor on the first
//! token it did not consume.

use winnow::stream::{Stream, TokenSlice};

use crate::{span::Span, tokens::PositionedToken};

type Input<'src> = TokenSlice<'src, PositionedToken<'src>>;

/// A forward-only position in a token sequence.
#[derive(Debug)]
pub(crate) struct Cursor<'src> {
    input: Input<'src>,
    tokens: &'src [PositionedToken<'src>],
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(tokens: &'src [PositionedToken<'src>]) -> Self {
        Self {
            input: TokenSlice::new(tokens),
            tokens,
        }
    }

    /// Index of the next token in the full sequence.
    pub(crate) fn index(&self) -> usize {
        self.tokens.len() - self.input.eof_offset()
    }

    /// The next token, without consuming it.
    pub(crate) fn peek(&self) -> Option<&'src PositionedToken<'src>> {
        self.input.peek_token()
    }

    /// Consume and return the next token.
    pub(crate) fn advance(&mut self) -> Option<&'src PositionedToken<'src>> {
        self.input.next_token()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.input.eof_offset() == 0
    }

    /// An empty span just past the last token, for end-of-document errors.
    pub(crate) fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map(|token| Span::empty(token.span.end()))
            .unwrap_or_default()
    }
}
