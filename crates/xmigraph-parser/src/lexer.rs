//! Lexical analyzer for model-interchange content.
//!
//! The lexer splits the content on whitespace and classifies each fragment
//! into a [`Token`]:
//!
//! - `</...` becomes [`Token::Close`]
//! - `<...` becomes [`Token::Open`]
//! - `key=value` becomes [`Token::Attribute`], minus a trailing `/>` or `>`
//!
//! Everything else (a stray `>` or `/>`, the tail of a quoted value that
//! contained a space) is formatting noise and dropped. The lexer does no
//! nesting or validity checks and cannot fail; malformed input surfaces as a
//! token sequence the parser rejects.

use std::ops::Range;

use winnow::{
    Parser as _,
    combinator::preceded,
    error::ModalResult,
    stream::LocatingSlice,
    token::{take_till, take_while},
};

use crate::{
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;

fn is_separator(c: char) -> bool {
    c.is_whitespace()
}

/// Parse the next whitespace-delimited fragment together with its range.
///
/// Fails only once nothing but whitespace is left.
fn fragment<'a>(input: &mut Input<'a>) -> ModalResult<(&'a str, Range<usize>)> {
    preceded(
        take_while(0.., is_separator),
        take_till(1.., is_separator).with_span(),
    )
    .parse_next(input)
}

/// Classify a fragment, or `None` for noise.
fn classify(fragment: &str) -> Option<Token<'_>> {
    if fragment.starts_with("</") {
        Some(Token::Close(fragment))
    } else if fragment.starts_with('<') {
        Some(Token::Open(fragment))
    } else if fragment.find('=').is_some_and(|pos| pos > 0) {
        let text = fragment
            .strip_suffix("/>")
            .or_else(|| fragment.strip_suffix('>'))
            .unwrap_or(fragment);
        Some(Token::Attribute(text))
    } else {
        None
    }
}

/// Split `text` into tokens.
///
/// `offset` is the byte position of `text` within the full document; token
/// spans are reported relative to the full document.
pub fn tokenize(text: &str, offset: usize) -> Vec<PositionedToken<'_>> {
    let mut input = LocatingSlice::new(text);
    let mut tokens = Vec::new();

    while let Ok((raw, range)) = fragment.parse_next(&mut input) {
        if let Some(token) = classify(raw) {
            let start = offset + range.start;
            let span = Span::new(start..start + token.text().len());
            tokens.push(PositionedToken::new(token, span));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_of(text: &str) -> Vec<Token<'_>> {
        tokenize(text, 0).into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_classifies_open_close_and_attributes() {
        let tokens = tokens_of(
            r#"<packagedElement xmi:type="uml:Interface" xmi:id="I1" name="Greeter"> </packagedElement>"#,
        );

        assert_eq!(
            tokens,
            vec![
                Token::Open("<packagedElement"),
                Token::Attribute(r#"xmi:type="uml:Interface""#),
                Token::Attribute(r#"xmi:id="I1""#),
                Token::Attribute(r#"name="Greeter""#),
                Token::Close("</packagedElement>"),
            ]
        );
    }

    #[test]
    fn test_strips_self_closing_suffix() {
        let tokens = tokens_of(r#"<ownedOperation xmi:id="O1" name="greet"/>"#);

        assert_eq!(tokens[2], Token::Attribute(r#"name="greet""#));
    }

    #[test]
    fn test_drops_noise_fragments() {
        let tokens = tokens_of("<ownedOperation xmi:id=\"O1\" > /> plain =lead name=\"a b\"");

        assert_eq!(
            tokens,
            vec![
                Token::Open("<ownedOperation"),
                Token::Attribute("xmi:id=\"O1\""),
                Token::Attribute("name=\"a"),
            ]
        );
    }

    #[test]
    fn test_newlines_and_tabs_separate_fragments() {
        let tokens = tokens_of("<packagedElement\n\txmi:id=\"C1\"\r\nname=\"Impl\">\n</packagedElement>");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1], Token::Attribute("xmi:id=\"C1\""));
        assert_eq!(tokens[2], Token::Attribute("name=\"Impl\""));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("", 0).is_empty());
        assert!(tokenize(" \n\t ", 0).is_empty());
    }

    #[test]
    fn test_spans_are_offset_into_document() {
        let tokens = tokenize("  <a x=\"1\">", 100);

        assert_eq!(tokens[0].span, Span::new(102..104));
        // `>` is not part of the attribute token
        assert_eq!(tokens[1].span, Span::new(105..110));
    }
}
