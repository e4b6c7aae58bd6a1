//! Tag span tokenizer using winnow.
//!
//! A tag span is `<name>`, one or more characters other than `<`, then
//! `</name>` with the same name. Names are ASCII alphanumeric. Spans do not
//! nest; a `<` inside the children ends the candidate span.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{literal, take_till, take_while};

use super::ast::MarkupPart;

/// Split text into literal runs and complete tag spans in one pass.
pub fn parse_markup(input: &str) -> Vec<MarkupPart<'_>> {
    let mut remaining = input;
    let parsed: ModalResult<Vec<MarkupPart<'_>>> = repeat(0.., part).parse_next(&mut remaining);
    match parsed {
        Ok(parts) if remaining.is_empty() => parts,
        _ => vec![MarkupPart::Literal(input)],
    }
}

fn part<'i>(input: &mut &'i str) -> ModalResult<MarkupPart<'i>> {
    alt((
        tag_span,
        take_till(1.., '<').map(MarkupPart::Literal),
        "<".map(MarkupPart::Literal),
    ))
    .parse_next(input)
}

fn tag_span<'i>(input: &mut &'i str) -> ModalResult<MarkupPart<'i>> {
    let name = delimited('<', tag_name, '>').parse_next(input)?;
    let children = take_till(1.., '<').parse_next(input)?;
    ("</", literal(name), '>').void().parse_next(input)?;
    Ok(MarkupPart::Tag { name, children })
}

fn tag_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric()).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag<'a>(name: &'a str, children: &'a str) -> MarkupPart<'a> {
        MarkupPart::Tag { name, children }
    }

    #[test]
    fn finds_spans_in_order() {
        assert_eq!(
            parse_markup("Hello <em>the</em> <strong>world</strong>!"),
            vec![
                MarkupPart::Literal("Hello "),
                tag("em", "the"),
                MarkupPart::Literal(" "),
                tag("strong", "world"),
                MarkupPart::Literal("!"),
            ]
        );
    }

    #[test]
    fn mismatched_close_is_literal() {
        let parts = parse_markup("<b>x</i>");
        assert!(parts.iter().all(|p| matches!(p, MarkupPart::Literal(_))));
    }

    #[test]
    fn empty_children_are_literal() {
        let parts = parse_markup("<b></b>");
        assert!(parts.iter().all(|p| matches!(p, MarkupPart::Literal(_))));
    }

    #[test]
    fn nested_spans_match_innermost() {
        assert_eq!(
            parse_markup("<a>x<b>y</b></a>"),
            vec![
                MarkupPart::Literal("<"),
                MarkupPart::Literal("a>x"),
                tag("b", "y"),
                MarkupPart::Literal("<"),
                MarkupPart::Literal("/a>"),
            ]
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        let parts = parse_markup("<B>x</b>");
        assert!(parts.iter().all(|p| matches!(p, MarkupPart::Literal(_))));
    }

    #[test]
    fn non_alphanumeric_name_is_literal() {
        let parts = parse_markup("<my-tag>x</my-tag>");
        assert!(parts.iter().all(|p| matches!(p, MarkupPart::Literal(_))));
    }
}
