//! Placeholder tokenizer using winnow.
//!
//! A placeholder is `{`, one or more characters other than `}`, then `}`.
//! A `{` that does not open a complete placeholder is literal text.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::take_till;

use super::ast::{PlaceholderMatch, TemplatePart};

/// Split a template into literal runs and placeholders in one pass.
pub fn parse_placeholders(input: &str) -> Vec<TemplatePart<'_>> {
    let mut remaining = input;
    let parsed: ModalResult<Vec<TemplatePart<'_>>> = repeat(0.., part).parse_next(&mut remaining);
    match parsed {
        Ok(parts) if remaining.is_empty() => parts,
        _ => vec![TemplatePart::Literal(input)],
    }
}

/// Find the leftmost placeholder in `input`.
pub fn find_placeholder(input: &str) -> Option<PlaceholderMatch<'_>> {
    input.match_indices('{').find_map(|(start, _)| {
        let mut rest = &input[start..];
        let name = placeholder.parse_next(&mut rest).ok()?;
        Some(PlaceholderMatch {
            name,
            range: start..input.len() - rest.len(),
        })
    })
}

fn part<'i>(input: &mut &'i str) -> ModalResult<TemplatePart<'i>> {
    alt((
        placeholder.map(TemplatePart::Placeholder),
        take_till(1.., '{').map(TemplatePart::Literal),
        "{".map(TemplatePart::Literal),
    ))
    .parse_next(input)
}

/// Parse `{name}` and return the name.
fn placeholder<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('{', take_till(1.., '}'), '}').parse_next(input)
}
