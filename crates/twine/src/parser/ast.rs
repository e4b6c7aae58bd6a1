//! Token types produced by the template tokenizers.
//!
//! Tokens borrow from the scanned string.

use std::ops::Range;

/// A piece of a template as seen by the placeholder pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    /// Literal text, copied to the output unchanged.
    Literal(&'a str),
    /// A `{name}` token; holds the name without braces.
    Placeholder(&'a str),
}

/// A piece of a template as seen by the markup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupPart<'a> {
    /// Literal text, including any malformed or unmatched markup.
    Literal(&'a str),
    /// A complete `<name>children</name>` span.
    Tag { name: &'a str, children: &'a str },
}

/// The leftmost placeholder in a string and where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch<'a> {
    pub name: &'a str,
    /// Byte range of the whole token, braces included.
    pub range: Range<usize>,
}
