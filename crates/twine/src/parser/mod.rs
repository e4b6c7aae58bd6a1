//! Template tokenizers.
//!
//! Templates are scanned in two independent passes: one for `{name}`
//! placeholders and one for `<tag>text</tag>` spans. Neither pass can fail;
//! anything that does not form a complete token is kept as literal text.

pub mod ast;
mod markup;
mod placeholder;

pub use ast::{MarkupPart, PlaceholderMatch, TemplatePart};
pub use markup::parse_markup;
pub use placeholder::{find_placeholder, parse_placeholders};
