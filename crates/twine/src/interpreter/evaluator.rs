//! Template interpolation engine.
//!
//! Interpolation runs in three stages over a resolved template:
//! placeholders are substituted first, the resulting text is scanned for tag
//! spans, and the assembler decides between plain text and a content tree.
//! Because placeholders run first, a tag span may wrap a placeholder and a
//! substituted value may introduce tag spans of its own.

use std::mem;

use tracing::{debug, trace};

use crate::interpreter::TranslateError;
use crate::interpreter::options::{ScanMode, TranslateOptions};
use crate::parser::{
    MarkupPart, PlaceholderMatch, TemplatePart, find_placeholder, parse_markup, parse_placeholders,
};
use crate::types::{Content, ContentTree, Element, Interpolation, Interpolations, Node};

/// Text and nodes collected by a tag scan, before assembly.
#[derive(Debug, Default)]
pub struct TagScan {
    /// Text preceding each node, one entry per node.
    before: Vec<String>,
    nodes: Vec<Node>,
    /// Text after the last node.
    trailing: String,
}

impl TagScan {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

/// Interpolate a template into plain text or a content tree.
///
/// # Errors
///
/// Fails if a placeholder has no usable interpolation entry, or if
/// rescanning substitution exceeds its bound.
pub fn interpolate(
    template: &str,
    interpolations: Option<&Interpolations>,
    options: &TranslateOptions,
) -> Result<Content, TranslateError> {
    let text = substitute_placeholders(template, interpolations, options)?;
    Ok(substitute_tags(text, interpolations, options))
}

/// Replace every `{name}` token with the text of its interpolation value.
///
/// # Errors
///
/// - [`TranslateError::InterpolationNotFound`] if the map is absent, lacks
///   the name, or holds a value the falsy policy rejects
/// - [`TranslateError::NotAValue`] if the entry is a render function
/// - [`TranslateError::SubstitutionLimit`] if rescanning does not terminate
pub fn substitute_placeholders(
    template: &str,
    interpolations: Option<&Interpolations>,
    options: &TranslateOptions,
) -> Result<String, TranslateError> {
    match options.scan() {
        ScanMode::SinglePass => substitute_single_pass(template, interpolations, options),
        ScanMode::Rescan => substitute_rescanning(template, interpolations, options),
    }
}

fn substitute_single_pass(
    template: &str,
    interpolations: Option<&Interpolations>,
    options: &TranslateOptions,
) -> Result<String, TranslateError> {
    let mut output = String::with_capacity(template.len());
    for part in parse_placeholders(template) {
        match part {
            TemplatePart::Literal(text) => output.push_str(text),
            TemplatePart::Placeholder(name) => {
                output.push_str(&placeholder_text(name, interpolations, options)?);
            }
        }
    }
    Ok(output)
}

fn substitute_rescanning(
    template: &str,
    interpolations: Option<&Interpolations>,
    options: &TranslateOptions,
) -> Result<String, TranslateError> {
    // Only substitutions beyond the placeholders written in the template
    // count against the limit.
    let written = parse_placeholders(template)
        .iter()
        .filter(|part| matches!(part, TemplatePart::Placeholder(_)))
        .count();
    let budget = written.saturating_add(options.max_substitutions());
    let mut result = template.to_string();
    let mut substitutions = 0;
    while let Some(PlaceholderMatch { name, range }) = find_placeholder(&result) {
        if substitutions == budget {
            return Err(TranslateError::SubstitutionLimit {
                limit: options.max_substitutions(),
            });
        }
        let text = placeholder_text(name, interpolations, options)?;
        result.replace_range(range, &text);
        substitutions += 1;
    }
    Ok(result)
}

fn placeholder_text(
    name: &str,
    interpolations: Option<&Interpolations>,
    options: &TranslateOptions,
) -> Result<String, TranslateError> {
    match interpolations.and_then(|map| map.get(name)) {
        Some(Interpolation::Value(value)) if options.falsy().accepts(value) => {
            Ok(value.to_string())
        }
        Some(Interpolation::Render(_)) => Err(TranslateError::NotAValue {
            name: name.to_string(),
        }),
        Some(Interpolation::Value(_)) | None => {
            debug!(name, "no interpolation found");
            Err(TranslateError::InterpolationNotFound {
                name: name.to_string(),
            })
        }
    }
}

/// Replace tag spans with nodes and assemble the result.
///
/// Text without tag spans is returned unchanged as [`Content::Text`].
pub fn substitute_tags(
    text: String,
    interpolations: Option<&Interpolations>,
    options: &TranslateOptions,
) -> Content {
    let scan = scan_tags(&text, interpolations, options);
    assemble(text, scan)
}

/// Scan `text` for tag spans left to right, resolving each to a node.
///
/// Nodes receive keys 0, 1, 2, ... in scan order. Text already emitted
/// before a span is never scanned again.
pub fn scan_tags(
    text: &str,
    interpolations: Option<&Interpolations>,
    options: &TranslateOptions,
) -> TagScan {
    let mut scan = TagScan::default();
    for part in parse_markup(text) {
        match part {
            MarkupPart::Literal(literal) => scan.trailing.push_str(literal),
            MarkupPart::Tag { name, children } => {
                let node = resolve_node(name, children, scan.nodes.len(), interpolations, options);
                scan.before.push(mem::take(&mut scan.trailing));
                scan.nodes.push(node);
            }
        }
    }
    scan
}

fn resolve_node(
    tag: &str,
    children: &str,
    key: usize,
    interpolations: Option<&Interpolations>,
    options: &TranslateOptions,
) -> Node {
    let node = match interpolations.and_then(|map| map.get(tag)) {
        Some(Interpolation::Render(renderer)) => {
            Node::Element(renderer.render(children).with_key(key))
        }
        Some(Interpolation::Value(value)) if options.falsy().accepts(value) => Node::Value {
            key,
            value: value.clone(),
        },
        Some(Interpolation::Value(_)) | None => {
            Node::Element(Element::new(tag, children).with_key(key))
        }
    };
    trace!(tag, key, "resolved tag span");
    node
}

/// Produce plain text when no nodes were found, otherwise a content tree
/// alternating text and nodes.
pub fn assemble(text: String, scan: TagScan) -> Content {
    if scan.nodes.is_empty() {
        return Content::Text(text);
    }
    Content::Tree(ContentTree::new(scan.before, scan.nodes, scan.trailing))
}
