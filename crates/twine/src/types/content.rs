use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Serialize, Serializer};

use super::{Element, Value};

/// A rendered unit produced from a tag span.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A default element or the output of a renderer.
    Element(Element),

    /// A plain value that replaced the whole span.
    Value { key: usize, value: Value },
}

impl Node {
    /// Zero-based position of this node within its tree.
    pub fn key(&self) -> usize {
        match self {
            Node::Element(element) => element.key,
            Node::Value { key, .. } => *key,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Value { .. } => None,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Node::Element(element) => write!(f, "{element}"),
            Node::Value { value, .. } => write!(f, "{value}"),
        }
    }
}

/// One entry of a [`ContentTree`] in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Segment<'a> {
    Text(&'a str),
    Node(&'a Node),
}

/// An ordered sequence alternating text and nodes.
///
/// A tree with `n` nodes always holds `n + 1` text segments, so it starts
/// and ends with text (possibly empty) and has `2n + 1` segments in total.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTree {
    texts: Vec<String>,
    nodes: Vec<Node>,
}

impl ContentTree {
    /// Build a tree from the text preceding each node and the trailing text.
    pub(crate) fn new(mut texts: Vec<String>, nodes: Vec<Node>, trailing: String) -> Self {
        debug_assert_eq!(texts.len(), nodes.len());
        texts.push(trailing);
        ContentTree { texts, nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Number of segments, text and nodes together.
    pub fn len(&self) -> usize {
        self.texts.len() + self.nodes.len()
    }

    /// Never true: a tree holds at least its trailing text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over segments in reading order: text, node, text, ..., text.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        let mut texts = self.texts.iter();
        let leading = texts.next().map(|t| Segment::Text(t.as_str()));
        leading.into_iter().chain(
            self.nodes
                .iter()
                .zip(texts)
                .flat_map(|(node, text)| [Segment::Node(node), Segment::Text(text.as_str())]),
        )
    }
}

impl Serialize for ContentTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.segments())
    }
}

/// Text content with nodes flattened to their text.
impl Display for ContentTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for segment in self.segments() {
            match segment {
                Segment::Text(text) => f.write_str(text)?,
                Segment::Node(node) => write!(f, "{node}")?,
            }
        }
        Ok(())
    }
}

/// The result of a translation.
///
/// Templates without tag spans produce [`Content::Text`]; anything else
/// produces a [`Content::Tree`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Tree(ContentTree),
}

impl Content {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&ContentTree> {
        match self {
            Content::Tree(tree) => Some(tree),
            Content::Text(_) => None,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, Content::Tree(_))
    }
}

impl Display for Content {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Content::Text(text) => f.write_str(text),
            Content::Tree(tree) => write!(f, "{tree}"),
        }
    }
}

impl From<Content> for String {
    fn from(content: Content) -> Self {
        match content {
            Content::Text(text) => text,
            Content::Tree(tree) => tree.to_string(),
        }
    }
}

impl PartialEq<&str> for Content {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}
