use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use bon::Builder;
use serde::Serialize;

/// A generic rendered element produced from a tag span.
///
/// When a template contains `<strong>world</strong>` and no renderer is
/// registered for `strong`, the span becomes an element with tag `strong`,
/// children `world`, and a key equal to its position among the nodes of the
/// result. Renderers return elements of their own shape; the key they carry
/// is overwritten with the positional key.
///
/// # Example
///
/// ```
/// use twine::Element;
///
/// let span = Element::builder()
///     .tag("span")
///     .children("world")
///     .build()
///     .with_attribute("class", "text-bold");
///
/// assert_eq!(span.tag, "span");
/// assert_eq!(span.attribute("class"), Some("text-bold"));
/// assert_eq!(span.to_string(), "world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Builder, Serialize)]
#[builder(on(String, into))]
pub struct Element {
    /// Element name, e.g. `strong` or `span`.
    pub tag: String,

    /// Attributes in name order.
    #[builder(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Text content of the element.
    #[builder(default)]
    pub children: String,

    /// Zero-based position among the nodes of a content tree.
    #[builder(default)]
    pub key: usize,
}

impl Element {
    /// Create an element with the given tag and text children.
    pub fn new(tag: impl Into<String>, children: impl Into<String>) -> Self {
        Element::builder().tag(tag).children(children).build()
    }

    /// Returns this element with an attribute added or replaced.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns this element with its key replaced.
    pub fn with_key(self, key: usize) -> Self {
        Element { key, ..self }
    }

    /// Get an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Displays the text content only; markup is left to the host.
impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.children)
    }
}
