use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use super::{Element, Value};

/// Named interpolation entries supplied to a single translation call.
pub type Interpolations = HashMap<String, Interpolation>;

/// A render function turning the inner text of a tag span into an element.
///
/// Cloning a renderer is cheap; clones share the same function.
#[derive(Clone)]
pub struct Renderer(Arc<dyn Fn(&str) -> Element + Send + Sync>);

impl Renderer {
    pub fn new(f: impl Fn(&str) -> Element + Send + Sync + 'static) -> Self {
        Renderer(Arc::new(f))
    }

    /// Invoke the function with the inner text of a tag span.
    pub fn render(&self, children: &str) -> Element {
        (self.0)(children)
    }
}

impl Debug for Renderer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Renderer(..)")
    }
}

/// A single interpolation entry.
///
/// Placeholders (`{name}`) accept only [`Interpolation::Value`]. Tag spans
/// (`<name>..</name>`) accept either case: a value replaces the whole span,
/// a renderer is called with the inner text.
///
/// # Example
///
/// ```
/// use twine::{Element, Interpolation};
///
/// let who: Interpolation = "you".into();
/// let strong = Interpolation::render(|text| {
///     Element::new("span", text).with_attribute("class", "text-bold")
/// });
///
/// assert!(who.as_value().is_some());
/// assert!(strong.as_renderer().is_some());
/// ```
#[derive(Debug, Clone)]
pub enum Interpolation {
    /// A plain value converted to text.
    Value(Value),

    /// A render function for tag spans.
    Render(Renderer),
}

impl Interpolation {
    /// Wrap a closure as a render function entry.
    pub fn render(f: impl Fn(&str) -> Element + Send + Sync + 'static) -> Self {
        Interpolation::Render(Renderer::new(f))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Interpolation::Value(v) => Some(v),
            Interpolation::Render(_) => None,
        }
    }

    pub fn as_renderer(&self) -> Option<&Renderer> {
        match self {
            Interpolation::Render(r) => Some(r),
            Interpolation::Value(_) => None,
        }
    }
}

impl<T: Into<Value>> From<T> for Interpolation {
    fn from(value: T) -> Self {
        Interpolation::Value(value.into())
    }
}
