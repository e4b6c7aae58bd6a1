//! Resolve localization keys into text or ordered markup trees.
//!
//! A key such as `"home.greeting"` is looked up in a nested
//! [`TranslationDictionary`]. The template found there may contain `{name}`
//! placeholders, filled from caller-supplied [`Interpolations`], and
//! `<tag>text</tag>` spans, turned into [`Node`]s. Templates without spans
//! produce plain text; templates with spans produce a [`ContentTree`].
//!
//! ```
//! use twine::{Element, Interpolation, TranslationDictionary, interpolations, translate};
//!
//! let dictionary = TranslationDictionary::new()
//!     .with_template("greeting", "Hello <strong>{who}</strong>!");
//!
//! let content = translate(
//!     &dictionary,
//!     "greeting",
//!     Some(&interpolations! {
//!         "who" => "you",
//!         "strong" => Interpolation::render(|text| Element::new("b", text)),
//!     }),
//! )
//! .unwrap();
//!
//! let tree = content.as_tree().unwrap();
//! assert_eq!(tree.texts(), ["Hello ", "!"]);
//! assert_eq!(tree.nodes()[0].as_element().unwrap().tag, "b");
//! assert_eq!(content.to_string(), "Hello you!");
//! ```

pub mod dictionary;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use dictionary::{Entry, Lookup, Resolved, TranslationDictionary};
pub use interpreter::{
    FalsyPolicy, ScanMode, TranslateError, TranslateOptions, Translator, interpolate, translate,
};
pub use types::{
    Content, ContentTree, Element, Interpolation, Interpolations, Node, Renderer, Segment, Value,
};

/// Creates an [`Interpolations`] map from key-value pairs.
///
/// Values are converted via `Into<Interpolation>`, so integers, floats,
/// booleans and strings can be passed directly. Render functions are passed
/// as [`Interpolation::render`].
///
/// # Example
///
/// ```
/// use twine::{Element, Interpolation, interpolations};
///
/// let map = interpolations! {
///     "count" => 3,
///     "name" => "Alice",
///     "b" => Interpolation::render(|text| Element::new("strong", text)),
/// };
/// assert_eq!(map.len(), 3);
/// assert_eq!(map["name"].as_value().unwrap().as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! interpolations {
    {} => {
        $crate::Interpolations::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Interpolations::new();
            $(
                map.insert(
                    ::std::string::ToString::to_string(&$key),
                    ::std::convert::Into::<$crate::Interpolation>::into($value),
                );
            )+
            map
        }
    };
}
