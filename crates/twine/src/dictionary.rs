//! Nested translation dictionaries and path lookup.
//!
//! A [`TranslationDictionary`] maps string keys either to template strings or
//! to further dictionaries. The [`Lookup`] trait is the seam the resolver
//! walks: anything that can answer "what is at this path" can serve as a
//! dictionary, including a `serde_json::Value` when the `json` feature is
//! enabled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What a path resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// A leaf template string.
    Template(&'a str),
    /// A nested mapping; the path is incomplete.
    Mapping,
    /// Some other leaf that is not a template string.
    Other,
}

/// Generic nested-mapping path lookup.
pub trait Lookup {
    /// Returns the value at `path`, or `None` when any segment is absent.
    fn lookup(&self, path: &[&str]) -> Option<Resolved<'_>>;

    /// Keys of the mapping at `path`, used for "did you mean" suggestions.
    ///
    /// Returns an empty list when `path` does not name a mapping.
    fn keys(&self, _path: &[&str]) -> Vec<&str> {
        Vec::new()
    }
}

/// An immutable nested mapping from keys to templates or sub-dictionaries.
///
/// Deserializes from any self-describing format: strings become templates
/// and maps become nested dictionaries.
///
/// # Example
///
/// ```
/// use twine::{Lookup, Resolved, TranslationDictionary};
///
/// let dictionary = TranslationDictionary::new()
///     .with_template("key", "Hello!")
///     .with_nested(
///         "nested",
///         TranslationDictionary::new().with_template("key", "Hello nested!"),
///     );
///
/// assert_eq!(
///     dictionary.lookup(&["nested", "key"]),
///     Some(Resolved::Template("Hello nested!"))
/// );
/// assert_eq!(dictionary.lookup(&["nested"]), Some(Resolved::Mapping));
/// assert_eq!(dictionary.lookup(&["nope"]), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationDictionary {
    entries: BTreeMap<String, Entry>,
}

/// A single dictionary value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Template(String),
    Nested(TranslationDictionary),
}

impl TranslationDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this dictionary with a template added under `key`.
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, Entry::Template(template.into()));
        self
    }

    /// Returns this dictionary with a nested dictionary added under `key`.
    pub fn with_nested(mut self, key: impl Into<String>, nested: TranslationDictionary) -> Self {
        self.insert(key, Entry::Nested(nested));
        self
    }

    /// Insert an entry, replacing any previous entry under the same key.
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) -> Option<Entry> {
        self.entries.insert(key.into(), entry)
    }

    /// Get a direct child entry.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Iterate over direct children in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk `path` and return the dictionary it names, if any.
    fn mapping_at(&self, path: &[&str]) -> Option<&TranslationDictionary> {
        let mut current = self;
        for segment in path {
            match current.entries.get(*segment)? {
                Entry::Nested(nested) => current = nested,
                Entry::Template(_) => return None,
            }
        }
        Some(current)
    }
}

impl Lookup for TranslationDictionary {
    fn lookup(&self, path: &[&str]) -> Option<Resolved<'_>> {
        let (last, parents) = path.split_last()?;
        match self.mapping_at(parents)?.entries.get(*last)? {
            Entry::Template(template) => Some(Resolved::Template(template)),
            Entry::Nested(_) => Some(Resolved::Mapping),
        }
    }

    fn keys(&self, path: &[&str]) -> Vec<&str> {
        self.mapping_at(path)
            .map(|mapping| mapping.entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl<K: Into<String>> FromIterator<(K, Entry)> for TranslationDictionary {
    fn from_iter<I: IntoIterator<Item = (K, Entry)>>(iter: I) -> Self {
        TranslationDictionary {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl From<&str> for Entry {
    fn from(template: &str) -> Self {
        Entry::Template(template.to_string())
    }
}

impl From<String> for Entry {
    fn from(template: String) -> Self {
        Entry::Template(template)
    }
}

impl From<TranslationDictionary> for Entry {
    fn from(nested: TranslationDictionary) -> Self {
        Entry::Nested(nested)
    }
}

#[cfg(feature = "json")]
mod json {
    use serde_json::{Map, Value};

    use super::{Lookup, Resolved};

    fn object_at<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Map<String, Value>> {
        let mut current = root.as_object()?;
        for segment in path {
            current = current.get(*segment)?.as_object()?;
        }
        Some(current)
    }

    impl Lookup for Value {
        fn lookup(&self, path: &[&str]) -> Option<Resolved<'_>> {
            let (last, parents) = path.split_last()?;
            match object_at(self, parents)?.get(*last)? {
                Value::String(template) => Some(Resolved::Template(template)),
                Value::Object(_) => Some(Resolved::Mapping),
                Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => {
                    Some(Resolved::Other)
                }
            }
        }

        fn keys(&self, path: &[&str]) -> Vec<&str> {
            object_at(self, path)
                .map(|object| object.keys().map(String::as_str).collect())
                .unwrap_or_default()
        }
    }
}
