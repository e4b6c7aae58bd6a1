//! Dotted-key resolution against a dictionary.

use tracing::{debug, trace};

use crate::dictionary::{Lookup, Resolved};
use crate::interpreter::TranslateError;
use crate::interpreter::error::compute_suggestions;

/// Resolve a dotted key such as `"a.b.c"` to its template string.
///
/// # Errors
///
/// Returns [`TranslateError::KeyNotFound`] carrying the full original key if
/// any segment is missing or the path ends at something other than a
/// template string.
pub fn resolve<'d, D: Lookup + ?Sized>(
    dictionary: &'d D,
    key: &str,
) -> Result<&'d str, TranslateError> {
    let path: Vec<&str> = key.split('.').collect();
    match dictionary.lookup(&path) {
        Some(Resolved::Template(template)) => {
            trace!(key, "resolved translation key");
            Ok(template)
        }
        found => {
            debug!(key, ?found, "no translation found");
            Err(TranslateError::KeyNotFound {
                key: key.to_string(),
                suggestions: suggest_keys(dictionary, &path, key),
            })
        }
    }
}

/// Suggest full keys from the deepest mapping reachable along `path`.
fn suggest_keys<D: Lookup + ?Sized>(dictionary: &D, path: &[&str], key: &str) -> Vec<String> {
    for depth in (0..=path.len()).rev() {
        let prefix = &path[..depth];
        let keys = dictionary.keys(prefix);
        if keys.is_empty() {
            continue;
        }
        let available: Vec<String> = keys
            .into_iter()
            .map(|child| {
                prefix
                    .iter()
                    .copied()
                    .chain([child])
                    .collect::<Vec<_>>()
                    .join(".")
            })
            .collect();
        return compute_suggestions(key, &available);
    }
    Vec::new()
}
