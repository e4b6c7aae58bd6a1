//! Error types for translation.

use strsim::levenshtein;
use thiserror::Error;

/// An error that occurred while translating a key.
///
/// Errors are raised at the point of failure; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The key does not resolve to a template string, either because a
    /// segment is missing or because the path ends at a nested mapping.
    #[error("no translation found for key \"{key}\"{}", format_suggestions(suggestions))]
    KeyNotFound {
        key: String,
        suggestions: Vec<String>,
    },

    /// A placeholder has no usable interpolation entry.
    #[error("no interpolation found for \"{name}\"")]
    InterpolationNotFound { name: String },

    /// A placeholder refers to a render function instead of a value.
    #[error("interpolation \"{name}\" is a render function and cannot fill a placeholder")]
    NotAValue { name: String },

    /// Rescanning placeholder substitution did not terminate in time.
    #[error("placeholder substitution exceeded {limit} replacements")]
    SubstitutionLimit { limit: usize },

    /// Plain text was requested but the translation contains tag spans.
    #[error("translation for key \"{key}\" contains markup")]
    UnexpectedMarkup { key: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {})", suggestions.join(", "))
    }
}

/// Compute up to three near matches for `target` among `available`.
///
/// Exact matches are never suggested. Keys longer than three characters tolerate an edit distance of two,
/// shorter keys an edit distance of one. Closest matches come first.
pub fn compute_suggestions(target: &str, available: &[String]) -> Vec<String> {
    let max_distance = if target.chars().count() > 3 { 2 } else { 1 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance > 0 && *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
