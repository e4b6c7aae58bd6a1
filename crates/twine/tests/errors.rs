//! Tests for error types and error message formatting.

use twine::interpreter::compute_suggestions;
use twine::{TranslateError, TranslationDictionary, translate};

#[test]
fn compute_suggestions_finds_similar_keys() {
    let available = vec![
        "home.title".to_string(),
        "home.tile".to_string(),
        "home.subtitle".to_string(),
    ];

    let suggestions = compute_suggestions("home.titel", &available);
    assert_eq!(suggestions, vec!["home.tile", "home.title"]);

    let suggestions = compute_suggestions("settings", &available);
    assert!(suggestions.is_empty());
}

#[test]
fn compute_suggestions_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    let suggestions = compute_suggestions("item", &available);
    assert_eq!(suggestions.len(), 3);
}

#[test]
fn short_keys_allow_one_edit() {
    let available = vec!["ok".to_string(), "no".to_string()];
    assert_eq!(compute_suggestions("on", &available), vec!["ok"]);
    assert!(compute_suggestions("xyz", &available).is_empty());
}

#[test]
fn key_not_found_message_contains_key() {
    let err = TranslateError::KeyNotFound {
        key: "nested.nope".to_string(),
        suggestions: vec![],
    };
    assert_eq!(err.to_string(), "no translation found for key \"nested.nope\"");
}

#[test]
fn key_not_found_message_lists_suggestions() {
    let err = TranslateError::KeyNotFound {
        key: "home.titel".to_string(),
        suggestions: vec!["home.title".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "no translation found for key \"home.titel\" (did you mean: home.title)"
    );
}

#[test]
fn missing_key_suggests_siblings() {
    let dict = TranslationDictionary::new().with_nested(
        "home",
        TranslationDictionary::new()
            .with_template("title", "Welcome")
            .with_template("subtitle", "Hi"),
    );
    let err = translate(&dict, "home.titel", None).unwrap_err();
    assert_eq!(
        err,
        TranslateError::KeyNotFound {
            key: "home.titel".to_string(),
            suggestions: vec!["home.title".to_string()],
        }
    );
}

#[test]
fn missing_top_level_key_suggests_roots() {
    let dict = TranslationDictionary::new().with_template("greeting", "Hi");
    let err = translate(&dict, "greting", None).unwrap_err();
    assert_eq!(
        err,
        TranslateError::KeyNotFound {
            key: "greting".to_string(),
            suggestions: vec!["greeting".to_string()],
        }
    );
}

#[test]
fn interpolation_not_found_message() {
    let err = TranslateError::InterpolationNotFound {
        name: "who".to_string(),
    };
    assert_eq!(err.to_string(), "no interpolation found for \"who\"");
}

#[test]
fn other_error_messages() {
    let err = TranslateError::NotAValue {
        name: "b".to_string(),
    };
    assert!(err.to_string().contains("\"b\""));

    let err = TranslateError::SubstitutionLimit { limit: 8 };
    assert!(err.to_string().contains('8'));

    let err = TranslateError::UnexpectedMarkup {
        key: "a.b".to_string(),
    };
    assert!(err.to_string().contains("\"a.b\""));
}

#[test]
fn compute_suggestions_skips_exact_match() {
    let available = vec!["count".to_string(), "counts".to_string()];
    assert_eq!(compute_suggestions("count", &available), vec!["counts"]);
}

#[test]
fn non_template_leaf_is_not_suggested_for_itself() {
    let raw = serde_json::json!({ "count": 3 });
    let err = translate(&raw, "count", None).unwrap_err();
    assert_eq!(
        err,
        TranslateError::KeyNotFound {
            key: "count".to_string(),
            suggestions: vec![],
        }
    );
    assert_eq!(err.to_string(), "no translation found for key \"count\"");
}

#[test]
fn empty_mapping_is_not_suggested_for_itself() {
    let dict = TranslationDictionary::new().with_nested(
        "a",
        TranslationDictionary::new().with_nested("b", TranslationDictionary::new()),
    );
    let err = translate(&dict, "a.b", None).unwrap_err();
    assert_eq!(
        err,
        TranslateError::KeyNotFound {
            key: "a.b".to_string(),
            suggestions: vec![],
        }
    );
}
