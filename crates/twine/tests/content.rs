//! Tests for content trees: ordering, display, and serialization.

use serde_json::json;
use twine::{
    Content, Element, Interpolation, Segment, TranslationDictionary, interpolations, translate,
};

fn translate_one(template: &str) -> Content {
    let dict = TranslationDictionary::new().with_template("key", template);
    translate(&dict, "key", None).unwrap()
}

#[test]
fn plain_result_serializes_as_string() {
    let content = translate_one("Hello!");
    assert_eq!(serde_json::to_value(&content).unwrap(), json!("Hello!"));
}

#[test]
fn tree_serializes_as_alternating_array() {
    let content = translate_one("Hello <em>the</em> <strong>world</strong>!");
    assert_eq!(
        serde_json::to_value(&content).unwrap(),
        json!([
            "Hello ",
            { "type": "element", "tag": "em", "children": "the", "key": 0 },
            " ",
            { "type": "element", "tag": "strong", "children": "world", "key": 1 },
            "!"
        ])
    );
}

#[test]
fn rendered_attributes_are_serialized() {
    let dict = TranslationDictionary::new().with_template("key", "<b>x</b>");
    let content = translate(
        &dict,
        "key",
        Some(&interpolations! {
            "b" => Interpolation::render(|t| Element::new("span", t).with_attribute("class", "bold")),
            "unused" => 1,
        }),
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&content).unwrap(),
        json!([
            "",
            {
                "type": "element",
                "tag": "span",
                "attributes": { "class": "bold" },
                "children": "x",
                "key": 0
            },
            ""
        ])
    );
}

#[test]
fn value_node_serializes_with_key() {
    let dict = TranslationDictionary::new().with_template("key", "a <n>x</n>");
    let content = translate(&dict, "key", Some(&interpolations! { "n" => 7 })).unwrap();
    assert_eq!(
        serde_json::to_value(&content).unwrap(),
        json!(["a ", { "type": "value", "key": 0, "value": 7 }, ""])
    );
}

#[test]
fn tree_length_is_two_n_plus_one() {
    for (template, nodes) in [
        ("<a>1</a>", 1),
        ("x <a>1</a> y <b>2</b>", 2),
        ("<a>1</a><a>2</a><a>3</a> tail", 3),
    ] {
        let content = translate_one(template);
        let tree = content.as_tree().unwrap();
        assert_eq!(tree.nodes().len(), nodes);
        assert_eq!(tree.len(), 2 * nodes + 1);
        assert!(!tree.is_empty());

        let segments: Vec<Segment<'_>> = tree.segments().collect();
        for (index, segment) in segments.iter().enumerate() {
            let is_text = matches!(segment, Segment::Text(_));
            assert_eq!(is_text, index % 2 == 0, "segment {index} of {template}");
        }
    }
}

#[test]
fn keys_increase_left_to_right() {
    let content = translate_one("<c>3</c> <a>1</a> <b>2</b>");
    let tree = content.as_tree().unwrap();
    let pairs: Vec<(String, usize)> = tree
        .nodes()
        .iter()
        .map(|node| (node.to_string(), node.key()))
        .collect();
    assert_eq!(
        pairs,
        vec![("3".to_string(), 0), ("1".to_string(), 1), ("2".to_string(), 2)]
    );
}

#[test]
fn display_flattens_tree_to_text() {
    let content = translate_one("Hello <em>the</em> <strong>world</strong>!");
    assert_eq!(content.to_string(), "Hello the world!");
    assert_eq!(String::from(content), "Hello the world!");
}

#[test]
fn repeated_calls_produce_identical_results() {
    let dict = TranslationDictionary::new().with_template("key", "Hi {who}, <b>bold</b>");
    let values = interpolations! { "who" => "you" };
    let first = translate(&dict, "key", Some(&values)).unwrap();
    let second = translate(&dict, "key", Some(&values)).unwrap();
    assert_eq!(first, second);
}
