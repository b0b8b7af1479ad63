use mapxml::{render_json_str, RenderOptions, Value, XmlRenderer};
use serde_json::json;
use std::fs;

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Compare two documents, printing a unified diff on mismatch
fn assert_document(actual: &str, expected: &str) {
    if actual != expected {
        let diff = similar::TextDiff::from_lines(expected, actual);
        println!("{}", diff.unified_diff().header("expected", "actual"));
        panic!("rendered document does not match expected output, see diff above");
    }
}

fn render(input: serde_json::Value) -> String {
    XmlRenderer::new().render(&Value::from(input))
}

#[test]
fn empty_structure_renders_a_self_closing_root() {
    let expected = format!("{}<xml_body/>\n", DECLARATION);
    assert_document(&render(json!({})), &expected);
}

#[test]
fn single_scalar_entry() {
    let expected = format!("{}<xml_body><name>hogehoge</name></xml_body>\n", DECLARATION);
    assert_document(&render(json!({"name": "hogehoge"})), &expected);
}

#[test]
fn list_of_records_repeats_the_list_item_name() {
    let input = json!({
        "members": [
            {"name": "hogehoge"},
            {"name": "foobar"},
        ]
    });
    let expected = format!(
        "{}<xml_body><members>\
         <list_item><name>hogehoge</name></list_item>\
         <list_item><name>foobar</name></list_item>\
         </members></xml_body>\n",
        DECLARATION
    );
    assert_document(&render(input), &expected);
}

#[test]
fn mixed_scalars_and_records() {
    let input = json!({
        "title": "roster",
        "members": [{"name": "hogehoge"}],
        "count": 1,
    });
    let expected = format!(
        "{}<xml_body><title>roster</title>\
         <members><list_item><name>hogehoge</name></list_item></members>\
         <count>1</count></xml_body>\n",
        DECLARATION
    );
    assert_document(&render(input), &expected);
}

#[test]
fn explicit_root_name_overrides_the_default() {
    let options = RenderOptions {
        super_parent_name: Some("payload".to_string()),
        default_list_item_name: Some("entry".to_string()),
        ..Default::default()
    };
    let input = Value::from(json!({"rows": [{"id": 1}]}));
    let output = XmlRenderer::with_options(options).render(&input);
    let expected = format!(
        "{}<payload><rows><entry><id>1</id></entry></rows></payload>\n",
        DECLARATION
    );
    assert_document(&output, &expected);
}

#[test]
fn invalid_leaves_are_omitted_at_any_depth() {
    let input = json!({
        "kept": "yes",
        "dropped": null,
        "nested": {"also_dropped": null, "inner": "ok"},
    });
    let expected = format!(
        "{}<xml_body><kept>yes</kept><nested><inner>ok</inner></nested></xml_body>\n",
        DECLARATION
    );
    assert_document(&render(input), &expected);
}

#[test]
fn empty_collections_self_close_at_any_depth() {
    let input = json!({"outer": {"empty_list": [], "empty_map": {}}});
    let expected = format!(
        "{}<xml_body><outer><empty_list/><empty_map/></outer></xml_body>\n",
        DECLARATION
    );
    assert_document(&render(input), &expected);
}

#[test]
fn rendering_is_deterministic_across_fresh_renderers() {
    let input = Value::from(json!({
        "zulu": "last?",
        "alpha": {"first": [1, 2, 3]},
        "members": [{"name": "hogehoge"}, {"name": "foobar"}],
    }));
    let first = XmlRenderer::new().render(&input);
    let second = XmlRenderer::new().render(&input);
    assert_document(&second, &first);
}

// A list of bare scalars names its elements by position: <0>, <1>, ...
// Those are not valid XML element names, but the behavior is kept as
// documented rather than silently corrected.
#[test]
fn list_of_scalars_uses_positional_names() {
    let expected = format!(
        "{}<xml_body><tags><0>a</0><1>b</1></tags></xml_body>\n",
        DECLARATION
    );
    assert_document(&render(json!({"tags": ["a", "b"]})), &expected);
}

#[test]
fn leaf_text_is_escaped() {
    let expected = format!(
        "{}<xml_body><formula>a &lt; b &amp;&amp; c &gt; d</formula></xml_body>\n",
        DECLARATION
    );
    assert_document(&render(json!({"formula": "a < b && c > d"})), &expected);
}

#[test]
fn booleans_and_numbers_render_as_text() {
    let input = json!({"active": true, "count": 30, "ratio": 0.5});
    let expected = format!(
        "{}<xml_body><active>true</active><count>30</count><ratio>0.5</ratio></xml_body>\n",
        DECLARATION
    );
    assert_document(&render(input), &expected);
}

#[test]
fn deeply_nested_structures_round_trip() {
    let input = json!({
        "a": {"b": {"c": {"d": {"e": "deep"}}}},
    });
    let expected = format!(
        "{}<xml_body><a><b><c><d><e>deep</e></d></c></b></a></xml_body>\n",
        DECLARATION
    );
    assert_document(&render(input), &expected);
}

#[test]
fn render_json_str_accepts_an_option_map() {
    let options: RenderOptions =
        serde_json::from_value(json!({"SuperParentName": "body"})).unwrap();
    let output = render_json_str(r#"{"name": "foobar"}"#, options).unwrap();
    let expected = format!("{}<body><name>foobar</name></body>\n", DECLARATION);
    assert_document(&output, &expected);
}

#[test]
fn render_json_str_rejects_malformed_input() {
    let result = render_json_str("{not json", RenderOptions::default());
    assert!(result.is_err());
}

#[test]
fn renders_a_json_file_from_disk() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("input.json");
    fs::write(&path, r#"{"members": [{"name": "hogehoge"}]}"#).expect("failed to write fixture");

    let content = fs::read_to_string(&path).expect("failed to read fixture back");
    let output = render_json_str(&content, RenderOptions::default()).unwrap();
    let expected = format!(
        "{}<xml_body><members><list_item><name>hogehoge</name></list_item></members></xml_body>\n",
        DECLARATION
    );
    assert_document(&output, &expected);
}
