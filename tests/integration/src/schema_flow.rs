//! Schema sanitization over a generated schema file

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use stepcat_schema::{sanitize, sanitize_file};
use stepcat_test_utils::TestTree;

const GENERATED_SCHEMA: &str = r##"{
  "title": "align_sort",
  "type": "object",
  "properties": {
    "message": {"anyOf": [{"type": ["null"]}, {"type": "string"}]},
    "threads": {"type": ["null"]},
    "steps": {
      "type": "array",
      "items": [{"type": ["null"]}, {"$ref": "#/definitions/step"}]
    }
  },
  "definitions": {"step": {"type": "object", "default": {"type": ["null"]}}}
}"##;

#[test]
fn test_generated_schema_is_sanitized_in_place() {
    let tree = TestTree::new();
    let path = tree.write("autogenerated/schemas/workflows/align_sort.json", GENERATED_SCHEMA);

    sanitize_file(&path, &path).unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({
            "title": "align_sort",
            "type": "object",
            "properties": {
                "message": {"anyOf": [{"type": "string"}]},
                "threads": null,
                "steps": {"type": "array", "items": [{"$ref": "#/definitions/step"}]}
            },
            "definitions": {"step": {"type": "object", "default": null}}
        })
    );

    // A second pass changes nothing
    assert_eq!(sanitize(written.clone()), Some(written));
}
