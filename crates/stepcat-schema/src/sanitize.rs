//! Removal of null-only branches from a schema tree
//!
//! A mapping whose `type` is exactly `["null"]` is dropped. Sequences drop
//! such elements entirely. A mapping *value* that is dropped keeps its key
//! with a JSON `null`, so `{"default": {"type": ["null"]}}` becomes
//! `{"default": null}`.
//!
//! The walk is post-order: children are sanitized before their parent is
//! tested, so a `type` list that only becomes `["null"]` after its own
//! elements are sanitized is removed too. This makes [`sanitize`]
//! idempotent.
//!
//! Traversal uses a heap-allocated stack; arbitrarily deep documents do not
//! exhaust the thread stack.

use std::path::Path;

use serde_json::{Map, Value};
use stepcat_fs::{DocumentFormat, DocumentStore, NormalizedPath, io};

use crate::Result;

/// Sanitize `node`, returning `None` when the node itself is removed.
pub fn sanitize(node: Value) -> Option<Value> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut pending = Pending::Visit(node);

    loop {
        let finished = match pending {
            Pending::Visit(Value::Object(map)) => {
                stack.push(Frame::Object {
                    entries: map.into_iter(),
                    key: None,
                    done: Map::new(),
                });
                None
            }
            Pending::Visit(Value::Array(items)) => {
                stack.push(Frame::Array {
                    items: items.into_iter(),
                    done: Vec::new(),
                });
                None
            }
            Pending::Visit(scalar) => Some(Some(scalar)),
            Pending::Finished(result) => Some(result),
        };

        if let Some(result) = finished {
            match stack.last_mut() {
                Some(parent) => parent.accept(result),
                None => return result,
            }
        }

        let child = stack.last_mut().and_then(Frame::next_child);
        pending = match child {
            Some(child) => Pending::Visit(child),
            None => Pending::Finished(stack.pop().and_then(Frame::finish)),
        };
    }
}

/// Whether `map` is a null-only branch: its `type` is exactly `["null"]`.
pub fn is_null_only(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::Array(types)) => matches!(types.as_slice(), [Value::String(t)] if t == "null"),
        _ => false,
    }
}

/// Read the JSON schema at `input`, sanitize it and write it to `output`.
///
/// The output is 2-space indented JSON written atomically. A removed root is
/// written as `null`.
pub fn sanitize_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let input = NormalizedPath::new(input.as_ref());
    let output = NormalizedPath::new(output.as_ref());
    let store = DocumentStore::new();

    let content = io::read_text(&input)?;
    let schema: Value = store.parse(&input, DocumentFormat::Json, &content)?;

    let sanitized = sanitize(schema).unwrap_or(Value::Null);

    let mut rendered =
        serde_json::to_string_pretty(&sanitized).map_err(|e| stepcat_fs::Error::Serialize {
            path: output.to_native(),
            format: DocumentFormat::Json.name().into(),
            message: e.to_string(),
        })?;
    rendered.push('\n');
    io::write_text(&output, &rendered)?;

    tracing::info!(input = %input, output = %output, "Sanitized schema");
    Ok(())
}

enum Pending {
    Visit(Value),
    Finished(Option<Value>),
}

/// A container whose children are still being sanitized.
enum Frame {
    Object {
        entries: serde_json::map::IntoIter,
        key: Option<String>,
        done: Map<String, Value>,
    },
    Array {
        items: std::vec::IntoIter<Value>,
        done: Vec<Value>,
    },
}

impl Frame {
    fn next_child(&mut self) -> Option<Value> {
        match self {
            Frame::Object { entries, key, .. } => {
                let (next_key, value) = entries.next()?;
                *key = Some(next_key);
                Some(value)
            }
            Frame::Array { items, .. } => items.next(),
        }
    }

    fn accept(&mut self, result: Option<Value>) {
        match self {
            Frame::Object { key, done, .. } => {
                if let Some(key) = key.take() {
                    done.insert(key, result.unwrap_or(Value::Null));
                }
            }
            Frame::Array { done, .. } => done.extend(result),
        }
    }

    fn finish(self) -> Option<Value> {
        match self {
            Frame::Object { done, .. } if is_null_only(&done) => None,
            Frame::Object { done, .. } => Some(Value::Object(done)),
            Frame::Array { done, .. } => Some(Value::Array(done)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_any_of_null_branch_removed() {
        let input = json!({"anyOf": [{"type": ["null"]}, {"type": "string"}]});
        assert_eq!(sanitize(input), Some(json!({"anyOf": [{"type": "string"}]})));
    }

    #[test]
    fn test_top_level_null_only_is_absent() {
        assert_eq!(sanitize(json!({"type": ["null"]})), None);
    }

    #[test]
    fn test_sequence_drops_absent_elements() {
        assert_eq!(sanitize(json!([{"type": ["null"]}, 5])), Some(json!([5])));
    }

    #[test]
    fn test_dropped_mapping_value_keeps_key_as_null() {
        let input = json!({"default": {"type": ["null"]}, "title": "x"});
        assert_eq!(sanitize(input), Some(json!({"default": null, "title": "x"})));
    }

    #[test]
    fn test_literal_null_elements_are_kept() {
        assert_eq!(sanitize(json!([null, 1])), Some(json!([null, 1])));
    }

    #[test]
    fn test_type_null_string_is_not_null_only() {
        let input = json!({"type": "null"});
        assert_eq!(sanitize(input.clone()), Some(input));
    }

    #[test]
    fn test_type_with_null_and_other_is_kept() {
        let input = json!({"type": ["null", "string"]});
        assert_eq!(sanitize(input.clone()), Some(input));
    }

    #[test]
    fn test_type_becoming_null_only_after_sanitizing_is_removed() {
        let input = json!({"items": [{"type": [{"type": ["null"]}, "null"]}, 1]});
        assert_eq!(sanitize(input), Some(json!({"items": [1]})));
    }

    #[test]
    fn test_scalars_unchanged() {
        for scalar in [json!(1), json!("s"), json!(true), json!(null), json!(2.5)] {
            assert_eq!(sanitize(scalar.clone()), Some(scalar));
        }
    }

    #[test]
    fn test_key_order_preserved() {
        let input = json!({"z": 1, "a": {"type": ["null"]}, "m": [1]});
        let out = sanitize(input).unwrap();
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let depth = 1_000;
        let mut node = json!({"type": ["null"]});
        for _ in 0..depth {
            node = json!({"anyOf": [node, {"type": "integer"}]});
        }

        let mut current = &sanitize(node).unwrap();
        for _ in 0..depth - 1 {
            let any_of = current["anyOf"].as_array().unwrap();
            assert_eq!(any_of.len(), 2);
            current = &any_of[0];
        }
        assert_eq!(current, &json!({"anyOf": [{"type": "integer"}]}));
    }
}
