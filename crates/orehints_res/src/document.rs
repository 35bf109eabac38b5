//! Document finalization: the generated-file marker and null stripping.

use serde_json::{json, Value};

/// Marker placed in every emitted document so the clean step can tell
/// generated files from hand-written ones.
pub const GENERATED_COMMENT: &str = "This file was automatically created by orehints";

/// Remove `null` values recursively.
///
/// Intentionally-omitted optional fields must be absent from emitted files,
/// not present as `null`; validation compares with the same semantics.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                strip_nulls(v);
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                strip_nulls(v);
            }
        }
        _ => {}
    }
}

/// Prepare a document for emission: strip nulls and add the marker field.
#[must_use]
pub fn finalize(mut document: Value) -> Value {
    strip_nulls(&mut document);
    if let Value::Object(map) = &mut document {
        map.insert("__comment__".to_string(), json!(GENERATED_COMMENT));
    }
    document
}

/// Whether a parsed document carries the generated-file marker.
#[must_use]
pub fn is_generated(document: &Value) -> bool {
    document.get("__comment__").and_then(Value::as_str) == Some(GENERATED_COMMENT)
}
