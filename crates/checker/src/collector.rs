//! `$ref` collection

use openapi_refcheck_common::REF_KEY;
use serde_json::Value;
use std::collections::BTreeSet;

/// Unique reference pointers found in one document, in lexical order
pub type ReferenceSet = BTreeSet<String>;

/// Collect every `$ref` value reachable from `node`, at any depth.
///
/// The value of a `$ref` entry is not descended into. A non-string value is
/// recorded as its compact JSON text, which never starts with `#` and so is
/// reported as a malformed pointer when verified.
pub fn collect_refs(node: &Value) -> ReferenceSet {
    let mut refs = ReferenceSet::new();
    collect_into(node, &mut refs);
    refs
}

fn collect_into(node: &Value, refs: &mut ReferenceSet) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                if key == REF_KEY {
                    refs.insert(pointer_text(value));
                } else {
                    collect_into(value, refs);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_into(item, refs);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

fn pointer_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
