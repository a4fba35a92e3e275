//! Unused schema detection

use crate::collector::ReferenceSet;
use openapi_refcheck_common::{Finding, SCHEMA_POINTER_PREFIX};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

/// Names declared under `components.schemas`.
///
/// Empty when either level is missing or `schemas` is not an object.
pub fn schema_names(root: &Value) -> BTreeSet<String> {
    root.get("components")
        .and_then(|components| components.get("schemas"))
        .and_then(Value::as_object)
        .map(|schemas| schemas.keys().cloned().collect())
        .unwrap_or_default()
}

/// Report every declared schema that no reference targets.
///
/// Matching is by prefix stripping: a reference counts as using schema `X`
/// when it equals `X` once `#/components/schemas/` is removed from its
/// front. References without that prefix are compared unchanged, so a bare
/// `$ref` equal to a schema name also marks it used.
pub fn find_unused_schemas(refs: &ReferenceSet, root: &Value) -> Vec<Finding> {
    let declared = schema_names(root);
    if declared.is_empty() {
        return Vec::new();
    }

    let referenced: BTreeSet<&str> = refs
        .iter()
        .map(|r| r.strip_prefix(SCHEMA_POINTER_PREFIX).unwrap_or(r.as_str()))
        .collect();

    debug!(
        declared = declared.len(),
        referenced = referenced.len(),
        "comparing declared schemas against references"
    );

    declared
        .into_iter()
        .filter(|name| !referenced.contains(name.as_str()))
        .map(|name| Finding::UnusedSchema { name })
        .collect()
}
