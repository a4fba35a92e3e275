//! Pointer resolution

use openapi_refcheck_common::{Finding, ROOT_MARKER};
use serde_json::Value;
use tracing::debug;

/// Resolve `pointer` against `root`, segment by segment.
///
/// Segments are matched as literal object keys: no `~0`/`~1` unescaping and
/// no percent-decoding. Only objects can be descended into, so a segment
/// addressing an array or a scalar is reported as missing. `#` and `#/`
/// both resolve to the root.
pub fn verify_ref(root: &Value, pointer: &str) -> Result<(), Finding> {
    let mut segments = pointer.split('/');
    if segments.next() != Some(ROOT_MARKER) {
        return Err(Finding::MalformedPointer {
            pointer: pointer.to_string(),
        });
    }

    let body = &pointer[ROOT_MARKER.len()..];
    if body.is_empty() || body == "/" {
        debug!(pointer, "pointer resolves to document root");
        return Ok(());
    }

    let mut current = root;
    for segment in segments {
        current = match current {
            Value::Object(map) => match map.get(segment) {
                Some(next) => next,
                None => return Err(unresolved(segment, pointer)),
            },
            Value::Array(_)
            | Value::String(_)
            | Value::Number(_)
            | Value::Bool(_)
            | Value::Null => return Err(unresolved(segment, pointer)),
        };
    }

    debug!(pointer, "pointer resolved");
    Ok(())
}

fn unresolved(segment: &str, pointer: &str) -> Finding {
    Finding::UnresolvedSegment {
        segment: segment.to_string(),
        pointer: pointer.to_string(),
    }
}
