//! Integration tests for document checks

use openapi_refcheck_checker::{
    check_document, check_file, collect_refs, verify_ref, Document, Finding,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_unused_schema_without_refs() {
    let doc = Document::from_json(r#"{"components": {"schemas": {"Foo": {}}}}"#).unwrap();

    let report = check_document(&doc);
    assert_eq!(report.ref_count, 0);
    assert_eq!(
        report.findings,
        vec![Finding::UnusedSchema {
            name: "Foo".to_string()
        }]
    );
}

#[test]
fn test_referenced_schema_is_clean() {
    let doc = Document::from_json(
        r##"{
            "components": {"schemas": {"Foo": {}}},
            "paths": {"/x": {"$ref": "#/components/schemas/Foo"}}
        }"##,
    )
    .unwrap();

    let report = check_document(&doc);
    assert_eq!(report.ref_count, 1);
    assert!(report.is_clean());
}

#[test]
fn test_missing_path_segment() {
    let doc = Document::from_json(r##"{"a": {"$ref": "#/missing/path"}}"##).unwrap();

    let report = check_document(&doc);
    assert_eq!(report.ref_count, 1);
    assert_eq!(
        report.findings,
        vec![Finding::UnresolvedSegment {
            segment: "missing".to_string(),
            pointer: "#/missing/path".to_string()
        }]
    );
}

#[test]
fn test_malformed_pointer() {
    let doc = Document::from_json(r#"{"a": {"$ref": "bad-ref"}}"#).unwrap();

    let report = check_document(&doc);
    assert_eq!(report.ref_count, 1);
    assert_eq!(
        report.findings,
        vec![Finding::MalformedPointer {
            pointer: "bad-ref".to_string()
        }]
    );
}

#[test]
fn test_non_string_ref_is_malformed() {
    let doc = Document::from_json(r##"{"a": {"$ref": ["#/a"]}}"##).unwrap();

    let report = check_document(&doc);
    assert_eq!(report.ref_count, 1);
    assert!(matches!(
        report.findings.as_slice(),
        [Finding::MalformedPointer { .. }]
    ));
}

#[test]
fn test_check_is_idempotent() {
    let doc = Document::from_json(
        r##"{
            "components": {"schemas": {"A": {}, "B": {}, "C": {"$ref": "#/components/schemas/A"}}},
            "paths": {
                "/a": {"$ref": "#/paths/~1b"},
                "/b": [{"$ref": "#/components/schemas/Z"}, {"$ref": "x"}]
            }
        }"##,
    )
    .unwrap();

    let first = check_document(&doc);
    let second = check_document(&doc);
    assert_eq!(first, second);

    let first_lines: Vec<String> = first.findings.iter().map(|f| f.to_string()).collect();
    let second_lines: Vec<String> = second.findings.iter().map(|f| f.to_string()).collect();
    assert_eq!(first_lines, second_lines);
}

#[test]
fn test_verifier_agrees_with_json_pointer_on_object_paths() {
    // Without escapes, every resolvable pointer maps to a serde_json pointer
    let doc = Document::from_json(
        r##"{
            "components": {"schemas": {"Pet": {"properties": {"id": {}}}}},
            "a": {"$ref": "#/components/schemas/Pet/properties/id"},
            "b": {"$ref": "#/components/schemas/Dog"},
            "c": {"$ref": "#/a"}
        }"##,
    )
    .unwrap();

    for pointer in collect_refs(doc.root()) {
        let json_pointer = pointer.trim_start_matches('#');
        let reachable = doc.root().pointer(json_pointer).is_some();
        assert_eq!(
            verify_ref(doc.root(), &pointer).is_ok(),
            reachable,
            "{}",
            pointer
        );
    }
}

#[test]
fn test_check_file_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{"components": {{"schemas": {{"Foo": {{}}}}}}, "x": {{"$ref": "#/components/schemas/Foo"}}}}"##
    )
    .unwrap();

    let report = check_file(file.path()).unwrap();
    assert_eq!(report.ref_count, 1);
    assert!(report.is_clean());
}

#[test]
fn test_check_file_invalid_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    assert!(check_file(file.path()).is_err());
}
