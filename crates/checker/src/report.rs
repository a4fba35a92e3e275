//! Per-document check orchestration

use crate::collector::collect_refs;
use crate::document::Document;
use crate::unused::find_unused_schemas;
use crate::verifier::verify_ref;
use openapi_refcheck_common::{Finding, Result};
use std::path::Path;
use tracing::debug;

/// Outcome of checking one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Number of unique `$ref` pointers found
    pub ref_count: usize,

    /// Every problem found, pointer findings first, then unused schemas
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Number of errors in this report
    pub fn error_count(&self) -> usize {
        self.findings.len()
    }

    /// True when the document is self-consistent
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Run all checks against an already loaded document.
///
/// All findings are accumulated; one bad pointer does not stop the others
/// from being checked.
pub fn check_document(document: &Document) -> FileReport {
    let root = document.root();
    let refs = collect_refs(root);
    debug!(count = refs.len(), "collected references");

    let mut findings: Vec<Finding> = refs
        .iter()
        .filter_map(|pointer| verify_ref(root, pointer).err())
        .collect();
    findings.extend(find_unused_schemas(&refs, root));

    FileReport {
        ref_count: refs.len(),
        findings,
    }
}

/// Load a JSON document from `path` and check it
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<FileReport> {
    let document = Document::from_file(path)?;
    Ok(check_document(&document))
}
