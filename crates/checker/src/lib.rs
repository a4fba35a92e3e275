//! Reference consistency checks for OpenAPI JSON documents
//!
//! This crate walks a parsed document and reports two kinds of problems:
//! - `$ref` pointers that do not resolve to a location in the same document
//! - schemas declared under `components.schemas` that no pointer targets
//!
//! ## Check Strategy
//!
//! A document is checked in three passes over the same immutable tree:
//! - collect every `$ref` value into an ordered, de-duplicated set
//! - walk each pointer segment by segment from the root
//! - subtract the referenced schema names from the declared ones
//!
//! ## Usage
//! ```rust,ignore
//! use openapi_refcheck_checker::check_file;
//!
//! let report = check_file("openapi.json")?;
//! for finding in &report.findings {
//!     println!("ERROR: {}", finding);
//! }
//! ```

mod collector;
mod document;
mod report;
mod unused;
mod verifier;

pub use collector::{collect_refs, ReferenceSet};
pub use document::Document;
pub use report::{check_document, check_file, FileReport};
pub use unused::{find_unused_schemas, schema_names};
pub use verifier::verify_ref;

pub use openapi_refcheck_common::{Finding, RefCheckError, Result};
