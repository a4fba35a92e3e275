//! Common types and utilities for openapi-refcheck
//!
//! This crate contains the error type shared by the checker and the CLI,
//! and the [`Finding`] taxonomy describing every structural problem a
//! document can have.

use std::fmt;
use thiserror::Error;

/// Marker that every local reference must start with
pub const ROOT_MARKER: &str = "#";

/// Prefix of a reference targeting a declared schema
pub const SCHEMA_POINTER_PREFIX: &str = "#/components/schemas/";

/// Key under which a reference pointer is stored
pub const REF_KEY: &str = "$ref";

/// Errors that can occur while loading a document
#[derive(Error, Debug)]
pub enum RefCheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for checker operations
pub type Result<T> = std::result::Result<T, RefCheckError>;

/// A structural problem found in a document
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finding {
    /// Reference not starting with the root marker
    MalformedPointer { pointer: String },

    /// A path segment of the reference is missing from the document
    UnresolvedSegment { segment: String, pointer: String },

    /// Schema declared under `components.schemas` that nothing references
    UnusedSchema { name: String },
}

impl Finding {
    /// Short machine-friendly label for the finding kind
    pub fn kind(&self) -> &'static str {
        match self {
            Finding::MalformedPointer { .. } => "malformed-pointer",
            Finding::UnresolvedSegment { .. } => "unresolved-segment",
            Finding::UnusedSchema { .. } => "unused-schema",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MalformedPointer { pointer } => {
                write!(f, "ref '{}' not starting with {}/", pointer, ROOT_MARKER)
            }
            Finding::UnresolvedSegment { segment, pointer } => {
                write!(f, "'{}' from ref '{}' does not exist", segment, pointer)
            }
            Finding::UnusedSchema { name } => {
                write!(f, "unused (not targeted by a reference) schema '{}'", name)
            }
        }
    }
}
