//! Document loading

use openapi_refcheck_common::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A parsed JSON document, immutable for the duration of a check
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Load a document from a file path
    ///
    /// The file is read in full and closed before parsing starts.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        Self::from_json(&content)
    }

    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)?;

        Ok(Self { root })
    }

    /// Root node of the document tree
    pub fn root(&self) -> &Value {
        &self.root
    }
}
