use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use super::loader::load_json;
use super::DocumentError;

/// Measured parameters of one dataset (`meta/metadata.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Single-valued parameters
    #[serde(default)]
    pub constant: IndexMap<String, MetaEntry>,

    /// Repeated-measurement parameters, one map per measurement column
    #[serde(default)]
    pub variable: Vec<IndexMap<String, MetaEntry>>,
}

/// A metadata value with its optional unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaEntry {
    /// Measured value
    #[serde(default)]
    pub value: Value,
    /// Unit overriding the definition's unit
    #[serde(default)]
    pub unit: Option<String>,
}

impl Metadata {
    /// Load a metadata file (missing file allowed)
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        Self::from_value(load_json(path)?)
    }

    /// Convert a parsed metadata document
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        serde_json::from_value(value).map_err(|source| DocumentError::ShapeError {
            document: "metadata",
            source,
        })
    }

    /// Number of value columns in the metadata table (never below one)
    pub fn column_count(&self) -> usize {
        self.variable.len().max(1)
    }
}
