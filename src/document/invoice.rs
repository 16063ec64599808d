use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use super::loader::{load_invoice_json, value_text};
use super::DocumentError;

/// Submission manifest of one dataset (`invoice/invoice.json`)
///
/// Always built from a document merged onto the invoice skeleton, so every
/// skeleton field is present even when the source file omits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Dataset identifier assigned by the platform
    #[serde(default)]
    pub dataset_id: Value,

    /// Submission metadata
    #[serde(default)]
    pub basic: InvoiceBasic,

    /// Sample identity and composition
    #[serde(default)]
    pub sample: InvoiceSample,

    /// Free-form dataset-template specific fields, in document order
    #[serde(default)]
    pub custom: Map<String, Value>,
}

/// `invoice.basic` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceBasic {
    /// Submission date (`YYYY-MM-DD`)
    #[serde(default, deserialize_with = "text")]
    pub date_submitted: String,
    /// Data owner identifier
    #[serde(default, deserialize_with = "text")]
    pub data_owner_id: String,
    /// Dataset display name
    #[serde(default, deserialize_with = "text")]
    pub data_name: String,
    /// Instrument identifier
    #[serde(default, deserialize_with = "text")]
    pub instrument_id: String,
    /// Experiment identifier
    #[serde(default, deserialize_with = "text")]
    pub experiment_id: String,
    /// Free-text description
    #[serde(default, deserialize_with = "text")]
    pub description: String,
}

/// `invoice.sample` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSample {
    /// Registered sample identifier
    #[serde(default, deserialize_with = "text")]
    pub sample_id: String,
    /// Local sample names; the first one is the display id
    #[serde(default, deserialize_with = "texts")]
    pub names: Vec<String>,
    /// Sample owner identifier
    #[serde(default, deserialize_with = "text")]
    pub owner_id: String,
    /// Chemical formula, composition or similar
    #[serde(default, deserialize_with = "text")]
    pub composition: String,
    /// Reference URL
    #[serde(default, deserialize_with = "text")]
    pub reference_url: String,
    /// Rich-text sample description
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    /// General sample attributes (labelled through the term catalog)
    #[serde(default)]
    pub general_attributes: Vec<GeneralAttribute>,
    /// Sample-class specific attributes
    #[serde(default)]
    pub specific_attributes: Vec<SpecificAttribute>,
}

/// One entry of `invoice.sample.generalAttributes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralAttribute {
    /// Term identifier
    #[serde(default, deserialize_with = "text")]
    pub term_id: String,
    /// Attribute value
    #[serde(default)]
    pub value: Value,
}

/// One entry of `invoice.sample.specificAttributes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificAttribute {
    /// Sample class identifier
    #[serde(default, deserialize_with = "text")]
    pub class_id: String,
    /// Term identifier
    #[serde(default, deserialize_with = "text")]
    pub term_id: String,
    /// Attribute value
    #[serde(default)]
    pub value: Value,
}

impl Invoice {
    /// Load an invoice file, merged onto the skeleton (missing file allowed)
    pub fn load(path: &Path, today: &str) -> Result<Self, DocumentError> {
        Self::from_value(load_invoice_json(path, today)?)
    }

    /// Convert an already merged invoice document
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        serde_json::from_value(value).map_err(|source| DocumentError::ShapeError {
            document: "invoice",
            source,
        })
    }

    /// Sample display id: the first sample name, else the sample id
    pub fn sample_display_id(&self) -> &str {
        match self.sample.names.first() {
            Some(name) => name,
            None => &self.sample.sample_id,
        }
    }

    /// Non-empty `basic.dataName`, if any
    pub fn data_name(&self) -> Option<&str> {
        Some(self.basic.data_name.as_str()).filter(|name| !name.is_empty())
    }

    /// `basic.dateSubmitted`, empty when unset
    pub fn date_submitted(&self) -> &str {
        &self.basic.date_submitted
    }
}

/// Any JSON value as display text (`null` is empty, other scalars verbatim)
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|value| value_text(&value))
}

/// A JSON array as display texts; a lone scalar counts as one element
fn texts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().map(value_text).collect(),
        Value::Null => Vec::new(),
        other => vec![value_text(&other)],
    })
}
