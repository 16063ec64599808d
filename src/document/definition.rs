use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use super::loader::load_json;
use super::DocumentError;

/// `variable` marker value of definitions that hold a single value
const CONSTANT_MARKER: i64 = 2;

/// Local-language / English label pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BilingualLabel {
    /// Local-language label
    #[serde(default)]
    pub ja: Option<String>,
    /// English label
    #[serde(default)]
    pub en: Option<String>,
}

/// Schema entry for one metadata key (`tasksupport/metadata-def.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataDefinition {
    /// Display labels
    #[serde(default)]
    pub name: BilingualLabel,
    /// Default unit
    #[serde(default)]
    pub unit: Option<String>,
    /// Variability marker; absent or `2` means a single constant value
    #[serde(default)]
    pub variable: Option<i64>,
    /// Sort position in the metadata table
    #[serde(default)]
    pub order: Option<f64>,
}

impl MetadataDefinition {
    /// Whether the key holds one value per measurement column
    pub fn is_variable(&self) -> bool {
        self.variable.map_or(false, |marker| marker != CONSTANT_MARKER)
    }

    /// Sort key; definitions without an order sort last
    pub fn sort_order(&self) -> f64 {
        self.order.unwrap_or(f64::INFINITY)
    }
}

/// All metadata definitions, in document order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataDefinitions(pub IndexMap<String, MetadataDefinition>);

impl MetadataDefinitions {
    /// Load `metadata-def.json`
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        Self::from_value(load_json(path)?)
    }

    /// Convert a parsed definition document
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        serde_json::from_value(value).map_err(|source| DocumentError::ShapeError {
            document: "metadata definition",
            source,
        })
    }

    /// Definition of `key`
    pub fn get(&self, key: &str) -> Option<&MetadataDefinition> {
        self.0.get(key)
    }

    /// Definitions in document order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataDefinition)> {
        self.0.iter()
    }
}

/// The parts of `tasksupport/invoice.schema.json` used for labelling
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceSchema {
    /// Top-level schema properties
    #[serde(default)]
    pub properties: SchemaProperties,
}

/// `properties` of the invoice schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaProperties {
    /// Schema of `invoice.custom`
    #[serde(default)]
    pub custom: CustomSchema,
}

/// `properties.custom` of the invoice schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomSchema {
    /// Field schemas keyed by custom field name
    #[serde(default)]
    pub properties: IndexMap<String, CustomField>,
}

/// Schema entry of one custom invoice field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomField {
    /// Display labels
    #[serde(default)]
    pub label: BilingualLabel,
    /// Rendering options
    #[serde(default)]
    pub options: CustomFieldOptions,
}

/// `options` of a custom field schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomFieldOptions {
    /// Unit of the field
    #[serde(default)]
    pub unit: Option<String>,
}

impl InvoiceSchema {
    /// Load `invoice.schema.json`
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        Self::from_value(load_json(path)?)
    }

    /// Convert a parsed schema document
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        serde_json::from_value(value).map_err(|source| DocumentError::ShapeError {
            document: "invoice schema",
            source,
        })
    }

    /// Schema of the custom field `key`
    pub fn custom_field(&self, key: &str) -> Option<&CustomField> {
        self.properties.custom.properties.get(key)
    }
}
