//! # Package Documents
//!
//! Loading of the JSON documents an RDE structuring run leaves behind:
//!
//! | File | Type |
//! |------|------|
//! | `invoice/invoice.json` | [`Invoice`] (merged onto a default skeleton) |
//! | `meta/metadata.json` | [`Metadata`] |
//! | `tasksupport/metadata-def.json` | [`MetadataDefinitions`] |
//! | `tasksupport/invoice.schema.json` | [`InvoiceSchema`] |
//!
//! A missing document loads as `{}`; malformed JSON is an error. Invoices are
//! deep-merged onto [`invoice_skeleton`] before conversion so that every
//! field the renderers read is present.

mod definition;
mod error;
mod invoice;
mod loader;
mod metadata;

#[cfg(test)]
mod tests;

pub use definition::{
    BilingualLabel, CustomField, CustomFieldOptions, CustomSchema, InvoiceSchema,
    MetadataDefinition, MetadataDefinitions, SchemaProperties,
};
pub use error::DocumentError;
pub use invoice::{GeneralAttribute, Invoice, InvoiceBasic, InvoiceSample, SpecificAttribute};
pub use loader::{
    invoice_skeleton, is_truthy, load_invoice_json, load_json, merge_onto, value_text,
};
pub use metadata::{MetaEntry, Metadata};
