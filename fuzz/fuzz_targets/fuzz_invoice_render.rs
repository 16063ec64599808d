#![no_main]

use indexmap::IndexMap;
use libfuzzer_sys::fuzz_target;
use rde_preview::document::{
    invoice_skeleton, merge_onto, Invoice, InvoiceSchema, Metadata, MetadataDefinitions,
};
use rde_preview::package::{DatasetId, DatasetRecord};
use rde_preview::render::{render_detail, render_list};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as invoice.json: parsing may fail, rendering must not panic
    let Ok(loaded) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let merged = merge_onto(&invoice_skeleton("2024-01-01"), &loaded);
    let Ok(invoice) = Invoice::from_value(merged) else {
        return;
    };

    let record = DatasetRecord {
        id: DatasetId(1),
        invoice,
        metadata: Metadata::default(),
        files: IndexMap::new(),
    };

    let _ = render_detail(&record, &MetadataDefinitions::default(), &InvoiceSchema::default());
    let _ = render_list(std::slice::from_ref(&record));
});
