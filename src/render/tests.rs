use super::*;
use crate::document::{
    invoice_skeleton, merge_onto, Invoice, InvoiceSchema, Metadata, MetadataDefinitions,
};
use crate::package::{format_file_size, DatasetId, DatasetRecord, FileEntry};
use indexmap::IndexMap;
use serde_json::{json, Value};

const TODAY: &str = "2024-05-01";

fn record(id: u32, invoice: Value, metadata: Value) -> DatasetRecord {
    DatasetRecord {
        id: DatasetId(id),
        invoice: Invoice::from_value(merge_onto(&invoice_skeleton(TODAY), &invoice)).unwrap(),
        metadata: Metadata::from_value(metadata).unwrap(),
        files: IndexMap::new(),
    }
}

fn with_files(mut record: DatasetRecord, category: &str, names: &[&str]) -> DatasetRecord {
    let entries = names
        .iter()
        .map(|name| FileEntry {
            name: name.to_string(),
            size: format_file_size(2048),
        })
        .collect();
    record.files.insert(category.to_string(), entries);
    record
}

fn definitions(value: Value) -> MetadataDefinitions {
    MetadataDefinitions::from_value(value).unwrap()
}

fn schema(value: Value) -> InvoiceSchema {
    InvoiceSchema::from_value(value).unwrap()
}

fn detail(record: &DatasetRecord) -> String {
    render_detail(record, &definitions(json!({})), &schema(json!({})))
}

#[test]
fn test_escape() {
    assert_eq!(escape("a<b>&\"c\"'"), "a&lt;b&gt;&amp;&quot;c&quot;&#39;");
    assert_eq!(escape("プレビュー"), "プレビュー");
}

#[test]
fn test_detail_single_value_column_without_variable_metadata() {
    let page = detail(&record(1, json!({}), json!({})));
    assert!(page.contains(r#"<th class="w-200px">値1</th>"#));
    assert!(!page.contains("値2"));
}

#[test]
fn test_detail_one_column_per_measurement() {
    let defs = definitions(json!({
        "temp": {"name": {"ja": "温度", "en": "Temperature"}, "unit": "K", "variable": 1, "order": 1}
    }));
    let rec = record(
        1,
        json!({}),
        json!({"variable": [
            {"temp": {"value": 10}},
            {"temp": {"value": 20, "unit": "C"}},
            {"temp": {"value": 30}}
        ]}),
    );
    let page = render_detail(&rec, &defs, &schema(json!({})));

    assert!(page.contains("値3"));
    assert!(!page.contains("値4"));
    assert!(page.contains("<td>Temperature</td>"));
    assert!(page.contains("<td>C</td>"));
    let values: Vec<usize> = ["10", "20", "30"]
        .iter()
        .map(|v| {
            page.find(&format!(r#"white-space-pre-line">{v}</td>"#))
                .unwrap()
        })
        .collect();
    assert!(values[0] < values[1] && values[1] < values[2]);
}

#[test]
fn test_detail_constant_metadata_uses_definition_unit() {
    let defs = definitions(json!({
        "mass": {"name": {"ja": "質量", "en": "Mass"}, "unit": "g"},
        "absent": {"name": {"ja": "欠落", "en": "Absent"}}
    }));
    let rec = record(1, json!({}), json!({"constant": {"mass": {"value": 1.5}}}));
    let page = render_detail(&rec, &defs, &schema(json!({})));

    assert!(page.contains("<td>質量</td>"));
    assert!(page.contains("<td>g</td>"));
    assert!(page.contains(r#"<td colspan="1" class="break-word white-space-pre-line">1.5</td>"#));
    assert!(!page.contains("Absent"));
}

#[test]
fn test_detail_skips_empty_constant_entry() {
    let defs = definitions(json!({
        "empty": {"name": {"ja": "空欄", "en": "Blank"}, "order": 1},
        "unit_only": {"name": {"ja": "単位のみ", "en": "Unit only"}, "order": 2}
    }));
    let rec = record(
        1,
        json!({}),
        json!({"constant": {"empty": {}, "unit_only": {"unit": "mm"}}}),
    );
    let page = render_detail(&rec, &defs, &schema(json!({})));

    assert!(!page.contains("空欄"));
    assert!(page.contains("<td>単位のみ</td>"));
    assert!(page.contains("<td>mm</td>"));
}

#[test]
fn test_detail_renders_non_string_invoice_text() {
    let rec = record(
        1,
        json!({"basic": {"experimentId": 42}, "sample": {"composition": 3}}),
        json!({}),
    );
    let page = detail(&rec);
    assert!(page.contains(r#"white-space-pre-line">42</td>"#));
    assert!(page.contains(r#"white-space-pre-line">3</td>"#));
}

#[test]
fn test_detail_specific_info_label_shown_once() {
    let defs = definitions(json!({
        "a": {"name": {"ja": "A", "en": "A"}, "order": 1},
        "b": {"name": {"ja": "B", "en": "B"}, "order": 2}
    }));
    let invoice_schema = schema(json!({
        "properties": {"custom": {"properties": {
            "gas": {"label": {"ja": "ガス", "en": "Gas"}, "options": {"unit": "sccm"}}
        }}}
    }));
    let rec = record(
        1,
        json!({
            "custom": {"gas": "Ar", "empty": ""},
            "sample": {"generalAttributes": [{"termId": "unknown-term", "value": "x"}]}
        }),
        json!({"constant": {"a": {"value": 1}, "b": {"value": 2}}}),
    );
    let page = render_detail(&rec, &defs, &invoice_schema);

    assert_eq!(page.matches("固有情報").count(), 1);
    assert!(page.contains("ガス"));
    assert!(page.contains("<td>sccm</td>"));
    assert!(!page.contains("empty"));
}

#[test]
fn test_detail_custom_field_without_schema_uses_key() {
    let rec = record(1, json!({"custom": {"pressure": 5}}), json!({}));
    let page = detail(&rec);
    assert!(page.contains("<td>pressure"));
    assert!(page.contains("固有情報"));
}

#[test]
fn test_detail_specific_attribute_falls_back_to_ids() {
    let rec = record(
        1,
        json!({"sample": {"specificAttributes": [
            {"classId": "no-such-class", "termId": "no-such-term", "value": "v"}
        ]}}),
        json!({}),
    );
    let page = detail(&rec);
    assert!(page.contains("no-such-class / no-such-term"));
}

#[test]
fn test_detail_escapes_text_but_not_sample_description() {
    let rec = record(
        1,
        json!({
            "basic": {"dataName": "<script>x</script>", "description": "a & b"},
            "sample": {"description": "<p><b>bold</b></p>"}
        }),
        json!({}),
    );
    let page = detail(&rec);
    assert!(!page.contains("<script>x</script>"));
    assert!(page.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(page.contains("a &amp; b"));
    assert!(page.contains(r#"<div class="css-reset"><p><b>bold</b></p></div>"#));
}

#[test]
fn test_detail_basic_rows() {
    let rec = record(1, json!({"basic": {"experimentId": "EXP-1"}}), json!({}));
    let page = detail(&rec);
    assert!(page.contains("2024-05-01 JST"));
    assert!(page.contains("Preview_0001"));
    assert!(page.contains("EXP-1"));
    assert_eq!(page.matches("**プレビューでは非表示**").count(), 3);
}

#[test]
fn test_detail_gallery_placeholder_without_images() {
    let page = detail(&record(1, json!({}), json!({})));
    assert!(page.contains(r#"<span id="topImg_title"></span>"#));
    assert!(page.contains("width: 500px; height: 350px;"));
    assert!(page.contains("width: 120px; height: 80px;"));
    assert!(!page.contains(r#"id="topImg""#));
}

#[test]
fn test_detail_gallery_uses_first_main_image() {
    let rec = with_files(record(2, json!({}), json!({})), "other_image", &["z.png"]);
    let rec = with_files(rec, "main_image", &["a.png", "b.png"]);
    let page = detail(&rec);

    assert!(page.contains(r#"<img id="topImg" class="main-image" src="./images/0002/main_image/a.png">"#));
    assert!(page.contains(r#"data-src="./images/0002/other_image/z.png""#));
    assert_eq!(page.matches("onclick=\"changeImg(this.dataset.src)\"").count(), 3);
}

#[test]
fn test_detail_files_tab_lists_data_categories() {
    let rec = with_files(record(1, json!({}), json!({})), "raw", &["r1.dat", "r2.dat"]);
    let rec = with_files(rec, "main_image", &["m.png"]);
    let rec = with_files(rec, "unknown_folder", &["ignored.txt"]);
    let page = detail(&rec);

    assert!(page.contains("rawデータファイル"));
    assert!(page.contains("代表画像ファイル"));
    assert!(page.contains("Showing 1 to 3 of 3 entries"));
    assert!(!page.contains("ignored.txt"));
    assert_eq!(page.matches(icons::EYE_BUTTON).count(), 1);
    assert!(page.contains("2.00 kB"));
}

#[test]
fn test_detail_attachments_hidden_when_empty() {
    let page = detail(&record(1, json!({}), json!({})));
    assert!(page.contains(r#"<div id="attachments_table" style="display: none;">"#));

    let rec = with_files(record(1, json!({}), json!({})), "attachment", &["note.pdf"]);
    let page = detail(&rec);
    assert!(page.contains(r#"<div id="attachments_table">"#));
    assert!(page.contains("note.pdf"));
    assert!(page.contains(icons::TRASH));
}

#[test]
fn test_list_cards_in_record_order() {
    let records = vec![
        record(3, json!({"basic": {"dataName": "third"}}), json!({})),
        record(2, json!({"basic": {"dataName": "second"}}), json!({})),
        record(1, json!({}), json!({})),
    ];
    let page = render_list(&records).unwrap();

    let third = page.find("./0003.html").unwrap();
    let second = page.find("./0002.html").unwrap();
    let first = page.find("./0001.html").unwrap();
    assert!(third < second && second < first);
    assert!(page.contains("Preview_0001"));
    assert!(page.contains("Showing 1 to 3 of 3 entries"));
    assert!(page.contains("2024-05-01 0:00:00 JST"));
}

#[test]
fn test_list_card_thumbnail_and_counts() {
    let rec = with_files(record(1, json!({}), json!({})), "thumbnail", &["t.png"]);
    let rec = with_files(rec, "raw", &["a", "b"]);
    let rec = with_files(rec, "attachment", &["c"]);
    let page = render_list(&[rec]).unwrap();

    assert!(page.contains(r#"src="./images/0001/thumbnail/t.png""#));
    assert!(page.contains(r#"<div class="badge rounded-pill badge-secondary">2</div>"#));
}

#[test]
fn test_list_placeholder_without_thumbnail() {
    let page = render_list(&[record(1, json!({}), json!({}))]).unwrap();
    assert!(page.contains("width: 250px; height: 250px;"));
}

#[test]
fn test_list_rejects_invalid_date() {
    let rec = record(4, json!({"basic": {"dateSubmitted": "01/05/2024"}}), json!({}));
    let err = render_list(&[rec]).unwrap_err();
    assert!(matches!(
        err,
        RenderError::InvalidDate { ref dataset, ref value, .. } if dataset == "0004" && value == "01/05/2024"
    ));
}

#[test]
fn test_list_empty() {
    let page = render_list(&[]).unwrap();
    assert!(page.contains("Showing 1 to 0 of 0 entries"));
}
