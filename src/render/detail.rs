use std::mem;

use super::{document, escape, icons, no_image, PREVIEW_USER};
use crate::document::{is_truthy, value_text, InvoiceSchema, MetadataDefinitions};
use crate::package::{category, DatasetRecord, FileEntry};
use crate::resolve::resolve_keys;
use crate::terms;

const HIDDEN_IN_PREVIEW: &str = "**プレビューでは非表示**";

/// Shown on the first row of the metadata, custom and attribute rows
const SPECIFIC_INFO_LABEL: &str = "固有情報";

/// File listing categories and their labels, in listing order
const FILE_CATEGORIES: [(&str, &str); 6] = [
    (category::RAW, "rawデータファイル"),
    (category::NONSHARED_RAW, "非共有rawデータファイル"),
    (category::META, "主要パラメータメタ情報ファイル"),
    (category::STRUCTURED, "構造化ファイル"),
    (category::MAIN_IMAGE, "代表画像ファイル"),
    (category::OTHER_IMAGE, "画像ファイル"),
];

const DETAIL_SCRIPT: &str = r#"
  <script defer>
    function switchTab(tabName) {
      var tabs = ['summary', 'files', 'attachments'];
      tabs.forEach(function (tab) {
        var tabElement = document.getElementById(`${tab}_tab`);
        var tabContent = document.getElementById(tab);
        if (tab === tabName) {
          tabElement.classList.remove('pointer');
          tabElement.classList.add('active');
          tabContent.style.display = 'block';
        } else {
          tabElement.classList.remove('active');
          tabElement.classList.add('pointer');
          tabContent.style.display = 'none';
        }
      });
    }

    function changeImg(imgPath) {
      document.getElementById('topImg').src = imgPath;
      document.getElementById('topImg_title').innerText = imgPath.split('/').pop();
    }
  </script>"#;

/// Value cells of one metadata table row
enum Cells {
    /// One escaped value spanning every value column
    Span(String),
    /// Markup inserted as-is, spanning every value column
    RichText(String),
    /// One escaped value per measurement column
    PerColumn(Vec<String>),
}

/// One row of the metadata table; label fields are already markup
struct MetaRow {
    group: &'static str,
    ja: String,
    en: String,
    unit: String,
    cells: Cells,
}

impl MetaRow {
    fn new(group: &'static str, ja: &str, en: &str, cells: Cells) -> Self {
        Self {
            group,
            ja: escape(ja),
            en: escape(en),
            unit: String::new(),
            cells,
        }
    }

    fn render(&self, columns: usize) -> String {
        let cells = match &self.cells {
            Cells::Span(value) => format!(
                r#"<td colspan="{columns}" class="break-word white-space-pre-line">{value}</td>"#,
                value = escape(value)
            ),
            Cells::RichText(markup) => format!(
                r#"<td colspan="{columns}" class=""><div class="css-reset">{markup}</div></td>"#
            ),
            Cells::PerColumn(values) => values
                .iter()
                .map(|v| {
                    format!(
                        r#"<td colspan="1" class="break-word white-space-pre-line">{}</td>"#,
                        escape(v)
                    )
                })
                .collect(),
        };
        format!(
            "<tr>\n  <td>{}</td>\n  <td>{}</td>\n  <td>{}</td>\n  <td>{}</td>\n  {cells}\n</tr>\n",
            self.group, self.ja, self.en, self.unit
        )
    }
}

/// Build rows of a fixed section; the section label goes on the first row
fn section(label: &'static str, rows: Vec<(&str, &str, Cells)>) -> Vec<MetaRow> {
    rows.into_iter()
        .enumerate()
        .map(|(i, (ja, en, cells))| MetaRow::new(if i == 0 { label } else { "" }, ja, en, cells))
        .collect()
}

/// Returns the specific-info label the first time, empty text afterwards
fn take_label(shown: &mut bool) -> &'static str {
    if mem::replace(shown, true) {
        ""
    } else {
        SPECIFIC_INFO_LABEL
    }
}

fn basic_rows(record: &DatasetRecord) -> Vec<MetaRow> {
    let basic = &record.invoice.basic;
    section(
        "基本情報",
        vec![
            (
                "記入年月日",
                "Date of Data Entry",
                Cells::Span(format!("{} JST", record.invoice.date_submitted())),
            ),
            (
                "データ所有者(所属)",
                "Data Owner (Affiliation)",
                Cells::Span(PREVIEW_USER.to_string()),
            ),
            ("データ名", "Data Name", Cells::Span(record.display_name())),
            ("実験ID", "Experiment ID", Cells::Span(basic.experiment_id.clone())),
            ("説明", "Description", Cells::Span(basic.description.clone())),
        ],
    )
}

fn instrument_rows() -> Vec<MetaRow> {
    let hidden = || Cells::Span(HIDDEN_IN_PREVIEW.to_string());
    section(
        "装置情報",
        vec![
            ("登録名", "Registration Name", hidden()),
            ("機関", "Organization", hidden()),
            ("説明", "Description", hidden()),
        ],
    )
}

fn sample_rows(record: &DatasetRecord) -> Vec<MetaRow> {
    let sample = &record.invoice.sample;
    section(
        "試料情報",
        vec![
            (
                "試料名(ローカルID)",
                "Sample Name (Local ID)",
                Cells::Span(record.invoice.sample_display_id().to_string()),
            ),
            (
                "化学式・組成式・分子式など",
                "Chemical Formula etc.",
                Cells::Span(sample.composition.clone()),
            ),
            (
                "試料の説明",
                "Description",
                Cells::RichText(sample.description.clone()),
            ),
        ],
    )
}

/// Metadata, custom invoice and sample attribute rows.
///
/// The specific-info label is shared by all four groups and appears once.
fn specific_rows(
    record: &DatasetRecord,
    definitions: &MetadataDefinitions,
    schema: &InvoiceSchema,
) -> Vec<MetaRow> {
    let mut rows = Vec::new();
    let mut label_shown = false;
    let metadata = &record.metadata;

    for key in resolve_keys(metadata, definitions) {
        let Some(def) = definitions.get(key) else {
            continue;
        };
        let ja = def.name.ja.clone().unwrap_or_default();
        let en = def.name.en.clone().unwrap_or_default();

        if !def.is_variable() {
            let Some(entry) = metadata.constant.get(key) else {
                continue;
            };
            // `{}` entries carry nothing to show
            if entry.value.is_null() && entry.unit.is_none() {
                continue;
            }
            let mut row = MetaRow::new(
                take_label(&mut label_shown),
                &ja,
                &en,
                Cells::Span(value_text(&entry.value)),
            );
            row.unit = escape(entry.unit.as_deref().or(def.unit.as_deref()).unwrap_or_default());
            rows.push(row);
        } else {
            let unit = metadata
                .variable
                .iter()
                .filter_map(|column| column.get(key))
                .filter_map(|entry| entry.unit.as_deref())
                .find(|unit| !unit.is_empty())
                .or(def.unit.as_deref())
                .unwrap_or_default();
            let values = metadata
                .variable
                .iter()
                .map(|column| column.get(key).map(|e| value_text(&e.value)).unwrap_or_default())
                .collect();
            let mut row = MetaRow::new(take_label(&mut label_shown), &ja, &en, Cells::PerColumn(values));
            row.unit = escape(unit);
            rows.push(row);
        }
    }

    for (key, value) in &record.invoice.custom {
        if !is_truthy(value) {
            continue;
        }
        let field = schema.custom_field(key);
        if field.is_none() {
            log::warn!("custom invoice field '{key}' has no schema entry, labelling it by key");
        }
        let ja = field.and_then(|f| f.label.ja.as_deref()).unwrap_or(key);
        let en = field.and_then(|f| f.label.en.as_deref()).unwrap_or(key);
        let mut row = MetaRow::new(
            take_label(&mut label_shown),
            ja,
            en,
            Cells::Span(value_text(value)),
        );
        row.ja.push_str(icons::INVOICE);
        row.unit = escape(
            field
                .and_then(|f| f.options.unit.as_deref())
                .unwrap_or_default(),
        );
        rows.push(row);
    }

    for attr in &record.invoice.sample.general_attributes {
        if !is_truthy(&attr.value) {
            continue;
        }
        let term = terms::general_term(&attr.term_id);
        let mut row = MetaRow::new(
            take_label(&mut label_shown),
            term.map_or("", |t| t.ja),
            term.map_or("", |t| t.en),
            Cells::Span(value_text(&attr.value)),
        );
        row.ja.push_str(icons::INVOICE);
        rows.push(row);
    }

    for attr in &record.invoice.sample.specific_attributes {
        if !is_truthy(&attr.value) {
            continue;
        }
        let class = terms::sample_class(&attr.class_id);
        let term = terms::specific_term(&attr.term_id);
        let ja = format!(
            "{} / {}",
            class.map_or(attr.class_id.as_str(), |c| c.ja),
            term.map_or(attr.term_id.as_str(), |t| t.ja)
        );
        let en = format!(
            "{} / {}",
            class.map_or(attr.class_id.as_str(), |c| c.en),
            term.map_or(attr.term_id.as_str(), |t| t.en)
        );
        let mut row = MetaRow::new(
            take_label(&mut label_shown),
            &ja,
            &en,
            Cells::Span(value_text(&attr.value)),
        );
        row.ja.push_str(icons::INVOICE);
        rows.push(row);
    }

    rows
}

fn image_path(record: &DatasetRecord, kind: &str, file: &FileEntry) -> String {
    escape(&format!("./images/{}/{}/{}", record.id, kind, file.name))
}

/// Top image and thumbnail strip of the summary tab
fn gallery(record: &DatasetRecord) -> (String, String) {
    let images: Vec<(&str, &FileEntry)> = category::GALLERY
        .iter()
        .flat_map(|kind| record.files_in(kind).iter().map(move |f| (*kind, f)))
        .collect();

    let Some((top_kind, top_file)) = images.first() else {
        let top = format!(
            "{}\n<div class=\"text-center main-image-box-width break-word\"><span id=\"topImg_title\"></span></div>",
            no_image("gray", 500, 350, "5rem", "6rem")
        );
        let strip = format!(
            "<div class=\"thumbnail-position px-1\">\n{}\n</div>",
            no_image("gray", 120, 80, "1.2rem", "1.44rem")
        );
        return (top, strip);
    };

    let top = format!(
        r#"<div class="border p-2">
  <div class="d-flex align-items-center justify-content-center main-image-box">
    <img id="topImg" class="main-image" src="{src}">
  </div>
</div>
<div class="text-center main-image-box-width break-word"><span id="topImg_title">{name}</span></div>"#,
        src = image_path(record, top_kind, top_file),
        name = escape(&top_file.name),
    );

    let strip = images
        .iter()
        .map(|(kind, file)| {
            format!(
                r#"<div class="thumbnail-position px-1 pointer">
  <div class="text-center d-flex align-items-center justify-content-center image-box" data-src="{src}" onclick="changeImg(this.dataset.src)">
    <img class="image2" src="{src}">
  </div>
  <div class="text-center image-box-width break-word">{name}</div>
</div>
"#,
                src = image_path(record, kind, file),
                name = escape(&file.name),
            )
        })
        .collect();

    (top, strip)
}

fn download_cell(name: &str, extra: &str) -> String {
    format!(
        r#"<div>
  <div class="d-flex">
    <div class="break-word">{name}</div>
    <div class="text-right ml-auto"></div>
    {extra}
    <div class="ml-2 mt-1">
      {download}
      <a target="_blank" style="display: none;"></a>
    </div>
  </div>
</div>"#,
        name = escape(name),
        download = icons::DOWNLOAD,
    )
}

fn word_cell(text: &str) -> String {
    format!(r#"<td><div class="word-break m-0">{}</div></td>"#, escape(text))
}

/// Rows of the files tab and their count
fn file_rows(record: &DatasetRecord) -> (String, usize) {
    let date = record.invoice.date_submitted();
    let mut rows = String::new();
    let mut count = 0;

    for (kind, label) in FILE_CATEGORIES {
        let eye = if category::GALLERY.contains(&kind) {
            icons::EYE_BUTTON
        } else {
            ""
        };
        for file in record.files_in(kind) {
            count += 1;
            rows.push_str(&format!(
                "<tr>\n  {}\n  {}\n  <td>{}</td>\n  {}\n  {}\n</tr>\n",
                word_cell(&count.to_string()),
                word_cell(label),
                download_cell(&file.name, eye),
                word_cell(date),
                word_cell(&file.size),
            ));
        }
    }

    (rows, count)
}

/// Rows of the attachments tab and their count
fn attachment_rows(record: &DatasetRecord) -> (String, usize) {
    let date = record.invoice.date_submitted();
    let attachments = record.files_in(category::ATTACHMENT);
    let rows = attachments
        .iter()
        .enumerate()
        .map(|(i, file)| {
            format!(
                "<tr>\n  {}\n  <td>{}</td>\n  {}\n  {}\n  {}\n  <td class=\"text-center\">{}</td>\n</tr>\n",
                word_cell(&(i + 1).to_string()),
                download_cell(&file.name, ""),
                word_cell(date),
                word_cell(&file.size),
                word_cell(""),
                icons::TRASH,
            )
        })
        .collect();
    (rows, attachments.len())
}

fn sortable_header(width: &str, label: &str) -> String {
    format!(
        r#"<th class="align-middle" style="width: {width};">
  <div class="d-flex align-items-center ban">
    <div>{label}</div>
    <div class="ml-auto h-100">
      <div>
        <div class="h-0px">{up}</div>
        <div class="h-0px">{down}</div>
      </div>
    </div>
  </div>
</th>"#,
        up = icons::CARET_UP,
        down = icons::CARET_DOWN,
    )
}

const NUMBER_HEADER: &str = r#"<th class="align-middle" style="width: 6%;">
  <div class="d-flex align-items-center">
    <div>No.</div>
    <div class="ml-auto h-100"></div>
  </div>
</th>"#;

/// Render the detail page of one dataset (`<id>.html`)
pub fn render_detail(
    record: &DatasetRecord,
    definitions: &MetadataDefinitions,
    schema: &InvoiceSchema,
) -> String {
    let columns = record.metadata.column_count();
    let (top_image, thumbnails) = gallery(record);
    let (files, file_count) = file_rows(record);
    let (attachments, attachment_count) = attachment_rows(record);

    let value_headers: String = (1..=columns)
        .map(|i| format!(r#"<th class="w-200px">値{i}</th>"#))
        .collect();

    let table_rows: String = basic_rows(record)
        .into_iter()
        .chain(instrument_rows())
        .chain(sample_rows(record))
        .chain(specific_rows(record, definitions, schema))
        .map(|row| row.render(columns))
        .collect();

    let attachments_display = if attachment_count == 0 {
        r#" style="display: none;""#
    } else {
        ""
    };

    let content = format!(
        r#"<div>
  <h2>
    データ詳細 : プレビューデータセット
    <span class="small badge rounded-pill bg-success white-space-pre-line break-word text-left"></span>
    : {data_name}
  </h2>
  <div class="form-buttons mt-3 d-flex justify-content-end">
    <button type="button" class="btn btn-danger btn-144px ml-2 ban" disabled>データ削除</button>
    <button type="button" class="btn btn-primary btn-144px ml-2 ban" disabled><span>データダウンロード</span></button>
    <a target="_blank" style="display: none;"></a>
    <a href="./index.html"><button type="button" class="btn btn-secondary btn-144px ml-2">データ一覧へ戻る</button></a>
  </div>
  <div>
    <div class="alert text-danger py-0 mb-3" style="display: none;"></div>
  </div>
  <ul class="nav nav-tabs mt-3">
    <li class="nav-item">
      <a id="summary_tab" class="nav-link active" onclick="switchTab('summary')">概要</a>
    </li>
    <li class="nav-item">
      <a id="files_tab" class="nav-link pointer" onclick="switchTab('files')">ファイル
        <span class="badge badge-pill badge-secondary">{file_count}</span>
      </a>
    </li>
    <li class="nav-item">
      <a id="attachments_tab" class="nav-link pointer" onclick="switchTab('attachments')">添付ファイル
        <span class="badge badge-pill badge-secondary">{attachment_count}</span>
      </a>
    </li>
  </ul>
  <div id="summary">
    <div>
      <div class="row ml-2">
        <div class="col-12 text-right">
          <button type="button" class="btn btn-primary ml-3 btn-144px mr-3 mt-3 ban" disabled>送り状編集</button>
        </div>
      </div>
      <div class="card mt-3">
        <div class="card-body">
          <div class="row">
            <div class="mx-auto">
{top_image}
            </div>
          </div>
        </div>
        <div class="row form-group">
          <div class="ml-5">
            サムネイルをクリックすると画像が表示されます。
            <span class="badge badge-pill badge-secondary">{image_count}</span>
          </div>
        </div>
        <div class="row form-group mx-3 thumbnail-scroll">
{thumbnails}
        </div>
      </div>
      <div class="card mt-3">
        <div class="card-body px-4">
          <h5 class="card-title">メタ情報</h5>
          <div class="table-responsive">
            <table id="primary-terms-table" class="table table-sm mt-4">
              <thead>
                <tr>
                  <th class="w-200px">分類</th>
                  <th class="w-200px">日本語名</th>
                  <th class="w-200px">英語名</th>
                  <th class="w-75px">単位</th>
                  {value_headers}
                </tr>
              </thead>
              <tbody>
{table_rows}
              </tbody>
            </table>
          </div>
          <div class="row form-group mt-3 ml-3">
            <span>{invoice_icon} 送り状で登録されたメタ情報を示す</span>
          </div>
        </div>
      </div>
    </div>
  </div>

  <div id="files" style="display: none;">
    <div class="row px-3">
      <div class="col-12">
        <table class="table table-sm mt-4 table-hover tableFixed">
          <thead>
            <tr>
              {number_header}
              {kind_header}
              {name_header}
              {date_header}
              {size_header}
            </tr>
          </thead>
          <tbody>
{files}
          </tbody>
        </table>
        <div class="pager container">
          <div class="row">
            <div class="col-6">
              <span> Showing 1 to {file_count} of {file_count} entries</span>
            </div>
          </div>
        </div>
      </div>
    </div>
  </div>

  <div id="attachments" style="display: none;">
    <div class="row px-3">
      <div class="col-12">
        <div id="attachments_table"{attachments_display}>
          <table class="table table-sm mt-4 table-hover tableFixed">
            <thead>
              <tr>
                {number_header}
                {attachment_name_header}
                {date_header}
                {size_header}
                {description_header}
                <th style="width: 100px;"></th>
              </tr>
            </thead>
            <tbody>
{attachments}
            </tbody>
          </table>
        </div>
      </div>
    </div>
  </div>
</div>"#,
        data_name = escape(&record.display_name()),
        image_count = record.file_count(&category::GALLERY),
        invoice_icon = icons::INVOICE,
        number_header = NUMBER_HEADER,
        kind_header = sortable_header("25%", "ファイル種別"),
        name_header = sortable_header("34%", "ファイル名"),
        attachment_name_header = sortable_header("34%", "ファイル名"),
        date_header = sortable_header("20%", "ファイル登録日(JST)"),
        size_header = sortable_header("15%", "サイズ"),
        description_header = sortable_header("25%", "説明"),
    );

    document(DETAIL_SCRIPT, &content)
}
