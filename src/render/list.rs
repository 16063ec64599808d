use chrono::NaiveDate;

use super::{document, escape, no_image, RenderError, PREVIEW_USER};
use crate::package::{category, DatasetRecord};

/// `dateSubmitted` as shown in the card footer
fn registration_time(record: &DatasetRecord) -> Result<String, RenderError> {
    let value = record.invoice.date_submitted();
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| {
        RenderError::InvalidDate {
            dataset: record.id.to_string(),
            value: value.to_string(),
            source,
        }
    })?;
    Ok(date.format("%Y-%m-%d 0:00:00 JST").to_string())
}

fn thumbnail(record: &DatasetRecord) -> String {
    match record.files_in(category::THUMBNAIL).first() {
        Some(file) => format!(
            r#"<span>
  <img id="thumbnailImg" class="image" src="{}">
</span>"#,
            escape(&format!("./images/{}/{}/{}", record.id, category::THUMBNAIL, file.name))
        ),
        None => no_image("white", 250, 250, "2.5rem", "3rem"),
    }
}

fn card(record: &DatasetRecord) -> Result<String, RenderError> {
    Ok(format!(
        r#"<div class="col-4 mt-3">
  <div class="card h-100">
    <div class="card-header bg-transparent">
      <a href="./{page}">{name}</a>
      <div class="badge rounded-pill badge-secondary">{file_count}</div>
      <span class="float-right">{number}</span>
    </div>
    <div class="card-body">
      <div class="row form-group d-flex align-items-center justify-content-center mx-2 imageBox">{thumbnail}</div>
      <div class="form-group">
        <div class="col-12 pl-0">データ所有者(所属)</div>
        <span><a>{PREVIEW_USER}</a></span>
      </div>
      <div class="row form-group">
        <div class="col-12">試料名(ローカルID)</div>
        <div class="col-12"><a>{sample_id}</a></div>
      </div>
      <div class="row form-group">
        <div class="col-12">説明</div>
        <div class="col-12 white-space-pre-line">{description}</div>
      </div>
      <div class="row form-group">
        <div class="col-12">タクソノミー</div>
      </div>
    </div>
    <div class="card-footer bg-transparent">
      <p class="card-text text-right mb-2"><small class="text-muted">登録日時 {registered}</small></p>
      <p class="card-text text-right"><small class="text-muted">データID N/A</small></p>
    </div>
  </div>
</div>
"#,
        page = record.id.page_name(),
        name = escape(&record.display_name()),
        file_count = record.file_count(&category::DATA_FILES),
        number = record.id.0,
        thumbnail = thumbnail(record),
        sample_id = escape(record.invoice.sample_display_id()),
        description = escape(&record.invoice.basic.description),
        registered = registration_time(record)?,
    ))
}

/// Render the dataset list page (`index.html`), one card per record in order.
///
/// Fails when a record's `dateSubmitted` is not a `YYYY-MM-DD` date.
pub fn render_list(records: &[DatasetRecord]) -> Result<String, RenderError> {
    let cards = records.iter().map(card).collect::<Result<String, _>>()?;
    let count = records.len();

    let content = format!(
        r#"<div>
  <h2>
    データ一覧: プレビューデータセット
    <span class="badge badge-pill badge-success white-space-pre-line break-word text-left"></span>
  </h2>
  <div class="form-buttons mt-3 d-flex justify-content-end">
    <button type="button" class="btn btn-144px btn-primary ml-2 ban" disabled>データセット詳細</button>
    <button type="button" class="btn btn-144px btn-secondary ml-2 ban" disabled>データセット一覧へ戻る</button>
  </div>
  <div>
    <div class="alert text-danger py-0 mb-3" style="display: none;"></div>
  </div>
  <div class="card mt-3">
    <div class="card-body">
      <div class="row form-group">
        <div class="col-12 break-word white-space-pre-line"></div>
      </div>
    </div>
  </div>
  <ul class="nav nav-tabs mt-3">
    <li class="nav-item">
      <a class="nav-link active">ギャラリー表示</a>
    </li>
  </ul>
  <div>
    <div class="row form-group">
{cards}
    </div>
    <div class="col d-flex justify-content-end">
      <div class="pager container">
        <div class="row">
          <div class="col-6">
            <span> Showing 1 to {count} of {count} entries</span>
          </div>
        </div>
      </div>
    </div>
  </div>
</div>"#
    );

    Ok(document("", &content))
}
