//! Inline SVG icons (Bootstrap Icons glyphs) used by the page templates.

/// Marks rows whose value came from the invoice
pub const INVOICE: &str = r#"<svg viewBox="0 0 16 16" width="1em" height="1em" focusable="false" role="img" aria-label="file earmark text fill" xmlns="http://www.w3.org/2000/svg" fill="currentColor" class="bi-file-earmark-text-fill b-icon bi"><g><path d="M9.293 0H4a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h8a2 2 0 0 0 2-2V4.707A1 1 0 0 0 13.707 4L10 .293A1 1 0 0 0 9.293 0zM9.5 3.5v-2l3 3h-2a1 1 0 0 1-1-1zM4.5 9a.5.5 0 0 1 0-1h7a.5.5 0 0 1 0 1h-7zM4 10.5a.5.5 0 0 1 .5-.5h7a.5.5 0 0 1 0 1h-7a.5.5 0 0 1-.5-.5zm.5 2.5a.5.5 0 0 1 0-1h4a.5.5 0 0 1 0 1h-4z"></path></g></svg>"#;

/// Sort-ascending caret of table headers
pub const CARET_UP: &str = r#"<svg viewBox="0 0 16 16" width="1em" height="1em" focusable="false" role="img" aria-label="caret up fill" xmlns="http://www.w3.org/2000/svg" fill="currentColor" class="bi-caret-up-fill b-icon bi" style="font-size: 70%;"><g transform="translate(0 -23)"><g><path d="M7.247 4.86l-4.796 5.481c-.566.647-.106 1.659.753 1.659h9.592a1 1 0 0 0 .753-1.659l-4.796-5.48a1 1 0 0 0-1.506 0z"></path></g></g></svg>"#;

/// Sort-descending caret of table headers
pub const CARET_DOWN: &str = r#"<svg viewBox="0 0 16 16" width="1em" height="1em" focusable="false" role="img" aria-label="caret down fill" xmlns="http://www.w3.org/2000/svg" fill="currentColor" class="bi-caret-down-fill b-icon bi" style="font-size: 70%;"><g transform="translate(0 -13)"><g><path d="M7.247 11.14L2.451 5.658C1.885 5.013 2.345 4 3.204 4h9.592a1 1 0 0 1 .753 1.659l-4.796 5.48a1 1 0 0 1-1.506 0z"></path></g></g></svg>"#;

/// Disabled "view" button of image files
pub const EYE_BUTTON: &str = r#"<button type="button" class="btn p-0 btn-link"><svg viewBox="0 0 16 16" width="1em" height="1em" focusable="false" role="img" aria-label="eye fill" xmlns="http://www.w3.org/2000/svg" fill="currentColor" class="bi-eye-fill b-icon bi ban"><g><path d="M10.5 8a2.5 2.5 0 1 1-5 0 2.5 2.5 0 0 1 5 0z"></path><path d="M0 8s3-5.5 8-5.5S16 8 16 8s-3 5.5-8 5.5S0 8 0 8zm8 3.5a3.5 3.5 0 1 0 0-7 3.5 3.5 0 0 0 0 7z"></path></g></svg></button>"#;

/// Disabled download icon
pub const DOWNLOAD: &str = r#"<svg viewBox="0 0 16 16" width="1em" height="1em" focusable="false" role="img" aria-label="download" xmlns="http://www.w3.org/2000/svg" fill="currentColor" class="bi-download p-0 pointer b-icon bi ban"><g><path d="M.5 9.9a.5.5 0 0 1 .5.5v2.5a1 1 0 0 0 1 1h12a1 1 0 0 0 1-1v-2.5a.5.5 0 0 1 1 0v2.5a2 2 0 0 1-2 2H2a2 2 0 0 1-2-2v-2.5a.5.5 0 0 1 .5-.5z"></path><path d="M7.646 11.854a.5.5 0 0 0 .708 0l3-3a.5.5 0 0 0-.708-.708L8.5 10.293V1.5a.5.5 0 0 0-1 0v8.793L5.354 8.146a.5.5 0 1 0-.708.708l3 3z"></path></g></svg>"#;

/// Disabled delete icon of attachments
pub const TRASH: &str = r#"<svg viewBox="0 0 16 16" width="1em" height="1em" focusable="false" role="img" aria-label="trash fill" xmlns="http://www.w3.org/2000/svg" fill="currentColor" class="bi-trash-fill pointer b-icon bi ban" style="font-size: 150%;"><g><path d="M2.5 1a1 1 0 0 0-1 1v1a1 1 0 0 0 1 1H3v9a2 2 0 0 0 2 2h6a2 2 0 0 0 2-2V4h.5a1 1 0 0 0 1-1V2a1 1 0 0 0-1-1H10a1 1 0 0 0-1-1H7a1 1 0 0 0-1 1H2.5zm3 4a.5.5 0 0 1 .5.5v7a.5.5 0 0 1-1 0v-7a.5.5 0 0 1 .5-.5zM8 5a.5.5 0 0 1 .5.5v7a.5.5 0 0 1-1 0v-7A.5.5 0 0 1 8 5zm3 .5v7a.5.5 0 0 1-1 0v-7a.5.5 0 0 1 1 0z"></path></g></svg>"#;
