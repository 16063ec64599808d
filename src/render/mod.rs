//! # HTML Rendering
//!
//! Builds the preview pages as plain strings from typed fragment builders:
//!
//! - [`render_list`]: `index.html`, one card per dataset
//! - [`render_detail`]: `<id>.html`, gallery, metadata table, files and
//!   attachments of one dataset
//!
//! User-supplied text is HTML-escaped everywhere except the sample
//! description, which may carry rich text and is inserted as-is inside a
//! `css-reset` container.

mod detail;
mod error;
pub mod icons;
mod list;

#[cfg(test)]
mod tests;

pub use detail::render_detail;
pub use error::RenderError;
pub use list::render_list;

/// Strip newlines and double spaces from generated pages and stylesheet
pub const COMPRESS: bool = false;

/// User name shown wherever the platform would show the account
pub const PREVIEW_USER: &str = "プレビューユーザ";

/// Escape text for insertion into HTML content or attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Apply [`COMPRESS`] to a finished document
pub fn finish(document: String) -> String {
    if COMPRESS {
        document.replace('\n', "").replace("  ", "")
    } else {
        document
    }
}

/// `<head>` shared by both pages, with an optional inline script
fn page_head(script: &str) -> String {
    format!(
        r#"<head>
  <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
  <title>RDE/Dataset View</title>
  <meta http-equiv="X-UA-Compatible" content="IE=edge">
  <meta http-equiv="Cache-Control" content="no-cache">
  <meta http-equiv="Cache-Control" content="no-store">
  <meta http-equiv="Cache-Control" content="must-revalidate">
  <meta data-hid="description" name="description" content="">
  <meta name="format-detection" content="telephone=no">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="stylesheet" href="style.css">{script}
</head>"#
    )
}

/// Site header and navigation bar
fn site_header() -> String {
    format!(
        r#"<div>
  <header class="header container px-0">
    <h1 class="logo"><img src="https://rde.nims.go.jp/images/logo/RDE_logo.png"></h1>
    <div class="menu">
      <a class="dicehome"><img src="https://rde.nims.go.jp/external/dice.png"></a>
      <a class="register ban">ログアウト</a>
    </div>
  </header>
  <div class="container row container-fix">
    <div class="col-4"></div>
    <nav class="navi col-8 navi-fix">
      <ul class="d-flex align-items-center justify-content-end pb-1 row">
        <li class="navilink usage col-2 text-right"><a>利用方法</a></li>
        <li class="naviitem col-auto naviitem-width"><a class="break-word white-space-pre-line">{PREVIEW_USER}</a></li>
      </ul>
    </nav>
  </div>
  <div class="topline topline-width"></div>
</div>"#
    )
}

/// Contact block closing the page content
const CONTACT: &str = r#"<div class="py-5">
  <h3>お問い合わせ</h3>
  <div class="container">
    <div class="row">
      <div class="col-5 p-2">
        <div><span class="font-weight-bold">マテリアル先端リサーチインフラ事業 (ARIM) の利用者は</span></div>
        <div><a>こちら</a></div>
      </div>
    </div>
    <div class="row">
      <a><img src="https://rde.nims.go.jp/sample_files/dice399-46.png" alt="国立研究開発法人物質・材料研究機構"></a>
      <a><img src="https://rde.nims.go.jp/sample_files/rde2_logo_arim.png" alt="マテリアル先端リサーチインフラ事業"></a>
    </div>
  </div>
</div>"#;

const FOOTER: &str = r#"<footer class="footer footer_fix">
  <div class="footer_bg footer_bg_fix"></div>
  <div class="footerBlock">
    <div class="leftBlock">
      <p class="sitename"><a>国立研究開発法人物質・材料研究機構</a></p>
      <p class="address"><a>技術開発・共用部門</a> <br> <a>材料データプラットフォーム</a></p>
      <p class="copyright">Copyright © 2022-2023 National Institute for Materials Science. All rights Reserved.</p>
    </div>
    <div class="rightBlock">
      <ul class="footerLink">
        <li><a>プライバシーポリシー</a></li>
        <li><a>GDPR対応について</a></li>
        <li><a>お問い合わせ</a></li>
      </ul>
    </div>
  </div>
</footer>"#;

/// Full document around a page body
fn document(script: &str, content: &str) -> String {
    finish(format!(
        r#"<!DOCTYPE html>
<html lang="en">
{head}
<body>
<div>
{header}
<main class="contents">
<div class="container page-content">
{content}
{contact}
</div>
</main>
{footer}
</div>
</body>
</html>
"#,
        head = page_head(script),
        header = site_header(),
        contact = CONTACT,
        footer = FOOTER,
    ))
}

/// "No Image" placeholder box
fn no_image(class: &str, width: u32, height: u32, font: &str, line: &str) -> String {
    format!(
        r#"<div class="border d-flex align-items-center justify-content-center no-image {class}" style="width: {width}px; height: {height}px;">
  <div class="text-left" style="font-size: {font}; line-height: {line};">
    <div>No</div>
    <div>Image</div>
  </div>
</div>"#
    )
}
