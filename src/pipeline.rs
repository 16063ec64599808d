//! # Preview Pipeline
//!
//! [`generate_preview`] runs the whole batch job against a package that has
//! already passed [`check_input_dir`](crate::package::check_input_dir):
//!
//! 1. load `metadata-def.json` and `invoice.schema.json`
//! 2. scan the package into dataset records
//! 3. copy images, write `style.css`
//! 4. write `index.html`, then one `<id>.html` per record
//!
//! Output already written when a step fails is left in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::assets::{copy_images, write_stylesheet, AssetError};
use crate::document::{DocumentError, InvoiceSchema, MetadataDefinitions};
use crate::logger::PreviewLog;
use crate::package::{scan_dated, PackageError};
use crate::render::{render_detail, render_list, RenderError};

/// List page file name
pub const INDEX_PAGE: &str = "index.html";

/// Errors that can abort a preview run
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// Reading a package document failed
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Package scan failure
    #[error(transparent)]
    Package(#[from] PackageError),

    /// Page rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Image copy or stylesheet failure
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Writing a page failed
    #[error("Failed to write {path}: {source}")]
    IoError {
        /// Page being written
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSummary {
    /// Output directory
    pub out_dir: PathBuf,
    /// Path of the generated `index.html`
    pub index: PathBuf,
    /// Detail pages written, in record order
    pub pages: Vec<PathBuf>,
    /// Number of image files copied
    pub images_copied: usize,
}

/// Generate the preview site for `input_dir` into `out_dir`
pub fn generate_preview(
    input_dir: &Path,
    out_dir: &Path,
    log: &PreviewLog,
) -> Result<PreviewSummary, PreviewError> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    generate_preview_dated(input_dir, out_dir, log, &today)
}

/// [`generate_preview`] with an explicit default submission date (`YYYY-MM-DD`)
pub fn generate_preview_dated(
    input_dir: &Path,
    out_dir: &Path,
    log: &PreviewLog,
    today: &str,
) -> Result<PreviewSummary, PreviewError> {
    let tasksupport = input_dir.join("tasksupport");
    let definitions = MetadataDefinitions::load(&tasksupport.join("metadata-def.json"))?;
    let schema = InvoiceSchema::load(&tasksupport.join("invoice.schema.json"))?;
    let records = scan_dated(input_dir, today)?;

    log.info("Copying image files.");
    let images_copied = copy_images(input_dir, out_dir)?;
    log.info(format!("Copied {images_copied} image file(s)."));

    log.info("Writing style.css.");
    write_stylesheet(out_dir)?;
    log.info("Finished style.css.");

    log.info("Writing index.html.");
    let index = out_dir.join(INDEX_PAGE);
    write_page(&index, &render_list(&records)?)?;
    log.info("Finished index.html.");

    log.info("Writing dataset detail pages.");
    let mut pages = Vec::with_capacity(records.len());
    for record in &records {
        let path = out_dir.join(record.id.page_name());
        write_page(&path, &render_detail(record, &definitions, &schema))?;
        log::debug!("Wrote {}", path.display());
        pages.push(path);
    }
    log.info(format!("Finished {} dataset detail page(s).", pages.len()));

    Ok(PreviewSummary {
        out_dir: out_dir.to_path_buf(),
        index,
        pages,
        images_copied,
    })
}

fn write_page(path: &Path, html: &str) -> Result<(), PreviewError> {
    fs::write(path, html).map_err(|source| PreviewError::IoError {
        path: path.to_path_buf(),
        source,
    })
}
