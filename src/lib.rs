//! # rde-preview - Offline Preview of RDE Data Packages
//!
//! `rde_preview` turns a structured RDE research-data package into a small
//! static website that mimics the platform's dataset pages, so that a
//! package can be inspected before it is registered.
//!
//! ## Pipeline
//!
//! ```text
//! check_input_dir ─▶ scan ─▶ resolve_keys ─▶ render_list / render_detail
//!                                               │
//!                     copy_images, write_stylesheet ◀┘
//! ```
//!
//! - [`package`]: precondition check and dataset inventory
//! - [`document`]: invoice, metadata and schema documents with defaults
//! - [`resolve`]: ordered metadata keys per dataset
//! - [`render`]: `index.html` and `<id>.html` markup
//! - [`assets`]: image tree copy and stylesheet
//! - [`pipeline`]: the whole run, see [`generate_preview`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rde_preview::logger::PreviewLog;
//! use rde_preview::output::create_output_dir;
//! use rde_preview::package::check_input_dir;
//! use rde_preview::generate_preview;
//! use std::path::Path;
//!
//! let input = Path::new("work/data");
//! let log = PreviewLog::open(Path::new("work/preview.log"))?;
//!
//! check_input_dir(input)?;
//! let out_dir = create_output_dir(Path::new("work"))?;
//! let summary = generate_preview(input, &out_dir, &log)?;
//! println!("{}", summary.index.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod assets;
pub mod browser;
pub mod document;
pub mod logger;
pub mod output;
pub mod package;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod terms;

pub use pipeline::{generate_preview, PreviewError, PreviewSummary};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::document::{Invoice, InvoiceSchema, Metadata, MetadataDefinitions};
    pub use crate::logger::PreviewLog;
    pub use crate::package::{check_input_dir, scan, DatasetId, DatasetRecord};
    pub use crate::pipeline::{generate_preview, PreviewError, PreviewSummary};
    pub use crate::render::{render_detail, render_list};
}
