//! # RDE Package Inventory
//!
//! Validation and scanning of a structured RDE package directory:
//!
//! ```text
//! <input>/
//! ├── invoice/invoice.json
//! ├── meta/metadata.json
//! ├── tasksupport/metadata-def.json
//! ├── tasksupport/invoice.schema.json
//! ├── <category>/*              # raw, main_image, attachment, ...
//! └── divided/<id>/...          # same shape, one per sub-dataset
//! ```
//!
//! [`scan`] turns the directory into one [`DatasetRecord`] per logical
//! dataset. Every immediate subdirectory of a dataset directory becomes a
//! file category.

mod check;
mod error;
mod scan;


pub use check::check_input_dir;
pub use error::{PackageError, PreconditionError};
pub use scan::{
    divided_datasets, format_file_size, scan, scan_dated, top_level_id, DatasetId,
    DatasetRecord, FileEntry, DIVIDED_DIR,
};

/// File category folder names
pub mod category {
    /// Raw data files
    pub const RAW: &str = "raw";
    /// Raw data files that are not shared
    pub const NONSHARED_RAW: &str = "nonshared_raw";
    /// Main parameter metadata files
    pub const META: &str = "meta";
    /// Structured files
    pub const STRUCTURED: &str = "structured";
    /// Representative images
    pub const MAIN_IMAGE: &str = "main_image";
    /// Other images
    pub const OTHER_IMAGE: &str = "other_image";
    /// List-page thumbnails
    pub const THUMBNAIL: &str = "thumbnail";
    /// Attachments
    pub const ATTACHMENT: &str = "attachment";

    /// Categories counted and listed as dataset files
    pub const DATA_FILES: [&str; 6] = [RAW, NONSHARED_RAW, META, STRUCTURED, MAIN_IMAGE, OTHER_IMAGE];

    /// Categories shown in the image gallery
    pub const GALLERY: [&str; 2] = [MAIN_IMAGE, OTHER_IMAGE];

    /// Categories copied into the output image tree
    pub const COPIED_IMAGES: [&str; 3] = [MAIN_IMAGE, OTHER_IMAGE, THUMBNAIL];
}
