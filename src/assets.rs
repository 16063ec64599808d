//! # Asset Pipeline
//!
//! Stages the static files the rendered pages reference:
//!
//! - image folders copied to `<out>/images/<id>/<category>/`
//! - the stylesheet written to `<out>/style.css`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::package::{category, divided_datasets, top_level_id, DatasetId, PackageError};
use crate::render::finish;

/// Output subdirectory holding copied images
pub const IMAGES_DIR: &str = "images";

/// Stylesheet file name referenced by every page
pub const STYLESHEET: &str = "style.css";

const STYLE_CSS: &str = include_str!("../assets/style.css");

/// Errors that can occur while staging assets
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Filesystem failure on a source or destination path
    #[error("I/O error at {path}: {source}")]
    IoError {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Directory traversal failure
    #[error("Failed to walk {path}: {source}")]
    WalkError {
        /// Tree being walked
        path: PathBuf,
        /// Underlying error
        source: walkdir::Error,
    },

    /// Divided dataset listing failed
    #[error(transparent)]
    Package(#[from] PackageError),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> AssetError + '_ {
    move |source| AssetError::IoError {
        path: path.to_path_buf(),
        source,
    }
}

/// Copy the image folders of every dataset into `<out_dir>/images/`.
///
/// Divided datasets are copied under their own id, the top-level dataset
/// under one past the highest divided id. An existing destination folder is
/// removed before copying. Returns the number of files copied.
pub fn copy_images(input_dir: &Path, out_dir: &Path) -> Result<usize, AssetError> {
    let images_dir = out_dir.join(IMAGES_DIR);
    let divided = divided_datasets(input_dir)?;
    let top_id = top_level_id(&divided.iter().map(|(id, _)| *id).collect::<Vec<_>>())?;

    let mut sources: Vec<(DatasetId, PathBuf)> = divided;
    sources.push((top_id, input_dir.to_path_buf()));

    let mut copied = 0;
    for (id, dataset_dir) in &sources {
        for kind in category::COPIED_IMAGES {
            let src = dataset_dir.join(kind);
            if !src.is_dir() {
                continue;
            }
            let dst = images_dir.join(id.to_string()).join(kind);
            copied += replace_tree(&src, &dst)?;
        }
    }

    log::debug!("Copied {copied} image file(s) into {}", images_dir.display());
    Ok(copied)
}

/// Remove `dst` if present, then copy the `src` tree into it
fn replace_tree(src: &Path, dst: &Path) -> Result<usize, AssetError> {
    if dst.exists() {
        fs::remove_dir_all(dst).map_err(io_error(dst))?;
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|source| AssetError::WalkError {
            path: src.to_path_buf(),
            source,
        })?;
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).map_err(io_error(&target))?;
            copied += 1;
        }
    }

    log::debug!("{} -> {}: {copied} file(s)", src.display(), dst.display());
    Ok(copied)
}

/// Write the fixed stylesheet to `<out_dir>/style.css`
pub fn write_stylesheet(out_dir: &Path) -> Result<PathBuf, AssetError> {
    let path = out_dir.join(STYLESHEET);
    fs::write(&path, finish(STYLE_CSS.to_string())).map_err(io_error(&path))?;
    Ok(path)
}
