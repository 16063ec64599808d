use indexmap::IndexMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::PackageError;
use crate::document::{Invoice, Metadata};

/// Subdirectory holding divided sub-datasets
pub const DIVIDED_DIR: &str = "divided";

const SIZE_UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Numeric dataset identifier, displayed zero-padded to four digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetId(pub u32);

impl DatasetId {
    /// Id of a package without divided sub-datasets
    pub const FIRST: DatasetId = DatasetId(1);

    /// Id following this one, `None` past `u32::MAX`
    pub fn next(self) -> Option<DatasetId> {
        self.0.checked_add(1).map(DatasetId)
    }

    /// File name of the dataset's detail page
    pub fn page_name(self) -> String {
        format!("{self}.html")
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for DatasetId {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(DatasetId)
            .map_err(|_| PackageError::InvalidDatasetId(s.to_string()))
    }
}

/// Id given to the top-level dataset: one past the highest divided id
pub fn top_level_id(divided: &[DatasetId]) -> Result<DatasetId, PackageError> {
    match divided.iter().max() {
        None => Ok(DatasetId::FIRST),
        Some(highest) => highest
            .next()
            .ok_or_else(|| PackageError::InvalidDatasetId(highest.0.to_string())),
    }
}

/// One listed file of a category folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name
    pub name: String,
    /// Human-readable size, e.g. `1.50 kB`
    pub size: String,
}

/// Everything known about one logical dataset
#[derive(Debug, Clone)]
pub struct DatasetRecord {
    /// Dataset id
    pub id: DatasetId,
    /// Invoice merged onto the default skeleton
    pub invoice: Invoice,
    /// Metadata document
    pub metadata: Metadata,
    /// Category name to listed files, categories in name order
    pub files: IndexMap<String, Vec<FileEntry>>,
}

impl DatasetRecord {
    /// Files of `category` (empty when the folder is absent)
    pub fn files_in(&self, category: &str) -> &[FileEntry] {
        self.files.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of files over `categories`
    pub fn file_count(&self, categories: &[&str]) -> usize {
        categories.iter().map(|c| self.files_in(c).len()).sum()
    }

    /// Dataset display name: the invoice data name, else `Preview_<id>`
    pub fn display_name(&self) -> String {
        match self.invoice.data_name() {
            Some(name) => name.to_string(),
            None => format!("Preview_{}", self.id),
        }
    }
}

/// Format a byte count with binary units and two decimals.
///
/// ```
/// use rde_preview::package::format_file_size;
///
/// assert_eq!(format_file_size(1536), "1.50 kB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.2} {}", SIZE_UNITS[unit])
}

/// Build the dataset inventory of a package.
///
/// Divided sub-datasets come first in descending id order; the top-level
/// package comes last, numbered one past the highest divided id (or `0001`
/// when there are no divided datasets).
pub fn scan(input_dir: &Path) -> Result<Vec<DatasetRecord>, PackageError> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    scan_dated(input_dir, &today)
}

/// [`scan`] with an explicit default submission date (`YYYY-MM-DD`)
pub fn scan_dated(input_dir: &Path, today: &str) -> Result<Vec<DatasetRecord>, PackageError> {
    let mut records = Vec::new();
    for (id, dir) in divided_datasets(input_dir)? {
        records.push(scan_dataset(id, &dir, today)?);
    }

    let divided: Vec<DatasetId> = records.iter().map(|r| r.id).collect();
    records.push(scan_dataset(top_level_id(&divided)?, input_dir, today)?);

    log::info!("Scanned {} dataset(s) in {}", records.len(), input_dir.display());
    Ok(records)
}

/// Divided sub-dataset directories with their ids, highest id first
pub fn divided_datasets(input_dir: &Path) -> Result<Vec<(DatasetId, PathBuf)>, PackageError> {
    let divided_dir = input_dir.join(DIVIDED_DIR);
    if !divided_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut datasets = Vec::new();
    for dir in subdirectories(&divided_dir)? {
        let name = dir_name(&dir);
        datasets.push((name.parse::<DatasetId>()?, dir));
    }
    datasets.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(datasets)
}

fn scan_dataset(id: DatasetId, dir: &Path, today: &str) -> Result<DatasetRecord, PackageError> {
    let invoice = Invoice::load(&dir.join("invoice").join("invoice.json"), today)?;
    let metadata = Metadata::load(&dir.join("meta").join("metadata.json"))?;

    let mut files = IndexMap::new();
    for category_dir in subdirectories(dir)? {
        let listing = list_files(&category_dir)?;
        log::debug!("{}: {} file(s)", category_dir.display(), listing.len());
        files.insert(dir_name(&category_dir), listing);
    }

    Ok(DatasetRecord {
        id,
        invoice,
        metadata,
        files,
    })
}

/// Regular files directly inside `dir`, in name order
fn list_files(dir: &Path) -> Result<Vec<FileEntry>, PackageError> {
    let mut entries = Vec::new();
    for path in read_dir_sorted(dir)? {
        let meta = fs::metadata(&path).map_err(|source| io_error(&path, source))?;
        if !meta.is_file() {
            continue;
        }
        entries.push(FileEntry {
            name: dir_name(&path),
            size: format_file_size(meta.len()),
        });
    }
    Ok(entries)
}

fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>, PackageError> {
    Ok(read_dir_sorted(dir)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>, PackageError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| io_error(dir, source))? {
        let entry = entry.map_err(|source| io_error(dir, source))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn io_error(path: &Path, source: std::io::Error) -> PackageError {
    PackageError::IoError {
        path: path.to_path_buf(),
        source,
    }
}
