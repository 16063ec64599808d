use std::path::PathBuf;

use crate::document::DocumentError;

/// Reasons an input directory is rejected before any output is produced
#[derive(Debug, thiserror::Error)]
pub enum PreconditionError {
    /// Input path does not exist
    #[error("input directory {0} was not found")]
    NotFound(PathBuf),

    /// Input path exists but is not a directory
    #[error("input path {0} is not a directory")]
    NotADirectory(PathBuf),

    /// `meta/metadata.json` is missing
    #[error("meta/metadata.json was not found in input directory {0}")]
    MissingMetadata(PathBuf),

    /// `tasksupport/metadata-def.json` is missing
    #[error("tasksupport/metadata-def.json was not found in input directory {0}")]
    MissingMetadataDefinition(PathBuf),

    /// `tasksupport/invoice.schema.json` is missing
    #[error("tasksupport/invoice.schema.json was not found in input directory {0}")]
    MissingInvoiceSchema(PathBuf),

    /// A `job.failed` marker shows the structuring run failed
    #[error("input directory {0} contains job.failed, the structuring run failed")]
    JobFailed(PathBuf),
}

/// Errors that can occur while scanning a package
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    /// I/O error while listing the package
    #[error("Failed to scan {path}: {source}")]
    IoError {
        /// Directory or file being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A divided sub-dataset directory name is not a number, or is too
    /// large to leave an id for the top-level dataset
    #[error("Divided dataset directory name is not a usable numeric id: {0}")]
    InvalidDatasetId(String),

    /// Error loading one of the dataset documents
    #[error(transparent)]
    Document(#[from] DocumentError),
}
