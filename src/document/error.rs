use std::path::PathBuf;

/// Errors that can occur while loading package documents
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error reading a document
    #[error("Failed to read {path}: {source}")]
    IoError {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Malformed JSON in a document
    #[error("Failed to parse JSON in {path}: {source}")]
    ParseError {
        /// Path of the document
        path: PathBuf,
        /// Underlying parser error
        source: serde_json::Error,
    },

    /// Document is valid JSON but does not have the expected shape
    #[error("Unexpected structure in {document}: {source}")]
    ShapeError {
        /// Name of the document kind (e.g. "invoice")
        document: &'static str,
        /// Underlying conversion error
        source: serde_json::Error,
    },
}
