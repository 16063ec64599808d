/// Errors that can occur while rendering pages
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// `basic.dateSubmitted` is not a `YYYY-MM-DD` date
    #[error("Invalid submission date '{value}' for dataset {dataset}: {source}")]
    InvalidDate {
        /// Dataset id
        dataset: String,
        /// Offending value
        value: String,
        /// Parser error
        source: chrono::ParseError,
    },
}
