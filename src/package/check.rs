use std::path::Path;

use super::PreconditionError;

/// Verify that `input_dir` looks like a successfully structured package.
///
/// Checks run in a fixed order and the first failure is reported.
pub fn check_input_dir(input_dir: &Path) -> Result<(), PreconditionError> {
    let owned = || input_dir.to_path_buf();

    if !input_dir.exists() {
        return Err(PreconditionError::NotFound(owned()));
    }
    if !input_dir.is_dir() {
        return Err(PreconditionError::NotADirectory(owned()));
    }
    if !input_dir.join("meta").join("metadata.json").exists() {
        return Err(PreconditionError::MissingMetadata(owned()));
    }
    if !input_dir.join("tasksupport").join("metadata-def.json").exists() {
        return Err(PreconditionError::MissingMetadataDefinition(owned()));
    }
    if !input_dir.join("tasksupport").join("invoice.schema.json").exists() {
        return Err(PreconditionError::MissingInvoiceSchema(owned()));
    }
    if input_dir.join("job.failed").exists() {
        return Err(PreconditionError::JobFailed(owned()));
    }
    Ok(())
}
