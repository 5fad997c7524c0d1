// crates/cli/src/filesystem.rs
use std::fs;
use std::path::Path;

use readme_count_shared_kernel::{InfraResult, InfrastructureError};

/// Read the whole document into memory.
pub fn read_document(path: &Path) -> InfraResult<String> {
    fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Derive a content type from the file extension, the way editors tag text
/// buffers. Unknown extensions pass through lowercased so the eligibility
/// gate can reject them by name.
pub fn content_type_of(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some("md") | Some("markdown") => "markdown".to_string(),
        Some("txt") | Some("text") | None => "plaintext".to_string(),
        Some(other) => other.to_lowercase(),
    }
}
