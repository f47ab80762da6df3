use std::path::Path;

use serde_yaml::Value;

use crate::error::{AuditError, Result};
use crate::filesystem::FileSystem;

/// Read the detector test matrix from a YAML workflow.
///
/// `dotted_key` is a path of mapping keys such as
/// `jobs.test.strategy.matrix.test`; the value it names must be a list of
/// strings.
///
/// # Errors
/// `FileRead` when the file cannot be read, `ManifestParse` when it is not
/// YAML, `ManifestKey` when the key is absent or not a string list.
pub fn load_matrix<F: FileSystem>(fs: &F, path: &Path, dotted_key: &str) -> Result<Vec<String>> {
    let content = fs
        .read_to_string(path)
        .map_err(|source| AuditError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    let document: Value =
        serde_yaml::from_str(&content).map_err(|source| AuditError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    let key_error = || AuditError::ManifestKey {
        path: path.to_path_buf(),
        key: dotted_key.to_string(),
    };

    let mut node = &document;
    for segment in dotted_key.split('.') {
        node = node.get(segment).ok_or_else(key_error)?;
    }

    node.as_sequence()
        .ok_or_else(key_error)?
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(key_error))
        .collect()
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
