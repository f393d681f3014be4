//! Loading API documents from disk.
//!
//! `.yaml`/`.yml` files are decoded as YAML; everything else as JSON.

use std::fs;
use std::path::Path;

use apidoc_define::ApiDocument;
use tracing::debug;

use crate::errors::GeneratorError;

/// Reads and decodes an [`ApiDocument`].
///
/// ## Errors
///
/// Returns `GeneratorError::ReadError` if the file cannot be read and
/// `GeneratorError::DecodeError` if its contents are not a valid document.
pub fn load_document(path: &Path) -> Result<ApiDocument, GeneratorError> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| GeneratorError::ReadError {
        path: shown.clone(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    debug!(path = %shown, yaml = is_yaml, bytes = content.len(), "Decoding API document");

    let decoded = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    };

    decoded.map_err(|reason| GeneratorError::DecodeError {
        path: shown,
        reason,
    })
}
