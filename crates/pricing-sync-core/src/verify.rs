use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, SyncError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactStatus {
    pub path: PathBuf,
    pub entries: usize,
}

/// Check that a previously written pricing artifact is present and usable:
/// a non-empty JSON array whose elements are all objects.
pub fn verify_artifact(path: &Path) -> Result<ArtifactStatus> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == IoErrorKind::NotFound => {
            return Err(SyncError::MissingArtifact(path.to_path_buf()))
        }
        Err(e) => return Err(SyncError::io(path, e)),
    };
    let invalid = |reason: String| SyncError::InvalidArtifact {
        path: path.to_path_buf(),
        reason,
    };

    let value: Value = serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))?;
    let entries = value
        .as_array()
        .ok_or_else(|| invalid("top-level value is not an array".into()))?;
    if entries.is_empty() {
        return Err(invalid("array is empty".into()));
    }
    if let Some(idx) = entries.iter().position(|e| !e.is_object()) {
        return Err(invalid(format!("entry {idx} is not an object")));
    }

    Ok(ArtifactStatus {
        path: path.to_path_buf(),
        entries: entries.len(),
    })
}
