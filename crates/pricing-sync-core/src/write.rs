use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, SyncError};
use crate::pricing::PricingList;

/// What [`write_pricing`] put on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub count: usize,
    pub path: PathBuf,
}

impl fmt::Display for WriteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} pricing entries to {}",
            self.count,
            self.path.display()
        )
    }
}

/// Write `list` as 2-space-indented JSON to `path`, creating parent
/// directories as needed.
///
/// The file is staged next to the destination and renamed into place, so a
/// failed run leaves any previous artifact intact.
pub fn write_pricing(list: &PricingList, path: &Path) -> Result<WriteSummary> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }

    let body = serde_json::to_string_pretty(list)?;
    let staging = staging_path(path);
    if let Err(e) = std::fs::write(&staging, body) {
        let _ = std::fs::remove_file(&staging);
        return Err(SyncError::io(&staging, e));
    }
    if let Err(e) = std::fs::rename(&staging, path) {
        let _ = std::fs::remove_file(&staging);
        return Err(SyncError::io(path, e));
    }

    tracing::debug!(path = %path.display(), count = list.len(), "pricing artifact written");
    Ok(WriteSummary {
        count: list.len(),
        path: path.to_path_buf(),
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("pricing"));
    name.push(".tmp");
    path.with_file_name(name)
}
