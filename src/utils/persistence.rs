//! Data directory and file-writing helpers shared by the results log and the
//! telemetry snapshot.

use crate::core::constants::DATA_DIR_NAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default data directory: `~/.lunar-descent/`.
pub fn default_data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

/// Create `dir` if needed and return it.
pub fn ensure_dir(dir: &Path) -> io::Result<&Path> {
    fs::create_dir_all(dir)?;
    Ok(dir)
}

/// Serialize `data` as pretty-printed JSON and replace `path` atomically.
///
/// The document is written to a sibling temp file and renamed over the
/// target, so readers see either the previous or the new document.
pub fn write_json_atomic<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)
}
