//! JSON persistence for the data directory.
//!
//! Every artifact is rewritten whole: serialize to a temp file next to the
//! target and rename on success, so an interrupted run never leaves a
//! half-written file behind.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Load a JSON file, returning `Ok(None)` when it does not exist yet.
///
/// A file that exists but fails to parse is an error; callers decide
/// whether that skips a step or aborts the run.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let value = serde_json::from_str(&contents)?;
    Ok(Some(value))
}

/// Serialize `value` as pretty-printed JSON and atomically replace `path`.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_dest = path.with_extension(format!(
        "{}.tmp",
        path.extension().and_then(|e| e.to_str()).unwrap_or("")
    ));

    let body = serde_json::to_string_pretty(value)?;

    let result = (|| -> Result<()> {
        fs::write(&tmp_dest, body.as_bytes())?;
        fs::rename(&tmp_dest, path)?;
        Ok(())
    })();

    if result.is_err() {
        // Clean up partial temp file on any error
        let _ = fs::remove_file(&tmp_dest);
    }

    result
}
