//! JSON document I/O
//!
//! Documents are read whole and replaced whole. A replacement goes through a
//! hidden sibling file that is synced and then renamed over the target, so
//! readers see either the old document or the new one.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

fn storage_error(action: &str, path: &Path, err: impl fmt::Display) -> TrackerError {
    TrackerError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Sibling path used while replacing `path`, e.g. `data/.expenses.json.tmp`
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

/// Read a JSON document
///
/// Returns `Ok(None)` when the file does not exist. Unreadable or malformed
/// content is a `Storage` error.
pub fn read_json<T, P>(path: P) -> TrackerResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no document yet");
            return Ok(None);
        }
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| storage_error("parse", path, e))
}

/// Replace a JSON document atomically, creating parent directories as needed
pub fn write_json_atomic<T, P>(path: P, data: &T) -> TrackerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let bytes = serde_json::to_vec_pretty(data).map_err(|e| storage_error("serialize", path, e))?;

    let staging = staging_path(path);
    let staged = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staging, path));

    if let Err(e) = staged {
        let _ = fs::remove_file(&staging);
        return Err(storage_error("write", path, e));
    }

    debug!(path = %path.display(), bytes = bytes.len(), "document written");
    Ok(())
}
