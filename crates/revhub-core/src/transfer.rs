//! Snapshot export and import
//!
//! Export serializes the live state through the codec into a dated backup
//! file; import reads a whole file, decodes it, and hands back a complete
//! state for the caller to swap in via [`Store::replace`]. Import is
//! all-or-nothing: the live store is never touched until a full snapshot has
//! decoded successfully.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::state::AppState;
use crate::storage::{deserialize_state, serialize_state, LocalStorage, StorageError};
use crate::store::Store;

/// Prefix of exported backup files.
pub const EXPORT_FILE_PREFIX: &str = "manuscript-response-hub-backup";

/// MIME type of exported snapshots.
pub const EXPORT_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] StorageError),

    #[error("Failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read snapshot: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] StorageError),
}

/// File name for a backup exported on the given date:
/// `manuscript-response-hub-backup-<YYYY-MM-DD>.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}-{}.json", date.format("%Y-%m-%d"))
}

/// Serialize the state and write it to the given sink.
pub fn export_snapshot(state: &AppState, mut sink: impl Write) -> Result<(), ExportError> {
    let text = serialize_state(state)?;
    sink.write_all(text.as_bytes())?;
    Ok(())
}

/// Export the state into `dir` under today's backup file name.
pub fn export_to_dir(state: &AppState, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(export_file_name(Utc::now().date_naive()));
    let file = File::create(&path)?;
    export_snapshot(state, file)?;
    Ok(path)
}

/// Read a full snapshot stream and decode it into a state.
///
/// The caller replaces the live store with the returned state (never merges);
/// on error the live store must stay untouched.
pub fn import_snapshot(mut source: impl Read) -> Result<AppState, ImportError> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    Ok(deserialize_state(&text)?)
}

/// Import the snapshot file at `path`.
pub fn import_from_path(path: impl AsRef<Path>) -> Result<AppState, ImportError> {
    import_snapshot(File::open(path)?)
}

/// Empty the store and remove the persisted key.
pub fn clear_all(store: &mut Store, storage: &dyn LocalStorage) -> Result<(), StorageError> {
    store.clear();
    storage.clear()
}
