//! Snapshot codec and local key-value persistence
//!
//! The whole state persists as one JSON blob under a single key. Timestamps
//! are encoded with the tagged wrapper from `revhub_domain::timestamp`;
//! decoding runs a defensive normalization pass first so snapshots written by
//! a looser encoder (or hand-edited files) still load.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use thiserror::Error;

use revhub_domain::timestamp::DATE_TAG;

use crate::state::AppState;
use crate::store::Store;

/// Key under which the whole state persists.
pub const STORAGE_KEY: &str = "manuscript-response-hub-state";

/// Errors from the codec and the persistence backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,

    #[error("Failed to serialize state: {0}")]
    Serialize(String),

    #[error("Failed to parse snapshot: {0}")]
    Parse(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize the state to its snapshot text, tagging every timestamp.
pub fn serialize_state(state: &AppState) -> Result<String, StorageError> {
    serde_json::to_string(state).map_err(|e| StorageError::Serialize(e.to_string()))
}

/// Deserialize snapshot text back into a state.
///
/// Invalid JSON and malformed timestamps both fail with
/// [`StorageError::Parse`]; nothing is partially decoded.
pub fn deserialize_state(text: &str) -> Result<AppState, StorageError> {
    let mut value: Value =
        serde_json::from_str(text).map_err(|e| StorageError::Parse(e.to_string()))?;
    ensure_dates(&mut value);
    serde_json::from_value(value).map_err(|e| StorageError::Parse(e.to_string()))
}

/// Walk the parsed tree and coerce any field literally named `createdAt` or
/// `updatedAt` into the tagged wrapper form if it is not already one. Bare
/// ISO-8601 strings and epoch-millisecond numbers are recognized; anything
/// else is left for the decoder to reject.
fn ensure_dates(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if key == "createdAt" || key == "updatedAt" {
                    if !is_tagged_date(child) {
                        if let Some(coerced) = coerce_date(child) {
                            *child = coerced;
                        }
                    }
                } else {
                    ensure_dates(child);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                ensure_dates(item);
            }
        }
        _ => {}
    }
}

fn is_tagged_date(value: &Value) -> bool {
    value
        .get("__type")
        .and_then(Value::as_str)
        .map(|tag| tag == DATE_TAG)
        .unwrap_or(false)
}

fn coerce_date(value: &Value) -> Option<Value> {
    match value {
        Value::String(raw) => Some(json!({ "__type": DATE_TAG, "value": raw })),
        Value::Number(millis) => {
            let ts = Utc.timestamp_millis_opt(millis.as_i64()?).single()?;
            Some(json!({ "__type": DATE_TAG, "value": ts.to_rfc3339() }))
        }
        _ => None,
    }
}

/// The trait that persistence backends implement.
pub trait LocalStorage {
    /// Whether the backing store can be written at all. Probed once at
    /// startup; a `false` degrades the application to memory-only operation.
    fn is_available(&self) -> bool;

    /// Write the full state under the storage key.
    fn save(&self, state: &AppState) -> Result<(), StorageError>;

    /// Read the persisted state. `Ok(None)` when nothing was ever saved.
    fn load(&self) -> Result<Option<AppState>, StorageError>;

    /// Remove the persisted key.
    fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed key-value storage: one JSON file named after [`STORAGE_KEY`]
/// inside a caller-chosen directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Path of the persisted snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocalStorage for FileStorage {
    fn is_available(&self) -> bool {
        let Some(parent) = self.path.parent() else {
            return false;
        };
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
        // Probe with a throwaway write, mirroring how browsers detect a
        // disabled localStorage.
        let probe = parent.join(".revhub-storage-probe");
        match fs::write(&probe, b"probe") {
            Ok(()) => {
                let _ = fs::remove_file(&probe);
                true
            }
            Err(_) => false,
        }
    }

    fn save(&self, state: &AppState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serialize_state(state)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<AppState>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        deserialize_state(&text).map(Some)
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Open a store mirrored to the given storage backend.
///
/// Loads the persisted state (a corrupt or missing snapshot falls back to the
/// empty initial state) and installs an observer that writes every transition
/// back. Save failures are logged and swallowed; the in-memory transition is
/// never rolled back.
pub fn open_store<S>(storage: S) -> Store
where
    S: LocalStorage + 'static,
{
    if !storage.is_available() {
        tracing::warn!("local storage is not available; data will not be saved");
    }
    let initial = match storage.load() {
        Ok(Some(state)) => state,
        Ok(None) => AppState::default(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to load persisted state, starting empty");
            AppState::default()
        }
    };
    let mut store = Store::with_state(initial);
    store.set_observer(move |state: &AppState| {
        if let Err(err) = storage.save(state) {
            tracing::warn!(error = %err, "failed to persist state");
        }
    });
    store
}
