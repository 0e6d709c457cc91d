//! Snapshot codec and transfer integration tests
//!
//! Covers round-trip fidelity over generated states, import atomicity, and
//! the persistence lifecycle across simulated restarts.

mod common;

use common::reachable_state;
use proptest::prelude::*;
use revhub_core::storage::{open_store, FileStorage};
use revhub_core::transfer::{export_snapshot, export_to_dir, import_from_path, import_snapshot};
use revhub_core::{deserialize_state, serialize_state, AppState, Store};

// === Round-Trip Fidelity ===

proptest! {
    #[test]
    fn prop_serialize_deserialize_round_trips(state in reachable_state()) {
        let text = serialize_state(&state).unwrap();
        let back = deserialize_state(&text).unwrap();
        prop_assert_eq!(back, state);
    }

    #[test]
    fn prop_export_import_replace_equals_snapshot(state in reachable_state()) {
        let mut buffer = Vec::new();
        export_snapshot(&state, &mut buffer).unwrap();
        let imported = import_snapshot(buffer.as_slice()).unwrap();

        let mut store = Store::new();
        store.add_manuscript("pre-existing".to_string());
        store.replace(imported);
        prop_assert_eq!(store.state(), &state);
    }
}

// === Import Atomicity ===

#[test]
fn test_malformed_import_leaves_live_state_untouched() {
    let mut store = Store::new();
    let manuscript = store.add_manuscript("Paper A".to_string());
    store.select_manuscript(Some(manuscript.id));
    let before = store.state().clone();

    let result = import_snapshot("{\"manuscripts\": [{\"broken\"".as_bytes());
    assert!(result.is_err());
    assert_eq!(store.state(), &before);
}

// === Persistence Lifecycle ===

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = open_store(FileStorage::new(dir.path()));
    let manuscript = store.add_manuscript("Paper A".to_string());
    let reviewer = store.add_reviewer("Dr. X".to_string(), manuscript.id.clone());
    store.add_comment("fix typo".to_string(), reviewer.id, manuscript.id);
    let written = store.state().clone();
    drop(store);

    let reopened = open_store(FileStorage::new(dir.path()));
    assert_eq!(reopened.state(), &written);
}

#[test]
fn test_first_run_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(FileStorage::new(dir.path()));
    assert_eq!(store.state(), &AppState::default());
}

#[test]
fn test_backup_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::new();
    let manuscript = store.add_manuscript("Paper A".to_string());
    let reviewer = store.add_reviewer("Dr. X".to_string(), manuscript.id.clone());
    let comment = store.add_comment(
        "fix typo".to_string(),
        reviewer.id.clone(),
        manuscript.id.clone(),
    );
    store.save_response("done".to_string(), comment.id, reviewer.id, manuscript.id);

    let path = export_to_dir(store.state(), dir.path()).unwrap();
    let imported = import_from_path(path).unwrap();
    assert_eq!(&imported, store.state());
}

#[test]
fn test_clear_all_then_restart_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let mut store = open_store(storage.clone());
    store.add_manuscript("Paper A".to_string());
    revhub_core::transfer::clear_all(&mut store, &storage).unwrap();
    drop(store);

    let reopened = open_store(storage);
    assert_eq!(reopened.state(), &AppState::default());
}
