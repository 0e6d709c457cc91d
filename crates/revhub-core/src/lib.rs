//! revhub-core: state store, mutation layer, and snapshot persistence.
//!
//! The core is a normalized entity graph (manuscripts -> reviewers ->
//! comments -> {response, reference}) held in memory:
//! - [`state`]: the [`state::AppState`] container and the pure transition
//!   function [`state::apply`] over the closed [`state::Action`] sum type.
//! - [`store`]: an explicit [`store::Store`] object that owns the state and
//!   mirrors every transition to an injected persistence observer.
//! - The mutation API in [`actions`]: entity CRUD, response/reference upsert,
//!   and drill-down selection, implemented as [`store::Store`] methods.
//! - [`storage`]: the JSON codec (tagged timestamps, defensive decoding) and
//!   the local key-value persistence backend.
//! - [`transfer`]: export/import of snapshot files on top of the codec.
//! - [`query`]: denormalized read-side views (per-parent lookups, progress
//!   stats, the full outline tree).

pub mod actions;
pub mod query;
pub mod state;
pub mod storage;
pub mod store;
pub mod transfer;

pub use state::{apply, Action, AppState};
pub use storage::{deserialize_state, serialize_state, FileStorage, LocalStorage, StorageError};
pub use store::Store;
pub use transfer::{export_snapshot, import_snapshot, ExportError, ImportError};
