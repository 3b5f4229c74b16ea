//! Page storage for Pagekeep.
//!
//! The content engine needs exactly three things from storage: a namespace
//! schema by name, the raw revision-log bytes for a (namespace, page) key,
//! and a way to write those bytes back. [`PageStore`] is that seam;
//! [`FsStore`] implements it over a flat on-disk layout and [`MemStore`]
//! over in-memory maps for tests.
//!
//! On disk, a data root contains one directory per namespace:
//!
//! ```text
//! <root>/<namespace>/ns.json      schema resource
//! <root>/<namespace>/<page>.dat   revision-log bytes
//! ```
//!
//! Saves replace the log file atomically (temp sibling + rename), so a
//! crashed write never leaves a torn log behind. There is no cross-process
//! locking: a loaded log is exclusively owned by its call path for the
//! whole read-modify-write cycle.

mod error;
mod fs_store;
mod mem_store;

pub use error::{StoreError, StoreResult};
pub use fs_store::FsStore;
pub use mem_store::MemStore;

use pagekeep_types::NamespaceSchema;

/// The storage seam the engine depends on.
pub trait PageStore {
    /// Resolves a namespace's schema. An absent resource is
    /// [`StoreError::UnknownNamespace`].
    fn load_schema(&self, namespace: &str) -> StoreResult<NamespaceSchema>;

    /// Loads the raw revision-log bytes for a page. `Ok(None)` means the
    /// page has never been written — a valid empty-log state.
    fn load_raw(&self, namespace: &str, page: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Writes a page's revision-log bytes, replacing any previous content.
    fn save_raw(&self, namespace: &str, page: &str, bytes: &[u8]) -> StoreResult<()>;
}
