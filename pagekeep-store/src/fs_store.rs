//! Filesystem-backed page storage.

use crate::error::{StoreError, StoreResult};
use crate::PageStore;
use pagekeep_types::NamespaceSchema;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const SCHEMA_FILE: &str = "ns.json";
const PAGE_EXT: &str = "dat";
const TMP_EXT: &str = "dat.tmp";

/// Page storage over a flat directory layout.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates a store over the given data root. The root itself is not
    /// created or scanned until first use.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data root this store reads and writes under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn namespace_dir(&self, namespace: &str) -> StoreResult<PathBuf> {
        validate_name(namespace)?;
        Ok(self.root.join(namespace))
    }

    fn page_path(&self, namespace: &str, page: &str) -> StoreResult<PathBuf> {
        let dir = self.namespace_dir(namespace)?;
        validate_name(page)?;
        Ok(dir.join(format!("{page}.{PAGE_EXT}")))
    }
}

impl PageStore for FsStore {
    fn load_schema(&self, namespace: &str) -> StoreResult<NamespaceSchema> {
        let path = self.namespace_dir(namespace)?.join(SCHEMA_FILE);
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::UnknownNamespace(namespace.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        let mut schema: NamespaceSchema =
            serde_json::from_str(&data).map_err(|source| StoreError::SchemaParse {
                namespace: namespace.to_string(),
                source,
            })?;
        // The resource does not carry its own name; the key does.
        schema.name = namespace.to_string();
        debug!(namespace, "loaded namespace schema");
        Ok(schema)
    }

    fn load_raw(&self, namespace: &str, page: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.page_path(namespace, page)?;
        match std::fs::read(&path) {
            Ok(bytes) => {
                debug!(namespace, page, len = bytes.len(), "loaded revision log");
                Ok(Some(bytes))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save_raw(&self, namespace: &str, page: &str, bytes: &[u8]) -> StoreResult<()> {
        let dir = self.namespace_dir(namespace)?;
        // Only namespaces with a schema resource are writable.
        if !dir.join(SCHEMA_FILE).is_file() {
            return Err(StoreError::UnknownNamespace(namespace.to_string()));
        }
        validate_name(page)?;

        let final_path = dir.join(format!("{page}.{PAGE_EXT}"));
        let tmp_path = dir.join(format!("{page}.{TMP_EXT}"));
        std::fs::write(&tmp_path, bytes)?;
        std::fs::rename(&tmp_path, &final_path)?;
        debug!(namespace, page, len = bytes.len(), "saved revision log");
        Ok(())
    }
}

/// Rejects names that would escape the layout or collide with its
/// bookkeeping files.
fn validate_name(name: &str) -> StoreResult<()> {
    let ok = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && name != SCHEMA_FILE;
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}
