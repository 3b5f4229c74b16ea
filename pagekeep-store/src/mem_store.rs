//! In-memory page storage for tests and embedding.

use crate::error::{StoreError, StoreResult};
use crate::PageStore;
use pagekeep_types::NamespaceSchema;
use std::collections::HashMap;
use std::sync::Mutex;

/// A `PageStore` over plain maps. Useful where a filesystem is unwanted:
/// engine unit tests, doctests, embedding.
#[derive(Debug, Default)]
pub struct MemStore {
    schemas: Mutex<HashMap<String, NamespaceSchema>>,
    pages: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl MemStore {
    /// Creates an empty store with no namespaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a namespace schema under its own name.
    pub fn insert_schema(&self, schema: NamespaceSchema) {
        let mut schemas = self.schemas.lock().unwrap();
        schemas.insert(schema.name.clone(), schema);
    }
}

impl PageStore for MemStore {
    fn load_schema(&self, namespace: &str) -> StoreResult<NamespaceSchema> {
        let schemas = self.schemas.lock().unwrap();
        schemas
            .get(namespace)
            .cloned()
            .ok_or_else(|| StoreError::UnknownNamespace(namespace.to_string()))
    }

    fn load_raw(&self, namespace: &str, page: &str) -> StoreResult<Option<Vec<u8>>> {
        let pages = self.pages.lock().unwrap();
        Ok(pages
            .get(&(namespace.to_string(), page.to_string()))
            .cloned())
    }

    fn save_raw(&self, namespace: &str, page: &str, bytes: &[u8]) -> StoreResult<()> {
        let schemas = self.schemas.lock().unwrap();
        if !schemas.contains_key(namespace) {
            return Err(StoreError::UnknownNamespace(namespace.to_string()));
        }
        drop(schemas);

        let mut pages = self.pages.lock().unwrap();
        pages.insert((namespace.to_string(), page.to_string()), bytes.to_vec());
        Ok(())
    }
}
