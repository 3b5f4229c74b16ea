//! Page revisions.
//!
//! A revision is one immutable snapshot of a page's data: a mapping from
//! field name to raw byte value. Edits never mutate a revision in place —
//! `RevisionLog::append_edit` copies the current revision's field map,
//! overrides one entry, and appends a fresh revision.

use std::collections::BTreeMap;

/// Field name → raw value bytes.
///
/// A `BTreeMap` so that iteration (and therefore the encoded byte layout)
/// follows ascending lexicographic field-name order — an explicit policy
/// rather than incidental hash order.
pub type FieldMap = BTreeMap<String, Vec<u8>>;

/// One immutable named-field snapshot of a page.
///
/// Value blobs are opaque: UTF-8 text and binary file content are stored
/// the same way. The namespace and page name identify which log the
/// revision belongs to; they are carried here so template rendering can
/// substitute `{{pagens}}` and `{{pagename}}` without reaching back to
/// the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRevision {
    namespace: String,
    page_name: String,
    fields: FieldMap,
}

impl PageRevision {
    /// Creates a revision from a field map.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        page_name: impl Into<String>,
        fields: FieldMap,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            page_name: page_name.into(),
            fields,
        }
    }

    /// Creates a revision with no fields (the deleted-page shape, and the
    /// synthetic `current()` of an empty log).
    #[must_use]
    pub fn empty(namespace: impl Into<String>, page_name: impl Into<String>) -> Self {
        Self::new(namespace, page_name, FieldMap::new())
    }

    /// The namespace this revision's page belongs to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The page name.
    #[must_use]
    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    /// All fields, in encode order.
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Looks up one field's raw bytes.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&[u8]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// Number of fields in this revision.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Copies the field map, for building a successor revision.
    #[must_use]
    pub fn fields_cloned(&self) -> FieldMap {
        self.fields.clone()
    }
}
