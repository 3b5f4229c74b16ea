//! Append-only revision logs.
//!
//! A log is the ordered history of one (namespace, page) identity: a
//! sequence of (commit message, revision) entries. Index 0 is the creation
//! revision; the last entry is current. The log only ever grows — deletion
//! is an appended zero-field revision, never a truncation — and is
//! serialized as a whole on every save.

use crate::revision::{FieldMap, PageRevision};

/// One (commit message, revision) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionEntry {
    pub message: String,
    pub revision: PageRevision,
}

/// The append-only revision history of one page.
///
/// An instance is exclusively owned by whichever call path constructed or
/// loaded it; the mutation operations assume that ownership holds for the
/// whole read-modify-write cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionLog {
    namespace: String,
    page_name: String,
    entries: Vec<RevisionEntry>,
}

impl RevisionLog {
    /// Creates an empty log — the "page not yet created" state.
    #[must_use]
    pub fn new(namespace: impl Into<String>, page_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            page_name: page_name.into(),
            entries: Vec::new(),
        }
    }

    /// Rebuilds a log from decoded entries. Every entry's revision must
    /// share the log's identity; the decoder constructs them that way.
    #[must_use]
    pub fn from_entries(
        namespace: impl Into<String>,
        page_name: impl Into<String>,
        entries: Vec<RevisionEntry>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            page_name: page_name.into(),
            entries,
        }
    }

    /// The namespace this log belongs to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The page name this log belongs to.
    #[must_use]
    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[RevisionEntry] {
        &self.entries
    }

    /// Number of revisions in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for a page that has never been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent revision, or a synthetic empty revision for a log
    /// with no entries. An empty log is a valid state, not an error.
    #[must_use]
    pub fn current(&self) -> PageRevision {
        match self.entries.last() {
            Some(entry) => entry.revision.clone(),
            None => PageRevision::empty(&self.namespace, &self.page_name),
        }
    }

    /// Appends a new revision built from `fields`.
    ///
    /// Unconditional: the log grows by one entry even if `fields` matches
    /// the previous revision exactly.
    pub fn append(&mut self, message: impl Into<String>, fields: FieldMap) {
        let revision = PageRevision::new(&self.namespace, &self.page_name, fields);
        self.entries.push(RevisionEntry {
            message: message.into(),
            revision,
        });
    }

    /// Appends a revision that copies the current fields with a single
    /// override. The sanctioned "edit one field" path: no other field is
    /// touched.
    pub fn append_edit(
        &mut self,
        message: impl Into<String>,
        field: impl Into<String>,
        value: Vec<u8>,
    ) {
        let mut fields = match self.entries.last() {
            Some(entry) => entry.revision.fields_cloned(),
            None => FieldMap::new(),
        };
        fields.insert(field.into(), value);
        self.append(message, fields);
    }

    /// Appends a zero-field revision. Deletion keeps the full history and
    /// is reversible by a later append with restored fields.
    pub fn append_delete(&mut self, message: impl Into<String>) {
        self.append(message, FieldMap::new());
    }
}
