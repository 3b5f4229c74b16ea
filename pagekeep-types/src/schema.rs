//! Namespace schema resources.
//!
//! A namespace groups pages that share a field schema and a content
//! template. Schemas are static: they are deserialized from the namespace's
//! `ns.json` resource by the storage layer and borrowed read-only by the
//! engine for every render. Nothing in the core mutates a schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The kind of data a declared field holds.
///
/// Declarative only — the codec stores every value as opaque bytes. Only
/// template rendering cares, and only to the extent that `{{field}}`
/// substitution expects UTF-8 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// UTF-8 text, substitutable with `{{field}}`.
    Text,
    /// Opaque file content, substitutable with `{{field64}}`.
    File,
}

/// An auxiliary named resource belonging to a namespace (stylesheet,
/// script, favicon). Files live in the schema resource and are not
/// versioned by the revision log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceFile {
    /// MIME type the file is served with.
    pub content_type: String,
    /// The file body.
    pub content: String,
}

/// Static descriptor for a namespace.
///
/// The `name` doubles as the storage key prefix; it is not part of the
/// serialized resource and is filled in by the loader from the key the
/// schema was requested under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceSchema {
    #[serde(skip)]
    pub name: String,
    /// Declared fields, name → kind.
    pub fields: BTreeMap<String, FieldKind>,
    /// Page served when a bare namespace is requested.
    pub default_page: String,
    /// Content template mixing literal markup and substitution tokens.
    pub content: String,
    /// Auxiliary files, name → file.
    #[serde(default)]
    pub files: BTreeMap<String, NamespaceFile>,
}

impl NamespaceSchema {
    /// Looks up the declared kind of a field.
    #[must_use]
    pub fn field_kind(&self, field: &str) -> Option<FieldKind> {
        self.fields.get(field).copied()
    }

    /// Looks up an auxiliary file by name.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&NamespaceFile> {
        self.files.get(name)
    }
}
