//! Core type definitions for Pagekeep.
//!
//! This crate defines the fundamental types of the content engine:
//! - Namespace schemas (declared fields, default page, content template,
//!   auxiliary files)
//! - Page revisions (one immutable named-field snapshot of a page)
//! - Revision logs (the append-only history of one page)
//!
//! The binary wire format for revisions and logs lives in `pagekeep-codec`;
//! loading schema resources from disk lives in `pagekeep-store`. This crate
//! is pure in-memory data.

mod log;
mod revision;
mod schema;

pub use log::{RevisionEntry, RevisionLog};
pub use revision::{FieldMap, PageRevision};
pub use schema::{FieldKind, NamespaceFile, NamespaceSchema};
