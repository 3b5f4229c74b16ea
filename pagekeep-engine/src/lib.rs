//! The Pagekeep content pipeline.
//!
//! Ties the pieces together into the operation surface callers use:
//!
//! ```text
//! store → log.current() → template render → markup parse → HTML
//! ```
//!
//! Reads load the page's revision log, take the current revision, run the
//! namespace's content template over it, and hand the resulting markup to
//! the parser. Writes load the log, append one revision, re-encode the
//! whole log, and save it back.
//!
//! A loaded [`RevisionLog`] is exclusively owned by the operation that
//! loaded it for the whole read-modify-write cycle; the store replaces the
//! backing file atomically.

mod error;

pub use error::{EngineError, EngineResult};

use pagekeep_codec::{decode_log, encode_log};
use pagekeep_store::PageStore;
use pagekeep_types::{NamespaceSchema, PageRevision, RevisionLog};
use tracing::{debug, info};

/// The content engine over a page store.
#[derive(Debug)]
pub struct Wiki<S: PageStore> {
    store: S,
}

/// Renders one revision to an HTML fragment: the namespace template pass
/// followed by the markup pass.
pub fn render(schema: &NamespaceSchema, revision: &PageRevision) -> EngineResult<String> {
    let markup = pagekeep_template::render(&schema.content, revision)?;
    Ok(pagekeep_markup::markup_to_html(&markup))
}

/// Resolves a requested page name against a schema: a bare namespace
/// request maps to the schema's default page.
#[must_use]
pub fn resolve_page<'a>(schema: &'a NamespaceSchema, requested: Option<&'a str>) -> &'a str {
    match requested {
        Some(page) if !page.is_empty() => page,
        _ => &schema.default_page,
    }
}

impl<S: PageStore> Wiki<S> {
    /// Creates an engine over a store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads a page's schema and revision log. A page with no backing
    /// bytes loads as an empty log; an unknown namespace is an error.
    pub fn load(&self, namespace: &str, page: &str) -> EngineResult<(NamespaceSchema, RevisionLog)> {
        let schema = self.store.load_schema(namespace)?;
        let log = match self.store.load_raw(namespace, page)? {
            Some(bytes) => decode_log(&bytes, namespace, page)?,
            None => RevisionLog::new(namespace, page),
        };
        debug!(namespace, page, revisions = log.len(), "loaded page");
        Ok((schema, log))
    }

    /// Renders a page's current revision to an HTML fragment.
    pub fn render_current(&self, namespace: &str, page: &str) -> EngineResult<String> {
        let (schema, log) = self.load(namespace, page)?;
        render(&schema, &log.current())
    }

    /// Appends a single-field edit to a page's history and saves it.
    /// Returns the new revision count.
    pub fn edit_field(
        &self,
        namespace: &str,
        page: &str,
        message: &str,
        field: &str,
        value: Vec<u8>,
    ) -> EngineResult<usize> {
        let (_, mut log) = self.load(namespace, page)?;
        log.append_edit(message, field, value);
        self.save(&log)?;
        info!(namespace, page, field, revisions = log.len(), "edited page field");
        Ok(log.len())
    }

    /// Appends a zero-field deletion revision and saves it. The page's
    /// history is preserved. Returns the new revision count.
    pub fn delete_page(&self, namespace: &str, page: &str, message: &str) -> EngineResult<usize> {
        let (_, mut log) = self.load(namespace, page)?;
        log.append_delete(message);
        self.save(&log)?;
        info!(namespace, page, revisions = log.len(), "deleted page");
        Ok(log.len())
    }

    /// Re-encodes and saves a whole log.
    pub fn save(&self, log: &RevisionLog) -> EngineResult<()> {
        let bytes = encode_log(log)?;
        self.store
            .save_raw(log.namespace(), log.page_name(), &bytes)?;
        Ok(())
    }
}
