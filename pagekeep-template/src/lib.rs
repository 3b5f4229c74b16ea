//! Template substitution for namespace content.
//!
//! A namespace's `content` string mixes literal markup with substitution
//! tokens, resolved against one page revision:
//!
//! - `{{field NAME DEFAULT}}` — the field's value as UTF-8 text, or
//!   `DEFAULT` when the field is absent. Inside the default, the literal
//!   substring `$pagename` is replaced by the revision's page name.
//! - `{{field64 NAME DEFAULT}}` — the same lookup, base64-encoded.
//! - `{{pagens}}` — the revision's namespace name.
//! - `{{pagename}}` — the revision's page name.
//!
//! Matching is case-sensitive with no escaping. `NAME` runs to the first
//! space, `DEFAULT` to the first `}}` — a default containing `}}` is
//! unsupported. A token opened but never closed fails with
//! [`TemplateError::UnterminatedToken`].

mod error;
mod substitute;

pub use error::{TemplateError, TemplateResult};
pub use substitute::render;
