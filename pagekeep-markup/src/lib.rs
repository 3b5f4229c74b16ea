//! Line-oriented markup parsing and HTML rendering.
//!
//! Page markup is parsed line by line. A line starting with `# ` becomes a
//! heading; any other non-empty line becomes a paragraph; empty lines are
//! skipped. Within a line:
//!
//! - `*` toggles bold, `_` toggles italic. The two never nest — there is a
//!   single current span kind, and toggling replaces it.
//! - `[[target]]` emits a link to `/wiki/target` and resumes the kind that
//!   was active before it. An unclosed `[[` is literal text.
//! - `$START` … `$END` delimit a raw span: everything between them is
//!   copied verbatim with the delimiters above disabled. Raw mode opened on
//!   one line persists into the following lines until `$END`.
//!
//! Rendering is the straightforward concatenation of each block's wrapped
//! span HTML, in source order. Span text is emitted as-is, unescaped.

mod html;
mod parser;
mod span;

pub use html::render_html;
pub use parser::{parse, Block};
pub use span::Span;

/// Parses markup and renders it to HTML in one call.
#[must_use]
pub fn markup_to_html(input: &str) -> String {
    render_html(&parse(input))
}
