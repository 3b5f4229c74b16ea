//! Formatted text spans.

/// A contiguous run of line text tagged with its formatting kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Unformatted text.
    Plain(String),
    /// Bold text.
    Bold(String),
    /// Italic text.
    Italic(String),
    /// A wiki link; the enclosed literal is both the text and the target.
    Link { target: String },
    /// Verbatim text in which formatting delimiters were disabled.
    Raw(String),
}

/// The scanner's current span kind. `Link` is absent: links are emitted
/// standalone and never become the accumulating kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpanKind {
    Plain,
    Bold,
    Italic,
    Raw,
}

impl SpanKind {
    pub(crate) fn with_text(self, text: String) -> Span {
        match self {
            Self::Plain => Span::Plain(text),
            Self::Bold => Span::Bold(text),
            Self::Italic => Span::Italic(text),
            Self::Raw => Span::Raw(text),
        }
    }
}
