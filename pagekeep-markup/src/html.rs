//! HTML rendering of parsed blocks.

use crate::parser::Block;
use crate::span::Span;

/// Path prefix for link targets.
const WIKI_HREF_PREFIX: &str = "/wiki/";

impl Span {
    /// This span's HTML. Plain and raw text is emitted as-is, unescaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Plain(text) | Self::Raw(text) => text.clone(),
            Self::Bold(text) => format!("<b>{text}</b>"),
            Self::Italic(text) => format!("<i>{text}</i>"),
            Self::Link { target } => {
                format!("<a href=\"{WIKI_HREF_PREFIX}{target}\">{target}</a>")
            }
        }
    }
}

impl Block {
    /// This block's HTML: the kind's wrapper around its spans' HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let (prefix, spans, suffix) = match self {
            Self::Paragraph(spans) => ("<p>", spans, "</p>"),
            Self::Heading(spans) => ("<h1>", spans, "</h1>"),
        };
        let mut out = String::from(prefix);
        for span in spans {
            out.push_str(&span.to_html());
        }
        out.push_str(suffix);
        out
    }
}

/// Renders parsed blocks to an HTML fragment, in source order.
#[must_use]
pub fn render_html(blocks: &[Block]) -> String {
    blocks.iter().map(Block::to_html).collect()
}
