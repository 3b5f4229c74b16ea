//! The left-to-right template scan.

use crate::error::{TemplateError, TemplateResult};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use pagekeep_types::PageRevision;

const FIELD_OPEN: &str = "{{field ";
const FIELD64_OPEN: &str = "{{field64 ";
const PAGENS: &str = "{{pagens}}";
const PAGENAME: &str = "{{pagename}}";
const CLOSE: &str = "}}";
const PAGENAME_VAR: &str = "$pagename";

/// Renders a namespace content template against one revision, producing
/// the markup string handed to the markup parser.
pub fn render(template: &str, revision: &PageRevision) -> TemplateResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(PAGENS) {
            out.push_str(revision.namespace());
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(PAGENAME) {
            out.push_str(revision.page_name());
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(FIELD64_OPEN) {
            let token = scan_token(template, tail)?;
            let encoded = match revision.field(token.name) {
                Some(bytes) => BASE64.encode(bytes),
                None => BASE64.encode(token.default_for(revision).as_bytes()),
            };
            out.push_str(&encoded);
            rest = token.tail;
        } else if let Some(tail) = rest.strip_prefix(FIELD_OPEN) {
            let token = scan_token(template, tail)?;
            match revision.field(token.name) {
                Some(bytes) => {
                    let text =
                        std::str::from_utf8(bytes).map_err(|_| TemplateError::FieldNotText {
                            field: token.name.to_string(),
                        })?;
                    out.push_str(text);
                }
                None => out.push_str(&token.default_for(revision)),
            }
            rest = token.tail;
        } else if let Some(ch) = rest.chars().next() {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    Ok(out)
}

struct FieldToken<'a> {
    name: &'a str,
    default: &'a str,
    tail: &'a str,
}

impl FieldToken<'_> {
    /// The default value with `$pagename` substituted.
    fn default_for(&self, revision: &PageRevision) -> String {
        self.default.replace(PAGENAME_VAR, revision.page_name())
    }
}

/// Scans `NAME DEFAULT}}` from the text following a field-token opener.
/// `template` is the whole input, used only to report the failure offset.
fn scan_token<'a>(template: &str, input: &'a str) -> TemplateResult<FieldToken<'a>> {
    let unterminated = || TemplateError::UnterminatedToken {
        offset: template.len() - input.len(),
    };

    let name_end = input.find(' ').ok_or_else(unterminated)?;
    let name = &input[..name_end];
    let after_name = &input[name_end + 1..];
    let default_end = after_name.find(CLOSE).ok_or_else(unterminated)?;

    Ok(FieldToken {
        name,
        default: &after_name[..default_end],
        tail: &after_name[default_end + CLOSE.len()..],
    })
}
