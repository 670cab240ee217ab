use super::FieldUpdate;
use crate::parser::patterns::URL_RE;

/// First website link in the block. The assembler treats this assignment as
/// terminal: the directory places the link after all contact details, and
/// everything past it is navigation boilerplate.
pub fn extract(block: &str) -> Option<FieldUpdate> {
    URL_RE
        .find(block)
        .map(|m| FieldUpdate::Url(m.as_str().to_string()))
}
