pub mod document;
pub mod extract;
pub mod patterns;

use document::DocumentError;
use extract::{ExtractWarning, Record};

/// Two-pass pipeline: raw html → ProfileDocument → Record. Warnings cover
/// recoverable per-document conditions the caller should log.
pub fn process_document(html: &str) -> Result<(Record, Vec<ExtractWarning>), DocumentError> {
    let doc = document::load(html)?;
    Ok(extract::assemble(&doc))
}

// ── Tests ──
