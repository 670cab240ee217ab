use super::{ExtractWarning, FieldUpdate};
use crate::parser::patterns::CONTACT_RE;

const CONTACT_MARKER: &str = "Contact:";

/// Contact person from a "Contact:" block. The directory writes names
/// surname-first; a three-part split means a suffix is embedded in the
/// surname segment ("Doe, Jr., Jane").
pub fn extract(block: &str) -> Result<Option<FieldUpdate>, ExtractWarning> {
    if !block.contains(CONTACT_MARKER) {
        return Ok(None);
    }

    let Some(caps) = CONTACT_RE.captures(block) else {
        return Err(ExtractWarning::MalformedContactBlock(
            block.trim().to_string(),
        ));
    };

    let raw = caps[1].to_string();
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [last, first] => Ok(Some(FieldUpdate::Contact {
            last_name: (*last).to_string(),
            first_name: (*first).to_string(),
        })),
        [last, suffix, first] => Ok(Some(FieldUpdate::Contact {
            last_name: format!("{}{}", last, suffix),
            first_name: (*first).to_string(),
        })),
        _ => Err(ExtractWarning::MalformedContactBlock(raw)),
    }
}

// ── Tests ──
