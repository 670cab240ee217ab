use super::FieldUpdate;
use crate::parser::patterns::CITY_STATE_ZIP_RE;

/// The directory renders address blocks with non-breaking spaces; nothing
/// else on a profile page uses them.
const ADDRESS_MARKER: char = '\u{a0}';

/// Address fields from a marker block, assigned only as a complete group.
/// Blocks that do not split into exactly three lines are skipped wholesale:
/// some profiles carry a second street line and guessing which line is the
/// city row would mix unrelated fields.
pub fn extract(block: &str) -> Option<FieldUpdate> {
    if !block.contains(ADDRESS_MARKER) {
        return None;
    }

    let lines: Vec<String> = block
        .split('\n')
        .map(|line| line.replace(ADDRESS_MARKER, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() != 3 {
        return None;
    }

    let caps = CITY_STATE_ZIP_RE.captures(&lines[1])?;
    Some(FieldUpdate::Address {
        line_1: lines[0].clone(),
        city: caps[1].trim().to_string(),
        state: caps[2].trim().to_string(),
        postal_code: caps[3].to_string(),
        country: lines[2].clone(),
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_line_block() {
        let block = "123 Main St\nSpringfield, IL\u{a0} 62704\nUSA";
        let Some(FieldUpdate::Address {
            line_1,
            city,
            state,
            postal_code,
            country,
        }) = extract(block)
        else {
            panic!("expected an address assignment");
        };
        assert_eq!(line_1, "123 Main St");
        assert_eq!(city, "Springfield");
        assert_eq!(state, "IL");
        assert_eq!(postal_code, "62704");
        assert_eq!(country, "USA");
    }

    #[test]
    fn two_line_block_skipped() {
        assert!(extract("Springfield, IL\u{a0} 62704\nUSA").is_none());
    }

    #[test]
    fn four_line_block_skipped() {
        let block = "123 Main St\nSuite 4\u{a0}\nSpringfield, IL\u{a0} 62704\nUSA";
        assert!(extract(block).is_none());
    }

    #[test]
    fn middle_line_without_zip_skipped() {
        assert!(extract("123 Main St\nSpringfield\u{a0}Illinois\nUSA").is_none());
    }

    #[test]
    fn no_marker_no_trigger() {
        assert!(extract("123 Main St\nSpringfield, IL  62704\nUSA").is_none());
    }

    #[test]
    fn blank_lines_discarded() {
        let block = "123 Main St\n\nSpringfield, IL\u{a0} 62704\n\nUSA";
        assert!(extract(block).is_some());
    }
}
