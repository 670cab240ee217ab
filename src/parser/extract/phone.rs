use super::FieldUpdate;
use crate::parser::patterns::{EXTENSION_RE, PHONE_RE};

/// Phone, fax, and extension from one block. The profile pages list phone and
/// fax on the same line, phone first, so the first match is the phone and a
/// second distinct match is the fax.
pub fn extract(block: &str) -> Option<FieldUpdate> {
    let mut matches = PHONE_RE.find_iter(block);
    let number = matches.next()?.as_str().to_string();
    let fax = matches.next().map(|m| m.as_str().to_string());
    let extension = EXTENSION_RE.captures(block).map(|c| c[1].to_string());
    Some(FieldUpdate::Phone {
        number,
        fax,
        extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(block: &str) -> (String, Option<String>, Option<String>) {
        match extract(block) {
            Some(FieldUpdate::Phone {
                number,
                fax,
                extension,
            }) => (number, fax, extension),
            other => panic!("expected a phone assignment, got {:?}", other),
        }
    }

    #[test]
    fn single_number() {
        let (number, fax, extension) = parts("Phone: (217) 555-0147");
        assert_eq!(number, "(217) 555-0147");
        assert_eq!(fax, None);
        assert_eq!(extension, None);
    }

    #[test]
    fn second_number_is_fax() {
        let (number, fax, _) = parts("Phone: (217) 555-0147 Fax: (217) 555-0148");
        assert_eq!(number, "(217) 555-0147");
        assert_eq!(fax.as_deref(), Some("(217) 555-0148"));
    }

    #[test]
    fn extension_captured_alongside_phone() {
        let (_, _, extension) = parts("Phone: 217-555-0147 ext. 1234");
        assert_eq!(extension.as_deref(), Some("1234"));
    }

    #[test]
    fn country_code_and_dots() {
        let (number, _, _) = parts("+1 217.555.0147");
        assert_eq!(number, "+1 217.555.0147");
    }

    #[test]
    fn plain_text_no_trigger() {
        assert!(extract("established 1982, est. 40 employees").is_none());
    }
}
