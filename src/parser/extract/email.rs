use super::FieldUpdate;
use crate::parser::patterns::EMAIL_RE;

/// First email address in the block.
pub fn extract(block: &str) -> Option<FieldUpdate> {
    EMAIL_RE
        .find(block)
        .map(|m| FieldUpdate::Email(m.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(block: &str) -> Option<String> {
        match extract(block) {
            Some(FieldUpdate::Email(e)) => Some(e),
            _ => None,
        }
    }

    #[test]
    fn bare_address() {
        assert_eq!(
            email("info@monalisajewels.com").as_deref(),
            Some("info@monalisajewels.com")
        );
    }

    #[test]
    fn embedded_in_text() {
        assert_eq!(
            email("Email: sales@example.co.uk or call us").as_deref(),
            Some("sales@example.co.uk")
        );
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            email("a@example.com b@example.com").as_deref(),
            Some("a@example.com")
        );
    }

    #[test]
    fn plain_text_no_trigger() {
        assert!(email("no address here").is_none());
    }
}
