/// Gemstone rows in the profile's category table carry a "Name:" label cell
/// followed by the value cell.
const CATEGORY_LABEL: &str = "Name:";

/// Gemstone/product categories from the document's structured label/value
/// rows, in document order. Runs once per document, independent of the
/// paragraph block scan.
pub fn extract(rows: &[(String, String)]) -> Vec<String> {
    rows.iter()
        .filter(|(label, _)| label == CATEGORY_LABEL)
        .map(|(_, value)| value.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(l, v)| (l.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn name_rows_collected_in_order() {
        let rows = rows(&[("Name:", "Ruby"), ("Name:", "Sapphire")]);
        assert_eq!(extract(&rows), vec!["Ruby", "Sapphire"]);
    }

    #[test]
    fn other_labels_ignored() {
        let rows = rows(&[
            ("Member Type:", "Firm"),
            ("Name:", "Emerald"),
            ("Since:", "1982"),
        ]);
        assert_eq!(extract(&rows), vec!["Emerald"]);
    }

    #[test]
    fn no_rows_no_categories() {
        assert!(extract(&[]).is_empty());
    }
}
