use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;

/// One stored profile page, reduced to the shape the extractors need: a title
/// heading, paragraph text blocks in document order, and the label/value rows
/// of the category table. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct ProfileDocument {
    pub title: String,
    pub blocks: Vec<String>,
    pub category_rows: Vec<(String, String)>,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document has no title heading")]
    MissingTitle,
}

/// Parse one raw HTML document into a ProfileDocument. The HTML parser is
/// error-tolerant, so the only load failure is a page without the company
/// heading (truncated downloads and error pages both land here).
pub fn load(html: &str) -> Result<ProfileDocument, DocumentError> {
    let dom = Html::parse_document(html);
    let heading = Selector::parse("h1").unwrap();
    let paragraph = Selector::parse("p").unwrap();
    let row = Selector::parse("tr").unwrap();
    let cell = Selector::parse("td").unwrap();

    let title = dom
        .select(&heading)
        .next()
        .map(|el| element_text(el).trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(DocumentError::MissingTitle)?;

    let blocks = dom
        .select(&paragraph)
        .map(element_text)
        .filter(|b| !b.trim().is_empty())
        .collect();

    let mut category_rows = Vec::new();
    for tr in dom.select(&row) {
        let cells: Vec<String> = tr.select(&cell).map(|c| element_text(c)).collect();
        if let [label, value, ..] = cells.as_slice() {
            category_rows.push((label.trim().to_string(), value.trim().to_string()));
        }
    }

    Ok(ProfileDocument {
        title,
        blocks,
        category_rows,
    })
}

/// Text content of an element with <br> rendered as a newline, so address
/// blocks keep their line structure. Non-breaking spaces pass through
/// untouched; the address extractor keys on them.
fn element_text(el: ElementRef) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) if e.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out
}

// ── Tests ──
