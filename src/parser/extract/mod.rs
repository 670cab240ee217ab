pub mod address;
pub mod categories;
pub mod contact;
pub mod email;
pub mod phone;
pub mod url;

use serde::Serialize;
use thiserror::Error;

use super::document::ProfileDocument;

/// Structured output row for one organization's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub company: String,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub phone_extension: Option<String>,
    pub fax: Option<String>,
    pub url: Option<String>,
    pub categories: Vec<String>,
}

impl Record {
    fn new(company: String) -> Self {
        Record {
            company,
            address_line_1: None,
            address_line_2: None,
            city: None,
            state: None,
            postal_code: None,
            country: None,
            last_name: None,
            first_name: None,
            email: None,
            phone: None,
            phone_extension: None,
            fax: None,
            url: None,
            categories: Vec::new(),
        }
    }

    /// Merge one block's assignments. Non-empty assignments overwrite earlier
    /// ones; a None inside an update never clears a field.
    fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Address {
                line_1,
                city,
                state,
                postal_code,
                country,
            } => {
                // Atomic group from a single qualifying block.
                self.address_line_1 = Some(line_1);
                self.city = Some(city);
                self.state = Some(state);
                self.postal_code = Some(postal_code);
                self.country = Some(country);
            }
            FieldUpdate::Contact {
                last_name,
                first_name,
            } => {
                self.last_name = Some(last_name);
                self.first_name = Some(first_name);
            }
            FieldUpdate::Email(email) => self.email = Some(email),
            FieldUpdate::Phone {
                number,
                fax,
                extension,
            } => {
                self.phone = Some(number);
                if fax.is_some() {
                    self.fax = fax;
                }
                if extension.is_some() {
                    self.phone_extension = extension;
                }
            }
            FieldUpdate::Url(url) => self.url = Some(url),
        }
    }
}

/// Tagged field assignments produced by a pure extractor from one text block.
/// The assembler owns the Record and applies these.
#[derive(Debug, Clone)]
pub enum FieldUpdate {
    Address {
        line_1: String,
        city: String,
        state: String,
        postal_code: String,
        country: String,
    },
    Contact {
        last_name: String,
        first_name: String,
    },
    Email(String),
    Phone {
        number: String,
        fax: Option<String>,
        extension: Option<String>,
    },
    Url(String),
}

/// Recoverable per-document conditions; surfaced to the batch driver instead
/// of aborting the run.
#[derive(Debug, Error)]
pub enum ExtractWarning {
    #[error("contact block did not split into 2 or 3 name parts: {0:?}")]
    MalformedContactBlock(String),
}

/// Navigation boilerplate; these blocks are never scanned.
const BOILERPLATE_MARKER: &str = "Return to Search Page";

/// Fold the extractors over the document's blocks in order and emit the
/// finalized record. The website link is always the last useful block on a
/// profile page, so a url match ends the scan.
pub fn assemble(doc: &ProfileDocument) -> (Record, Vec<ExtractWarning>) {
    let mut record = Record::new(doc.title.clone());
    let mut warnings = Vec::new();

    'scan: for block in &doc.blocks {
        if block.contains(BOILERPLATE_MARKER) {
            continue;
        }
        for update in scan_block(block, &mut warnings) {
            let terminal = matches!(update, FieldUpdate::Url(_));
            record.apply(update);
            if terminal {
                break 'scan;
            }
        }
    }

    // The category table sits outside the paragraph flow; scanned once per
    // document regardless of where the block scan stopped.
    record.categories = categories::extract(&doc.category_rows);

    (record, warnings)
}

/// Run every applicable extractor against one block; url goes last so fields
/// on the terminating block are still collected.
fn scan_block(block: &str, warnings: &mut Vec<ExtractWarning>) -> Vec<FieldUpdate> {
    let mut updates = Vec::new();
    if let Some(u) = address::extract(block) {
        updates.push(u);
    }
    match contact::extract(block) {
        Ok(Some(u)) => updates.push(u),
        Ok(None) => {}
        Err(w) => warnings.push(w),
    }
    if let Some(u) = email::extract(block) {
        updates.push(u);
    }
    if let Some(u) = phone::extract(block) {
        updates.push(u);
    }
    if let Some(u) = url::extract(block) {
        updates.push(u);
    }
    updates
}

// ── Tests ──
