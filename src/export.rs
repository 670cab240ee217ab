use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use tracing::info;

use crate::parser::extract::Record;

pub const CSV_HEADER: [&str; 15] = [
    "company",
    "address_line_1",
    "address_line_2",
    "city",
    "state",
    "postal_code",
    "country",
    "last_name",
    "first_name",
    "email",
    "phone",
    "phone_extension",
    "fax",
    "url",
    "categories",
];

const CATEGORY_DELIMITER: &str = "; ";

pub fn write_csv(records: &[Record], path: &Path) -> Result<()> {
    let mut wtr = Writer::from_writer(create_output(path)?);
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record(csv_row(record))?;
    }
    wtr.flush()?;
    info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

pub fn write_json(records: &[Record], path: &Path) -> Result<()> {
    let file = create_output(path)?;
    serde_json::to_writer_pretty(file, records)?;
    info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn create_output(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("creating {}", path.display()))
}

/// Missing fields serialize as empty columns; categories join into one
/// delimited column.
fn csv_row(r: &Record) -> [String; 15] {
    let opt = |field: &Option<String>| field.clone().unwrap_or_default();
    [
        r.company.clone(),
        opt(&r.address_line_1),
        opt(&r.address_line_2),
        opt(&r.city),
        opt(&r.state),
        opt(&r.postal_code),
        opt(&r.country),
        opt(&r.last_name),
        opt(&r.first_name),
        opt(&r.email),
        opt(&r.phone),
        opt(&r.phone_extension),
        opt(&r.fax),
        opt(&r.url),
        r.categories.join(CATEGORY_DELIMITER),
    ]
}
