use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Filesystem document store: one fetched HTML file per organization, keyed
/// by slug. The crawler checks membership before fetching so re-runs pick up
/// where they left off.
pub struct Store {
    dir: PathBuf,
}

pub struct StoredDocument {
    pub slug: String,
    pub path: PathBuf,
}

impl StoredDocument {
    pub fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

impl Store {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating document store at {}", dir.display()))?;
        Ok(Store { dir })
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.path_for(slug).is_file()
    }

    pub fn save(&self, slug: &str, html: &str) -> Result<()> {
        let path = self.path_for(slug);
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))
    }

    /// All stored documents, sorted by slug for a stable batch order.
    pub fn list(&self) -> Result<Vec<StoredDocument>> {
        let mut docs = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("listing document store at {}", self.dir.display()))?
        {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let slug = match path.file_stem().and_then(|s| s.to_str()) {
                Some(s) => s.to_string(),
                None => continue,
            };
            docs.push(StoredDocument { slug, path });
        }
        docs.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(docs)
    }

    fn path_for(&self, slug: &str) -> PathBuf {
        self.dir.join(format!("{}.html", slug))
    }
}

/// Filesystem-safe identifier derived from a company name: lowercased,
/// punctuation stripped, spaces removed.
pub fn slugify(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
