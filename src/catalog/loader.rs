//! Catalog loading and lookups.

use crate::catalog::entry::CatalogEntry;
use crate::error::{Result, SkillioError};
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Embedded catalog directory.
static INDEX_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/index");

/// Name of the catalog file inside the embedded index.
const BUILTIN_CATALOG: &str = "skills.yaml";

/// Maximum example names reported per category.
const CATEGORY_EXAMPLES: usize = 5;

#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    skills: Vec<CatalogEntry>,
}

/// An in-memory catalog, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Per-tag aggregation for the `categories` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
    /// Up to five skill names carrying this tag.
    pub examples: Vec<String>,
}

impl Catalog {
    /// Build a catalog from entries already in memory.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog file. A missing file yields an empty catalog.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Catalog not found at {}, using empty catalog", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content, path)
    }

    /// Parse a catalog document.
    pub fn from_yaml_str(content: &str, origin: impl AsRef<Path>) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let doc: Option<CatalogDocument> =
            serde_yaml::from_str(content).map_err(|e| SkillioError::ParseError {
                path: origin.as_ref().to_path_buf(),
                message: e.to_string(),
            })?;

        let entries = doc.map(|d| d.skills).unwrap_or_default();
        tracing::debug!("Loaded {} catalog entries", entries.len());
        Ok(Self { entries })
    }

    /// Load the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let file = INDEX_DIR
            .get_file(BUILTIN_CATALOG)
            .ok_or_else(|| SkillioError::ParseError {
                path: Path::new("index").join(BUILTIN_CATALOG),
                message: "embedded catalog is missing".to_string(),
            })?;

        let content = file.contents_utf8().ok_or_else(|| SkillioError::ParseError {
            path: file.path().to_path_buf(),
            message: "Invalid UTF-8".to_string(),
        })?;

        Self::from_yaml_str(content, file.path())
    }

    /// Load the configured catalog file, or the embedded one when none is set.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    /// All entries, in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by exact name. First match wins.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// All entries, optionally restricted to one tag (case-insensitive).
    pub fn filter_by_tag(&self, tag: Option<&str>) -> Vec<&CatalogEntry> {
        match tag {
            Some(tag) => self.entries.iter().filter(|e| e.has_tag(tag)).collect(),
            None => self.entries.iter().collect(),
        }
    }

    /// Group entries by tag, sorted by tag name.
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut by_tag: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for entry in &self.entries {
            for tag in &entry.tags {
                by_tag.entry(tag.as_str()).or_default().push(&entry.name);
            }
        }

        by_tag
            .into_iter()
            .map(|(tag, names)| CategorySummary {
                name: tag.to_string(),
                count: names.len(),
                examples: names
                    .iter()
                    .take(CATEGORY_EXAMPLES)
                    .map(|n| n.to_string())
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
skills:
  - name: video-downloader
    description: Download videos
    tags: [media, video]
  - name: audio-extractor
    description: Extract audio tracks
    tags: [media, audio]
  - name: pdf-converter
    description: Convert PDF documents
    tags: [documents]
"#;

    #[test]
    fn parses_entries_in_order() {
        let catalog = Catalog::from_yaml_str(SAMPLE, "sample.yaml").unwrap();

        let names: Vec<_> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["video-downloader", "audio-extractor", "pdf-converter"]
        );
    }

    #[test]
    fn missing_file_is_empty_catalog() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::load(&temp.path().join("nope.yaml")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn empty_document_is_empty_catalog() {
        assert!(Catalog::from_yaml_str("", "x").unwrap().is_empty());
        assert!(Catalog::from_yaml_str("skills: []", "x").unwrap().is_empty());
        assert!(Catalog::from_yaml_str("other: 1", "x").unwrap().is_empty());
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = Catalog::from_yaml_str("skills: [name: ", "bad.yaml").unwrap_err();
        assert!(matches!(err, SkillioError::ParseError { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skills.yaml");
        fs::write(&path, SAMPLE).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn get_finds_exact_name_only() {
        let catalog = Catalog::from_yaml_str(SAMPLE, "x").unwrap();

        assert!(catalog.get("pdf-converter").is_some());
        assert!(catalog.get("pdf").is_none());
        assert!(catalog.get("PDF-CONVERTER").is_none());
    }

    #[test]
    fn filter_by_tag_ignores_case() {
        let catalog = Catalog::from_yaml_str(SAMPLE, "x").unwrap();

        assert_eq!(catalog.filter_by_tag(Some("MEDIA")).len(), 2);
        assert_eq!(catalog.filter_by_tag(Some("audio")).len(), 1);
        assert_eq!(catalog.filter_by_tag(None).len(), 3);
        assert!(catalog.filter_by_tag(Some("missing")).is_empty());
    }

    #[test]
    fn categories_sorted_with_counts() {
        let catalog = Catalog::from_yaml_str(SAMPLE, "x").unwrap();
        let cats = catalog.categories();

        let names: Vec<_> = cats.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["audio", "documents", "media", "video"]);

        let media = cats.iter().find(|c| c.name == "media").unwrap();
        assert_eq!(media.count, 2);
        assert_eq!(media.examples, vec!["video-downloader", "audio-extractor"]);
    }

    #[test]
    fn categories_cap_examples_at_five() {
        let entries = (0..7)
            .map(|i| {
                let mut e = CatalogEntry::new(format!("skill-{}", i), "d");
                e.tags = vec!["bulk".to_string()];
                e
            })
            .collect();
        let catalog = Catalog::from_entries(entries);

        let cats = catalog.categories();
        assert_eq!(cats[0].count, 7);
        assert_eq!(cats[0].examples.len(), 5);
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("video-downloader").is_some());
    }
}
