//! Catalog entry types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single skill in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique skill name (catalog-wide key).
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Localized description.
    #[serde(
        default,
        rename = "description_zh",
        skip_serializing_if = "Option::is_none"
    )]
    pub description_localized: Option<String>,

    #[serde(default = "default_version")]
    pub version: String,

    /// Short capability phrases, most relevant first.
    #[serde(default)]
    pub capabilities: Vec<String>,

    /// Usage examples in natural language.
    #[serde(default)]
    pub scenarios: Vec<String>,

    /// Category labels.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Curated quality rating on a 0-10 scale.
    #[serde(default = "default_quality_score")]
    pub quality_score: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default)]
    pub source: SkillSource,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_quality_score() -> f64 {
    5.0
}

impl CatalogEntry {
    /// Create a minimal entry with defaults for every optional field.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            description_localized: None,
            version: default_version(),
            capabilities: Vec::new(),
            scenarios: Vec::new(),
            tags: Vec::new(),
            dependencies: Vec::new(),
            quality_score: default_quality_score(),
            license: None,
            source: SkillSource::default(),
        }
    }

    /// Check tag membership, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Where a skill's content comes from.
///
/// Serialized as `{type: github, repo: owner/name}` or `{type: <kind>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSource", into = "RawSource")]
pub enum SkillSource {
    /// Repository-backed source, eligible for external generation.
    Github { repo: String },
    /// Any other source descriptor.
    Other { kind: String },
}

impl SkillSource {
    /// The `type` string of this source.
    pub fn kind(&self) -> &str {
        match self {
            Self::Github { .. } => "github",
            Self::Other { kind } => kind,
        }
    }

    /// The repository reference, if any.
    pub fn repo(&self) -> Option<&str> {
        match self {
            Self::Github { repo } => Some(repo),
            Self::Other { .. } => None,
        }
    }
}

impl Default for SkillSource {
    fn default() -> Self {
        Self::Other {
            kind: "unknown".to_string(),
        }
    }
}

impl fmt::Display for SkillSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Github { repo } => write!(f, "github - {}", repo),
            Self::Other { kind } => write!(f, "{}", kind),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawSource {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    repo: Option<String>,
}

impl From<RawSource> for SkillSource {
    fn from(raw: RawSource) -> Self {
        let kind = raw.kind.unwrap_or_else(|| "unknown".to_string());
        match (kind.as_str(), raw.repo) {
            ("github", Some(repo)) if !repo.trim().is_empty() => Self::Github { repo },
            _ => Self::Other { kind },
        }
    }
}

impl From<SkillSource> for RawSource {
    fn from(source: SkillSource) -> Self {
        match source {
            SkillSource::Github { repo } => Self {
                kind: Some("github".to_string()),
                repo: Some(repo),
            },
            SkillSource::Other { kind } => Self {
                kind: Some(kind),
                repo: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_entry() {
        let yaml = r#"
name: video-downloader
description: Download videos from YouTube and 1000+ sites
description_zh: 下载视频
version: 2.1.0
capabilities:
  - download youtube videos
scenarios:
  - save a lecture for offline viewing
tags: [media, video]
dependencies: [ffmpeg]
quality_score: 9.2
license: Unlicense
source:
  type: github
  repo: yt-dlp/yt-dlp
"#;
        let entry: CatalogEntry = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(entry.name, "video-downloader");
        assert_eq!(entry.description_localized.as_deref(), Some("下载视频"));
        assert_eq!(entry.version, "2.1.0");
        assert_eq!(entry.quality_score, 9.2);
        assert_eq!(
            entry.source,
            SkillSource::Github {
                repo: "yt-dlp/yt-dlp".to_string()
            }
        );
    }

    #[test]
    fn applies_defaults() {
        let entry: CatalogEntry = serde_yaml::from_str("name: bare").unwrap();

        assert_eq!(entry.version, "1.0.0");
        assert_eq!(entry.quality_score, 5.0);
        assert!(entry.capabilities.is_empty());
        assert_eq!(entry.source.kind(), "unknown");
    }

    #[test]
    fn non_github_source_keeps_kind() {
        let entry: CatalogEntry =
            serde_yaml::from_str("name: local\nsource:\n  type: builtin\n").unwrap();

        assert_eq!(
            entry.source,
            SkillSource::Other {
                kind: "builtin".to_string()
            }
        );
        assert_eq!(entry.source.repo(), None);
    }

    #[test]
    fn github_without_repo_is_not_repository_backed() {
        let entry: CatalogEntry =
            serde_yaml::from_str("name: broken\nsource:\n  type: github\n").unwrap();

        assert_eq!(entry.source.kind(), "github");
        assert!(matches!(entry.source, SkillSource::Other { .. }));
    }

    #[test]
    fn source_serializes_as_tagged_object() {
        let source = SkillSource::Github {
            repo: "owner/name".to_string(),
        };
        let json = serde_json::to_value(&source).unwrap();

        assert_eq!(json["type"], "github");
        assert_eq!(json["repo"], "owner/name");

        let other = serde_json::to_value(SkillSource::Other {
            kind: "local".to_string(),
        })
        .unwrap();
        assert_eq!(other, serde_json::json!({"type": "local"}));
    }

    #[test]
    fn has_tag_ignores_case() {
        let mut entry = CatalogEntry::new("x", "y");
        entry.tags = vec!["Media".to_string()];

        assert!(entry.has_tag("media"));
        assert!(entry.has_tag("MEDIA"));
        assert!(!entry.has_tag("video"));
    }
}
