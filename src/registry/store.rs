//! Registry document and its on-disk store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::SkillSource;
use crate::error::{Result, SkillioError};

/// File name of the registry, placed beside the default install root.
pub const REGISTRY_FILE: &str = "installed_skills.json";

/// How a skill was materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallMethod {
    /// Generated by the external skill-seekers tool.
    #[serde(rename = "skill-seekers")]
    SkillSeekers,
    /// A single SKILL.md written from catalog metadata.
    #[serde(rename = "simple")]
    Simple,
}

impl InstallMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkillSeekers => "skill-seekers",
            Self::Simple => "simple",
        }
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One installed skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallRecord {
    pub version: String,
    /// Materialized skill directory.
    pub path: PathBuf,
    pub source: SkillSource,
    /// Directory the install was invoked from.
    pub installed_at: PathBuf,
    pub method: InstallMethod,
}

/// The registry document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallRegistry {
    #[serde(default)]
    pub skills: BTreeMap<String, InstallRecord>,
}

impl InstallRegistry {
    pub fn get(&self, name: &str) -> Option<&InstallRecord> {
        self.skills.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    /// Insert or replace a record.
    pub fn upsert(&mut self, name: &str, record: InstallRecord) {
        self.skills.insert(name.to_string(), record);
    }

    pub fn remove(&mut self, name: &str) -> Option<InstallRecord> {
        self.skills.remove(name)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Loads and saves the registry at a fixed path.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store beside an install root: `<root parent>/installed_skills.json`.
    pub fn beside(install_root: &Path) -> Self {
        let dir = install_root.parent().unwrap_or(install_root);
        Self::new(dir.join(REGISTRY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry. A missing file is an empty registry.
    pub fn load(&self) -> Result<InstallRegistry> {
        if !self.path.exists() {
            return Ok(InstallRegistry::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(InstallRegistry::default());
        }

        serde_json::from_str(&content).map_err(|e| SkillioError::ParseError {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Save the registry using atomic write.
    ///
    /// Writes to a temp file and renames it over the registry so a crash
    /// never leaves a half-written document.
    pub fn save(&self, registry: &InstallRegistry) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(registry).map_err(|e| {
            SkillioError::ConfigValidationError {
                message: format!("Failed to serialize registry: {}", e),
            }
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "Saved registry with {} skills to {}",
            registry.len(),
            self.path.display()
        );
        Ok(())
    }
}
