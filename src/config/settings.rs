//! User settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SkillioError};

/// Environment variable overriding the default install root.
pub const ENV_INSTALL_PATH: &str = "SKILLIO_INSTALL_PATH";

/// Environment variable pointing at a catalog file.
pub const ENV_CATALOG: &str = "SKILLIO_CATALOG";

/// Resolved settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Catalog file. None means the embedded catalog.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default install root override.
    #[serde(default)]
    pub install_path: Option<PathBuf>,

    #[serde(default)]
    pub generator: GeneratorSettings,
}

/// External generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Executable name, resolved on PATH.
    pub program: String,

    /// Subcommand generating a skill from a repository.
    pub subcommand: String,

    /// Command run once when the program is missing.
    pub install_command: Vec<String>,

    /// Wall-clock budget for one generation.
    pub timeout_secs: u64,

    /// Directory, relative to the working directory, the tool writes into.
    pub output_dir: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            program: "skill-seekers".to_string(),
            subcommand: "github".to_string(),
            install_command: vec![
                "pip".to_string(),
                "install".to_string(),
                "skill-seekers".to_string(),
            ],
            timeout_secs: 600,
            output_dir: "output".to_string(),
        }
    }
}

impl Settings {
    /// Path of the user settings file: `~/.skillio/config.yml`.
    pub fn user_file() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".skillio").join("config.yml"))
    }

    /// Load user settings and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut settings = match Self::user_file() {
            Some(path) => Self::load_file(&path)?,
            None => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key));
        settings.validate()?;
        Ok(settings)
    }

    /// Load a settings file. A missing file yields defaults.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content, path)
    }

    /// Parse settings YAML.
    pub fn from_yaml_str(content: &str, origin: impl AsRef<Path>) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SkillioError::ParseError {
            path: origin.as_ref().to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides with a custom lookup (for testing).
    pub fn apply_env<F>(&mut self, env_fn: F)
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        if let Ok(path) = env_fn(ENV_INSTALL_PATH) {
            if !path.is_empty() {
                self.install_path = Some(PathBuf::from(path));
            }
        }
        if let Ok(path) = env_fn(ENV_CATALOG) {
            if !path.is_empty() {
                self.catalog = Some(PathBuf::from(path));
            }
        }
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.generator.program.trim().is_empty() {
            return Err(SkillioError::ConfigValidationError {
                message: "generator.program must not be empty".to_string(),
            });
        }
        if self.generator.timeout_secs == 0 {
            return Err(SkillioError::ConfigValidationError {
                message: "generator.timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
