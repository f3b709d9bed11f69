//! Install orchestration.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, CatalogEntry};
use crate::environment::{HostDetector, Scope};
use crate::error::{ErrorKind, Result, SkillioError};
use crate::registry::{InstallMethod, InstallRecord, RegistryStore};

use super::generator::Generator;
use super::strategy::{
    ExternalStrategy, Generated, InstallStrategy, SimpleStrategy, StrategyContext,
    StrategyOutcome,
};
use super::target::TargetResolver;

/// Description shown for installed skills no longer in the catalog.
pub const REMOVED_FROM_INDEX: &str = "(Skill removed from index)";

/// Options for [`Installer::install`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Install under this directory instead of the resolved default.
    pub target: Option<PathBuf>,
    /// Pick the first detected environment in this scope.
    pub scope: Option<Scope>,
    /// Reinstall over an existing install.
    pub force: bool,
    /// Try the external generator for repository-backed skills.
    pub use_external: bool,
    /// Ask the generator for its enhancement pass.
    pub enhance: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            target: None,
            scope: None,
            force: false,
            use_external: true,
            enhance: true,
        }
    }
}

/// A completed install.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallReport {
    pub name: String,
    pub path: PathBuf,
    pub version: String,
    pub method: InstallMethod,
    pub contents: Vec<String>,
    /// Why an earlier strategy was abandoned, if one was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// Value form of an install result, for callers that report rather than
/// propagate failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<InstallMethod>,
    pub contents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl From<Result<InstallReport>> for InstallOutcome {
    fn from(result: Result<InstallReport>) -> Self {
        match result {
            Ok(report) => Self {
                success: true,
                path: Some(report.path),
                version: Some(report.version),
                method: Some(report.method),
                contents: report.contents,
                fallback_reason: report.fallback_reason,
                error: None,
                error_kind: None,
            },
            Err(e) => Self {
                success: false,
                path: None,
                version: None,
                method: None,
                contents: Vec::new(),
                fallback_reason: None,
                error_kind: Some(e.kind()),
                error: Some(e.to_string()),
            },
        }
    }
}

/// An installed skill joined with its catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstalledSkill {
    pub name: String,
    pub version: String,
    pub description: String,
    pub installed_path: PathBuf,
    pub method: InstallMethod,
    /// False when the skill is no longer in the catalog.
    pub in_catalog: bool,
}

/// Installs, lists and removes skills.
///
/// The registry store is passed in explicitly and read and written whole on
/// each mutating call.
pub struct Installer<'a, G> {
    catalog: &'a Catalog,
    detector: &'a HostDetector,
    store: RegistryStore,
    generator: G,
    install_override: Option<PathBuf>,
    scratch_root: Option<PathBuf>,
}

impl<'a, G: Generator> Installer<'a, G> {
    pub fn new(
        catalog: &'a Catalog,
        detector: &'a HostDetector,
        store: RegistryStore,
        generator: G,
    ) -> Self {
        Self {
            catalog,
            detector,
            store,
            generator,
            install_override: None,
            scratch_root: None,
        }
    }

    /// Default install root override (settings or environment).
    pub fn with_install_override(mut self, path: Option<PathBuf>) -> Self {
        self.install_override = path;
        self
    }

    /// Where the external generator's scratch directories are created.
    pub fn with_scratch_root(mut self, path: Option<PathBuf>) -> Self {
        self.scratch_root = path;
        self
    }

    pub fn store(&self) -> &RegistryStore {
        &self.store
    }

    pub fn target_resolver(&self) -> TargetResolver<'_> {
        TargetResolver::new(self.detector, self.install_override.as_deref())
    }

    /// Install a skill from the catalog.
    ///
    /// The registry is only written after a strategy succeeds. With
    /// `force` unset an already-installed skill is rejected before anything
    /// on disk changes.
    pub fn install(&self, name: &str, options: &InstallOptions) -> Result<InstallReport> {
        let entry = self
            .catalog
            .get(name)
            .ok_or_else(|| SkillioError::SkillNotFound {
                name: name.to_string(),
            })?;

        let base = self
            .target_resolver()
            .resolve(options.target.as_deref(), options.scope);
        let skill_dir = base.join(&entry.name);

        let mut registry = self.store.load()?;
        if registry.contains(&entry.name) && !options.force {
            return Err(SkillioError::AlreadyInstalled {
                name: entry.name.clone(),
            });
        }

        if options.force && skill_dir.exists() {
            tracing::debug!("Removing previous install at {}", skill_dir.display());
            fs::remove_dir_all(&skill_dir)?;
        }

        let (generated, fallback_reason) = self.run_strategies(entry, &skill_dir, options)?;

        registry.upsert(
            &entry.name,
            InstallRecord {
                version: entry.version.clone(),
                path: skill_dir.clone(),
                source: entry.source.clone(),
                installed_at: self.detector.cwd().to_path_buf(),
                method: generated.method,
            },
        );
        self.store.save(&registry)?;

        tracing::info!(
            "Installed '{}' to {} via {}",
            entry.name,
            skill_dir.display(),
            generated.method
        );

        Ok(InstallReport {
            name: entry.name.clone(),
            path: skill_dir,
            version: entry.version.clone(),
            method: generated.method,
            contents: generated.contents,
            fallback_reason,
        })
    }

    fn run_strategies(
        &self,
        entry: &CatalogEntry,
        skill_dir: &Path,
        options: &InstallOptions,
    ) -> Result<(Generated, Option<String>)> {
        let external =
            ExternalStrategy::new(&self.generator).with_scratch_root(self.scratch_root.clone());
        let mut strategies: Vec<&dyn InstallStrategy> = Vec::new();
        if options.use_external {
            strategies.push(&external);
        }
        strategies.push(&SimpleStrategy);

        let ctx = StrategyContext {
            entry,
            skill_dir,
            enhance: options.enhance,
        };

        let mut last_error = None;
        for strategy in strategies {
            if !strategy.applies_to(entry) {
                continue;
            }

            match strategy.install(&ctx) {
                StrategyOutcome::Installed(generated) => {
                    return Ok((generated, last_error.map(|e: SkillioError| e.to_string())));
                }
                StrategyOutcome::Retryable(e) => {
                    tracing::warn!("{} install failed, trying next: {}", strategy.name(), e);
                    last_error = Some(e);
                }
                StrategyOutcome::Fatal(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            SkillioError::Other(anyhow::anyhow!(
                "no install strategy applies to '{}'",
                entry.name
            ))
        }))
    }

    /// Installed skills in name order, joined with the catalog.
    pub fn list_installed(&self) -> Result<Vec<InstalledSkill>> {
        let registry = self.store.load()?;

        let installed = registry
            .skills
            .into_iter()
            .map(|(name, record)| match self.catalog.get(&name) {
                Some(entry) => InstalledSkill {
                    version: entry.version.clone(),
                    description: entry.description.clone(),
                    installed_path: record.path,
                    method: record.method,
                    in_catalog: true,
                    name,
                },
                None => InstalledSkill {
                    version: record.version,
                    description: REMOVED_FROM_INDEX.to_string(),
                    installed_path: record.path,
                    method: record.method,
                    in_catalog: false,
                    name,
                },
            })
            .collect();

        Ok(installed)
    }

    /// Remove an installed skill, returning the directory that held it.
    ///
    /// A directory already deleted by hand is not an error.
    pub fn remove(&self, name: &str) -> Result<PathBuf> {
        let mut registry = self.store.load()?;
        let record = registry
            .remove(name)
            .ok_or_else(|| SkillioError::NotInstalled {
                name: name.to_string(),
            })?;

        if record.path.exists() {
            fs::remove_dir_all(&record.path)?;
        }
        self.store.save(&registry)?;

        tracing::info!("Removed '{}' from {}", name, record.path.display());
        Ok(record.path)
    }
}
