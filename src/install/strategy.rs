//! Install strategies.
//!
//! The installer tries an ordered list of strategies. Each reports a typed
//! outcome: installed, failed in a way the next strategy may recover from,
//! or failed for good.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::catalog::{CatalogEntry, SkillSource};
use crate::error::{Result, SkillioError};
use crate::registry::InstallMethod;

use super::generator::{GenerateRequest, Generator};
use super::skill_md::{self, SKILL_MD};

/// Maximum number of generated files reported.
pub const MAX_LISTED_FILES: usize = 20;

/// Input shared by all strategies for one install.
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    pub entry: &'a CatalogEntry,
    /// Directory the skill is materialized into.
    pub skill_dir: &'a Path,
    pub enhance: bool,
}

/// A successfully materialized skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub method: InstallMethod,
    /// Files relative to the skill directory, sorted, capped.
    pub contents: Vec<String>,
}

/// Result of one strategy attempt.
#[derive(Debug)]
pub enum StrategyOutcome {
    Installed(Generated),
    /// The next strategy should be tried.
    Retryable(SkillioError),
    /// Abort the install.
    Fatal(SkillioError),
}

/// One way of materializing a skill.
pub trait InstallStrategy {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Whether this strategy can handle the entry at all.
    fn applies_to(&self, entry: &CatalogEntry) -> bool;

    fn install(&self, ctx: &StrategyContext<'_>) -> StrategyOutcome;
}

/// Generates a rich skill with an external tool, for repository-backed entries.
#[derive(Debug, Clone)]
pub struct ExternalStrategy<G> {
    generator: G,
    scratch_root: Option<PathBuf>,
}

impl<G: Generator> ExternalStrategy<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            scratch_root: None,
        }
    }

    /// Parent of the per-install scratch directory (system temp dir if None).
    pub fn with_scratch_root(mut self, root: Option<PathBuf>) -> Self {
        self.scratch_root = root;
        self
    }

    fn try_install(&self, ctx: &StrategyContext<'_>, repo: &str) -> Result<Generated> {
        self.generator.ensure_available()?;

        // Removed when dropped, on every path out of this function.
        let mut builder = tempfile::Builder::new();
        builder.prefix("skillio-");
        let work_dir = match &self.scratch_root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };

        let request = GenerateRequest {
            repo,
            name: &ctx.entry.name,
            enhance: ctx.enhance,
        };
        let run = self.generator.generate(&request, work_dir.path())?;

        let output = match run.output {
            Some(output) => output,
            None if !run.success => {
                return Err(SkillioError::ExternalToolFailed {
                    tool: self.generator.name().to_string(),
                    message: run.diagnostics,
                })
            }
            None => {
                return Err(SkillioError::ExternalToolFailed {
                    tool: self.generator.name().to_string(),
                    message: "did not generate output directory".to_string(),
                })
            }
        };

        if !run.success {
            tracing::warn!(
                "{} exited with an error but produced output; using it: {}",
                self.generator.name(),
                run.diagnostics
            );
        }

        move_dir(&output, ctx.skill_dir)?;
        let contents = list_files(ctx.skill_dir, MAX_LISTED_FILES)?;

        Ok(Generated {
            method: InstallMethod::SkillSeekers,
            contents,
        })
    }
}

impl<G: Generator> InstallStrategy for ExternalStrategy<G> {
    fn name(&self) -> &str {
        self.generator.name()
    }

    fn applies_to(&self, entry: &CatalogEntry) -> bool {
        match entry.source {
            SkillSource::Github { .. } => true,
            SkillSource::Other { .. } => false,
        }
    }

    fn install(&self, ctx: &StrategyContext<'_>) -> StrategyOutcome {
        let repo = match &ctx.entry.source {
            SkillSource::Github { repo } => repo,
            SkillSource::Other { kind } => {
                return StrategyOutcome::Retryable(SkillioError::ExternalToolFailed {
                    tool: self.generator.name().to_string(),
                    message: format!("source type '{}' has no repository", kind),
                })
            }
        };

        match self.try_install(ctx, repo) {
            Ok(generated) => StrategyOutcome::Installed(generated),
            Err(e) => StrategyOutcome::Retryable(e),
        }
    }
}

/// Writes a single SKILL.md from catalog metadata. Applies to every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleStrategy;

impl SimpleStrategy {
    fn write(ctx: &StrategyContext<'_>) -> Result<()> {
        fs::create_dir_all(ctx.skill_dir)?;
        fs::write(ctx.skill_dir.join(SKILL_MD), skill_md::render(ctx.entry))?;
        Ok(())
    }
}

impl InstallStrategy for SimpleStrategy {
    fn name(&self) -> &str {
        "simple"
    }

    fn applies_to(&self, _entry: &CatalogEntry) -> bool {
        true
    }

    fn install(&self, ctx: &StrategyContext<'_>) -> StrategyOutcome {
        match Self::write(ctx) {
            Ok(()) => StrategyOutcome::Installed(Generated {
                method: InstallMethod::Simple,
                contents: vec![SKILL_MD.to_string()],
            }),
            Err(e) => StrategyOutcome::Fatal(e),
        }
    }
}

/// Move a directory, replacing any existing destination.
///
/// Falls back to copy-then-delete when a rename is not possible (for
/// example across filesystems).
pub fn move_dir(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        fs::remove_dir_all(to)?;
    }
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }

    if let Err(e) = fs::rename(from, to) {
        tracing::debug!("Rename failed ({}), copying {}", e, from.display());
        copy_dir(from, to)?;
        fs::remove_dir_all(from)?;
    }
    Ok(())
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| SkillioError::Other(e.into()))?;
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

/// Regular files under `root`, relative to it, sorted and capped at `limit`.
pub fn list_files(root: &Path, limit: usize) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.push(relative_string(relative));
        }
    }
    files.sort();
    files.truncate(limit);
    Ok(files)
}

fn relative_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
