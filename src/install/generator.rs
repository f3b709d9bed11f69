//! External skill generators.
//!
//! A [`Generator`] turns a source repository into a skill directory inside
//! a scratch working directory. The production implementation drives the
//! `skill-seekers` CLI; tests substitute fakes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::GeneratorSettings;
use crate::error::{Result, SkillioError};
use crate::shell::{parse_system_path, resolve_tool_path, run, CommandOptions};

/// Characters of tool output kept in error messages.
pub const DIAGNOSTIC_CHARS: usize = 200;

const CACHE_DIR: &str = "__pycache__";

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateRequest<'a> {
    /// Repository reference, `owner/name`.
    pub repo: &'a str,
    /// Skill name, used as the output directory name.
    pub name: &'a str,
    /// Ask the tool for its local enhancement pass.
    pub enhance: bool,
}

/// Outcome of one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorRun {
    /// Whether the tool exited successfully.
    pub success: bool,
    /// Generated skill directory, if the tool produced one.
    pub output: Option<PathBuf>,
    /// Excerpt of the tool's output for error reporting.
    pub diagnostics: String,
}

/// Produces a skill directory from a repository.
pub trait Generator {
    /// Tool name for messages.
    fn name(&self) -> &str;

    /// Make sure the tool can run, installing it if that is supported.
    fn ensure_available(&self) -> Result<()>;

    /// Run the tool inside `work_dir`.
    ///
    /// A tool that runs but fails is reported through
    /// [`GeneratorRun::success`]; `Err` means the tool could not be run to
    /// completion (missing, timed out).
    fn generate(&self, request: &GenerateRequest<'_>, work_dir: &Path) -> Result<GeneratorRun>;
}

impl<T: Generator + ?Sized> Generator for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn ensure_available(&self) -> Result<()> {
        (**self).ensure_available()
    }

    fn generate(&self, request: &GenerateRequest<'_>, work_dir: &Path) -> Result<GeneratorRun> {
        (**self).generate(request, work_dir)
    }
}

/// Find the generated skill under the tool's output root.
///
/// Prefers `<output_root>/<name>`; otherwise takes the first subdirectory
/// (by name) that is not a bytecode cache.
pub fn locate_output(output_root: &Path, name: &str) -> Option<PathBuf> {
    let exact = output_root.join(name);
    if exact.is_dir() {
        return Some(exact);
    }

    let mut candidates: Vec<PathBuf> = fs::read_dir(output_root)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| path.file_name().is_some_and(|n| n != CACHE_DIR))
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

/// Generator backed by the `skill-seekers` command-line tool.
#[derive(Debug, Clone)]
pub struct SkillSeekersGenerator {
    settings: GeneratorSettings,
    path_entries: Vec<PathBuf>,
}

impl SkillSeekersGenerator {
    /// Create a generator resolving the tool on the system PATH.
    pub fn new(settings: GeneratorSettings) -> Self {
        Self::with_path_entries(settings, parse_system_path())
    }

    /// Create a generator resolving the tool in the given directories.
    pub fn with_path_entries(settings: GeneratorSettings, path_entries: Vec<PathBuf>) -> Self {
        Self {
            settings,
            path_entries,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Arguments passed to the tool, program name excluded.
    pub fn arguments(&self, request: &GenerateRequest<'_>) -> Vec<String> {
        let mut args = vec![
            self.settings.subcommand.clone(),
            "--repo".to_string(),
            request.repo.to_string(),
            "--name".to_string(),
            request.name.to_string(),
            "--non-interactive".to_string(),
        ];
        if request.enhance {
            args.push("--enhance-local".to_string());
        }
        args
    }

    fn program_path(&self) -> Option<PathBuf> {
        resolve_tool_path(&self.settings.program, &self.path_entries)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.settings.timeout_secs)
    }

    fn unavailable(&self) -> SkillioError {
        let hint = if self.settings.install_command.is_empty() {
            format!("install {} and retry", self.settings.program)
        } else {
            format!("Please run: {}", self.settings.install_command.join(" "))
        };
        SkillioError::ExternalToolUnavailable {
            tool: self.settings.program.clone(),
            message: hint,
        }
    }

    fn run_install_command(&self) -> bool {
        let Some((program, args)) = self.settings.install_command.split_first() else {
            return false;
        };

        tracing::info!("Installing {} with '{}'", self.settings.program, program);
        let options = CommandOptions {
            timeout: Some(self.timeout()),
            ..Default::default()
        };
        match run(program, args, &options) {
            Ok(result) => result.success,
            Err(e) => {
                tracing::debug!("Install command failed to start: {}", e);
                false
            }
        }
    }
}

impl Generator for SkillSeekersGenerator {
    fn name(&self) -> &str {
        &self.settings.program
    }

    fn ensure_available(&self) -> Result<()> {
        if self.program_path().is_some() {
            return Ok(());
        }

        tracing::debug!("{} not found on PATH", self.settings.program);
        if !self.run_install_command() || self.program_path().is_none() {
            return Err(self.unavailable());
        }
        Ok(())
    }

    fn generate(&self, request: &GenerateRequest<'_>, work_dir: &Path) -> Result<GeneratorRun> {
        let program = self.program_path().ok_or_else(|| self.unavailable())?;
        let options = CommandOptions {
            cwd: Some(work_dir.to_path_buf()),
            timeout: Some(self.timeout()),
            ..Default::default()
        };

        tracing::debug!(
            "Generating '{}' from {} with {}",
            request.name,
            request.repo,
            program.display()
        );
        let result = run(&program, self.arguments(request), &options).map_err(|e| {
            SkillioError::ExternalToolFailed {
                tool: self.settings.program.clone(),
                message: e.to_string(),
            }
        })?;

        if result.timed_out {
            return Err(SkillioError::ExternalToolTimeout {
                tool: self.settings.program.clone(),
                seconds: self.settings.timeout_secs,
            });
        }

        let output_root = work_dir.join(&self.settings.output_dir);
        Ok(GeneratorRun {
            success: result.success,
            output: locate_output(&output_root, request.name),
            diagnostics: result.output_excerpt(DIAGNOSTIC_CHARS),
        })
    }
}
