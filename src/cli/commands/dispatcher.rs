//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the state commands share
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::catalog::Catalog;
use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::environment::HostDetector;
use crate::error::{ErrorKind, Result};
use crate::install::{Installer, SkillSeekersGenerator, TargetResolver};
use crate::registry::RegistryStore;
use crate::ui::UserInterface;

/// Exit code for a failed operation.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when the named skill does not exist.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Expected failures (unknown skill, failed install) are reported
    /// through the UI and a failing [`CommandResult`]; `Err` is left for
    /// unexpected errors.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Failure result with the exit code for an error category.
    pub fn from_error_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotFound | ErrorKind::NotInstalled => Self::failure(EXIT_NOT_FOUND),
            _ => Self::failure(EXIT_FAILURE),
        }
    }
}

/// Settings, catalog and host detection shared by commands.
#[derive(Debug)]
pub struct CommandContext {
    pub settings: Settings,
    pub catalog: Catalog,
    pub detector: HostDetector,
}

impl CommandContext {
    /// Load the catalog named by the settings (or the built-in one).
    pub fn load(settings: Settings, detector: HostDetector) -> Result<Self> {
        let catalog = Catalog::load_or_builtin(settings.catalog.as_deref())?;
        tracing::debug!("Loaded catalog with {} skills", catalog.len());
        Ok(Self {
            settings,
            catalog,
            detector,
        })
    }

    pub fn target_resolver(&self) -> TargetResolver<'_> {
        TargetResolver::new(&self.detector, self.settings.install_path.as_deref())
    }

    /// Registry beside the default install root.
    pub fn registry_store(&self) -> RegistryStore {
        RegistryStore::beside(&self.target_resolver().default_root())
    }

    /// Installer backed by the configured skill-seekers generator.
    pub fn installer(&self) -> Installer<'_, SkillSeekersGenerator> {
        Installer::new(
            &self.catalog,
            &self.detector,
            self.registry_store(),
            SkillSeekersGenerator::new(self.settings.generator.clone()),
        )
        .with_install_override(self.settings.install_path.clone())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
    detector: HostDetector,
}

impl CommandDispatcher {
    /// Create a dispatcher with explicit settings and detector.
    pub fn new(settings: Settings, detector: HostDetector) -> Self {
        Self { settings, detector }
    }

    /// Create a dispatcher from user settings, the environment and flags.
    pub fn from_env(cli: &Cli) -> Result<Self> {
        let mut settings = Settings::load()?;
        if let Some(catalog) = &cli.catalog {
            settings.catalog = Some(catalog.clone());
        }
        Ok(Self::new(settings, HostDetector::from_env()))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Commands::Completions(args) = &cli.command {
            return super::completions::CompletionsCommand::new(args.clone()).execute(ui);
        }

        let ctx = CommandContext::load(self.settings.clone(), self.detector.clone())?;

        match &cli.command {
            Commands::Search(args) => {
                super::search::SearchCommand::new(&ctx, args.clone()).execute(ui)
            }
            Commands::Install(args) => {
                super::install::InstallCommand::new(&ctx, args.clone()).execute(ui)
            }
            Commands::List(args) => super::list::ListCommand::new(&ctx, args.clone()).execute(ui),
            Commands::Info(args) => super::info::InfoCommand::new(&ctx, args.clone()).execute(ui),
            Commands::Remove(args) => {
                super::remove::RemoveCommand::new(&ctx, args.clone()).execute(ui)
            }
            Commands::Categories => super::categories::CategoriesCommand::new(&ctx).execute(ui),
            Commands::Environments => {
                super::environments::EnvironmentsCommand::new(&ctx).execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
