//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::environment::Scope;
use crate::search::SearchOptions;

/// Skillio - find and install AI agent skills using natural language.
#[derive(Debug, Parser)]
#[command(name = "skillio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a catalog file (overrides the built-in catalog)
    #[arg(long, global = true, env = "SKILLIO_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search for skills using natural language
    Search(SearchArgs),

    /// Install a skill
    Install(InstallArgs),

    /// List installed skills, or the whole catalog
    List(ListArgs),

    /// Show detailed information about a skill
    Info(InfoArgs),

    /// Remove an installed skill
    Remove(RemoveArgs),

    /// Show skill categories
    Categories,

    /// Show detected AI environments for skill installation
    Environments,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    /// What you want to do, e.g. "download YouTube videos"
    pub query: String,

    /// Use keyword search instead of intent matching
    #[arg(short, long)]
    pub keyword: bool,

    /// Number of results to show
    #[arg(short = 'n', long, default_value_t = SearchOptions::DEFAULT_LIMIT)]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Name of the skill to install
    pub name: String,

    /// Installation target directory
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Reinstall if already installed
    #[arg(short, long)]
    pub force: bool,

    /// Skip skill-seekers, write a SKILL.md only
    #[arg(long)]
    pub no_seekers: bool,

    /// Skip the AI enhancement step
    #[arg(long)]
    pub no_enhance: bool,

    /// Install into the first detected environment of this scope
    #[arg(long, value_enum, conflicts_with = "target")]
    pub scope: Option<Scope>,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Show all skills in the catalog
    #[arg(long)]
    pub all: bool,

    /// Filter catalog skills by category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InfoArgs {
    /// Name of the skill
    pub name: String,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Name of the installed skill
    pub name: String,

    /// Remove without confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_search_defaults() {
        let cli = Cli::try_parse_from(["skillio", "search", "download videos"]).unwrap();

        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query, "download videos");
                assert_eq!(args.limit, 5);
                assert!(!args.keyword);
                assert!(!args.json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_install_flags() {
        let cli = Cli::try_parse_from([
            "skillio",
            "install",
            "video-downloader",
            "--force",
            "--no-seekers",
            "--scope",
            "project",
        ])
        .unwrap();

        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.name, "video-downloader");
                assert!(args.force);
                assert!(args.no_seekers);
                assert!(!args.no_enhance);
                assert_eq!(args.scope, Some(Scope::Project));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn scope_conflicts_with_target() {
        let result = Cli::try_parse_from([
            "skillio",
            "install",
            "x",
            "--scope",
            "global",
            "--target",
            "/tmp/skills",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["skillio", "list", "--all", "--quiet", "--no-color"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.no_color);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["skillio"]).is_err());
    }
}
