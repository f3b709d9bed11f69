//! Command-line interface for Skillio.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, InfoArgs, InstallArgs, ListArgs, RemoveArgs, SearchArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
