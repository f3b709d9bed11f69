//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! catalog once into a [`CommandContext`] and routes CLI subcommands to
//! their implementations.

pub mod categories;
pub mod completions;
pub mod dispatcher;
pub mod environments;
pub mod info;
pub mod install;
pub mod list;
pub mod remove;
pub mod search;

pub use dispatcher::{
    Command, CommandContext, CommandDispatcher, CommandResult, EXIT_FAILURE, EXIT_NOT_FOUND,
};
