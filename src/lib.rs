//! Skillio - find and install AI agent skills using natural language.
//!
//! Skillio keeps a catalog of skills, ranks them against a plain-language
//! request, and installs the chosen skill into whichever agent host is
//! present (Cursor, Windsurf, Claude Desktop, Continue, or its own
//! directory).
//!
//! # Modules
//!
//! - [`catalog`] - Skill catalog loading and lookup
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - User settings and environment overrides
//! - [`environment`] - Host environment detection
//! - [`error`] - Error types and result aliases
//! - [`install`] - Skill installation strategies
//! - [`registry`] - Record of installed skills
//! - [`search`] - Relevance scoring and search
//! - [`shell`] - External command execution
//! - [`ui`] - Prompts, spinners, tables and terminal output
//!
//! # Example
//!
//! ```
//! use skillio::catalog::Catalog;
//! use skillio::search::{SearchEngine, SearchOptions};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let results = SearchEngine::new(&catalog).search("download youtube videos", &SearchOptions::default());
//!
//! assert_eq!(results[0].entry.name, "video-downloader");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod install;
pub mod registry;
pub mod search;
pub mod shell;
pub mod ui;

pub use error::{Result, SkillioError};
