//! Error types for Skillio operations.
//!
//! This module defines [`SkillioError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SkillioError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SkillioError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//! - Use [`SkillioError::kind`] to branch on the category of a failure

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Skillio operations.
#[derive(Debug, Error)]
pub enum SkillioError {
    /// Skill does not exist in the catalog.
    #[error("Skill '{name}' not found in index")]
    SkillNotFound { name: String },

    /// Skill is already recorded in the install registry.
    #[error("Skill '{name}' is already installed. Use --force to reinstall.")]
    AlreadyInstalled { name: String },

    /// Skill is not recorded in the install registry.
    #[error("Skill '{name}' is not installed")]
    NotInstalled { name: String },

    /// The external generator is missing and could not be installed.
    #[error("{tool} is unavailable: {message}")]
    ExternalToolUnavailable { tool: String, message: String },

    /// The external generator ran but produced no usable output.
    #[error("{tool} failed: {message}")]
    ExternalToolFailed { tool: String, message: String },

    /// The external generator exceeded its wall-clock budget.
    #[error("{tool} timed out after {seconds}s. Try with --no-seekers flag.")]
    ExternalToolTimeout { tool: String, seconds: u64 },

    /// Failed to parse a catalog, settings, or registry document.
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Invalid settings values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Category of a [`SkillioError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    AlreadyInstalled,
    NotInstalled,
    ExternalToolUnavailable,
    ExternalToolFailed,
    ExternalToolTimeout,
    Filesystem,
    Parse,
    Config,
    Other,
}

impl SkillioError {
    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SkillNotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyInstalled { .. } => ErrorKind::AlreadyInstalled,
            Self::NotInstalled { .. } => ErrorKind::NotInstalled,
            Self::ExternalToolUnavailable { .. } => ErrorKind::ExternalToolUnavailable,
            Self::ExternalToolFailed { .. } => ErrorKind::ExternalToolFailed,
            Self::ExternalToolTimeout { .. } => ErrorKind::ExternalToolTimeout,
            Self::ParseError { .. } => ErrorKind::Parse,
            Self::ConfigValidationError { .. } => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Filesystem,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

/// Result type alias for Skillio operations.
pub type Result<T> = std::result::Result<T, SkillioError>;
