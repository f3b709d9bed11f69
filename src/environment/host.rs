//! Host environment types.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A known agent host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    Cursor,
    Windsurf,
    ClaudeDesktop,
    Continue,
    /// Skillio's own directory, always available.
    Standalone,
}

impl HostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::Windsurf => "windsurf",
            Self::ClaudeDesktop => "claude_desktop",
            Self::Continue => "continue",
            Self::Standalone => "standalone",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installation scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Inside the current project.
    Project,
    /// In the user's home directory.
    Global,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project => f.write_str("project"),
            Self::Global => f.write_str("global"),
        }
    }
}

/// A candidate installation location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEnvironment {
    #[serde(rename = "type")]
    pub kind: HostKind,
    pub scope: Scope,
    /// Skills directory for this host.
    pub path: PathBuf,
    /// Whether `path` existed when detection ran.
    pub exists: bool,
}

impl HostEnvironment {
    /// Build an environment, probing `path` for existence.
    pub fn probe(kind: HostKind, scope: Scope, path: PathBuf) -> Self {
        let exists = path.exists();
        Self {
            kind,
            scope,
            path,
            exists,
        }
    }
}
